use tracing::trace;

use crate::error::CoolTextError;
use crate::model::{FontFamily, Style};

/// A Unicode scalar value.
pub type CodePoint = u32;

type Bases = (CodePoint, Option<CodePoint>); // letters, digits

const ASCII_BASE_UPPER: u32 = 0x41;
const ASCII_BASE_LOWER: u32 = 0x61;
const ASCII_BASE_NUMERIC: u32 = 0x30;
const ALPHABET_LEN: u32 = 26;

const SERIF_BOLD: CodePoint = 0x1D400;
const SERIF_ITALIC: CodePoint = 0x1D434;
const SERIF_BOLD_ITALIC: CodePoint = 0x1D468;
const SCRIPT: CodePoint = 0x1D49C;
const SCRIPT_BOLD: CodePoint = 0x1D4D0;
const FRAKTUR: CodePoint = 0x1D504;
const FRAKTUR_BOLD: CodePoint = 0x1D56C;
const DOUBLE_STRUCK: CodePoint = 0x1D538;
const SANS_SERIF: CodePoint = 0x1D5A0;
const SANS_SERIF_BOLD: CodePoint = 0x1D5D4;
const SANS_SERIF_ITALIC: CodePoint = 0x1D608;
const SANS_SERIF_BOLD_ITALIC: CodePoint = 0x1D63C;
const MONOSPACE: CodePoint = 0x1D670;

const SERIF_BOLD_DIGITS: CodePoint = 0x1D7CE;
const DOUBLE_STRUCK_DIGITS: CodePoint = 0x1D7D8;
const SANS_SERIF_DIGITS: CodePoint = 0x1D7E2;
const SANS_SERIF_BOLD_DIGITS: CodePoint = 0x1D7EC;
const MONOSPACE_DIGITS: CodePoint = 0x1D7F6;

/// Holes in the Mathematical Alphanumeric Symbols block. These letters were
/// already encoded in Letterlike Symbols, so the arithmetic result must be
/// redirected there. Sorted by key.
pub const RESERVED_OVERRIDES: &[(CodePoint, CodePoint)] = &[
    (0x1D455, 0x210E), // italic h
    (0x1D49D, 0x212C), // script B
    (0x1D4A0, 0x2130), // script E
    (0x1D4A1, 0x2131), // script F
    (0x1D4A3, 0x210B), // script H
    (0x1D4A4, 0x2110), // script I
    (0x1D4A7, 0x2112), // script L
    (0x1D4A8, 0x2133), // script M
    (0x1D4AD, 0x211B), // script R
    (0x1D4BA, 0x212F), // script e
    (0x1D4BC, 0x210A), // script g
    (0x1D4C4, 0x2134), // script o
    (0x1D506, 0x2120), // fraktur C
    (0x1D50B, 0x210C), // fraktur H
    (0x1D50C, 0x2111), // fraktur I
    (0x1D515, 0x211C), // fraktur R
    (0x1D51D, 0x2128), // fraktur Z
    (0x1D53A, 0x2102), // double-struck C
    (0x1D53F, 0x210D), // double-struck H
    (0x1D545, 0x2115), // double-struck N
    (0x1D547, 0x2119), // double-struck P
    (0x1D548, 0x211A), // double-struck Q
    (0x1D549, 0x211D), // double-struck R
    (0x1D551, 0x2124), // double-struck Z
];

fn cool_text_bases(font: FontFamily, style: Style) -> Option<Bases> {
    use FontFamily as F;
    use Style as S;
    match (font, style) {
        // No plain serif block exists; kept as an alias of bold.
        (F::Serif, S::Normal) => Some((SERIF_BOLD, None)),
        (F::Serif, S::Bold) => Some((SERIF_BOLD, Some(SERIF_BOLD_DIGITS))),
        (F::Serif, S::Italic) => Some((SERIF_ITALIC, None)),
        (F::Serif, S::BoldItalic) => Some((SERIF_BOLD_ITALIC, None)),

        (F::Script, S::Normal) => Some((SCRIPT, None)),
        (F::Script, S::Bold) => Some((SCRIPT_BOLD, None)),
        (F::Script, S::Italic | S::BoldItalic) => None,

        (F::Fraktur, S::Normal) => Some((FRAKTUR, None)),
        (F::Fraktur, S::Bold) => Some((FRAKTUR_BOLD, None)),
        (F::Fraktur, S::Italic | S::BoldItalic) => None,

        (F::DoubleStruck, S::Normal) => Some((DOUBLE_STRUCK, Some(DOUBLE_STRUCK_DIGITS))),
        (F::DoubleStruck, S::Bold | S::Italic | S::BoldItalic) => None,

        (F::SansSerif, S::Normal) => Some((SANS_SERIF, Some(SANS_SERIF_DIGITS))),
        (F::SansSerif, S::Bold) => Some((SANS_SERIF_BOLD, Some(SANS_SERIF_BOLD_DIGITS))),
        (F::SansSerif, S::Italic) => Some((SANS_SERIF_ITALIC, None)),
        (F::SansSerif, S::BoldItalic) => Some((SANS_SERIF_BOLD_ITALIC, None)),

        (F::Monospace, S::Normal) => Some((MONOSPACE, Some(MONOSPACE_DIGITS))),
        (F::Monospace, S::Bold | S::Italic | S::BoldItalic) => None,
    }
}

fn checked_bases(font_family: FontFamily, style: Style) -> Result<Bases, CoolTextError> {
    cool_text_bases(font_family, style)
        .ok_or(CoolTextError::InvalidStyleSelection { font_family, style })
}

/// Code point that capital 'A' maps to for this pair.
pub fn resolve_letter_base(font: FontFamily, style: Style) -> Result<CodePoint, CoolTextError> {
    checked_bases(font, style).map(|(letters, _)| letters)
}

/// Code point that '0' maps to, or `None` when the pair has no styled
/// digits and digits are left as they are.
pub fn resolve_digit_base(
    font: FontFamily,
    style: Style,
) -> Result<Option<CodePoint>, CoolTextError> {
    checked_bases(font, style).map(|(_, digits)| digits)
}

/// Redirects a code point that falls on a reserved hole.
pub fn reserved_override(code: CodePoint) -> CodePoint {
    RESERVED_OVERRIDES
        .binary_search_by_key(&code, |&(from, _)| from)
        .map_or(code, |i| RESERVED_OVERRIDES[i].1)
}

/// Maps every ASCII letter and digit in `text` to its styled counterpart.
/// Other characters are kept, except reserved holes, which are redirected
/// like any mapped letter. The output always has as many chars as the input.
pub fn style_text(text: &str, font: FontFamily, style: Style) -> Result<String, CoolTextError> {
    let (letters, digits) = checked_bases(font, style)?;
    trace!("Styling {} bytes as {font} {style}", text.len());
    Ok(text
        .chars()
        .map(|c| style_char(c, letters, digits))
        .collect())
}

fn style_char(c: char, letters: CodePoint, digits: Option<CodePoint>) -> char {
    let code = c as u32;
    let styled = if c.is_ascii_digit() {
        match digits {
            Some(base) => base + code - ASCII_BASE_NUMERIC,
            None => code,
        }
    } else if c.is_ascii_uppercase() {
        letters + code - ASCII_BASE_UPPER
    } else if c.is_ascii_lowercase() {
        letters + ALPHABET_LEN + code - ASCII_BASE_LOWER
    } else {
        code
    };
    char::from_u32(reserved_override(styled)).unwrap_or(c)
}

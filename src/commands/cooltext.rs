use anyhow::bail;
use strum::{EnumIter, IntoEnumIterator};

use super::{Args, Command, CommandGroup, CommandResult};
use crate::model::{FontFamily, Style};
use crate::services::cool_text::style_text;

/// Short names for the font and style pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum Preset {
    BoldFraktur,
    Bold,
    BoldItalic,
    BoldScript,
    Monospace,
    Italic,
    Script,
    Fraktur,
    DoubleStruck,
    SansSerif,
    SansSerifBold,
    SansSerifItalic,
    SansSerifBoldItalic,
}

impl Preset {
    pub fn alias(self) -> &'static str {
        match self {
            Preset::BoldFraktur => "bf",
            Preset::Bold => "b",
            Preset::BoldItalic => "bi",
            Preset::BoldScript => "bs",
            Preset::Monospace => "m",
            Preset::Italic => "i",
            Preset::Script => "s",
            Preset::Fraktur => "f",
            Preset::DoubleStruck => "ds",
            Preset::SansSerif => "ss",
            Preset::SansSerifBold => "ssb",
            Preset::SansSerifItalic => "ssi",
            Preset::SansSerifBoldItalic => "ssbi",
        }
    }

    /// Exact match, so capitalised words like "I" or "F" stay text.
    pub fn from_alias(alias: &str) -> Option<Self> {
        Preset::iter().find(|p| p.alias() == alias)
    }

    pub fn font(self) -> (FontFamily, Style) {
        match self {
            Preset::BoldFraktur => (FontFamily::Fraktur, Style::Bold),
            Preset::Bold => (FontFamily::Serif, Style::Bold),
            Preset::BoldItalic => (FontFamily::Serif, Style::BoldItalic),
            Preset::BoldScript => (FontFamily::Script, Style::Bold),
            Preset::Monospace => (FontFamily::Monospace, Style::Normal),
            Preset::Italic => (FontFamily::Serif, Style::Italic),
            Preset::Script => (FontFamily::Script, Style::Normal),
            Preset::Fraktur => (FontFamily::Fraktur, Style::Normal),
            Preset::DoubleStruck => (FontFamily::DoubleStruck, Style::Normal),
            Preset::SansSerif => (FontFamily::SansSerif, Style::Normal),
            Preset::SansSerifBold => (FontFamily::SansSerif, Style::Bold),
            Preset::SansSerifItalic => (FontFamily::SansSerif, Style::Italic),
            Preset::SansSerifBoldItalic => (FontFamily::SansSerif, Style::BoldItalic),
        }
    }

    pub fn apply(self, text: &str) -> CommandResult {
        let (font, style) = self.font();
        Ok(style_text(text, font, style)?)
    }
}

pub static COOLTEXT_GROUP: CommandGroup = CommandGroup {
    name: "Cool Text",
    commands: &[Command {
        name: "cooltext",
        aliases: &["ct"],
        description: "Make some cool text in one of a few different fonts.",
        usage: Some("[preset] <text>"),
        min_args: 1,
        run: cooltext,
    }],
};

fn cooltext(args: Args<'_>) -> CommandResult {
    let (preset, text) = match args.current().and_then(Preset::from_alias) {
        Some(preset) => (preset, args.advance().rest()),
        None => (Preset::BoldFraktur, args.rest()),
    };
    if text.trim().is_empty() {
        bail!("No text to make cool after preset '{}'", preset.alias());
    }
    preset.apply(text)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn presets_are_supported_pairs() {
        for preset in Preset::iter() {
            let (font, style) = preset.font();
            assert!(font.supports(style), "{preset:?} is {font} {style}");
        }
    }

    #[test]
    fn aliases_are_unique() {
        let mut aliases: Vec<_> = Preset::iter().map(Preset::alias).collect();
        aliases.sort_unstable();
        aliases.dedup();
        assert_eq!(aliases.len(), Preset::iter().count());
        assert_eq!(Preset::from_alias("ssb"), Some(Preset::SansSerifBold));
        assert_eq!(Preset::from_alias("SSB"), None);
        assert_eq!(Preset::from_alias("xx"), None);
    }

    #[test]
    fn default_preset_is_bold_fraktur() {
        assert_eq!(
            cooltext(Args::new("Hi")).unwrap(),
            style_text("Hi", FontFamily::Fraktur, Style::Bold).unwrap()
        );
    }

    #[test]
    fn preset_then_text() {
        assert_eq!(
            cooltext(Args::new("bs BONK!")).unwrap(),
            style_text("BONK!", FontFamily::Script, Style::Bold).unwrap()
        );
        assert_eq!(
            cooltext(Args::new("ds  Hello  there")).unwrap(),
            style_text("Hello  there", FontFamily::DoubleStruck, Style::Normal).unwrap()
        );
    }

    #[test]
    fn capitalised_word_is_not_a_preset() {
        assert_eq!(
            cooltext(Args::new("I love Rust")).unwrap(),
            style_text("I love Rust", FontFamily::Fraktur, Style::Bold).unwrap()
        );
        assert_eq!(
            cooltext(Args::new("F is for Ferris")).unwrap(),
            style_text("F is for Ferris", FontFamily::Fraktur, Style::Bold).unwrap()
        );
    }

    #[test]
    fn preset_without_text() {
        let err = cooltext(Args::new("m")).unwrap_err();
        assert!(err.to_string().contains("'m'"));
    }
}

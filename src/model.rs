use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use crate::error::CoolTextError;
use crate::services::cool_text::style_text;

/// A group of Unicode blocks sharing one letterform.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum FontFamily {
    Serif,
    Script,
    Fraktur,
    DoubleStruck,
    SansSerif,
    Monospace,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
#[serde(rename_all = "kebab-case")]
pub enum Style {
    Normal,
    Bold,
    Italic,
    #[strum(to_string = "bold-italic", serialize = "bolditalic")]
    #[serde(alias = "bolditalic")]
    BoldItalic,
}

impl FontFamily {
    pub fn from_name(name: &str) -> Result<Self, CoolTextError> {
        name.trim()
            .parse()
            .map_err(|_| CoolTextError::UnknownFontFamily(name.to_owned()))
    }

    pub fn display_name(self) -> &'static str {
        match self {
            FontFamily::Serif => "Serif",
            FontFamily::Script => "Mathematical Script",
            FontFamily::Fraktur => "Mathematical Fraktur",
            FontFamily::DoubleStruck => "Mathematical Double-Struck",
            FontFamily::SansSerif => "Sans-Serif",
            FontFamily::Monospace => "Monospace",
        }
    }

    /// Styles a user may pick for this family, in presentation order.
    /// Never empty.
    pub fn supported_styles(self) -> &'static [Style] {
        match self {
            FontFamily::Serif => &[Style::Bold, Style::Italic, Style::BoldItalic],
            FontFamily::Script => &[Style::Normal, Style::Bold],
            FontFamily::Fraktur => &[Style::Normal, Style::Bold],
            FontFamily::DoubleStruck => &[Style::Normal],
            FontFamily::SansSerif => &[Style::Normal, Style::Bold, Style::Italic, Style::BoldItalic],
            FontFamily::Monospace => &[Style::Normal],
        }
    }

    pub fn supports(self, style: Style) -> bool {
        self.supported_styles().contains(&style)
    }

    /// Keeps `style` if this family offers it, otherwise falls back to the
    /// family's first supported style.
    pub fn coerce_style(self, style: Style) -> Style {
        if self.supports(style) {
            style
        } else {
            self.supported_styles()[0]
        }
    }
}

impl Style {
    pub fn from_name(name: &str) -> Result<Self, CoolTextError> {
        name.trim()
            .parse()
            .map_err(|_| CoolTextError::UnknownStyle(name.to_owned()))
    }
}

/// A font family and style pair that is always one of the supported
/// combinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Selection {
    font_family: FontFamily,
    style: Style,
}

impl Default for Selection {
    fn default() -> Self {
        let font_family = FontFamily::Serif;
        Self {
            font_family,
            style: font_family.supported_styles()[0],
        }
    }
}

impl Selection {
    pub fn new(font_family: FontFamily, style: Style) -> Result<Self, CoolTextError> {
        if !font_family.supports(style) {
            return Err(CoolTextError::InvalidStyleSelection { font_family, style });
        }
        Ok(Self { font_family, style })
    }

    /// Builds a selection, replacing an unsupported style with the family's
    /// first supported one.
    pub fn coerced(font_family: FontFamily, style: Style) -> Self {
        Self {
            font_family,
            style: font_family.coerce_style(style),
        }
    }

    pub fn font_family(&self) -> FontFamily {
        self.font_family
    }

    pub fn style(&self) -> Style {
        self.style
    }

    /// Switches family. The current style is kept when the new family
    /// supports it, otherwise it resets to the new family's first style.
    pub fn set_font_family(&mut self, font_family: FontFamily) {
        self.font_family = font_family;
        self.style = font_family.coerce_style(self.style);
    }

    pub fn set_style(&mut self, style: Style) -> Result<(), CoolTextError> {
        *self = Self::new(self.font_family, style)?;
        Ok(())
    }

    pub fn apply(&self, text: &str) -> Result<String, CoolTextError> {
        style_text(text, self.font_family, self.style)
    }
}

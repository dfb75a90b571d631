use thiserror::Error;

use crate::model::{FontFamily, Style};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoolTextError {
    /// The pair is not one of the supported combinations. Callers are
    /// expected to only offer supported pairs, so this is a usage bug.
    #[error("style '{style}' is not available for font family '{font_family}'")]
    InvalidStyleSelection { font_family: FontFamily, style: Style },

    #[error("unknown font family '{0}'")]
    UnknownFontFamily(String),

    #[error("unknown style '{0}'")]
    UnknownStyle(String),
}

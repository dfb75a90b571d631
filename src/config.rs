use std::env;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::json_store::JsonStore;
use crate::model::{FontFamily, Selection, Style};

pub const CONFIG_PATH_VAR: &str = "COOL_TEXT_CONFIG";
pub const FONT_VAR: &str = "COOL_TEXT_FONT";
pub const STYLE_VAR: &str = "COOL_TEXT_STYLE";
pub const DEFAULT_CONFIG_FILE: &str = "cool-text.json";

/// Defaults stored in the settings file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub font_family: FontFamily,
    pub style: Style,
}

impl Default for Settings {
    fn default() -> Self {
        let selection = Selection::default();
        Self {
            font_family: selection.font_family(),
            style: selection.style(),
        }
    }
}

impl From<Selection> for Settings {
    fn from(selection: Selection) -> Self {
        Self {
            font_family: selection.font_family(),
            style: selection.style(),
        }
    }
}

/// `--config` wins, then `$COOL_TEXT_CONFIG`, then `./cool-text.json`.
pub fn config_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| env::var_os(CONFIG_PATH_VAR).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self> {
        let settings: Self = JsonStore::new(path).read()?.unwrap_or_default();
        debug!("Loaded settings {settings:?}");
        Ok(settings)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        JsonStore::new(path).write(self)
    }

    /// Applies `COOL_TEXT_FONT` / `COOL_TEXT_STYLE` through `lookup`, with
    /// the same rules as command-line flags: a family alone may reset the
    /// style, a style must be supported by the resulting family.
    pub fn with_env_overrides(self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let font = lookup(FONT_VAR)
            .map(|f| FontFamily::from_name(&f))
            .transpose()
            .with_context(|| format!("Invalid {FONT_VAR}"))?;
        let style = lookup(STYLE_VAR)
            .map(|s| Style::from_name(&s))
            .transpose()
            .with_context(|| format!("Invalid {STYLE_VAR}"))?;
        if font.is_none() && style.is_none() {
            return Ok(self);
        }
        let selection = self
            .resolve(font, style)
            .with_context(|| format!("Invalid {FONT_VAR}/{STYLE_VAR} combination"))?;
        Ok(selection.into())
    }

    /// The stored pair, corrected if the style does not fit the family.
    pub fn selection(&self) -> Selection {
        Selection::coerced(self.font_family, self.style)
    }

    /// Settings as a base, with explicit choices on top. A family switch
    /// may reset the style, an explicit style must be supported.
    pub fn resolve(&self, font: Option<FontFamily>, style: Option<Style>) -> Result<Selection> {
        let mut selection = self.selection();
        if let Some(font) = font {
            selection.set_font_family(font);
        }
        if let Some(style) = style {
            selection.set_style(style)?;
        }
        Ok(selection)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::error::CoolTextError;

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn explicit_path_wins() {
        let p = config_path(Some(PathBuf::from("/tmp/x.json")));
        assert_eq!(p, PathBuf::from("/tmp/x.json"));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let s = Settings::load(&dir.path().join("cool-text.json")).unwrap();
        assert_eq!(s, Settings::default());
        assert_eq!(s.font_family, FontFamily::Serif);
        assert_eq!(s.style, Style::Bold);
    }

    #[test]
    fn save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cool-text.json");
        let s = Settings {
            font_family: FontFamily::Script,
            style: Style::Bold,
        };
        s.save(&path).unwrap();
        let raw = std::fs::read_to_string(&path).unwrap();
        assert!(raw.contains(r#""font_family": "script""#));
        assert_eq!(Settings::load(&path).unwrap(), s);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cool-text.json");
        std::fs::write(&path, r#"{ "font_family": "monospace" }"#).unwrap();
        let s = Settings::load(&path).unwrap();
        assert_eq!(s.font_family, FontFamily::Monospace);
        // bold is not a monospace style
        assert_eq!(s.selection().style(), Style::Normal);
    }

    #[test]
    fn env_overrides() {
        let s = Settings::default()
            .with_env_overrides(vars(&[(FONT_VAR, "fraktur"), (STYLE_VAR, "normal")]))
            .unwrap();
        assert_eq!(s.font_family, FontFamily::Fraktur);
        assert_eq!(s.style, Style::Normal);

        let err = Settings::default()
            .with_env_overrides(vars(&[(STYLE_VAR, "wavy")]))
            .unwrap_err();
        assert!(err.to_string().contains(STYLE_VAR));
    }

    #[test]
    fn env_pair_is_validated() {
        let err = Settings::default()
            .with_env_overrides(vars(&[(FONT_VAR, "double-struck"), (STYLE_VAR, "bold")]))
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<CoolTextError>(),
            Some(&CoolTextError::InvalidStyleSelection {
                font_family: FontFamily::DoubleStruck,
                style: Style::Bold,
            })
        );

        let err = Settings::default()
            .with_env_overrides(vars(&[(STYLE_VAR, "normal")]))
            .unwrap_err();
        assert!(err.to_string().contains(STYLE_VAR));
    }

    #[test]
    fn env_font_alone_resets_style() {
        let s = Settings::default()
            .with_env_overrides(vars(&[(FONT_VAR, "monospace")]))
            .unwrap();
        assert_eq!(s.font_family, FontFamily::Monospace);
        assert_eq!(s.style, Style::Normal);
    }

    #[test]
    fn no_env_keeps_stored_pair() {
        let stored = Settings {
            font_family: FontFamily::Monospace,
            style: Style::Bold,
        };
        assert_eq!(stored.with_env_overrides(vars(&[])).unwrap(), stored);
    }

    #[test]
    fn resolve_precedence() {
        let s = Settings {
            font_family: FontFamily::SansSerif,
            style: Style::Italic,
        };
        assert_eq!(
            s.resolve(None, None).unwrap(),
            Selection::new(FontFamily::SansSerif, Style::Italic).unwrap()
        );
        assert_eq!(
            s.resolve(Some(FontFamily::DoubleStruck), None).unwrap(),
            Selection::new(FontFamily::DoubleStruck, Style::Normal).unwrap()
        );
        assert_eq!(
            s.resolve(Some(FontFamily::Serif), Some(Style::BoldItalic)).unwrap(),
            Selection::new(FontFamily::Serif, Style::BoldItalic).unwrap()
        );
    }

    #[test]
    fn resolve_rejects_explicit_bad_pair() {
        let err = Settings::default()
            .resolve(Some(FontFamily::DoubleStruck), Some(Style::Bold))
            .unwrap_err();
        assert_eq!(
            err.downcast_ref::<CoolTextError>(),
            Some(&CoolTextError::InvalidStyleSelection {
                font_family: FontFamily::DoubleStruck,
                style: Style::Bold,
            })
        );
    }
}

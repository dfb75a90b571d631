use std::fmt::Write;

use strum::IntoEnumIterator;

use super::cooltext::Preset;
use super::{Args, Command, CommandGroup, CommandResult};
use crate::model::FontFamily;
use crate::VERSION;

pub static GENERAL_GROUP: CommandGroup = CommandGroup {
    name: "General",
    commands: &[
        Command {
            name: "version",
            aliases: &["v"],
            description: "Check my IQ! (output is in semver format)",
            usage: None,
            min_args: 0,
            run: version,
        },
        Command {
            name: "fonts",
            aliases: &["presets"],
            description: "List every font family, its styles and the presets.",
            usage: None,
            min_args: 0,
            run: fonts,
        },
    ],
};

fn version(_args: Args<'_>) -> CommandResult {
    Ok(VERSION.to_owned())
}

fn fonts(_args: Args<'_>) -> CommandResult {
    let mut s = font_table();
    s.push_str("\nPresets:");
    for preset in Preset::iter() {
        let (font, style) = preset.font();
        write!(s, "\n  {:<5}{font} {style}", preset.alias())?;
    }
    Ok(s)
}

/// One line per family: name, display name and supported styles.
pub fn font_table() -> String {
    FontFamily::iter()
        .map(|font| {
            let styles: Vec<String> = font
                .supported_styles()
                .iter()
                .map(|s| s.to_string())
                .collect();
            format!(
                "{:<14}{:<28}{}",
                font.to_string(),
                font.display_name(),
                styles.join(", ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

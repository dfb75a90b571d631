use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::{debug, warn};

use crate::commands::{
    cooltext::COOLTEXT_GROUP, general::GENERAL_GROUP, Args, Command, CommandGroup,
};

pub const PREFIX: char = '!';

static GROUPS: &[&CommandGroup] = &[&GENERAL_GROUP, &COOLTEXT_GROUP];

/// Routes `!command args` lines to the command groups and turns every
/// outcome into a reply line.
pub struct Framework {
    prefix: char,
    groups: &'static [&'static CommandGroup],
}

impl Default for Framework {
    fn default() -> Self {
        Self {
            prefix: PREFIX,
            groups: GROUPS,
        }
    }
}

impl Framework {
    /// The reply to one line. Lines without the prefix get no reply.
    pub fn dispatch(&self, line: &str) -> Option<String> {
        let body = line.trim().strip_prefix(self.prefix)?;
        let args = Args::new(body);
        let name = args.current()?;
        let args = args.advance();
        debug!("Dispatching '{name}'");

        if name.eq_ignore_ascii_case("help") {
            return Some(self.help());
        }
        let Some(cmd) = self.find(name) else {
            return Some(unknown_command_hook(name));
        };
        if args.len() < cmd.min_args {
            return Some(format!(
                "Need {} arguments, but only got {} 😋",
                cmd.min_args,
                args.len()
            ));
        }
        Some(after_hook(cmd.name, (cmd.run)(args)))
    }

    /// Answers every line of `input`, writing replies to `output`.
    pub fn run(&self, input: impl BufRead, mut output: impl Write) -> Result<()> {
        for line in input.lines() {
            if let Some(reply) = self.dispatch(&line?) {
                writeln!(output, "{reply}")?;
                output.flush()?;
            }
        }
        Ok(())
    }

    fn find(&self, name: &str) -> Option<&'static Command> {
        self.groups
            .iter()
            .flat_map(|g| g.commands.iter())
            .find(|c| c.answers_to(name))
    }

    fn help(&self) -> String {
        let mut lines = Vec::new();
        for group in self.groups {
            lines.push(format!("{}:", group.name));
            for cmd in group.commands {
                let usage = cmd.usage.map(|u| format!(" {u}")).unwrap_or_default();
                lines.push(format!(
                    "  {}{}{usage} - {}",
                    self.prefix, cmd.name, cmd.description
                ));
            }
        }
        lines.join("\n")
    }
}

fn unknown_command_hook(name: &str) -> String {
    format!("Me not understand '{name}' 🤔")
}

fn after_hook(cmd_name: &str, result: anyhow::Result<String>) -> String {
    match result {
        Ok(reply) => reply,
        Err(why) => {
            warn!("Error in {cmd_name}: {why:?}");
            format!("I did a bit of an epic fail there... 😕 ({why})")
        }
    }
}

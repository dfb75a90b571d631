pub mod cooltext;
pub mod general;

/// The reply text, or whatever went wrong while producing it.
pub type CommandResult = anyhow::Result<String>;

/// The words following a command name.
#[derive(Debug, Clone, Copy)]
pub struct Args<'a> {
    rest: &'a str,
}

impl<'a> Args<'a> {
    pub fn new(rest: &'a str) -> Self {
        Self {
            rest: rest.trim_start(),
        }
    }

    /// Everything that is left.
    pub fn rest(&self) -> &'a str {
        self.rest
    }

    /// The next word, if any.
    pub fn current(&self) -> Option<&'a str> {
        self.rest.split_whitespace().next()
    }

    /// Skips the next word.
    pub fn advance(&self) -> Args<'a> {
        match self.rest.find(char::is_whitespace) {
            Some(i) => Args::new(&self.rest[i..]),
            None => Args::new(""),
        }
    }

    pub fn len(&self) -> usize {
        self.rest.split_whitespace().count()
    }

    pub fn is_empty(&self) -> bool {
        self.rest.is_empty()
    }
}

pub struct Command {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub usage: Option<&'static str>,
    pub min_args: usize,
    pub run: fn(Args<'_>) -> CommandResult,
}

impl Command {
    pub fn answers_to(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
            || self.aliases.iter().any(|a| a.eq_ignore_ascii_case(name))
    }
}

pub struct CommandGroup {
    pub name: &'static str,
    pub commands: &'static [Command],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_walk_words() {
        let args = Args::new("  bf   Hello there! ");
        assert_eq!(args.current(), Some("bf"));
        assert_eq!(args.len(), 3);
        let args = args.advance();
        assert_eq!(args.current(), Some("Hello"));
        assert_eq!(args.rest(), "Hello there! ");
        let args = args.advance().advance();
        assert!(args.is_empty());
        assert_eq!(args.current(), None);
    }

    #[test]
    fn single_word_advance() {
        let args = Args::new("bf").advance();
        assert!(args.is_empty());
    }
}

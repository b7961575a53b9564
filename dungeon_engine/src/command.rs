//! Command module
//!
//! Turns one line of player input into a [`Command`]: a word from the fixed vocabulary
//! (or `Unknown`) and an optional second word.
use std::fmt;

use variantly::Variantly;

/// The words the game understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Variantly)]
pub enum CommandWord {
    Go,
    Quit,
    Help,
    Look,
    Unknown,
}

impl CommandWord {
    /// Every recognized word, in the order shown by `help`.
    pub const VOCABULARY: [CommandWord; 4] = [CommandWord::Go, CommandWord::Quit, CommandWord::Help, CommandWord::Look];

    /// Match a single token against the vocabulary.
    pub fn from_token(token: &str) -> CommandWord {
        match token {
            "go" => CommandWord::Go,
            "quit" => CommandWord::Quit,
            "help" => CommandWord::Help,
            "look" => CommandWord::Look,
            _ => CommandWord::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CommandWord::Go => "go",
            CommandWord::Quit => "quit",
            CommandWord::Help => "help",
            CommandWord::Look => "look",
            CommandWord::Unknown => "?",
        }
    }
}

impl fmt::Display for CommandWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    word: CommandWord,
    second_word: Option<String>,
}

impl Command {
    pub fn new(word: CommandWord, second_word: Option<String>) -> Self {
        Self { word, second_word }
    }

    pub fn word(&self) -> CommandWord {
        self.word
    }

    pub fn second_word(&self) -> Option<&str> {
        self.second_word.as_deref()
    }

    pub fn is_unknown(&self) -> bool {
        self.word.is_unknown()
    }

    pub fn has_second_word(&self) -> bool {
        self.second_word.is_some()
    }
}

/// Parses an input line into a `Command`.
///
/// Only the first two whitespace-separated words matter; anything after them is ignored.
/// A blank line, or a first word outside the vocabulary, gives `CommandWord::Unknown`.
pub fn parse_command(input: &str) -> Command {
    let mut words = input.split_whitespace();
    let word = words.next().map_or(CommandWord::Unknown, CommandWord::from_token);
    let second_word = words.next().map(str::to_string);
    Command::new(word, second_word)
}

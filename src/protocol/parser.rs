//! Console input parser.
//!
//! Turns a line typed at the move prompt into a structured `Command`: either
//! a house number in 1..=6 or the quit sentinel `q`.

use crate::board::House;

/// A parsed player command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Sow from the given house of the side to move.
    Sow(House),

    /// Abandon the game.
    Quit,
}

/// Reasons a prompt answer is refused. The caller re-prompts.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("no input")]
    Empty,

    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("house {0} is out of range, expected 1 to 6")]
    OutOfRange(i64),
}

/// Parses a single line of prompt input.
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    if trimmed.eq_ignore_ascii_case("q") {
        return Ok(Command::Quit);
    }

    let n: i64 = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;
    u8::try_from(n)
        .ok()
        .and_then(House::new)
        .map(Command::Sow)
        .ok_or(InputError::OutOfRange(n))
}

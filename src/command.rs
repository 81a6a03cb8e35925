//! Command grammar for the text protocol.

use crate::board::{Color, Column};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Longest accepted command, in bytes, including the terminator.
pub const MAX_CMD_LEN: usize = 8;

/// A decoded protocol command.
///
/// Commands are first-class values: decoded once, then routed by the
/// dispatcher independently of how the bytes arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// `BOARD` - request the current board rendering.
    Board,
    /// `RESET <C>` - start a new game with the player holding this color.
    Reset(Color),
    /// `DROPC <L>` - drop the player's piece into this column.
    Dropc(Column),
    /// `CTURN` - let the computer take its turn.
    Cturn,
}

/// Why a command failed to decode.
///
/// Parse failures are semantic, not transport faults: the dispatcher logs
/// them and sets no pending response.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ParseError {
    /// Input matched none of the recognized forms.
    #[display("unrecognized command: {text:?}")]
    UnknownCommand {
        /// The rejected input, newline already stripped.
        text: String,
    },
    /// `RESET` with a color other than `R` or `Y`.
    #[display("invalid color: {text:?}")]
    InvalidColor {
        /// The rejected argument text.
        text: String,
    },
    /// `DROPC` with a column outside `A`-`H`.
    #[display("invalid column: {text:?}")]
    InvalidColumn {
        /// The rejected argument text.
        text: String,
    },
}

impl Command {
    /// Decodes a command line.
    ///
    /// A single trailing newline is stripped before matching. Matching is
    /// case-sensitive and exact; length enforcement happens at the channel
    /// boundary, not here.
    #[instrument]
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        let line = input.strip_suffix('\n').unwrap_or(input);
        match line {
            "BOARD" => Ok(Command::Board),
            "CTURN" => Ok(Command::Cturn),
            _ => {
                if let Some(arg) = line.strip_prefix("RESET ") {
                    parse_single_letter(arg)
                        .and_then(Color::from_letter)
                        .map(Command::Reset)
                        .ok_or_else(|| ParseError::InvalidColor {
                            text: arg.to_string(),
                        })
                } else if let Some(arg) = line.strip_prefix("DROPC ") {
                    parse_single_letter(arg)
                        .and_then(Column::from_letter)
                        .map(Command::Dropc)
                        .ok_or_else(|| ParseError::InvalidColumn {
                            text: arg.to_string(),
                        })
                } else {
                    Err(ParseError::UnknownCommand {
                        text: line.to_string(),
                    })
                }
            }
        }
    }
}

/// Returns the argument character when `arg` is exactly one character.
fn parse_single_letter(arg: &str) -> Option<char> {
    let mut chars = arg.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_board() {
        assert_eq!(Command::parse("BOARD"), Ok(Command::Board));
        assert_eq!(Command::parse("BOARD\n"), Ok(Command::Board));
    }

    #[test]
    fn test_parse_cturn() {
        assert_eq!(Command::parse("CTURN\n"), Ok(Command::Cturn));
    }

    #[test]
    fn test_parse_reset_colors() {
        assert_eq!(Command::parse("RESET R"), Ok(Command::Reset(Color::Red)));
        assert_eq!(
            Command::parse("RESET Y\n"),
            Ok(Command::Reset(Color::Yellow))
        );
    }

    #[test]
    fn test_parse_dropc_columns() {
        assert_eq!(Command::parse("DROPC A"), Ok(Command::Dropc(Column::A)));
        assert_eq!(Command::parse("DROPC H\n"), Ok(Command::Dropc(Column::H)));
    }

    #[test]
    fn test_reject_invalid_color() {
        assert!(matches!(
            Command::parse("RESET X"),
            Err(ParseError::InvalidColor { .. })
        ));
        assert!(matches!(
            Command::parse("RESET r"),
            Err(ParseError::InvalidColor { .. })
        ));
    }

    #[test]
    fn test_reject_invalid_column() {
        assert!(matches!(
            Command::parse("DROPC I"),
            Err(ParseError::InvalidColumn { .. })
        ));
        assert!(matches!(
            Command::parse("DROPC a"),
            Err(ParseError::InvalidColumn { .. })
        ));
    }

    #[test]
    fn test_reject_unknown_commands() {
        for input in ["", "\n", "board", "RESET", "DROPC", "BOARDS", "HELP"] {
            assert!(
                matches!(
                    Command::parse(input),
                    Err(ParseError::UnknownCommand { .. })
                ),
                "input {input:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_reject_trailing_garbage() {
        assert!(Command::parse("DROPC AB").is_err());
        assert!(Command::parse("RESET RR").is_err());
    }
}

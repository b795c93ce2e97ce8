//! Error types for the noughts crate

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a move was rejected by [`BoardState::apply_move`](crate::tictactoe::BoardState::apply_move)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InvalidMoveReason {
    /// Index lies outside 0-8
    OutOfRange,
    /// Target cell already holds a mark
    Occupied,
}

impl fmt::Display for InvalidMoveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidMoveReason::OutOfRange => write!(f, "is out of bounds (must be 0-8)"),
            InvalidMoveReason::Occupied => write!(f, "is already occupied"),
        }
    }
}

/// Main error type for the noughts crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid move: position {position} {reason}")]
    InvalidMove {
        position: usize,
        reason: InvalidMoveReason,
    },

    #[error("game already over")]
    GameOver,

    #[error("no valid moves available")]
    NoValidMoves,

    #[error("board string too short: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid piece counts: X={x_count}, O={o_count} (counts may differ by at most 1)")]
    InvalidPieceCounts { x_count: usize, o_count: usize },

    #[error("unreachable position '{context}': {reason}")]
    UnreachablePosition { context: String, reason: String },

    #[error("invalid player '{player}' (expected 'X' or 'O')")]
    InvalidPlayerString { player: String },

    #[error("progress bar template error: {message}")]
    ProgressBarTemplate { message: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Whether this error is a rejected move (out of range or occupied cell)
    pub fn is_invalid_move(&self) -> bool {
        matches!(self, Error::InvalidMove { .. })
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_move_messages_name_the_reason() {
        let occupied = Error::InvalidMove {
            position: 4,
            reason: InvalidMoveReason::Occupied,
        };
        assert_eq!(
            occupied.to_string(),
            "invalid move: position 4 is already occupied"
        );

        let out_of_range = Error::InvalidMove {
            position: 9,
            reason: InvalidMoveReason::OutOfRange,
        };
        assert!(out_of_range.to_string().contains("out of bounds"));
        assert!(out_of_range.is_invalid_move());
        assert!(!Error::GameOver.is_invalid_move());
    }
}

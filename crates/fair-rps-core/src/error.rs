//! Error types for round setup and play.

use crate::protocol::RoundState;
use thiserror::Error;

/// Rejections raised while validating a move list
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SetupError {
    #[error("move \"{0}\" occurs more than once in the list")]
    DuplicateMove(String),

    #[error("at least 3 moves are required, got {0}")]
    TooFewMoves(usize),

    #[error("the number of moves must be odd, got {0}")]
    EvenMoveCount(usize),
}

/// Errors from the round engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("invalid move list: {0}")]
    Setup(#[from] SetupError),

    #[error("move index {index} is out of range for {count} moves")]
    MoveOutOfRange { index: usize, count: usize },

    #[error("round is {actual}, expected {expected}")]
    WrongState {
        expected: RoundState,
        actual: RoundState,
    },
}

/// Errors from verifying a revealed commitment
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommitmentError {
    #[error("invalid hex in {field}: {reason}")]
    InvalidHex { field: &'static str, reason: String },
}

//! Protocol types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of a move, from the perspective of the first move passed in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Win => "Win",
            Outcome::Lose => "Lose",
            Outcome::Draw => "Draw",
        }
    }

    /// Same pairing seen from the other side
    pub fn reversed(&self) -> Outcome {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Lifecycle of a round
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundState {
    #[default]
    Unset,
    InProgress,
    Finished,
}

impl fmt::Display for RoundState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoundState::Unset => write!(f, "unset"),
            RoundState::InProgress => write!(f, "in progress"),
            RoundState::Finished => write!(f, "finished"),
        }
    }
}

//! Validated move lists.

use super::rps;
use crate::error::{GameError, SetupError};
use crate::protocol::Outcome;
use serde::Serialize;
use std::collections::HashSet;

/// Minimum number of moves in a round
pub const MIN_MOVES: usize = 3;

/// Ordered list of distinct move names with an odd length of at least 3
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MoveSet(Vec<String>);

impl MoveSet {
    /// Validate a move list.
    ///
    /// Checks run in a fixed order: duplicates, then too few moves, then an
    /// even count. The first failure is reported.
    pub fn new<S: AsRef<str>>(names: &[S]) -> Result<Self, SetupError> {
        let mut seen = HashSet::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            if !seen.insert(name) {
                return Err(SetupError::DuplicateMove(name.to_string()));
            }
        }

        if names.len() < MIN_MOVES {
            return Err(SetupError::TooFewMoves(names.len()));
        }
        if names.len() % 2 == 0 {
            return Err(SetupError::EvenMoveCount(names.len()));
        }

        Ok(Self(names.iter().map(|n| n.as_ref().to_string()).collect()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn names(&self) -> &[String] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Bounds-checked version of [`rps::resolve`]
    pub fn resolve(&self, a: usize, b: usize) -> Result<Outcome, GameError> {
        let count = self.len();
        for index in [a, b] {
            if index >= count {
                return Err(GameError::MoveOutOfRange { index, count });
            }
        }
        Ok(rps::resolve(a, b, count))
    }
}

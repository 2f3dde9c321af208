//! Proof material for a finished round.

use crate::config::HashAlgorithm;
use crate::crypto::verify_commitment;
use crate::error::CommitmentError;
use crate::protocol::Outcome;
use serde::{Deserialize, Serialize};

/// Everything a player needs to check a round after it is over
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReceipt {
    pub moves: Vec<String>,
    pub user_move: String,
    pub system_move: String,
    pub outcome: Outcome,
    pub algorithm: HashAlgorithm,
    /// Digest published before the user moved
    pub digest: String,
    /// Key revealed after the user moved
    pub key: String,
}

impl RoundReceipt {
    /// Recompute the digest of the system move under the revealed key
    pub fn verify(&self) -> Result<bool, CommitmentError> {
        verify_commitment(self.algorithm, &self.system_move, &self.key, &self.digest)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

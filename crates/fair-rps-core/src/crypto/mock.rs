//! Deterministic committer for testing.

use super::commitment::{keyed_digest, Committer, SecretKey, KEY_LEN};
use crate::config::HashAlgorithm;

/// Committer with a fixed key.
///
/// Digests are still real HMACs, so a round driven by this committer can be
/// verified the same way as a production one.
#[derive(Clone, Debug)]
pub struct FixedCommitter {
    key: SecretKey,
    algorithm: HashAlgorithm,
    committed: Option<String>,
    digest: Option<[u8; 32]>,
    commits: usize,
}

impl FixedCommitter {
    /// Create a committer that always uses `key`
    pub fn new(key: [u8; KEY_LEN]) -> Self {
        Self {
            key: SecretKey::from_bytes(key),
            algorithm: HashAlgorithm::default(),
            committed: None,
            digest: None,
            commits: 0,
        }
    }

    pub fn with_algorithm(mut self, algorithm: HashAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Last message passed to `commit` (for testing)
    pub fn committed_message(&self) -> Option<&str> {
        self.committed.as_deref()
    }

    /// Number of `commit` calls so far
    pub fn commit_count(&self) -> usize {
        self.commits
    }
}

impl Default for FixedCommitter {
    fn default() -> Self {
        Self::new([0x42; KEY_LEN])
    }
}

impl Committer for FixedCommitter {
    fn commit(&mut self, message: &str) -> String {
        let digest = keyed_digest(self.algorithm, self.key.as_bytes(), message.as_bytes());
        self.committed = Some(message.to_string());
        self.digest = Some(digest);
        self.commits += 1;
        hex::encode(digest)
    }

    fn key(&self) -> String {
        if self.digest.is_some() {
            self.key.to_string()
        } else {
            String::new()
        }
    }

    fn digest(&self) -> String {
        self.digest.map(hex::encode).unwrap_or_default()
    }

    fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }
}

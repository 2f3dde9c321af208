//! HMAC commitment for the commit-reveal scheme.

use crate::config::HashAlgorithm;
use crate::error::CommitmentError;
use hmac::{Hmac, Mac};
use rand::RngCore;
use sha2::Sha256;
use sha3::Sha3_256;
use std::fmt;

/// Width of the commitment secret in bytes
pub const KEY_LEN: usize = 32;

/// Secret HMAC key, withheld until the round is over
#[derive(Clone, PartialEq, Eq)]
pub struct SecretKey([u8; KEY_LEN]);

impl SecretKey {
    /// Create a new random key
    pub fn random() -> Self {
        let mut bytes = [0u8; KEY_LEN];
        rand::thread_rng().fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(bytes)
    }

    /// Get the underlying bytes
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey({}..)", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

/// HMAC(key, message) under the given hash function
pub fn keyed_digest(algorithm: HashAlgorithm, key: &[u8], message: &[u8]) -> [u8; 32] {
    match algorithm {
        HashAlgorithm::Sha3_256 => {
            let mut mac = Hmac::<Sha3_256>::new_from_slice(key)
                .expect("HMAC can take key of any size");
            mac.update(message);
            mac.finalize().into_bytes().into()
        }
        HashAlgorithm::Sha256 => {
            let mut mac =
                Hmac::<Sha256>::new_from_slice(key).expect("HMAC can take key of any size");
            mac.update(message);
            mac.finalize().into_bytes().into()
        }
    }
}

/// Recompute a digest from a revealed key and compare it with the published one.
///
/// Returns `Ok(false)` on a mismatch; malformed hex input is an error.
pub fn verify_commitment(
    algorithm: HashAlgorithm,
    message: &str,
    key_hex: &str,
    digest_hex: &str,
) -> Result<bool, CommitmentError> {
    let key = hex::decode(key_hex.trim()).map_err(|e| CommitmentError::InvalidHex {
        field: "key",
        reason: e.to_string(),
    })?;
    let expected = hex::decode(digest_hex.trim()).map_err(|e| CommitmentError::InvalidHex {
        field: "digest",
        reason: e.to_string(),
    })?;

    let actual = keyed_digest(algorithm, &key, message.as_bytes());
    Ok(actual.as_slice() == expected.as_slice())
}

/// Capability to commit to a message now and disclose the key later.
///
/// The round engine only talks to this trait. Implementations can be:
/// - HmacCommitter for real play
/// - FixedCommitter for deterministic tests
pub trait Committer {
    /// Draw a fresh key, commit to `message` and return the digest as lowercase hex.
    /// Replaces any previous key and digest.
    fn commit(&mut self, message: &str) -> String;

    /// Most recent key as hex, empty before the first commit
    fn key(&self) -> String;

    /// Most recent digest as hex, empty before the first commit
    fn digest(&self) -> String;

    /// Hash function behind the digest
    fn algorithm(&self) -> HashAlgorithm;
}

/// Production committer backed by a CSPRNG key and HMAC
#[derive(Debug, Default)]
pub struct HmacCommitter {
    algorithm: HashAlgorithm,
    key: Option<SecretKey>,
    digest: Option<[u8; 32]>,
}

impl HmacCommitter {
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self {
            algorithm,
            key: None,
            digest: None,
        }
    }
}

impl Committer for HmacCommitter {
    fn commit(&mut self, message: &str) -> String {
        let key = SecretKey::random();
        let digest = keyed_digest(self.algorithm, key.as_bytes(), message.as_bytes());
        self.key = Some(key);
        self.digest = Some(digest);
        hex::encode(digest)
    }

    fn key(&self) -> String {
        self.key.as_ref().map(SecretKey::to_string).unwrap_or_default()
    }

    fn digest(&self) -> String {
        self.digest.map(hex::encode).unwrap_or_default()
    }

    fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }
}

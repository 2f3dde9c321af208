//! Engine configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Hash function used inside the HMAC commitment
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HashAlgorithm {
    #[default]
    #[serde(rename = "sha3-256")]
    Sha3_256,
    #[serde(rename = "sha256")]
    Sha256,
}

impl HashAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::Sha3_256 => "sha3-256",
            HashAlgorithm::Sha256 => "sha256",
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when parsing an unknown algorithm name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown hash algorithm: {0} (expected sha3-256 or sha256)")]
pub struct UnknownAlgorithm(pub String);

impl FromStr for HashAlgorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sha3-256" | "sha3_256" | "sha3" => Ok(HashAlgorithm::Sha3_256),
            "sha256" | "sha-256" | "sha2" => Ok(HashAlgorithm::Sha256),
            _ => Err(UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Settings for a single round
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub algorithm: HashAlgorithm,
}

impl EngineConfig {
    pub fn with_algorithm(algorithm: HashAlgorithm) -> Self {
        Self { algorithm }
    }
}

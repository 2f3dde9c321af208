//! Fair RPS Core Library
//!
//! This crate provides the round engine and cryptographic commitment for
//! rock-paper-scissors over any odd number of moves. The system commits to
//! its move with an HMAC before the user chooses and reveals the key
//! afterwards, so the user can check the system did not change its mind.

pub mod config;
pub mod crypto;
pub mod error;
pub mod games;
pub mod protocol;

pub use config::{EngineConfig, HashAlgorithm};
pub use crypto::{verify_commitment, Committer, FixedCommitter, HmacCommitter, SecretKey};
pub use error::{CommitmentError, GameError, SetupError};
pub use games::{MoveSet, Round};
pub use protocol::{Outcome, RoundReceipt, RoundState};

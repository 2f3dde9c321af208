//! Cryptographic primitives for the commit-reveal round.
//!
//! This module provides:
//! - SecretKey and keyed_digest for HMAC commitments
//! - Committer trait with HmacCommitter and FixedCommitter
//! - verify_commitment for checking a revealed key

mod commitment;
mod mock;

pub use commitment::{
    keyed_digest, verify_commitment, Committer, HmacCommitter, SecretKey, KEY_LEN,
};
pub use mock::FixedCommitter;

//! Protocol types and round receipts.

mod receipt;
mod types;

pub use receipt::RoundReceipt;
pub use types::{Outcome, RoundState};

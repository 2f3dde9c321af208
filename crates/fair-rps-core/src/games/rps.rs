//! Circular win rule for N-move rock-paper-scissors.
//!
//! Moves sit on a cycle of odd length `n`. Walking from `b` to `a` takes
//! `(a - b) mod n` steps; if that is at most half the cycle, `a` loses.

use crate::protocol::Outcome;

/// Outcome of move `a` against move `b` on a cycle of `n` moves.
///
/// Callers must pass `a < n`, `b < n` and an odd `n`.
pub fn resolve(a: usize, b: usize, n: usize) -> Outcome {
    debug_assert!(a < n && b < n, "move index out of range");
    debug_assert!(n % 2 == 1, "move count must be odd");

    if a == b {
        return Outcome::Draw;
    }

    let forward = (a + n - b) % n;
    let half = (n - 1) / 2;

    if half >= forward {
        Outcome::Lose
    } else {
        Outcome::Win
    }
}

/// Check if move `a` beats move `b`
pub fn beats(a: usize, b: usize, n: usize) -> bool {
    resolve(a, b, n) == Outcome::Win
}

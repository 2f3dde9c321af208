//! Move sets, the circular win rule and the round engine.

mod moves;
mod round;
mod rps;

pub use moves::{MoveSet, MIN_MOVES};
pub use round::Round;
pub use rps::{beats, resolve};

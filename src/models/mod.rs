//! Core data models for the tournament tracker.

mod ids;
mod match_result;
mod pairing;
mod player;
mod standing;

pub use ids::*;
pub use match_result::*;
pub use pairing::*;
pub use player::*;
pub use standing::*;

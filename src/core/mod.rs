//! Core infrastructure: the deterministic RNG shared by the board generator
//! and the standard die.

pub mod rng;

pub use rng::GameRng;

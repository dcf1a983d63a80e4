//! Dice capability.
//!
//! The rules engine and match loop consume rolls only through the `Die`
//! trait, never a concrete randomness source. Substitute a scripted
//! implementation in tests for fully deterministic matches.

pub mod standard;

pub use standard::{DiceError, StandardDie};

/// A die that produces values uniformly in `[1, faces]`.
pub trait Die {
    /// Roll the die once.
    fn roll(&mut self) -> u8;

    /// Number of faces on the die.
    fn faces(&self) -> u8;
}

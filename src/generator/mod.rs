//! Procedural board generation.
//!
//! `Difficulty` maps a board size to snake/ladder counts; `BoardGenerator`
//! places that many non-overlapping snakes and ladders by rejection sampling
//! and hands back a validated `Board`.

pub mod difficulty;
pub mod placement;

pub use difficulty::{Difficulty, ParseDifficultyError, PlacementCounts};
pub use placement::{BoardGenerator, GeneratorError};

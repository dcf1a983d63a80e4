//! # snakes-ladders
//!
//! A multiplayer Snakes & Ladders match engine on procedurally generated
//! boards.
//!
//! ## Design Principles
//!
//! 1. **Deterministic Core**: The rules engine is a pure function and all
//!    randomness flows through seedable capabilities (`Die`, `GameRng`), so
//!    any match is reproducible from a seed.
//!
//! 2. **Validated Construction**: Boards, snakes, ladders, and dice validate
//!    their invariants at construction and return `Result`; once a match
//!    starts, no runtime errors remain.
//!
//! 3. **Capabilities Over Concretions**: Dice and rendering are narrow
//!    single-method traits injected into the match loop; tests substitute
//!    deterministic fakes.
//!
//! ## Modules
//!
//! - `core`: Deterministic RNG
//! - `model`: Board, snakes, ladders, players
//! - `dice`: The `Die` capability and the standard uniform die
//! - `generator`: Difficulty policy and rejection-sampling board generator
//! - `rules`: The pure turn-resolution state machine
//! - `engine`: The match loop: sequencing, capture rule, victory
//! - `render`: The `BoardRenderer` capability and the console grid

pub mod core;
pub mod dice;
pub mod engine;
pub mod generator;
pub mod model;
pub mod render;
pub mod rules;

// Re-export commonly used types
pub use crate::core::GameRng;

pub use crate::model::{Board, BoardError, Ladder, Player, PlayerId, Snake};

pub use crate::dice::{DiceError, Die, StandardDie};

pub use crate::generator::{
    BoardGenerator, Difficulty, GeneratorError, ParseDifficultyError, PlacementCounts,
};

pub use crate::rules::{RulesEngine, TurnOutcome};

pub use crate::engine::{MatchEngine, MatchError, RollBatch, TurnRecord};

pub use crate::render::{render_to_string, BoardRenderer, ConsoleBoardRenderer};

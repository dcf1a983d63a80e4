//! Turn resolution: the pure state machine at the heart of the game.
//!
//! `RulesEngine::apply_turn` interprets one turn's batch of dice rolls into a
//! validated `TurnOutcome`. It never touches player state; the match engine
//! applies outcomes.

pub mod engine;
pub mod outcome;

pub use engine::RulesEngine;
pub use outcome::TurnOutcome;

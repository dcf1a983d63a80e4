//! The match loop: sequences turns across players, applies outcomes and the
//! capture rule, and detects victory.

pub mod game;

pub use game::{MatchEngine, MatchError, RollBatch, TurnRecord};

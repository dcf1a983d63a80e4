//! Difficulty policy: board size in, placement counts out.
//!
//! A pure lookup with no side effects or failure modes. Easy boards favor
//! ladders over snakes; hard boards the reverse. The counts parameterize the
//! generator without changing its algorithm.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How many snakes and ladders the generator should place.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacementCounts {
    /// Number of snakes to place.
    pub snakes: usize,
    /// Number of ladders to place.
    pub ladders: usize,
}

/// Match difficulty. Selects a density profile for board generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// More ladders, fewer snakes.
    Easy,
    /// Balanced, tilted toward snakes.
    Medium,
    /// Many snakes, few ladders.
    Hard,
}

impl Difficulty {
    /// Placement counts for a board of side length `board_size`.
    ///
    /// Integer division truncates toward zero.
    #[must_use]
    pub fn placement_counts(self, board_size: usize) -> PlacementCounts {
        match self {
            Difficulty::Easy => PlacementCounts {
                snakes: (board_size / 2).max(2),
                ladders: board_size.max(3),
            },
            Difficulty::Medium => PlacementCounts {
                snakes: board_size.max(3),
                ladders: (board_size / 2).max(3),
            },
            Difficulty::Hard => PlacementCounts {
                snakes: (board_size + board_size / 2).max(5),
                ladders: (board_size / 3).max(2),
            },
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{name}")
    }
}

/// Error for an unrecognized difficulty name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseDifficultyError {
    /// The rejected input.
    pub input: String,
}

impl std::fmt::Display for ParseDifficultyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Unknown difficulty '{}', expected easy, medium, or hard",
            self.input
        )
    }
}

impl std::error::Error for ParseDifficultyError {}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(ParseDifficultyError {
                input: s.to_string(),
            }),
        }
    }
}

//! Player identification and per-match player state.
//!
//! ## PlayerId
//!
//! Type-safe index into the match roster, supporting up to 255 players.
//!
//! ## Player
//!
//! Name plus current cell. Position 0 is the start cell; the match engine is
//! the only writer after setup.

use serde::{Deserialize, Serialize};

/// Player identifier. Indices are 0-based: the first player is `PlayerId(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw roster index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// A player in the match: a name and a current cell index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    position: usize,
}

impl Player {
    /// Create a player at the start cell.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            position: 0,
        }
    }

    /// Create a player from raw input, defaulting a blank name to
    /// `Player{index + 1}`.
    #[must_use]
    pub fn named(index: usize, raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            Self::new(format!("Player{}", index + 1))
        } else {
            Self::new(trimmed)
        }
    }

    /// The player's display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current cell index. 0 is the start cell.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Move the player to a cell. Called by the match engine only.
    pub fn set_position(&mut self, position: usize) {
        self.position = position;
    }
}

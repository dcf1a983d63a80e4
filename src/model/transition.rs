//! Snakes and ladders: the two cell-to-cell transitions a board can hold.

use serde::{Deserialize, Serialize};

use super::board::BoardError;

/// A snake: landing on `head` moves the piece down to `tail`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snake {
    head: usize,
    tail: usize,
}

impl Snake {
    /// Create a snake. Fails unless `tail < head`.
    pub fn new(head: usize, tail: usize) -> Result<Self, BoardError> {
        if tail >= head {
            return Err(BoardError::InvalidSnake { head, tail });
        }
        Ok(Self { head, tail })
    }

    /// Entry cell (the higher index).
    #[must_use]
    pub fn head(&self) -> usize {
        self.head
    }

    /// Exit cell (the lower index).
    #[must_use]
    pub fn tail(&self) -> usize {
        self.tail
    }

    /// How far the snake drops a piece.
    #[must_use]
    pub fn span(&self) -> usize {
        self.head - self.tail
    }
}

/// A ladder: landing on `start` moves the piece up to `end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ladder {
    start: usize,
    end: usize,
}

impl Ladder {
    /// Create a ladder. Fails unless `end > start`.
    pub fn new(start: usize, end: usize) -> Result<Self, BoardError> {
        if end <= start {
            return Err(BoardError::InvalidLadder { start, end });
        }
        Ok(Self { start, end })
    }

    /// Entry cell (the lower index).
    #[must_use]
    pub fn start(&self) -> usize {
        self.start
    }

    /// Exit cell (the higher index).
    #[must_use]
    pub fn end(&self) -> usize {
        self.end
    }

    /// How far the ladder lifts a piece.
    #[must_use]
    pub fn span(&self) -> usize {
        self.end - self.start
    }
}

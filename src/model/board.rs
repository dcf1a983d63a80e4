//! The board entity and its construction-time invariants.
//!
//! A board is an N x N grid addressed by zero-based cell index `0..=N*N-1`.
//! Cell 0 is the start, `last_index` is the terminal cell. Snakes are looked
//! up by head cell, ladders by start cell; `Board::new` rejects any layout
//! where those lookups would be ambiguous.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::transition::{Ladder, Snake};

/// Board construction error. All variants are fatal at setup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// Board size must be at least 2.
    SizeTooSmall(usize),
    /// A snake or ladder endpoint lies outside `[0, last_index]`.
    OutOfBounds { index: usize, last_index: usize },
    /// Two snakes share the same head cell.
    DuplicateSnakeHead(usize),
    /// Two ladders share the same start cell.
    DuplicateLadderStart(usize),
    /// A cell is both a snake head and a ladder start.
    HeadStartOverlap(usize),
    /// Snake tail must be below its head.
    InvalidSnake { head: usize, tail: usize },
    /// Ladder end must be above its start.
    InvalidLadder { start: usize, end: usize },
}

impl std::fmt::Display for BoardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardError::SizeTooSmall(size) => {
                write!(f, "Board size must be >= 2, got {size}")
            }
            BoardError::OutOfBounds { index, last_index } => {
                write!(f, "Index out of bounds: {index} (last index {last_index})")
            }
            BoardError::DuplicateSnakeHead(head) => {
                write!(f, "Duplicate snake head at {head}")
            }
            BoardError::DuplicateLadderStart(start) => {
                write!(f, "Duplicate ladder start at {start}")
            }
            BoardError::HeadStartOverlap(cell) => {
                write!(f, "Snake head and ladder start overlap at {cell}")
            }
            BoardError::InvalidSnake { head, tail } => {
                write!(f, "Snake tail must be below head: head {head}, tail {tail}")
            }
            BoardError::InvalidLadder { start, end } => {
                write!(f, "Ladder end must be above start: start {start}, end {end}")
            }
        }
    }
}

impl std::error::Error for BoardError {}

/// An immutable N x N board with snake and ladder lookup tables.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    last_index: usize,
    snakes_by_head: FxHashMap<usize, Snake>,
    ladders_by_start: FxHashMap<usize, Ladder>,
}

impl Board {
    /// Build a board from validated snake and ladder sets.
    ///
    /// # Errors
    ///
    /// Rejects size below 2, out-of-bounds endpoints, duplicate snake heads
    /// or ladder starts, and any cell that is both a head and a start.
    pub fn new(size: usize, snakes: Vec<Snake>, ladders: Vec<Ladder>) -> Result<Self, BoardError> {
        if size < 2 {
            return Err(BoardError::SizeTooSmall(size));
        }
        let last_index = size * size - 1;

        let mut snakes_by_head = FxHashMap::default();
        for snake in snakes {
            Self::check_bounds(snake.head(), last_index)?;
            Self::check_bounds(snake.tail(), last_index)?;
            if snakes_by_head.insert(snake.head(), snake).is_some() {
                return Err(BoardError::DuplicateSnakeHead(snake.head()));
            }
        }

        let mut ladders_by_start = FxHashMap::default();
        for ladder in ladders {
            Self::check_bounds(ladder.start(), last_index)?;
            Self::check_bounds(ladder.end(), last_index)?;
            if ladders_by_start.insert(ladder.start(), ladder).is_some() {
                return Err(BoardError::DuplicateLadderStart(ladder.start()));
            }
        }

        for head in snakes_by_head.keys() {
            if ladders_by_start.contains_key(head) {
                return Err(BoardError::HeadStartOverlap(*head));
            }
        }

        Ok(Self {
            size,
            last_index,
            snakes_by_head,
            ladders_by_start,
        })
    }

    fn check_bounds(index: usize, last_index: usize) -> Result<(), BoardError> {
        if index > last_index {
            return Err(BoardError::OutOfBounds { index, last_index });
        }
        Ok(())
    }

    /// Board side length N.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Terminal cell index, `N * N - 1`.
    #[must_use]
    pub fn last_index(&self) -> usize {
        self.last_index
    }

    /// Convert a zero-based cell index to the human-friendly 1-based number.
    #[must_use]
    pub fn to_human_cell(&self, index: usize) -> usize {
        index + 1
    }

    /// The snake whose head sits at `index`, if any.
    #[must_use]
    pub fn snake_at(&self, index: usize) -> Option<&Snake> {
        self.snakes_by_head.get(&index)
    }

    /// The ladder whose start sits at `index`, if any.
    #[must_use]
    pub fn ladder_at(&self, index: usize) -> Option<&Ladder> {
        self.ladders_by_start.get(&index)
    }

    /// Iterate over all snakes on the board.
    pub fn snakes(&self) -> impl Iterator<Item = &Snake> {
        self.snakes_by_head.values()
    }

    /// Iterate over all ladders on the board.
    pub fn ladders(&self) -> impl Iterator<Item = &Ladder> {
        self.ladders_by_start.values()
    }

    /// Number of snakes on the board.
    #[must_use]
    pub fn snake_count(&self) -> usize {
        self.snakes_by_head.len()
    }

    /// Number of ladders on the board.
    #[must_use]
    pub fn ladder_count(&self) -> usize {
        self.ladders_by_start.len()
    }
}

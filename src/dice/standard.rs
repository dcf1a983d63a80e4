//! The standard uniform die backed by the crate's deterministic RNG.

use crate::core::GameRng;

use super::Die;

/// Dice construction error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiceError {
    /// A die needs at least 2 faces.
    NotEnoughFaces(u8),
}

impl std::fmt::Display for DiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiceError::NotEnoughFaces(faces) => {
                write!(f, "Die must have at least 2 faces, got {faces}")
            }
        }
    }
}

impl std::error::Error for DiceError {}

/// A uniform die over `[1, faces]`, default 6 faces.
#[derive(Clone, Debug)]
pub struct StandardDie {
    rng: GameRng,
    faces: u8,
}

impl StandardDie {
    /// Create a die with the given face count, seeded from the OS.
    ///
    /// # Errors
    ///
    /// Fails if `faces < 2`.
    pub fn new(faces: u8) -> Result<Self, DiceError> {
        Self::with_rng(faces, GameRng::from_entropy())
    }

    /// Create a die with a fixed seed, for reproducible matches.
    ///
    /// # Errors
    ///
    /// Fails if `faces < 2`.
    pub fn with_seed(faces: u8, seed: u64) -> Result<Self, DiceError> {
        Self::with_rng(faces, GameRng::new(seed))
    }

    fn with_rng(faces: u8, rng: GameRng) -> Result<Self, DiceError> {
        if faces < 2 {
            return Err(DiceError::NotEnoughFaces(faces));
        }
        Ok(Self { rng, faces })
    }
}

impl Default for StandardDie {
    /// The familiar six-sided die.
    fn default() -> Self {
        Self {
            rng: GameRng::from_entropy(),
            faces: 6,
        }
    }
}

impl Die for StandardDie {
    fn roll(&mut self) -> u8 {
        self.rng.gen_range_usize(0..self.faces as usize) as u8 + 1
    }

    fn faces(&self) -> u8 {
        self.faces
    }
}

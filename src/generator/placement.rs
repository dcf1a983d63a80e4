//! Stochastic snake/ladder placement via rejection sampling.
//!
//! Candidates are drawn until they satisfy the spacing and bounds
//! constraints. Individual placements are bounded at `PLACEMENT_ATTEMPTS`
//! draws so an infeasible size/count combination surfaces as
//! `GeneratorError::Infeasible` instead of looping forever. A full candidate
//! set that still has snake-head/ladder-start collisions is regenerated up to
//! `WHOLE_SET_ATTEMPTS` times, then repaired deterministically by dropping
//! the colliding ladders (snakes are never removed).

use rustc_hash::FxHashSet;

use crate::core::GameRng;
use crate::model::{Board, BoardError, Ladder, Snake};

use super::difficulty::PlacementCounts;

/// Whole-set regenerations before falling back to ladder removal.
const WHOLE_SET_ATTEMPTS: usize = 20;

/// Rejection-sampling draws allowed per individual snake or ladder.
const PLACEMENT_ATTEMPTS: usize = 10_000;

/// Board generation error. Fatal at setup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GeneratorError {
    /// A placement could not be found within the retry bound. The requested
    /// counts leave too few legal cells for the spacing constraints.
    Infeasible {
        /// What was being placed, `"snake"` or `"ladder"`.
        piece: &'static str,
        /// Side length of the board being generated.
        board_size: usize,
        /// How many placements were requested.
        requested: usize,
    },
    /// The assembled set failed board validation. Should be unreachable
    /// given the sampling constraints; surfaced rather than swallowed.
    Board(BoardError),
}

impl std::fmt::Display for GeneratorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GeneratorError::Infeasible {
                piece,
                board_size,
                requested,
            } => write!(
                f,
                "Could not place {requested} {piece}s on a {board_size}x{board_size} board \
                 within {PLACEMENT_ATTEMPTS} attempts; lower the count or enlarge the board"
            ),
            GeneratorError::Board(err) => write!(f, "Generated board failed validation: {err}"),
        }
    }
}

impl std::error::Error for GeneratorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GeneratorError::Board(err) => Some(err),
            GeneratorError::Infeasible { .. } => None,
        }
    }
}

impl From<BoardError> for GeneratorError {
    fn from(err: BoardError) -> Self {
        GeneratorError::Board(err)
    }
}

/// Stochastic board generator.
///
/// Owns its RNG so a fixed seed reproduces the exact board layout.
#[derive(Clone, Debug)]
pub struct BoardGenerator {
    rng: GameRng,
}

impl BoardGenerator {
    /// Create a generator with a fixed seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }

    /// Create a generator seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: GameRng::from_entropy(),
        }
    }

    /// Generate a board of side length `size` with the requested counts.
    ///
    /// # Errors
    ///
    /// Fails on `size < 2`, on counts infeasible for the board's spacing
    /// constraints, or (unreachable by construction) on board validation.
    pub fn generate(
        &mut self,
        size: usize,
        counts: PlacementCounts,
    ) -> Result<Board, GeneratorError> {
        if size < 2 {
            return Err(BoardError::SizeTooSmall(size).into());
        }
        let last_index = size * size - 1;

        let mut snakes = self.sample_snakes(size, last_index, counts.snakes)?;
        let mut ladders = self.sample_ladders(size, last_index, counts.ladders)?;

        let mut attempts = 1;
        while Self::collides(&snakes, &ladders) && attempts < WHOLE_SET_ATTEMPTS {
            snakes = self.sample_snakes(size, last_index, counts.snakes)?;
            ladders = self.sample_ladders(size, last_index, counts.ladders)?;
            attempts += 1;
        }

        if Self::collides(&snakes, &ladders) {
            // Deterministic repair: drop the colliding ladders, never snakes.
            let heads: FxHashSet<usize> = snakes.iter().map(Snake::head).collect();
            ladders.retain(|ladder| !heads.contains(&ladder.start()));
        }

        Board::new(size, snakes, ladders).map_err(GeneratorError::from)
    }

    /// True if any snake head doubles as a ladder start.
    fn collides(snakes: &[Snake], ladders: &[Ladder]) -> bool {
        let heads: FxHashSet<usize> = snakes.iter().map(Snake::head).collect();
        ladders.iter().any(|ladder| heads.contains(&ladder.start()))
    }

    fn sample_snakes(
        &mut self,
        size: usize,
        last_index: usize,
        count: usize,
    ) -> Result<Vec<Snake>, GeneratorError> {
        let min_span = (size / 2).max(2);
        let mut heads = FxHashSet::default();
        let mut snakes = Vec::with_capacity(count);

        for _ in 0..count {
            let mut placed = None;
            for _ in 0..PLACEMENT_ATTEMPTS {
                // Heads stay off the first row and off the last cell.
                let head = 1 + self.rng.gen_range_usize(0..last_index - 1);
                let tail = self.rng.gen_range_usize(0..head);
                if head <= size || head - tail < min_span || heads.contains(&head) {
                    continue;
                }
                placed = Some((head, tail));
                break;
            }
            let (head, tail) = placed.ok_or(GeneratorError::Infeasible {
                piece: "snake",
                board_size: size,
                requested: count,
            })?;
            heads.insert(head);
            snakes.push(Snake::new(head, tail)?);
        }

        Ok(snakes)
    }

    fn sample_ladders(
        &mut self,
        size: usize,
        last_index: usize,
        count: usize,
    ) -> Result<Vec<Ladder>, GeneratorError> {
        let min_span = (size / 2).max(2);
        let mut starts = FxHashSet::default();
        let mut ladders = Vec::with_capacity(count);

        for _ in 0..count {
            let mut placed = None;
            for _ in 0..PLACEMENT_ATTEMPTS {
                let start = self.rng.gen_range_usize(0..last_index);
                // end lands in (start, last_index]
                let end = start + 1 + self.rng.gen_range_usize(0..last_index - start);
                if start == 0
                    || end == last_index
                    || end - start < min_span
                    || starts.contains(&start)
                {
                    continue;
                }
                placed = Some((start, end));
                break;
            }
            let (start, end) = placed.ok_or(GeneratorError::Infeasible {
                piece: "ladder",
                board_size: size,
                requested: count,
            })?;
            starts.insert(start);
            ladders.push(Ladder::new(start, end)?);
        }

        Ok(ladders)
    }
}

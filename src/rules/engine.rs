//! The turn state machine.
//!
//! `apply_turn` processes a turn's rolls left to right, tracking consecutive
//! sixes:
//!
//! 1. Three consecutive sixes revoke the turn; the position reverts to where
//!    the turn started and processing stops.
//! 2. A roll that would overshoot the last cell is ignored (exact landing
//!    required); the position is unchanged for that roll.
//! 3. Otherwise the piece advances, then resolves a snake (head to tail) or
//!    ladder (start to end) at the new cell. The two are mutually exclusive
//!    by board invariant; snakes are checked first to keep resolution
//!    deterministic.
//! 4. Landing exactly on the last cell wins and stops processing.
//!
//! A batch that completes without revoke or win grants an extra turn iff its
//! last roll was a 6.
//!
//! The function is pure: identical inputs always produce identical outcomes.

use crate::model::Board;

use super::outcome::TurnOutcome;

/// Resolves turns against a fixed board.
#[derive(Clone, Copy, Debug)]
pub struct RulesEngine<'a> {
    board: &'a Board,
}

impl<'a> RulesEngine<'a> {
    /// Create a rules engine for a board.
    #[must_use]
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    /// Resolve one turn's full roll batch from `start_position`.
    ///
    /// `rolls` is the atomic batch the match loop collected: one roll plus
    /// one extra per consecutive 6, capped by the three-sixes rule.
    #[must_use]
    pub fn apply_turn(&self, start_position: usize, rolls: &[u8]) -> TurnOutcome {
        let last_index = self.board.last_index();
        let mut position = start_position;
        let mut consecutive_sixes = 0;
        let mut message = String::new();

        for &roll in rolls {
            if roll == 6 {
                consecutive_sixes += 1;
            } else {
                consecutive_sixes = 0;
            }

            if consecutive_sixes == 3 {
                message.push_str("Three sixes rolled. Turn revoked. ");
                return TurnOutcome {
                    final_position: start_position,
                    extra_turn: false,
                    revoked: true,
                    won: false,
                    message,
                };
            }

            let tentative = position + roll as usize;
            if tentative > last_index {
                // Exact landing required; this roll moves nothing.
                message.push_str("Overshoot ignored (need exact). ");
            } else {
                position = tentative;
                if let Some(snake) = self.board.snake_at(position) {
                    position = snake.tail();
                    message.push_str(&format!("Bitten by snake to {position}. "));
                } else if let Some(ladder) = self.board.ladder_at(position) {
                    position = ladder.end();
                    message.push_str(&format!("Climbed ladder to {position}. "));
                }
            }

            if position == last_index {
                message.push_str("Reached last cell. ");
                return TurnOutcome {
                    final_position: position,
                    extra_turn: false,
                    revoked: false,
                    won: true,
                    message,
                };
            }
        }

        let extra_turn = rolls.last() == Some(&6) && consecutive_sixes < 3;
        TurnOutcome {
            final_position: position,
            extra_turn,
            revoked: false,
            won: false,
            message,
        }
    }
}

//! The result of resolving one turn.

use serde::{Deserialize, Serialize};

/// Outcome of a single resolved turn.
///
/// `revoked` and `won` are mutually exclusive; `extra_turn` is only
/// meaningful when neither is set. `message` is a human-readable trace of
/// what happened, suitable for direct display.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnOutcome {
    /// Cell the player ends the turn on.
    pub final_position: usize,
    /// The batch ended on a non-revoking 6: same player rolls again.
    pub extra_turn: bool,
    /// Three consecutive sixes: the whole turn's movement is cancelled.
    pub revoked: bool,
    /// The player landed exactly on the last cell.
    pub won: bool,
    /// Human-readable trace of the turn.
    pub message: String,
}

impl TurnOutcome {
    /// A turn that moved (or stayed put) without revoke, win, or extra turn.
    #[must_use]
    pub fn is_plain_move(&self) -> bool {
        !self.revoked && !self.won && !self.extra_turn
    }
}

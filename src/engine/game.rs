//! Match sequencing over a board, a roster, and a die.
//!
//! The engine owns all mutable match state. Each `play_turn`:
//!
//! 1. Batches rolls from the die (one roll, plus one per consecutive 6,
//!    stopping at the third 6).
//! 2. Resolves the batch through `RulesEngine`.
//! 3. Applies the outcome per the consumer contract: revoked turns leave the
//!    position unchanged; wins end the match; otherwise the position is
//!    applied, co-located opponents on a non-zero cell are captured back to
//!    the start, and the same player goes again iff the batch earned an
//!    extra turn.
//!
//! The optional renderer is invoked before and after each move.

use smallvec::SmallVec;

use crate::dice::Die;
use crate::model::{Board, Player, PlayerId};
use crate::render::BoardRenderer;
use crate::rules::{RulesEngine, TurnOutcome};

/// One turn's dice rolls. The three-sixes rule caps a batch at 3 rolls.
pub type RollBatch = SmallVec<[u8; 4]>;

/// Match setup error. Fatal: the match cannot start.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchError {
    /// A match needs at least two players.
    NotEnoughPlayers(usize),
}

impl std::fmt::Display for MatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchError::NotEnoughPlayers(count) => {
                write!(f, "At least two players required, got {count}")
            }
        }
    }
}

impl std::error::Error for MatchError {}

/// Record of one resolved turn, for display or inspection.
#[derive(Clone, Debug)]
pub struct TurnRecord {
    /// Who acted.
    pub player: PlayerId,
    /// The full roll batch consumed this turn.
    pub rolls: RollBatch,
    /// What the rules engine decided.
    pub outcome: TurnOutcome,
    /// Opponents sent back to the start cell by the capture rule.
    pub captured: Vec<PlayerId>,
}

/// Turn-sequential match engine.
///
/// Single-threaded by design: exactly one player acts at a time, and all
/// state is owned here and mutated only between turns.
pub struct MatchEngine<D: Die> {
    board: Board,
    players: Vec<Player>,
    die: D,
    renderer: Option<Box<dyn BoardRenderer>>,
    current: usize,
    winner: Option<PlayerId>,
}

impl<D: Die> MatchEngine<D> {
    /// Create a match.
    ///
    /// # Errors
    ///
    /// Fails if fewer than two players are supplied.
    pub fn new(board: Board, players: Vec<Player>, die: D) -> Result<Self, MatchError> {
        if players.len() < 2 {
            return Err(MatchError::NotEnoughPlayers(players.len()));
        }
        Ok(Self {
            board,
            players,
            die,
            renderer: None,
            current: 0,
            winner: None,
        })
    }

    /// Attach a renderer, invoked before and after each move.
    #[must_use]
    pub fn with_renderer(mut self, renderer: Box<dyn BoardRenderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// The board this match is played on.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The roster, in turn order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Whose turn it is next.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        PlayerId::new(self.current as u8)
    }

    /// The winner, once the match is over.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Batch one turn's rolls: roll once, and again for each consecutive 6,
    /// stopping at the third 6 so the rules engine can revoke.
    fn collect_rolls(&mut self) -> RollBatch {
        let mut rolls = RollBatch::new();
        let mut sixes_in_row = 0;
        loop {
            let roll = self.die.roll();
            rolls.push(roll);
            if roll != 6 {
                break;
            }
            sixes_in_row += 1;
            if sixes_in_row == 3 {
                break;
            }
        }
        rolls
    }

    /// Play one full turn for the current player.
    ///
    /// Does nothing and returns `None` once the match has a winner.
    pub fn play_turn(&mut self) -> Option<TurnRecord> {
        if self.winner.is_some() {
            return None;
        }

        if let Some(renderer) = self.renderer.as_mut() {
            renderer.render(&self.board, &self.players);
        }

        let actor = self.current;
        let rolls = self.collect_rolls();
        let start = self.players[actor].position();
        let outcome = RulesEngine::new(&self.board).apply_turn(start, &rolls);

        let mut captured = Vec::new();
        if outcome.revoked {
            self.advance();
        } else {
            self.players[actor].set_position(outcome.final_position);
            if outcome.won {
                self.winner = Some(PlayerId::new(actor as u8));
            } else {
                captured = self.capture_opponents(actor);
                if !outcome.extra_turn {
                    self.advance();
                }
            }
        }

        if let Some(renderer) = self.renderer.as_mut() {
            renderer.render(&self.board, &self.players);
        }

        Some(TurnRecord {
            player: PlayerId::new(actor as u8),
            rolls,
            outcome,
            captured,
        })
    }

    /// Play turns until somebody wins; returns the winner.
    pub fn run(&mut self) -> PlayerId {
        loop {
            self.play_turn();
            if let Some(winner) = self.winner {
                return winner;
            }
        }
    }

    /// Send every other player sharing the actor's non-zero cell back to the
    /// start. The start cell itself is safe.
    fn capture_opponents(&mut self, actor: usize) -> Vec<PlayerId> {
        let cell = self.players[actor].position();
        if cell == 0 {
            return Vec::new();
        }

        let mut captured = Vec::new();
        for (index, player) in self.players.iter_mut().enumerate() {
            if index != actor && player.position() == cell {
                player.set_position(0);
                captured.push(PlayerId::new(index as u8));
            }
        }
        captured
    }

    fn advance(&mut self) {
        self.current = (self.current + 1) % self.players.len();
    }
}

//! Renderer capability.
//!
//! The match engine calls `render` before and after each move and never
//! depends on the output format. Swap in a silent implementation for tests.

pub mod console;

pub use console::{render_to_string, ConsoleBoardRenderer};

use crate::model::{Board, Player};

/// A side-effecting display of the board and player positions.
pub trait BoardRenderer {
    /// Display the current match state.
    fn render(&mut self, board: &Board, players: &[Player]);
}

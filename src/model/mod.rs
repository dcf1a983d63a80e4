//! Game entities: the board, its snakes and ladders, and the players.
//!
//! Everything here is a validated value type. `Board` is immutable after
//! construction; `Player` positions are mutated only by the match engine
//! applying a turn outcome.

pub mod board;
pub mod player;
pub mod transition;

pub use board::{Board, BoardError};
pub use player::{Player, PlayerId};
pub use transition::{Ladder, Snake};

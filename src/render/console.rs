//! Text rendering of the board grid.
//!
//! Rows are printed serpentine with the highest indices on top. Cells show
//! their two-digit index; a lone occupant replaces the first digit with the
//! player's uppercase initial, and stacked occupants show `.N` (or `**` for
//! ten or more). A legend with exact positions follows the grid.

use rustc_hash::FxHashMap;

use crate::model::{Board, Player};

use super::BoardRenderer;

/// Render the board and player positions to a string.
#[must_use]
pub fn render_to_string(board: &Board, players: &[Player]) -> String {
    let n = board.size();
    let last = board.last_index();

    let mut cell_labels: Vec<String> = (0..=last).map(|i| format!("{i:02}")).collect();

    let mut players_by_cell: FxHashMap<usize, Vec<&Player>> = FxHashMap::default();
    for player in players {
        players_by_cell.entry(player.position()).or_default().push(player);
    }

    for (cell, on_cell) in &players_by_cell {
        if let [player] = on_cell.as_slice() {
            let initial = player
                .name()
                .chars()
                .next()
                .map_or('?', |c| c.to_ascii_uppercase());
            let suffix = cell_labels[*cell][1..].to_string();
            cell_labels[*cell] = format!("{initial}{suffix}");
        } else {
            let count = on_cell.len();
            // .N for up to 9 stacked players, ** beyond that
            cell_labels[*cell] = if count < 10 {
                format!(".{count}")
            } else {
                "**".to_string()
            };
        }
    }

    let mut out = String::new();
    for row in (0..n).rev() {
        let mut line = String::new();
        if (n - 1 - row) % 2 == 0 {
            for col in 0..n {
                line.push_str(&format!("[{}] ", cell_labels[row * n + col]));
            }
        } else {
            for col in (0..n).rev() {
                line.push_str(&format!("[{}] ", cell_labels[row * n + col]));
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    let legend: Vec<String> = players
        .iter()
        .map(|p| format!("{}@{}", p.name(), p.position()))
        .collect();
    out.push_str(&format!("Players: {}", legend.join(" | ")));
    out
}

/// Prints the grid to stdout.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleBoardRenderer;

impl ConsoleBoardRenderer {
    /// Create a console renderer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl BoardRenderer for ConsoleBoardRenderer {
    fn render(&mut self, board: &Board, players: &[Player]) {
        println!("\n{}\n", render_to_string(board, players));
    }
}

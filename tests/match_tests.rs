//! Full-match integration: generated boards, scripted and seeded dice,
//! capture, sequencing, and rendering.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use snakes_ladders::{
    render_to_string, Board, BoardGenerator, BoardRenderer, Die, Difficulty, MatchEngine,
    MatchError, Player, PlayerId, StandardDie,
};

/// A die that replays a fixed script, cycling when exhausted.
struct ScriptedDie {
    script: Vec<u8>,
    next: usize,
}

impl ScriptedDie {
    fn new(script: &[u8]) -> Self {
        Self {
            script: script.to_vec(),
            next: 0,
        }
    }
}

impl Die for ScriptedDie {
    fn roll(&mut self) -> u8 {
        let roll = self.script[self.next % self.script.len()];
        self.next += 1;
        roll
    }

    fn faces(&self) -> u8 {
        6
    }
}

/// Counts render calls; the match engine must render before and after each
/// move.
struct CountingRenderer {
    calls: Arc<AtomicUsize>,
}

impl BoardRenderer for CountingRenderer {
    fn render(&mut self, board: &Board, players: &[Player]) {
        // Exercise the real formatter so malformed state would surface here.
        let _ = render_to_string(board, players);
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

fn roster(names: &[&str]) -> Vec<Player> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| Player::named(i, name))
        .collect()
}

#[test]
fn test_match_needs_two_players() {
    let board = Board::new(5, vec![], vec![]).unwrap();
    let result = MatchEngine::new(board, roster(&["Solo"]), ScriptedDie::new(&[1]));
    assert!(matches!(result, Err(MatchError::NotEnoughPlayers(1))));
}

#[test]
fn test_blank_names_are_defaulted() {
    let players = roster(&["Asha", "  ", "Ravi"]);
    assert_eq!(players[1].name(), "Player2");
}

#[test]
fn test_capture_on_shared_cell_ten() {
    // Both players reach cell 10; the second arrival captures the first.
    // Asha: 5, 5, then a revoked turn keeps her parked on 10. Ravi: 4, 3, 3.
    let board = Board::new(5, vec![], vec![]).unwrap();
    let die = ScriptedDie::new(&[5, 4, 5, 3, 6, 6, 6, 3]);
    let mut engine = MatchEngine::new(board, roster(&["Asha", "Ravi"]), die).unwrap();

    engine.play_turn(); // Asha -> 5
    engine.play_turn(); // Ravi -> 4
    engine.play_turn(); // Asha -> 10
    engine.play_turn(); // Ravi -> 7
    let revoked = engine.play_turn().unwrap(); // Asha rolls 6,6,6: stays on 10
    assert!(revoked.outcome.revoked);

    let record = engine.play_turn().unwrap(); // Ravi -> 10, captures Asha

    assert_eq!(record.captured, vec![PlayerId::new(0)]);
    assert_eq!(engine.players()[0].position(), 0);
    assert_eq!(engine.players()[1].position(), 10);
}

#[test]
fn test_capture_chains_through_a_match() {
    // Every landing on an occupied non-zero cell resets that occupant, so
    // co-location never outlasts a turn.
    let board = Board::new(5, vec![], vec![]).unwrap();
    let die = ScriptedDie::new(&[3, 3, 3]);
    let mut engine =
        MatchEngine::new(board, roster(&["Asha", "Ravi", "Mina"]), die).unwrap();

    engine.play_turn(); // Asha -> 3
    let second = engine.play_turn().unwrap(); // Ravi -> 3, captures Asha
    let third = engine.play_turn().unwrap(); // Mina -> 3, captures Ravi

    assert_eq!(second.captured, vec![PlayerId::new(0)]);
    assert_eq!(third.captured, vec![PlayerId::new(1)]);
    assert_eq!(engine.players()[0].position(), 0);
    assert_eq!(engine.players()[1].position(), 0);
    assert_eq!(engine.players()[2].position(), 3);
}

#[test]
fn test_renderer_called_before_and_after_each_move() {
    let board = Board::new(4, vec![], vec![]).unwrap();
    let calls = Arc::new(AtomicUsize::new(0));
    let renderer = CountingRenderer {
        calls: Arc::clone(&calls),
    };
    let die = ScriptedDie::new(&[2, 3]);
    let mut engine = MatchEngine::new(board, roster(&["Asha", "Ravi"]), die)
        .unwrap()
        .with_renderer(Box::new(renderer));

    engine.play_turn();
    assert_eq!(calls.load(Ordering::SeqCst), 2);

    engine.play_turn();
    assert_eq!(calls.load(Ordering::SeqCst), 4);
}

#[test]
fn test_generated_board_plays_to_completion() {
    // Full pipeline: difficulty -> generator -> match -> winner.
    let counts = Difficulty::Easy.placement_counts(6);
    let board = BoardGenerator::new(99).generate(6, counts).unwrap();
    let die = StandardDie::with_seed(6, 7).unwrap();
    let mut engine = MatchEngine::new(board, roster(&["Asha", "Ravi", "Mina"]), die).unwrap();

    let mut turns = 0;
    while engine.winner().is_none() && turns < 100_000 {
        engine.play_turn();
        turns += 1;
    }

    let winner = engine.winner().expect("match should finish");
    let position = engine.players()[winner.index()].position();
    assert_eq!(position, engine.board().last_index());
}

#[test]
fn test_winner_stops_the_match() {
    let board = Board::new(3, vec![], vec![]).unwrap();
    let die = ScriptedDie::new(&[4, 1]);
    let mut engine = MatchEngine::new(board, roster(&["Asha", "Ravi"]), die).unwrap();

    // Asha: 4, Ravi: 1, Asha: 8 (win).
    engine.play_turn();
    engine.play_turn();
    let record = engine.play_turn().unwrap();

    assert!(record.outcome.won);
    assert_eq!(engine.winner(), Some(PlayerId::new(0)));
    assert!(engine.play_turn().is_none());
    // Ravi never moved again.
    assert_eq!(engine.players()[1].position(), 1);
}

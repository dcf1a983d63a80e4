//! Rules engine laws and scenarios.
//!
//! Each test pins one clause of the turn-resolution contract: the
//! three-sixes revoke, exact landing, snake/ladder transitions, win halting,
//! and extra-turn granting.

use proptest::prelude::*;

use snakes_ladders::{Board, Ladder, RulesEngine, Snake};

fn bare_board(size: usize) -> Board {
    Board::new(size, vec![], vec![]).unwrap()
}

#[test]
fn test_scenario_exact_landing_win_on_7x7() {
    // Board size 7, last index 48: a player at 44 rolling 4 wins.
    let board = bare_board(7);
    let engine = RulesEngine::new(&board);

    let outcome = engine.apply_turn(44, &[4]);
    assert!(outcome.won);
    assert!(!outcome.revoked);
    assert!(!outcome.extra_turn);
    assert_eq!(outcome.final_position, 48);
}

#[test]
fn test_scenario_three_sixes_from_start() {
    let board = bare_board(7);
    let engine = RulesEngine::new(&board);

    let outcome = engine.apply_turn(0, &[6, 6, 6]);
    assert!(outcome.revoked);
    assert_eq!(outcome.final_position, 0);
}

#[test]
fn test_scenario_ladder_climb() {
    // Ladder (5, 20): a player at 3 rolling 2 lands on 5 and climbs to 20.
    let board = Board::new(7, vec![], vec![Ladder::new(5, 20).unwrap()]).unwrap();
    let engine = RulesEngine::new(&board);

    let outcome = engine.apply_turn(3, &[2]);
    assert_eq!(outcome.final_position, 20);
    assert!(!outcome.extra_turn);
    assert!(!outcome.won);
}

#[test]
fn test_snake_checked_before_ladder() {
    // Distinct cells by board invariant, but resolution order must still be
    // deterministic: a snake head is always resolved as a snake.
    let board = Board::new(
        7,
        vec![Snake::new(12, 2).unwrap()],
        vec![Ladder::new(13, 30).unwrap()],
    )
    .unwrap();
    let engine = RulesEngine::new(&board);

    let outcome = engine.apply_turn(10, &[2]);
    assert_eq!(outcome.final_position, 2);
}

#[test]
fn test_message_traces_each_event() {
    let board = Board::new(7, vec![Snake::new(10, 3).unwrap()], vec![]).unwrap();
    let engine = RulesEngine::new(&board);

    let outcome = engine.apply_turn(4, &[6, 2]);
    assert!(outcome.message.contains("Bitten by snake to 3"));
}

proptest! {
    /// Three sixes always revoke, from any start, on any board size.
    #[test]
    fn prop_three_sixes_always_revoke(size in 3usize..12, start_frac in 0.0f64..1.0) {
        let board = bare_board(size);
        let start = (start_frac * board.last_index() as f64) as usize;
        let engine = RulesEngine::new(&board);

        let outcome = engine.apply_turn(start, &[6, 6, 6]);
        prop_assert!(outcome.revoked);
        prop_assert!(!outcome.won);
        prop_assert_eq!(outcome.final_position, start);
    }

    /// A single overshooting roll never moves the piece.
    #[test]
    fn prop_overshoot_never_moves(size in 3usize..12, roll in 2u8..=6, k in 1u8..=5) {
        prop_assume!(k < roll);
        let board = bare_board(size);
        let last = board.last_index();
        // start is strictly between last - roll and last, so the roll
        // overshoots without landing exactly.
        let start = last - (roll - k) as usize;
        let engine = RulesEngine::new(&board);

        let outcome = engine.apply_turn(start, &[roll]);
        prop_assert!(!outcome.won);
        prop_assert_eq!(outcome.final_position, start);
    }

    /// Identical inputs yield identical outcomes: no hidden state.
    #[test]
    fn prop_apply_turn_is_idempotent(
        start in 0usize..48,
        rolls in proptest::collection::vec(1u8..=6, 0..4),
    ) {
        let board = Board::new(
            7,
            vec![Snake::new(20, 4).unwrap(), Snake::new(33, 11).unwrap()],
            vec![Ladder::new(5, 30).unwrap(), Ladder::new(17, 40).unwrap()],
        )
        .unwrap();
        let engine = RulesEngine::new(&board);

        prop_assert_eq!(engine.apply_turn(start, &rolls), engine.apply_turn(start, &rolls));
    }

    /// A batch ending in a non-revoking 6 grants an extra turn unless it won.
    #[test]
    fn prop_trailing_six_grants_extra_turn(start in 0usize..40, lead in 1u8..=5) {
        let board = bare_board(7);
        let engine = RulesEngine::new(&board);

        let outcome = engine.apply_turn(start, &[lead, 6]);
        if !outcome.won {
            prop_assert!(outcome.extra_turn);
        }
    }
}

//! Search-state tests - successors and weighted chance outcomes

use twenty48::core::Board;
use twenty48::engine::{chance_outcomes, successor, successors, SpawnWeights};
use twenty48::types::Action;

#[test]
fn test_successors_follow_valid_actions() {
    let board = Board::from_rows(&[[2u64, 0, 0, 0], [2, 0, 0, 0], [0; 4], [0; 4]], 2).unwrap();
    let next = successors(&board);

    let actions: Vec<Action> = next.iter().map(|s| s.action).collect();
    assert_eq!(actions, board.valid_actions().to_vec());
    assert_eq!(actions, vec![Action::Up, Action::Down, Action::Right]);

    let up = &next[0];
    assert_eq!(up.points, 4);
    assert_eq!(up.board.get(0, 0), Ok(4));
    assert_eq!(up.board.score(), 4);
    // Parent untouched
    assert_eq!(board.get(0, 1), Ok(2));
}

#[test]
fn test_successor_matches_board_method() {
    let board = Board::from_rows(&[[0u64, 4, 0, 4], [0; 4], [8, 0, 0, 0], [0; 4]], 2).unwrap();
    for action in board.valid_actions() {
        let via_engine = successor(&board, action).unwrap();
        assert_eq!(via_engine.board, board.successor(action).unwrap());
    }
}

#[test]
fn test_no_successors_when_game_over() {
    let board = Board::from_rows(&[[2u64, 4], [4, 2]], 0).unwrap();
    assert!(successors(&board).is_empty());
    assert!(chance_outcomes(&board).is_empty());
}

#[test]
fn test_chance_outcomes_sum_to_one() {
    let board = Board::from_rows(&[[2u64, 0, 0, 8], [0, 0, 4, 0], [0; 4], [2, 2, 2, 0]], 2)
        .unwrap();
    let outcomes = chance_outcomes(&board);
    assert_eq!(outcomes.len(), 2 * board.free_count());

    let total: f64 = outcomes.iter().map(|o| o.probability).sum();
    assert!((total - 1.0).abs() < 1e-9);

    let four_mass: f64 = outcomes
        .iter()
        .filter(|o| o.value == 4)
        .map(|o| o.probability)
        .sum();
    assert!((four_mass - SpawnWeights::default().four).abs() < 1e-9);
}

#[test]
fn test_chance_outcome_boards_hold_the_spawn() {
    let board = Board::from_rows(&[[0u64, 2], [2, 0]], 0).unwrap();
    for outcome in chance_outcomes(&board) {
        assert_eq!(
            outcome.board.get(outcome.at.x, outcome.at.y),
            Ok(outcome.value)
        );
        assert_eq!(outcome.board.free_count(), board.free_count() - 1);
    }
}

#[test]
fn test_two_ply_expansion() {
    let board = Board::from_rows(&[[2u64, 0, 0, 0], [0; 4], [0; 4], [0, 0, 0, 2]], 2).unwrap();
    let mut leaves = 0;
    for s in successors(&board) {
        let outcomes = chance_outcomes(&s.board);
        assert_eq!(outcomes.len(), 2 * s.board.free_count());
        leaves += outcomes.len();
    }
    assert!(leaves > 0);
    assert_eq!(board.free_count(), 14);
}

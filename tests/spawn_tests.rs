//! Spawn tests - random placement and spawn-state enumeration

use twenty48::core::{Board, BoardConfig, SimpleRng};
use twenty48::types::{Action, Position, Tile, TileEvent};

fn empty_board() -> Board {
    Board::new(BoardConfig::default()).unwrap()
}

fn differing_cells(a: &Board, b: &Board) -> Vec<usize> {
    a.grid()
        .cells()
        .iter()
        .zip(b.grid().cells())
        .enumerate()
        .filter(|(_, (x, y))| x != y)
        .map(|(i, _)| i)
        .collect()
}

#[test]
fn test_spawn_places_one_tile_and_reports_it() {
    let mut board = empty_board();
    let mut rng = SimpleRng::new(12345);
    let mut events = Vec::new();

    let spawn = board.spawn_tile(&mut rng, &mut events).unwrap();
    assert!(spawn.value == 2 || spawn.value == 4);
    assert_eq!(board.get(spawn.at.x, spawn.at.y).unwrap(), spawn.value);
    assert_eq!(board.free_count(), 15);
    assert_eq!(
        events,
        vec![TileEvent::Added {
            at: spawn.at,
            value: spawn.value
        }]
    );
}

#[test]
fn test_spawn_is_reproducible_per_seed() {
    let play = |seed: u32| {
        let mut board = empty_board();
        let mut rng = SimpleRng::new(seed);
        let mut events = Vec::new();
        for _ in 0..10 {
            board.spawn_tile(&mut rng, &mut events);
        }
        (board, events)
    };

    assert_eq!(play(7), play(7));
    assert_ne!(play(7).1, play(8).1);
}

#[test]
fn test_spawn_starting_tiles() {
    let mut board = Board::new(BoardConfig::new(4, 3)).unwrap();
    let mut rng = SimpleRng::new(1);
    let mut events = Vec::new();

    assert_eq!(board.spawn_starting_tiles(&mut rng, &mut events), 3);
    assert_eq!(board.free_count(), 13);
    assert_eq!(events.len(), 3);

    // Each event targets a distinct cell
    let mut cells: Vec<Position> = events
        .iter()
        .map(|e| match e {
            TileEvent::Added { at, .. } => *at,
            other => panic!("unexpected event {other:?}"),
        })
        .collect();
    cells.sort();
    cells.dedup();
    assert_eq!(cells.len(), 3);
}

#[test]
fn test_starting_tiles_can_fill_board() {
    let mut board = Board::new(BoardConfig::new(2, 4)).unwrap();
    let mut rng = SimpleRng::new(5);
    let mut events = Vec::new();

    assert_eq!(board.spawn_starting_tiles(&mut rng, &mut events), 4);
    assert!(board.is_full());
    assert_eq!(board.spawn_tile(&mut rng, &mut events), None);
    assert_eq!(events.len(), 4);
}

#[test]
fn test_zero_starting_tiles() {
    let mut board = Board::new(BoardConfig::new(4, 0)).unwrap();
    let mut rng = SimpleRng::new(5);
    assert_eq!(board.spawn_starting_tiles(&mut rng, &mut ()), 0);
    assert_eq!(board.free_count(), 16);
}

#[test]
fn test_spawn_value_odds() {
    let mut rng = SimpleRng::new(2024);
    let trials = 6000;
    let mut fours = 0;
    let mut per_cell = [0u32; 16];

    for _ in 0..trials {
        let mut board = empty_board();
        let spawn = board.spawn_tile(&mut rng, &mut ()).unwrap();
        if spawn.value == 4 {
            fours += 1;
        }
        per_cell[(spawn.at.y * 4 + spawn.at.x) as usize] += 1;
    }

    let ratio = fours as f64 / trials as f64;
    assert!((0.28..0.39).contains(&ratio), "four ratio {ratio}");
    // 375 expected per cell
    assert!(per_cell.iter().all(|&n| (250..500).contains(&n)), "{per_cell:?}");
}

#[test]
fn test_spawn_states_counts_and_single_cell_difference() {
    let board = Board::from_rows(&[[2u64, 0, 4, 0], [0, 8, 0, 0], [2, 2, 2, 2], [0, 0, 0, 16]], 2)
        .unwrap();
    let empty = board.free_count();
    assert_eq!(empty, 8);

    let states = board.spawn_states();
    assert_eq!(states.positions.len(), empty);
    assert_eq!(states.twos.len(), empty);
    assert_eq!(states.fours.len(), empty);
    assert_eq!(states.len(), 2 * empty);

    for (value, family) in [(2 as Tile, &states.twos), (4, &states.fours)] {
        for (child, at) in family.iter().zip(&states.positions) {
            let diff = differing_cells(&board, child);
            assert_eq!(diff.len(), 1);
            assert_eq!(board.get(at.x, at.y).unwrap(), 0);
            assert_eq!(child.get(at.x, at.y).unwrap(), value);
            assert_eq!(child.score(), board.score());
            assert_eq!(child.config(), board.config());
        }
    }
}

#[test]
fn test_spawn_states_positions_row_major() {
    let board = Board::from_rows(&[[0u64, 2], [0, 0]], 0).unwrap();
    let states = board.spawn_states();
    assert_eq!(
        states.positions,
        vec![Position::new(0, 0), Position::new(0, 1), Position::new(1, 1)]
    );
}

#[test]
fn test_spawn_states_are_independent() {
    let board = Board::from_rows(&[[2u64, 0], [2, 0]], 0).unwrap();
    let before = board.clone();
    let mut states = board.spawn_states();

    states.twos[0].apply_action(Action::Up, &mut ()).unwrap();
    assert_eq!(board, before);
    // Siblings share nothing with each other either
    assert_eq!(states.twos[1].get(0, 0), Ok(2));
    assert_eq!(states.twos[1].get(0, 1), Ok(2));
}

#[test]
fn test_spawn_states_full_board() {
    let board = Board::from_rows(&[[2u64, 4], [4, 2]], 0).unwrap();
    let states = board.spawn_states();
    assert!(states.twos.is_empty());
    assert!(states.fours.is_empty());
    assert!(states.is_empty());
}

#[test]
fn test_spawn_states_preserve_score() {
    let mut board = Board::from_rows(&[[2u64, 2], [0, 0]], 0).unwrap();
    board.apply_action(Action::Left, &mut ()).unwrap();
    assert_eq!(board.score(), 4);

    let states = board.spawn_states();
    assert!(states.twos.iter().chain(&states.fours).all(|b| b.score() == 4));
}

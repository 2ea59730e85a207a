//! Search-state generation on top of the rules core.
//!
//! Game-tree search alternates two kinds of nodes: the player picks an action,
//! then the game places a tile at random. This crate expands both:
//!
//! - [`successors`]: one board per valid action, without spawning
//! - [`chance_outcomes`]: every spawn outcome of a board, weighted by [`SpawnWeights`]
//!
//! All returned boards are independent deep copies; the input board is never
//! mutated, so siblings can be evaluated in any order or on any thread.
//!
//! # Example
//!
//! ```
//! use twenty48_core::Board;
//! use twenty48_engine::{chance_outcomes, successors};
//!
//! let board = Board::from_rows(&[[2u64, 2], [0, 0]], 2).unwrap();
//!
//! let moves = successors(&board);
//! assert_eq!(moves.len(), 3); // down, left, right
//!
//! for next in &moves {
//!     let total: f64 = chance_outcomes(&next.board).iter().map(|o| o.probability).sum();
//!     assert!((total - 1.0).abs() < 1e-9);
//! }
//! ```

pub mod search;

pub use search::{
    chance_outcomes, chance_outcomes_with, successor, successors, ChanceOutcome, SpawnWeights,
    Successor,
};

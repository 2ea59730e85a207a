//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the rules of the 2048 sliding-tile puzzle: the grid, move
//! validation, the slide-and-merge transition, tile spawning and the
//! enumeration of spawn outcomes. It has no dependencies on rendering, input,
//! or I/O, which makes it:
//!
//! - **Deterministic**: randomness is injected, so the same seed replays the same game
//! - **Branchable**: boards are plain owned values; search copies them with [`Board::duplicate`]
//! - **Observable**: every mutation reports ordered [`TileEvent`](types::TileEvent)s to an [`EventSink`]
//!
//! # Module Structure
//!
//! - [`grid`]: flat row-major tile storage with bounds-checked access
//! - [`board`]: score, configuration, validity, slide-merge, spawn and spawn-state enumeration
//! - [`config`]: board configuration and its validation
//! - [`events`]: the event sink capability
//! - [`rng`]: crate-owned seeded LCG implementing `rand::RngCore`
//! - [`error`]: error taxonomy (bounds, configuration, invalid action)
//!
//! # Rules
//!
//! - **Slide**: every tile travels as far as it can in the chosen direction
//! - **Merge**: two equal tiles combine into one of double value; the new value is added to the score
//! - **Merge once**: a cell that absorbed a tile during a slide cannot absorb another in the same slide
//! - **Spawn**: after a move the driver places a 2 (2/3) or a 4 (1/3) on a random empty cell
//! - **Game over**: no action changes the board
//!
//! # Example
//!
//! ```
//! use twenty48_core::{Board, BoardConfig, SimpleRng};
//! use twenty48_core::types::TileEvent;
//!
//! let mut rng = SimpleRng::new(12345);
//! let mut events: Vec<TileEvent> = Vec::new();
//!
//! // Create a board and place the starting tiles
//! let mut board = Board::new(BoardConfig::default()).unwrap();
//! board.spawn_starting_tiles(&mut rng, &mut events);
//! assert_eq!(board.free_count(), 14);
//!
//! // Play one move, then spawn
//! let action = board.valid_actions()[0];
//! board.apply_action(action, &mut events).unwrap();
//! board.spawn_tile(&mut rng, &mut events);
//!
//! // Search: enumerate every spawn outcome without touching `board`
//! let states = board.spawn_states();
//! assert_eq!(states.twos.len(), board.free_count());
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod events;
pub mod grid;
pub mod rng;

pub use twenty48_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, MoveOutcome, Spawn, SpawnStates};
pub use config::BoardConfig;
pub use error::{BoardError, ConfigError, GridError};
pub use events::EventSink;
pub use grid::Grid;
pub use rng::SimpleRng;

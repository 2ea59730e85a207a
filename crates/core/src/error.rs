//! Error types for the rules engine

use thiserror::Error;

use crate::types::{Action, Tile};

/// Grid access outside `[0, width) x [0, height)`.
///
/// This signals a caller bug, not a game condition.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("grid access out of bounds at ({x}, {y}) on a {width}x{height} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },
}

/// Rejected board configuration. The board keeps its previous state.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("grid size must be at least 1")]
    ZeroGridSize,

    #[error("grid size {grid_size} is too large")]
    GridTooLarge { grid_size: usize },

    #[error("{starting_tiles} starting tiles do not fit in {capacity} cells")]
    TooManyStartingTiles {
        starting_tiles: usize,
        capacity: usize,
    },

    #[error("board must be square: {rows} rows but row {row} has {len} cells")]
    NotSquare { rows: usize, row: usize, len: usize },

    #[error("invalid tile {value} at ({x}, {y}): must be 0 or a power of two")]
    InvalidTile { x: usize, y: usize, value: Tile },
}

/// Main error type for board operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BoardError {
    #[error("action '{0}' is not valid on the current board")]
    InvalidAction(Action),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Convenience alias for board results
pub type Result<T> = std::result::Result<T, BoardError>;

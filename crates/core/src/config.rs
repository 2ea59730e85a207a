//! Board configuration - fixed at initialization

use crate::error::ConfigError;
use crate::types::{DEFAULT_GRID_SIZE, DEFAULT_STARTING_TILES};

/// Square grid side length and the number of tiles placed at game start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardConfig {
    pub grid_size: usize,
    pub starting_tiles: usize,
}

impl BoardConfig {
    pub fn new(grid_size: usize, starting_tiles: usize) -> Self {
        Self {
            grid_size,
            starting_tiles,
        }
    }

    /// Number of cells on a board with this configuration, `None` if it overflows `usize`
    pub fn capacity(&self) -> Option<usize> {
        self.grid_size.checked_mul(self.grid_size)
    }

    /// Reject a zero-sized grid, a side whose coordinates do not fit in `i32`,
    /// or more starting tiles than cells
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::ZeroGridSize);
        }
        let too_large = ConfigError::GridTooLarge {
            grid_size: self.grid_size,
        };
        if i32::try_from(self.grid_size).is_err() {
            return Err(too_large);
        }
        let capacity = self.capacity().ok_or(too_large)?;
        if self.starting_tiles > capacity {
            return Err(ConfigError::TooManyStartingTiles {
                starting_tiles: self.starting_tiles,
                capacity,
            });
        }
        Ok(())
    }
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self::new(DEFAULT_GRID_SIZE, DEFAULT_STARTING_TILES)
    }
}

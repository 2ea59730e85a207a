//! Grid module - fixed-size 2D storage of tile values
//!
//! Uses a flat vector in row-major order (`y * width + x`). The grid has no game
//! semantics: it does not check that values are powers of two, it only guards
//! its bounds.

use std::fmt;

use crate::error::GridError;
use crate::types::{Position, Tile};

/// Flat row-major grid of tile values (0 = empty)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Grid {
    cells: Vec<Tile>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Create a zero-filled grid
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: vec![0; width * height],
            width,
            height,
        }
    }

    /// Wrap an existing row-major buffer of exactly `width * height` cells
    pub(crate) fn from_flat(cells: Vec<Tile>, width: usize, height: usize) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        Self {
            cells,
            width,
            height,
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    pub fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return None;
        }
        Some(y as usize * self.width + x as usize)
    }

    /// Inverse of [`Grid::index`]; only called with an index into `cells`, so
    /// `width` is non-zero
    #[inline]
    pub(crate) fn position(&self, index: usize) -> Position {
        Position::new((index % self.width) as i32, (index / self.width) as i32)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.index(pos.x, pos.y).is_some()
    }

    /// Value at (x, y)
    pub fn get(&self, x: i32, y: i32) -> Result<Tile, GridError> {
        self.index(x, y)
            .map(|idx| self.cells[idx])
            .ok_or_else(|| self.out_of_bounds(x, y))
    }

    /// Write `value` at (x, y)
    pub fn set(&mut self, x: i32, y: i32, value: Tile) -> Result<(), GridError> {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = value;
                Ok(())
            }
            None => Err(self.out_of_bounds(x, y)),
        }
    }

    /// Value at `pos`, or `None` when out of bounds
    #[inline]
    pub fn value_at(&self, pos: Position) -> Option<Tile> {
        self.index(pos.x, pos.y).map(|idx| self.cells[idx])
    }

    pub fn get_at(&self, pos: Position) -> Result<Tile, GridError> {
        self.get(pos.x, pos.y)
    }

    pub fn set_at(&mut self, pos: Position, value: Tile) -> Result<(), GridError> {
        self.set(pos.x, pos.y, value)
    }

    /// Reallocate to `width x height`.
    ///
    /// Values are kept by linear index up to the new length, never remapped by
    /// coordinate; new cells are 0. Only meaningful on an empty grid.
    pub fn resize(&mut self, width: usize, height: usize) {
        self.cells.resize(width * height, 0);
        self.width = width;
        self.height = height;
    }

    /// True when no cell holds 0
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&value| value != 0)
    }

    /// Every position holding `value`, in row-major order (x varies fastest)
    pub fn positions_of(&self, value: Tile) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == value)
            .map(|(idx, _)| self.position(idx))
            .collect()
    }

    pub fn count_of(&self, value: Tile) -> usize {
        self.cells.iter().filter(|&&cell| cell == value).count()
    }

    /// Largest value on the grid (0 when empty)
    pub fn max_value(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Independent deep copy with the same size and contents
    pub fn duplicate(&self) -> Grid {
        self.clone()
    }

    /// Flat row-major view of the cells
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    /// Iterate over rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> + '_ {
        // chunks(0) panics; a zero-width grid has no rows to show
        self.cells.chunks(self.width.max(1)).take(self.height)
    }

    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    fn out_of_bounds(&self, x: i32, y: i32) -> GridError {
        GridError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cell_width = self.max_value().max(1).to_string().len();
        for row in self.rows() {
            let line = row
                .iter()
                .map(|&value| match value {
                    0 => format!("{:>cell_width$}", "."),
                    v => format!("{v:>cell_width$}"),
                })
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

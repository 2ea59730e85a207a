//! Board module - the complete game state
//!
//! A `Board` owns its [`Grid`] by value together with the score and the
//! configuration it was initialized with. It validates and applies slides,
//! spawns tiles from an injected random source, and enumerates the boards
//! reachable by a spawn so that search code can branch without touching the
//! original.
//!
//! Boards are never shared: every sibling used by search is a deep copy made
//! through [`Board::duplicate`].

use std::fmt;

use arrayvec::ArrayVec;
use rand::Rng;
use tracing::{debug, trace};

use crate::config::BoardConfig;
use crate::error::{BoardError, ConfigError, Result};
use crate::events::EventSink;
use crate::grid::Grid;
use crate::types::*;

/// Summary of one applied slide
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MoveOutcome {
    /// Tiles that changed position (merged tiles included)
    pub moved: usize,
    /// Number of merges performed
    pub merges: usize,
    /// Score gained: the sum of every newly formed tile
    pub points: Score,
}

/// A tile written by [`Board::spawn_tile`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Spawn {
    pub at: Position,
    pub value: Tile,
}

/// Every board reachable by one spawn, grouped by the spawned value.
///
/// `positions[i]` is the empty cell filled in both `twos[i]` and `fours[i]`;
/// cells are listed in row-major order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpawnStates {
    pub positions: Vec<Position>,
    pub twos: Vec<Board>,
    pub fours: Vec<Board>,
}

impl SpawnStates {
    /// Boards for one spawn value (empty for anything other than 2 or 4)
    pub fn family(&self, value: Tile) -> &[Board] {
        match value {
            SPAWN_TWO => &self.twos,
            SPAWN_FOUR => &self.fours,
            _ => &[],
        }
    }

    /// Total number of boards across both families
    pub fn len(&self) -> usize {
        self.twos.len() + self.fours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.twos.is_empty() && self.fours.is_empty()
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Board {
    grid: Grid,
    grid_size: usize,
    starting_tiles: usize,
    score: Score,
}

impl Board {
    /// Create an initialized, empty board
    pub fn new(config: BoardConfig) -> Result<Self> {
        let mut board = Self::default();
        board.init(config.grid_size, config.starting_tiles)?;
        Ok(board)
    }

    /// Build a board from explicit rows of tiles.
    ///
    /// Rows must form a square and every value must be 0 or a power of two.
    /// The score starts at 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use twenty48_core::Board;
    ///
    /// let board = Board::from_rows(&[[2u64, 0], [0, 4]], 2).unwrap();
    /// assert_eq!(board.grid_size(), 2);
    /// assert_eq!(board.free_count(), 2);
    /// ```
    pub fn from_rows<R: AsRef<[Tile]>>(rows: &[R], starting_tiles: usize) -> Result<Self> {
        let size = rows.len();
        BoardConfig::new(size, starting_tiles).validate()?;

        let mut cells = Vec::with_capacity(size * size);
        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != size {
                return Err(ConfigError::NotSquare {
                    rows: size,
                    row: y,
                    len: row.len(),
                }
                .into());
            }
            for (x, &value) in row.iter().enumerate() {
                if value != 0 && !value.is_power_of_two() {
                    return Err(ConfigError::InvalidTile { x, y, value }.into());
                }
                cells.push(value);
            }
        }

        Ok(Self {
            grid: Grid::from_flat(cells, size, size),
            grid_size: size,
            starting_tiles,
            score: 0,
        })
    }

    /// Fix the configuration, reset the score and allocate a zero-filled grid.
    ///
    /// On error the board is left exactly as it was.
    pub fn init(&mut self, grid_size: usize, starting_tiles: usize) -> Result<()> {
        BoardConfig::new(grid_size, starting_tiles).validate()?;

        self.grid_size = grid_size;
        self.starting_tiles = starting_tiles;
        self.score = 0;
        self.grid.resize(grid_size, grid_size);
        self.grid.clear();

        debug!(grid_size, starting_tiles, "board initialized");
        Ok(())
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn starting_tiles(&self) -> usize {
        self.starting_tiles
    }

    pub fn config(&self) -> BoardConfig {
        BoardConfig::new(self.grid_size, self.starting_tiles)
    }

    pub fn score(&self) -> Score {
        self.score
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Tile at (x, y)
    pub fn get(&self, x: i32, y: i32) -> Result<Tile> {
        Ok(self.grid.get(x, y)?)
    }

    /// True when no cell is empty
    pub fn is_full(&self) -> bool {
        self.grid.is_full()
    }

    /// Number of empty cells
    pub fn free_count(&self) -> usize {
        self.grid.count_of(0)
    }

    pub fn max_tile(&self) -> Tile {
        self.grid.max_value()
    }

    /// Deep copy: independent grid, same configuration and score
    pub fn duplicate(&self) -> Board {
        self.clone()
    }

    /// Actions that would change the board, in Up, Down, Left, Right order.
    ///
    /// An action is valid when some occupied cell has an in-bounds neighbor in
    /// that direction which is empty or holds the same value. Pure look-ahead.
    pub fn valid_actions(&self) -> ArrayVec<Action, 4> {
        PLAYABLE_ACTIONS
            .into_iter()
            .filter(|&action| self.is_valid_action(action))
            .collect()
    }

    pub fn is_valid_action(&self, action: Action) -> bool {
        if !action.is_playable() {
            return false;
        }
        let delta = action.delta();
        let n = self.grid_size as i32;

        for x in 0..n {
            for y in 0..n {
                let tile = Position::new(x, y);
                let value = self.value(tile);
                if value == 0 {
                    continue;
                }
                match self.grid.value_at(tile.step(delta)) {
                    Some(0) => return true,
                    Some(neighbor) if neighbor == value && can_double(value) => return true,
                    _ => {}
                }
            }
        }
        false
    }

    /// No action can change the board
    pub fn is_game_over(&self) -> bool {
        self.valid_actions().is_empty()
    }

    /// Slide and merge every tile in the direction of `action`.
    ///
    /// Cells are visited column by column (`x` outer, `y` inner), both in
    /// reverse for Down and Right. Each tile walks until it meets the edge, a
    /// different tile, or a cell that already merged during this call; an
    /// equal tile that has not merged yet absorbs it. Tiles of [`MAX_TILE`]
    /// never merge. A `Moved` event is
    /// recorded for every tile that changed position. No tile is spawned.
    ///
    /// Returns [`BoardError::InvalidAction`] without touching the board when
    /// `action` is not in [`Board::valid_actions`].
    pub fn apply_action(
        &mut self,
        action: Action,
        events: &mut impl EventSink,
    ) -> Result<MoveOutcome> {
        if !self.is_valid_action(action) {
            debug!(%action, "rejected invalid action");
            return Err(BoardError::InvalidAction(action));
        }

        let delta = action.delta();
        let n = self.grid_size as i32;
        let reverse = action.scans_in_reverse();
        // Cells that already absorbed a tile during this call
        let mut merged = vec![false; self.grid.len()];
        let mut outcome = MoveOutcome::default();

        for i in 0..n {
            for j in 0..n {
                let (x, y) = if reverse { (n - 1 - i, n - 1 - j) } else { (i, j) };
                let origin = Position::new(x, y);
                let value = self.value(origin);
                if value == 0 {
                    continue;
                }

                let mut probe = origin.step(delta);
                let mut merge = false;
                while let Some(idx) = self.grid.index(probe.x, probe.y) {
                    let probed = self.grid.cells()[idx];
                    if probed == value && !merged[idx] && can_double(value) {
                        merge = true;
                        merged[idx] = true;
                        break;
                    }
                    if probed != 0 || merged[idx] {
                        probe = probe.step_back(delta);
                        break;
                    }
                    probe = probe.step(delta);
                }
                let dest = self.clamp(probe);

                if merge {
                    let doubled = value * 2;
                    self.grid.set_at(dest, doubled)?;
                    self.score = self.score.saturating_add(doubled);
                    outcome.merges += 1;
                    outcome.points = outcome.points.saturating_add(doubled);
                } else {
                    self.grid.set_at(dest, value)?;
                }

                if dest != origin {
                    self.grid.set_at(origin, 0)?;
                    outcome.moved += 1;
                    events.record(TileEvent::Moved {
                        from: origin,
                        to: dest,
                        merged: merge,
                    });
                }
            }
        }

        trace!(%action, moved = outcome.moved, merges = outcome.merges, points = outcome.points, "applied action");
        Ok(outcome)
    }

    /// The board after `action`, without spawning; `self` is untouched.
    pub fn successor(&self, action: Action) -> Result<Board> {
        let mut next = self.duplicate();
        next.apply_action(action, &mut ())?;
        Ok(next)
    }

    /// Place a 2 (probability 2/3) or a 4 (1/3) in a uniformly chosen empty cell.
    ///
    /// The value is drawn first, then the cell. Returns `None` and draws
    /// nothing when the board is full.
    pub fn spawn_tile<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        events: &mut impl EventSink,
    ) -> Option<Spawn> {
        if self.is_full() {
            return None;
        }

        let value = if rng.gen_ratio(FOUR_SPAWN_NUMERATOR, FOUR_SPAWN_DENOMINATOR) {
            SPAWN_FOUR
        } else {
            SPAWN_TWO
        };
        let free = self.grid.positions_of(0);
        let at = free[rng.gen_range(0..free.len())];

        // `at` came from the grid's own scan, so the write is in bounds
        self.grid.set_at(at, value).ok()?;
        events.record(TileEvent::Added { at, value });
        trace!(%at, value, "spawned tile");

        Some(Spawn { at, value })
    }

    /// Call [`Board::spawn_tile`] `starting_tiles` times; returns how many landed
    pub fn spawn_starting_tiles<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        events: &mut impl EventSink,
    ) -> usize {
        let mut landed = 0;
        for _ in 0..self.starting_tiles {
            if self.spawn_tile(rng, events).is_some() {
                landed += 1;
            }
        }
        landed
    }

    /// One sibling with a 2 and one with a 4 for every empty cell.
    ///
    /// Score and all other cells are unchanged; a full board yields two empty
    /// families. No weighting is attached here.
    pub fn spawn_states(&self) -> SpawnStates {
        let positions = self.grid.positions_of(0);
        let place = |value: Tile| -> Vec<Board> {
            positions
                .iter()
                .filter_map(|&at| {
                    let mut child = self.duplicate();
                    child.grid.set_at(at, value).ok()?;
                    Some(child)
                })
                .collect()
        };

        let twos = place(SPAWN_TWO);
        let fours = place(SPAWN_FOUR);
        SpawnStates {
            positions,
            twos,
            fours,
        }
    }

    /// Value of an in-bounds cell; out-of-bounds reads as empty
    #[inline]
    fn value(&self, pos: Position) -> Tile {
        self.grid.value_at(pos).unwrap_or(0)
    }

    /// Pull a probe that walked off the grid back onto the last cell of its path
    fn clamp(&self, pos: Position) -> Position {
        let max = self.grid_size as i32 - 1;
        Position::new(pos.x.clamp(0, max), pos.y.clamp(0, max))
    }
}

/// Whether doubling `value` stays a representable power of two
#[inline]
fn can_double(value: Tile) -> bool {
    value < MAX_TILE
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "score: {}", self.score)?;
        write!(f, "{}", self.grid)
    }
}

//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (rules engine, search, headless runners, host bindings).
//!
//! # Coordinates
//!
//! The grid origin is the top-left cell. `x` grows to the right and `y` grows
//! downward, so "up" is a negative `y` step.
//!
//! # Actions
//!
//! | Action | Code | Direction |
//! |--------|------|-----------|
//! | `Invalid` | 0 | (0, 0) |
//! | `Up` | 1 | (0, -1) |
//! | `Down` | 2 | (0, 1) |
//! | `Left` | 3 | (-1, 0) |
//! | `Right` | 4 | (1, 0) |
//!
//! # Spawn Odds
//!
//! A spawned tile is a 4 with probability `FOUR_SPAWN_NUMERATOR / FOUR_SPAWN_DENOMINATOR`
//! (1/3) and a 2 otherwise.
//!
//! # Examples
//!
//! ```
//! use twenty48_types::{Action, Position, DEFAULT_GRID_SIZE};
//!
//! let action = Action::from_str("left").unwrap();
//! assert_eq!(action, Action::Left);
//! assert_eq!(action.delta(), (-1, 0));
//!
//! let next = Position::new(2, 1).step(action.delta());
//! assert_eq!(next, Position::new(1, 1));
//!
//! assert_eq!(DEFAULT_GRID_SIZE, 4);
//! ```

use std::fmt;

/// A tile value: 0 for an empty cell, otherwise a positive power of two.
pub type Tile = u64;

/// Accumulated score (sum of every merged tile value).
pub type Score = u64;

/// Default board side length (4x4)
pub const DEFAULT_GRID_SIZE: usize = 4;

/// Default number of tiles placed by `spawn_starting_tiles`
pub const DEFAULT_STARTING_TILES: usize = 2;

/// Smaller value a spawn can produce
pub const SPAWN_TWO: Tile = 2;

/// Larger value a spawn can produce
pub const SPAWN_FOUR: Tile = 4;

/// Largest tile value. Two of these never merge, since their sum does not fit in a `Tile`.
pub const MAX_TILE: Tile = 1 << 63;

/// Chance of spawning a 4 (numerator)
pub const FOUR_SPAWN_NUMERATOR: u32 = 1;

/// Chance of spawning a 4 (denominator)
pub const FOUR_SPAWN_DENOMINATOR: u32 = 3;

/// The four playable actions in the order they are reported by move validation.
pub const PLAYABLE_ACTIONS: [Action; 4] = [Action::Up, Action::Down, Action::Left, Action::Right];

/// Player actions that slide the board
///
/// `Invalid` is an explicit sentinel with a zero direction vector. It is never
/// reported as valid and applying it is always rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Action {
    #[default]
    Invalid,
    Up,
    Down,
    Left,
    Right,
}

impl Action {
    /// Unit direction vector `(dx, dy)` for this action
    ///
    /// # Examples
    ///
    /// ```
    /// use twenty48_types::Action;
    ///
    /// assert_eq!(Action::Up.delta(), (0, -1));
    /// assert_eq!(Action::Down.delta(), (0, 1));
    /// assert_eq!(Action::Left.delta(), (-1, 0));
    /// assert_eq!(Action::Right.delta(), (1, 0));
    /// assert_eq!(Action::Invalid.delta(), (0, 0));
    /// ```
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Action::Invalid => (0, 0),
            Action::Up => (0, -1),
            Action::Down => (0, 1),
            Action::Left => (-1, 0),
            Action::Right => (1, 0),
        }
    }

    /// Whether the slide pass visits cells starting from the far edge.
    ///
    /// Down and Right scan in reverse coordinate order so the tile nearest the
    /// destination edge settles first.
    pub fn scans_in_reverse(&self) -> bool {
        matches!(self, Action::Down | Action::Right)
    }

    pub fn is_playable(&self) -> bool {
        !matches!(self, Action::Invalid)
    }

    /// Numeric code used by host bindings (0 = invalid, 1..=4 = up, down, left, right)
    pub fn code(&self) -> u8 {
        match self {
            Action::Invalid => 0,
            Action::Up => 1,
            Action::Down => 2,
            Action::Left => 3,
            Action::Right => 4,
        }
    }

    /// Inverse of [`Action::code`]; unknown codes map to `Invalid`
    ///
    /// # Examples
    ///
    /// ```
    /// use twenty48_types::Action;
    ///
    /// assert_eq!(Action::from_code(3), Action::Left);
    /// assert_eq!(Action::from_code(9), Action::Invalid);
    /// ```
    pub fn from_code(code: u8) -> Self {
        match code {
            1 => Action::Up,
            2 => Action::Down,
            3 => Action::Left,
            4 => Action::Right,
            _ => Action::Invalid,
        }
    }

    /// Parse action from string (case-insensitive)
    ///
    /// Accepts plain names, single letters and the `ACTION_*` labels.
    ///
    /// # Examples
    ///
    /// ```
    /// use twenty48_types::Action;
    ///
    /// assert_eq!(Action::from_str("up"), Some(Action::Up));
    /// assert_eq!(Action::from_str("ACTION_RIGHT"), Some(Action::Right));
    /// assert_eq!(Action::from_str("d"), Some(Action::Down));
    /// assert_eq!(Action::from_str("sideways"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" | "action_up" => Some(Action::Up),
            "down" | "d" | "action_down" => Some(Action::Down),
            "left" | "l" | "action_left" => Some(Action::Left),
            "right" | "r" | "action_right" => Some(Action::Right),
            "invalid" | "invalid_action" => Some(Action::Invalid),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Invalid => "invalid",
            Action::Up => "up",
            Action::Down => "down",
            Action::Left => "left",
            Action::Right => "right",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A cell coordinate on the grid
///
/// Signed so that probes may step past the edges before being bounds-checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position one step along `(dx, dy)`
    pub fn step(self, (dx, dy): (i32, i32)) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Position one step against `(dx, dy)`
    pub fn step_back(self, (dx, dy): (i32, i32)) -> Self {
        Self {
            x: self.x - dx,
            y: self.y - dy,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Semantic record of a tile change, emitted in the order the change happened.
///
/// - **Moved**: a tile slid from `from` to `to`. When `merged` is set the tile
///   disappeared into an equal tile at `to`, which now holds the doubled value.
/// - **Added**: a new tile with `value` appeared at `at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TileEvent {
    Moved {
        from: Position,
        to: Position,
        merged: bool,
    },
    Added {
        at: Position,
        value: Tile,
    },
}

impl TileEvent {
    pub fn is_merge(&self) -> bool {
        matches!(self, TileEvent::Moved { merged: true, .. })
    }
}

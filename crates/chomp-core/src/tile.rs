//! Tile states, coordinates, and arena indices.

use crate::direction::Direction;
use std::fmt;

/// Flat row-major index of a tile inside a tile arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(pub u32);

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for TileId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Integer tile coordinate. Row 0 is the top of the maze.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileCoord {
    /// Row index.
    pub row: i32,
    /// Column index.
    pub col: i32,
}

impl TileCoord {
    /// Create a coordinate from `(row, col)`.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The coordinate one step away in `direction`, without any bounds or
    /// wrap handling.
    pub fn step(self, direction: Direction) -> Self {
        let (dr, dc) = direction.offset();
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// Manhattan distance, ignoring walls and wrap.
    pub fn manhattan(self, other: TileCoord) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for TileCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for TileCoord {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

/// What occupies a tile.
///
/// Passability is fixed for the lifetime of an episode. Pellet states may be
/// consumed between ticks, which turns them into [`TileState::Empty`] without
/// changing the maze topology.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TileState {
    /// Solid wall.
    #[default]
    Wall,
    /// Ghost-house door: ghosts may pass, the agent may not.
    Gate,
    /// Open floor.
    Empty,
    /// Floor holding a regular pellet.
    Pellet,
    /// Floor holding a power pellet.
    PowerPellet,
}

impl TileState {
    /// Whether the agent may occupy or move through this tile.
    pub fn is_passable(self) -> bool {
        matches!(
            self,
            TileState::Empty | TileState::Pellet | TileState::PowerPellet
        )
    }

    /// Whether this tile holds any kind of pellet.
    pub fn is_pellet(self) -> bool {
        matches!(self, TileState::Pellet | TileState::PowerPellet)
    }
}

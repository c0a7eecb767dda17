//! Cardinal movement directions and agent-relative rotations.

use std::fmt;

/// Cardinal direction on the maze grid.
///
/// Declaration order is significant: [`Direction::ALL`] is the order in which
/// graph edges are stored and search frontiers are seeded, so it is also the
/// tie-break order for every query that has to pick between equally good
/// directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Direction {
    /// Towards row 0.
    Up = 0,
    /// Towards the last row.
    Down = 1,
    /// Towards column 0.
    Left = 2,
    /// Towards the last column.
    Right = 3,
}

impl Direction {
    /// All directions in canonical order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Rotate 90° counter-clockwise (the direction on the agent's left).
    pub fn left(self) -> Self {
        match self {
            Direction::Up => Direction::Left,
            Direction::Left => Direction::Down,
            Direction::Down => Direction::Right,
            Direction::Right => Direction::Up,
        }
    }

    /// Rotate 90° clockwise (the direction on the agent's right).
    pub fn right(self) -> Self {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }

    /// Rotate 180°.
    pub fn behind(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns the `(row_offset, col_offset)` of one step in this direction.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Position of this direction in [`Direction::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        };
        f.write_str(name)
    }
}

/// A direction expressed relative to an agent's current facing.
///
/// [`RelativeDirection::ALL`] fixes the order of every per-direction feature
/// block and of the decision policy's output array: index 0 is forward,
/// 1 is left, 2 is right and 3 is behind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum RelativeDirection {
    /// Keep the current facing.
    Forward = 0,
    /// Turn left.
    Left = 1,
    /// Turn right.
    Right = 2,
    /// Reverse.
    Behind = 3,
}

impl RelativeDirection {
    /// All relative directions in feature order.
    pub const ALL: [RelativeDirection; 4] = [
        RelativeDirection::Forward,
        RelativeDirection::Left,
        RelativeDirection::Right,
        RelativeDirection::Behind,
    ];

    /// Map to an absolute direction given the agent's `facing`.
    pub fn resolve(self, facing: Direction) -> Direction {
        match self {
            RelativeDirection::Forward => facing,
            RelativeDirection::Left => facing.left(),
            RelativeDirection::Right => facing.right(),
            RelativeDirection::Behind => facing.behind(),
        }
    }

    /// Look up the relative direction at `index` in [`RelativeDirection::ALL`].
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Position of this direction in [`RelativeDirection::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for RelativeDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RelativeDirection::Forward => "forward",
            RelativeDirection::Left => "left",
            RelativeDirection::Right => "right",
            RelativeDirection::Behind => "behind",
        };
        f.write_str(name)
    }
}

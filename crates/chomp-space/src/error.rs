//! Error types for grid and graph operations.

use chomp_core::{TileCoord, TileState};

/// Errors arising from grid construction, tile mutation, or graph lookups.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SpaceError {
    /// Attempted to construct a grid with zero tiles.
    #[error("grid must have at least one tile")]
    EmptyGrid,

    /// A grid dimension does not fit the coordinate type.
    #[error("{name} = {value} exceeds maximum {max}")]
    DimensionTooLarge {
        /// Which dimension.
        name: &'static str,
        /// The requested size.
        value: usize,
        /// The largest accepted size.
        max: usize,
    },

    /// Input rows have different lengths.
    #[error("row {row} has {found} tiles, expected {expected}")]
    RaggedRows {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// A coordinate lies outside the grid.
    #[error("coordinate {coord} out of bounds [0, {rows}) x [0, {cols})")]
    CoordOutOfBounds {
        /// The offending coordinate.
        coord: TileCoord,
        /// Grid rows.
        rows: u32,
        /// Grid columns.
        cols: u32,
    },

    /// A tile mutation would turn floor into wall or the reverse.
    #[error("tile {coord} cannot change from {from:?} to {to:?}: passability is fixed")]
    PassabilityChange {
        /// The tile being mutated.
        coord: TileCoord,
        /// Current state.
        from: TileState,
        /// Requested state.
        to: TileState,
    },

    /// The tile is not a node of the maze graph (it is a wall or gate).
    #[error("tile {coord} is not part of the maze graph")]
    NotInGraph {
        /// The offending coordinate.
        coord: TileCoord,
    },

    /// A maze graph cannot be built over a grid without floor.
    #[error("grid has no passable tiles")]
    NoPassableTiles,
}

//! Row-major arena of tile states.

use crate::edge::EdgeBehavior;
use crate::error::SpaceError;
use chomp_core::{Direction, TileCoord, TileId, TileState};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// A rectangular maze of tiles stored as a flat row-major arena.
///
/// Tile `(row, col)` lives at [`TileId`] `row * cols + col`. The grid owns
/// tile *states*; entity positions are kept elsewhere. Passability is fixed
/// once the grid is built: [`set_state`](Self::set_state) only accepts
/// floor-to-floor changes such as eating a pellet, so the layout
/// fingerprint is computed once at construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TileGrid {
    rows: u32,
    cols: u32,
    edge: EdgeBehavior,
    tiles: Vec<TileState>,
    pellets: usize,
    fingerprint: u64,
}

impl TileGrid {
    /// Maximum dimension size: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Maximum tile count: tile and node ids are `u32`.
    pub const MAX_TILES: usize = u32::MAX as usize;

    /// Create a grid of `rows * cols` wall tiles.
    ///
    /// # Examples
    ///
    /// ```
    /// use chomp_core::{TileCoord, TileState};
    /// use chomp_space::{EdgeBehavior, TileGrid};
    ///
    /// let grid = TileGrid::new(4, 6, EdgeBehavior::Absorb).unwrap();
    /// assert_eq!(grid.tile_count(), 24);
    /// assert_eq!(grid.state(TileCoord::new(0, 0)).unwrap(), TileState::Wall);
    /// ```
    pub fn new(rows: u32, cols: u32, edge: EdgeBehavior) -> Result<Self, SpaceError> {
        if rows == 0 || cols == 0 {
            return Err(SpaceError::EmptyGrid);
        }
        Self::check_dim("rows", rows as usize)?;
        Self::check_dim("cols", cols as usize)?;
        let len = Self::check_count(rows as usize, cols as usize)?;
        Ok(Self::assemble(rows, cols, edge, vec![TileState::Wall; len]))
    }

    /// Build a grid from rows of tile states, top row first.
    ///
    /// Fails on empty input or rows of differing length; malformed layouts
    /// are rejected here rather than surfacing later during queries.
    pub fn from_rows(rows: Vec<Vec<TileState>>, edge: EdgeBehavior) -> Result<Self, SpaceError> {
        let expected = rows.first().map(Vec::len).unwrap_or(0);
        if rows.is_empty() || expected == 0 {
            return Err(SpaceError::EmptyGrid);
        }
        Self::check_dim("rows", rows.len())?;
        Self::check_dim("cols", expected)?;
        let len = Self::check_count(rows.len(), expected)?;
        let mut tiles = Vec::with_capacity(len);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != expected {
                return Err(SpaceError::RaggedRows {
                    row: i,
                    expected,
                    found: row.len(),
                });
            }
            tiles.extend_from_slice(row);
        }
        Ok(Self::assemble(rows.len() as u32, expected as u32, edge, tiles))
    }

    fn assemble(rows: u32, cols: u32, edge: EdgeBehavior, tiles: Vec<TileState>) -> Self {
        let pellets = tiles.iter().filter(|t| t.is_pellet()).count();
        let fingerprint = Self::fingerprint(rows, cols, edge, &tiles);
        Self {
            rows,
            cols,
            edge,
            tiles,
            pellets,
            fingerprint,
        }
    }

    fn check_dim(name: &'static str, value: usize) -> Result<(), SpaceError> {
        if value > Self::MAX_DIM as usize {
            return Err(SpaceError::DimensionTooLarge {
                name,
                value,
                max: Self::MAX_DIM as usize,
            });
        }
        Ok(())
    }

    fn check_count(rows: usize, cols: usize) -> Result<usize, SpaceError> {
        match rows.checked_mul(cols) {
            Some(len) if len <= Self::MAX_TILES => Ok(len),
            _ => Err(SpaceError::DimensionTooLarge {
                name: "tiles",
                value: rows.saturating_mul(cols),
                max: Self::MAX_TILES,
            }),
        }
    }

    fn fingerprint(rows: u32, cols: u32, edge: EdgeBehavior, tiles: &[TileState]) -> u64 {
        let mut hasher = DefaultHasher::new();
        rows.hash(&mut hasher);
        cols.hash(&mut hasher);
        edge.hash(&mut hasher);
        for tile in tiles {
            tile.is_passable().hash(&mut hasher);
        }
        hasher.finish()
    }

    /// Number of rows.
    pub fn rows(&self) -> u32 {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> u32 {
        self.cols
    }

    /// Edge behavior.
    pub fn edge_behavior(&self) -> EdgeBehavior {
        self.edge
    }

    /// Total number of tiles.
    pub fn tile_count(&self) -> usize {
        self.tiles.len()
    }

    /// Number of tiles still holding a pellet or power pellet.
    pub fn pellets_remaining(&self) -> usize {
        self.pellets
    }

    /// Arena index of `coord`.
    pub fn tile_id(&self, coord: TileCoord) -> Result<TileId, SpaceError> {
        if coord.row < 0
            || coord.row >= self.rows as i32
            || coord.col < 0
            || coord.col >= self.cols as i32
        {
            return Err(SpaceError::CoordOutOfBounds {
                coord,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(TileId(coord.row as u32 * self.cols + coord.col as u32))
    }

    /// Coordinate of an arena index.
    pub fn coord_of(&self, id: TileId) -> TileCoord {
        TileCoord::new((id.0 / self.cols) as i32, (id.0 % self.cols) as i32)
    }

    /// State of the tile at `coord`.
    pub fn state(&self, coord: TileCoord) -> Result<TileState, SpaceError> {
        self.tile_id(coord).map(|id| self.tiles[id.0 as usize])
    }

    /// State of the tile at an arena index.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not an index of this grid.
    pub fn state_at(&self, id: TileId) -> TileState {
        self.tiles[id.0 as usize]
    }

    /// Whether `coord` is inside the grid and passable.
    pub fn is_passable(&self, coord: TileCoord) -> bool {
        self.state(coord).is_ok_and(TileState::is_passable)
    }

    /// The tile one step from `coord` in `direction`, honouring the edge
    /// behavior. `None` when the step leaves an absorbing grid.
    pub fn neighbour(&self, coord: TileCoord, direction: Direction) -> Option<TileCoord> {
        let next = coord.step(direction);
        let row = self.edge.resolve_axis(next.row, self.rows)?;
        let col = self.edge.resolve_axis(next.col, self.cols)?;
        Some(TileCoord::new(row, col))
    }

    /// Replace the state of a tile, returning the previous state.
    ///
    /// Rejects any change that alters passability: eating a pellet is
    /// allowed, turning floor into wall is not.
    pub fn set_state(&mut self, coord: TileCoord, state: TileState) -> Result<TileState, SpaceError> {
        let id = self.tile_id(coord)?;
        let slot = &mut self.tiles[id.0 as usize];
        let previous = *slot;
        if previous.is_passable() != state.is_passable() {
            return Err(SpaceError::PassabilityChange {
                coord,
                from: previous,
                to: state,
            });
        }
        *slot = state;
        match (previous.is_pellet(), state.is_pellet()) {
            (true, false) => self.pellets -= 1,
            (false, true) => self.pellets += 1,
            _ => {}
        }
        Ok(previous)
    }

    /// Eat whatever pellet sits at `coord`. Returns the eaten state, or
    /// `None` if the tile held no pellet.
    pub fn consume(&mut self, coord: TileCoord) -> Result<Option<TileState>, SpaceError> {
        if !self.state(coord)?.is_pellet() {
            return Ok(None);
        }
        self.set_state(coord, TileState::Empty).map(Some)
    }

    /// Hash of the grid's dimensions and passability.
    ///
    /// Eating pellets leaves it unchanged; any layout that would produce a
    /// different [`MazeGraph`](crate::MazeGraph) almost surely changes it.
    /// Computed at construction, so this is O(1).
    pub fn layout_fingerprint(&self) -> u64 {
        self.fingerprint
    }

    /// All tiles with their coordinates, in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (TileCoord, TileState)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .map(move |(i, &s)| (self.coord_of(TileId(i as u32)), s))
    }
}

//! Read-only view of ghost positions.

use chomp_core::{Entity, TileCoord};

/// Answers "is a live ghost on this tile?" for the current tick.
///
/// Implemented for entity slices, which is what a world snapshot hands out.
/// Tests and tools can implement it over anything that knows ghost tiles.
pub trait GhostView {
    /// Whether a ghost occupies `coord`.
    fn ghost_at(&self, coord: TileCoord) -> bool;
}

impl GhostView for [Entity] {
    fn ghost_at(&self, coord: TileCoord) -> bool {
        self.iter().any(|e| e.is_ghost() && e.tile == coord)
    }
}

impl GhostView for Vec<Entity> {
    fn ghost_at(&self, coord: TileCoord) -> bool {
        self.as_slice().ghost_at(coord)
    }
}

impl GhostView for [TileCoord] {
    fn ghost_at(&self, coord: TileCoord) -> bool {
        self.contains(&coord)
    }
}

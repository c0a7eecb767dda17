//! What the tick behavior needs from the surrounding game.

use chomp_core::{Direction, Entity, EntityId};
use chomp_space::TileGrid;

/// Read access to the live maze plus the one command the agent may issue.
///
/// Implemented by the game's grid model. Tile states and entity positions
/// are read fresh on every tick; nothing here is cached across ticks.
pub trait MazeWorld {
    /// Live tile states.
    fn tiles(&self) -> &TileGrid;

    /// Live entity snapshot: the agent and every ghost.
    fn entities(&self) -> &[Entity];

    /// Look up one entity.
    fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities().iter().find(|e| e.id == id)
    }

    /// Whether `entity` may step in `direction`.
    ///
    /// Defaults to "the neighbouring tile is passable".
    fn can_move(&self, entity: &Entity, direction: Direction) -> bool {
        let tiles = self.tiles();
        tiles
            .neighbour(entity.tile, direction)
            .is_some_and(|next| tiles.is_passable(next))
    }

    /// Pellets and power pellets left.
    fn pellets_remaining(&self) -> usize {
        self.tiles().pellets_remaining()
    }

    /// Current score.
    fn score(&self) -> i64;

    /// Remove `agent` from play.
    fn kill(&mut self, agent: EntityId);
}

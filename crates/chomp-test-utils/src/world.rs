//! In-memory maze world for driving tick behaviors in tests.

use crate::fixtures::{parse_maze, FixtureError, ParsedMaze};
use chomp_agent::MazeWorld;
use chomp_core::{Direction, Entity, EntityId, TileCoord, TileState};
use chomp_space::{EdgeBehavior, TileGrid};

/// Score for eating a pellet.
pub const PELLET_POINTS: i64 = 10;
/// Score for eating a power pellet.
pub const POWER_PELLET_POINTS: i64 = 50;

/// A [`MazeWorld`] backed by a tile grid and an entity list.
///
/// Movement is deliberately minimal: [`step`](Self::step) moves one entity
/// one tile and eats what it lands on. Kill requests are recorded, not
/// acted on.
#[derive(Clone, Debug)]
pub struct MockWorld {
    tiles: TileGrid,
    entities: Vec<Entity>,
    score: i64,
    killed: Vec<EntityId>,
}

impl MockWorld {
    pub fn new(maze: ParsedMaze) -> Self {
        Self {
            tiles: maze.tiles,
            entities: maze.entities,
            score: 0,
            killed: Vec::new(),
        }
    }

    /// Parse an ASCII fixture with absorbing edges.
    pub fn from_ascii(text: &str) -> Result<Self, FixtureError> {
        parse_maze(text, EdgeBehavior::Absorb).map(Self::new)
    }

    pub fn tiles_mut(&mut self) -> &mut TileGrid {
        &mut self.tiles
    }

    pub fn set_score(&mut self, score: i64) {
        self.score = score;
    }

    /// Kill requests received so far, in order.
    pub fn killed(&self) -> &[EntityId] {
        &self.killed
    }

    pub fn is_killed(&self, id: EntityId) -> bool {
        self.killed.contains(&id)
    }

    /// Move an entity to `tile` without any checks.
    pub fn place(&mut self, id: EntityId, tile: TileCoord) {
        if let Some(e) = self.entities.iter_mut().find(|e| e.id == id) {
            e.tile = tile;
        }
    }

    pub fn set_facing(&mut self, id: EntityId, facing: Direction) {
        if let Some(e) = self.entities.iter_mut().find(|e| e.id == id) {
            e.facing = facing;
        }
    }

    /// Step an entity one tile. Returns `false` (and only turns it) when
    /// the way is blocked. The agent eats pellets it lands on.
    pub fn step(&mut self, id: EntityId, direction: Direction) -> bool {
        let Some(entity) = self.entity(id).copied() else {
            return false;
        };
        self.set_facing(id, direction);
        if !self.can_move(&entity, direction) {
            return false;
        }
        let Some(next) = self.tiles.neighbour(entity.tile, direction) else {
            return false;
        };
        self.place(id, next);
        if !entity.is_ghost() {
            match self.tiles.consume(next) {
                Ok(Some(TileState::PowerPellet)) => self.score += POWER_PELLET_POINTS,
                Ok(Some(_)) => self.score += PELLET_POINTS,
                _ => {}
            }
        }
        true
    }
}

impl MazeWorld for MockWorld {
    fn tiles(&self) -> &TileGrid {
        &self.tiles
    }

    fn entities(&self) -> &[Entity] {
        &self.entities
    }

    fn score(&self) -> i64 {
        self.score
    }

    fn kill(&mut self, agent: EntityId) {
        self.killed.push(agent);
    }
}

//! Mobile actors: the agent and the ghosts.

use crate::direction::Direction;
use crate::tile::TileCoord;
use std::fmt;

/// Identifies an entity within a maze.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(pub u32);

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for EntityId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// The kind of a mobile actor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// The pellet-eating agent driven by a decision policy.
    Pacman,
    /// A pursuing ghost.
    Ghost,
}

/// A mobile actor and where it currently stands.
///
/// Positions are owned by the movement executor and change between ticks;
/// sensing code reads them fresh on every query and never keeps a copy
/// across ticks.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Entity {
    /// Unique identifier.
    pub id: EntityId,
    /// Agent or ghost.
    pub kind: EntityKind,
    /// Current tile.
    pub tile: TileCoord,
    /// Current facing.
    pub facing: Direction,
}

impl Entity {
    /// Create a ghost at `tile`, facing up.
    pub fn ghost(id: u32, tile: TileCoord) -> Self {
        Self {
            id: EntityId(id),
            kind: EntityKind::Ghost,
            tile,
            facing: Direction::Up,
        }
    }

    /// Create a pacman at `tile` with the given facing.
    pub fn pacman(id: u32, tile: TileCoord, facing: Direction) -> Self {
        Self {
            id: EntityId(id),
            kind: EntityKind::Pacman,
            tile,
            facing,
        }
    }

    /// Whether this entity is a ghost.
    pub fn is_ghost(&self) -> bool {
        self.kind == EntityKind::Ghost
    }
}

//! Chomp: maze sensing and per-tick decision making for Pac-Man-style games.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! Chomp sub-crates. For most users, adding `chomp` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use chomp::prelude::*;
//!
//! // One corridor: pellet, floor, start, floor, power pellet.
//! use chomp::types::TileState::{Empty as E, Pellet as D, PowerPellet as O};
//! let tiles = TileGrid::from_rows(vec![vec![D, E, E, E, O]], EdgeBehavior::Absorb).unwrap();
//! let graph = MazeGraph::build(&tiles).unwrap();
//! let ghosts: &[Entity] = &[];
//!
//! let finder = PathFinder::new(&graph, &tiles, ghosts).unwrap();
//! let start = TileCoord::new(0, 2);
//! assert_eq!(finder.distance_to_nearest_pellet(start).unwrap(), Distance::hops(2));
//! assert_eq!(finder.distance_to_nearest_ghost(start).unwrap(), Distance::UNREACHABLE);
//!
//! let bearing = finder.nearest_power_pellet(start).unwrap();
//! assert_eq!(bearing.direction, Some(Direction::Right));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `chomp-core` | Directions, tiles, entities, distances |
//! | [`space`] | `chomp-space` | Tile grid and the walkable-tile graph |
//! | [`sense`] | `chomp-sense` | Path-finding sensor queries |
//! | [`agent`] | `chomp-agent` | Feature assembly, watchdog, tick behavior |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core vocabulary (`chomp-core`).
///
/// [`types::Direction`], [`types::RelativeDirection`], [`types::TileState`],
/// [`types::Entity`] and the hop-count [`types::Distance`].
pub use chomp_core as types;

/// Maze storage and topology (`chomp-space`).
///
/// The mutable [`space::TileGrid`] and the immutable [`space::MazeGraph`]
/// built from it.
pub use chomp_space as space;

/// Sensor queries (`chomp-sense`).
///
/// [`sense::PathFinder`] answers pellet, ghost, power-pellet and threat
/// queries against one tick's maze state.
pub use chomp_sense as sense;

/// Agent tick loop (`chomp-agent`).
///
/// [`agent::TickBehavior`] combines the sensors with a
/// [`agent::DecisionPolicy`] and the no-progress [`agent::Watchdog`].
pub use chomp_agent as agent;

/// Common imports for typical Chomp usage.
///
/// ```rust
/// use chomp::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use chomp_core::{
        Direction, Distance, Entity, EntityId, EntityKind, RelativeDirection, TileCoord, TileState,
    };

    // Space
    pub use chomp_space::{EdgeBehavior, MazeGraph, SpaceError, TileGrid};

    // Sensors
    pub use chomp_sense::{PathFinder, PowerPelletBearing, SenseError, ThreatProbe};

    // Agent
    pub use chomp_agent::{
        DecisionPolicy, FeatureKind, FeatureVector, MazeWorld, PolicyError, PolicyOutput,
        SensorConfig, TickBehavior, TickError, TickOutcome,
    };
}

//! Per-tick sensing and decision making for maze agents.
//!
//! A [`TickBehavior`] owns one agent's [`SensorAssembler`], [`Watchdog`] and
//! [`DecisionPolicy`]. Every tick it reads the live [`MazeWorld`], turns it
//! into a [`FeatureVector`] laid out by the configured [`FeatureLayout`],
//! and maps the policy's answer to a [`Direction`](chomp_core::Direction).
//!
//! ```
//! use std::sync::Arc;
//! use chomp_agent::{
//!     DecisionPolicy, FeatureVector, MazeWorld, PolicyError, PolicyOutput, SensorConfig,
//!     TickBehavior, TickOutcome,
//! };
//! use chomp_core::{Direction, Entity, EntityId, TileCoord, TileState::{Empty as E, Pellet as P}};
//! use chomp_space::{EdgeBehavior, MazeGraph, TileGrid};
//!
//! struct Line { tiles: TileGrid, entities: Vec<Entity> }
//!
//! impl MazeWorld for Line {
//!     fn tiles(&self) -> &TileGrid { &self.tiles }
//!     fn entities(&self) -> &[Entity] { &self.entities }
//!     fn score(&self) -> i64 { 0 }
//!     fn kill(&mut self, _agent: EntityId) {}
//! }
//!
//! // Heads for whichever open direction has the nearest pellet.
//! struct Greedy;
//!
//! impl DecisionPolicy for Greedy {
//!     fn decide(&mut self, features: &FeatureVector) -> Result<PolicyOutput, PolicyError> {
//!         let one_hot = &features.as_slice()[4..8];
//!         Ok(PolicyOutput::Scores(one_hot.to_vec()))
//!     }
//! }
//!
//! let tiles = TileGrid::from_rows(vec![vec![P, E, E, E, E]], EdgeBehavior::Absorb).unwrap();
//! let graph = Arc::new(MazeGraph::build(&tiles).unwrap());
//! let mut world = Line {
//!     tiles,
//!     entities: vec![Entity::pacman(0, TileCoord::new(0, 3), Direction::Right)],
//! };
//!
//! let mut agent = TickBehavior::new(EntityId(0), graph, SensorConfig::tournament(), Greedy).unwrap();
//! assert_eq!(agent.tick(&mut world).unwrap(), TickOutcome::Move(Direction::Left));
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod assembler;
pub mod behavior;
pub mod config;
pub mod error;
pub mod features;
pub mod policy;
pub mod watchdog;
pub mod world;

pub use assembler::SensorAssembler;
pub use behavior::{AgentState, TickBehavior, TickOutcome};
pub use config::{ConfigError, SensorConfig, WatchdogConfig};
pub use error::TickError;
pub use features::{FeatureKind, FeatureLayout, FeatureVector};
pub use policy::{argmax, DecisionPolicy, PolicyError, PolicyOutput};
pub use watchdog::{Watchdog, WatchdogVerdict};
pub use world::MazeWorld;

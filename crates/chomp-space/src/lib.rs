//! Tile storage and the static maze graph for chomp.
//!
//! [`TileGrid`] is the arena of tile states the game mutates between ticks
//! (pellets get eaten). [`MazeGraph`] is the adjacency relation over its
//! passable tiles, built once per maze layout and shared read-only by every
//! sensor query afterwards.
//!
//! # Edge handling
//!
//! Grids either stop at their border ([`EdgeBehavior::Absorb`]) or wrap
//! around like the side tunnels of a classic maze ([`EdgeBehavior::Wrap`]).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod edge;
pub mod error;
pub mod graph;
pub mod grid;

#[cfg(test)]
pub(crate) mod compliance;

pub use edge::EdgeBehavior;
pub use error::SpaceError;
pub use graph::{Edge, MazeGraph, NodeId};
pub use grid::TileGrid;

//! Core types for the chomp maze sensing framework.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! vocabulary shared by every other crate in the workspace: movement
//! directions and their relative rotations, tile states and coordinates,
//! entities, and the hop-count [`Distance`] with its unreachable sentinel.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod distance;
pub mod entity;
pub mod tile;

pub use direction::{Direction, RelativeDirection};
pub use distance::Distance;
pub use entity::{Entity, EntityId, EntityKind};
pub use tile::{TileCoord, TileId, TileState};

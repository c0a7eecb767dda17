//! Path-finding sensor queries over a maze graph.
//!
//! [`PathFinder`] bundles a built [`MazeGraph`](chomp_space::MazeGraph), the
//! live [`TileGrid`](chomp_space::TileGrid) and the live entity snapshot for
//! one tick, and answers the sensor queries an agent needs:
//!
//! - [`distance_to_nearest_pellet`](PathFinder::distance_to_nearest_pellet)
//! - [`distance_to_nearest_ghost`](PathFinder::distance_to_nearest_ghost)
//! - [`nearest_power_pellet`](PathFinder::nearest_power_pellet)
//! - [`pellet_approach_scores`](PathFinder::pellet_approach_scores) and
//!   [`normalized_pellet_approach_score`](PathFinder::normalized_pellet_approach_score)
//! - [`check_for_ghost`](PathFinder::check_for_ghost)
//!
//! Every query is a breadth-first instantiation of one traversal primitive
//! that expands neighbours in [`Direction::ALL`](chomp_core::Direction::ALL)
//! order, so ties always break the same way.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod approach;
pub mod bearing;
pub mod error;
pub mod finder;
pub mod ghosts;
pub mod threat;
mod traverse;

pub use approach::ApproachScores;
pub use bearing::PowerPelletBearing;
pub use error::SenseError;
pub use finder::PathFinder;
pub use ghosts::GhostView;
pub use threat::ThreatProbe;

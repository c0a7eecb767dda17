//! Test utilities and mock types for chomp development.
//!
//! - [`fixtures`]: ASCII maze parsing and the classic 28x31 layout.
//! - [`world`]: [`MockWorld`], an in-memory [`MazeWorld`](chomp_agent::MazeWorld).
//! - [`policies`]: constant, scripted and failing decision policies.
//! - [`random`]: seeded random maze generation.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod policies;
pub mod random;
pub mod world;

pub use fixtures::{classic, parse_maze, parse_rows, FixtureError, ParsedMaze, CLASSIC_ROWS};
pub use policies::{ConstantPolicy, FailingPolicy, ScriptedPolicy};
pub use random::RandomMaze;
pub use world::MockWorld;

//! Benchmark profiles and utilities for the chomp maze sensing framework.
//!
//! Provides pre-built [`Profile`]s for benchmarking and examples:
//!
//! - [`classic_profile`]: the 28x31 arcade layout with a wrapping tunnel
//! - [`random_profile`]: a seeded braided maze of a given room count
//! - [`query_tiles`]: deterministic, evenly spread query start tiles

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use chomp_core::{Entity, TileCoord};
use chomp_space::MazeGraph;
use chomp_test_utils::{classic, FixtureError, ParsedMaze, RandomMaze};
use std::sync::Arc;

/// A maze ready for queries: its tiles and entities plus the built graph.
pub struct Profile {
    /// Tiles and entities.
    pub maze: ParsedMaze,
    /// Graph built from `maze.tiles`.
    pub graph: Arc<MazeGraph>,
}

impl Profile {
    fn new(maze: ParsedMaze) -> Result<Self, FixtureError> {
        let graph = Arc::new(maze.graph()?);
        Ok(Self { maze, graph })
    }

    /// The agent drawn in the maze.
    pub fn agent(&self) -> Option<Entity> {
        self.maze.pacman()
    }
}

/// Build the classic arcade profile: 28x31 tiles, 244 pellets, one ghost.
pub fn classic_profile() -> Result<Profile, FixtureError> {
    Profile::new(classic()?)
}

/// Build a random profile of `rooms x rooms` cells (a `2 * rooms + 1` tile
/// square) with the default braid, four power pellets and four ghosts.
pub fn random_profile(seed: u64, rooms: u32) -> Result<Profile, FixtureError> {
    let generator = RandomMaze {
        rooms_wide: rooms,
        rooms_high: rooms,
        ..RandomMaze::default()
    };
    Profile::new(generator.generate(seed)?)
}

/// Pick `n` walkable tiles spread evenly over the graph's node order.
///
/// Returns fewer than `n` tiles only when the graph has fewer nodes.
pub fn query_tiles(graph: &MazeGraph, n: usize) -> Vec<TileCoord> {
    let count = graph.node_count();
    if count == 0 || n == 0 {
        return Vec::new();
    }
    let stride = (count / n).max(1);
    graph
        .nodes()
        .step_by(stride)
        .take(n)
        .map(|node| graph.coord(node))
        .collect()
}

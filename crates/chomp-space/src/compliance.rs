//! Maze graph compliance test helpers.
//!
//! These functions verify that a [`MazeGraph`] satisfies the invariants
//! every search relies on. Reused across the graph test modules.

use crate::graph::MazeGraph;
use crate::grid::TileGrid;
use chomp_core::Direction;
use indexmap::IndexSet;

/// Assert that nodes are exactly the passable tiles, each listed once.
pub fn assert_nodes_are_passable_tiles(grid: &TileGrid, graph: &MazeGraph) {
    let coords: IndexSet<_> = graph.nodes().map(|n| graph.coord(n)).collect();
    assert_eq!(coords.len(), graph.node_count(), "graph lists a tile twice");
    let passable = grid.iter().filter(|(_, s)| s.is_passable()).count();
    assert_eq!(
        graph.node_count(),
        passable,
        "node count ({}) != passable tile count ({passable})",
        graph.node_count()
    );
    for (coord, state) in grid.iter() {
        assert_eq!(
            graph.try_node(coord).is_some(),
            state.is_passable(),
            "{coord} ({state:?}) has wrong graph membership"
        );
    }
}

/// Assert that `a -> b` via `d` implies `b -> a` via `d.behind()`.
pub fn assert_edges_symmetric(graph: &MazeGraph) {
    for node in graph.nodes() {
        for edge in graph.edges(node) {
            assert_eq!(
                graph.neighbour(edge.to, edge.direction.behind()),
                Some(node),
                "edge {} -{}-> {} has no reverse edge",
                graph.coord(node),
                edge.direction,
                graph.coord(edge.to)
            );
        }
    }
}

/// Assert that each node's edges are in [`Direction::ALL`] order, one per
/// direction at most.
pub fn assert_edge_order_canonical(graph: &MazeGraph) {
    for node in graph.nodes() {
        let dirs: Vec<Direction> = graph.edges(node).iter().map(|e| e.direction).collect();
        let mut sorted = dirs.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(dirs, sorted, "edges of {} out of order", graph.coord(node));
    }
}

/// Assert that the edge count matches the sum of the adjacency lists.
pub fn assert_edge_count_consistent(graph: &MazeGraph) {
    let total: usize = graph.nodes().map(|n| graph.edges(n).len()).sum();
    assert_eq!(total, graph.edge_count());
}

/// Run all compliance checks on a graph and the grid it was built from.
pub fn run_full_compliance(grid: &TileGrid, graph: &MazeGraph) {
    assert!(graph.matches(grid), "graph does not match its own grid");
    assert_nodes_are_passable_tiles(grid, graph);
    assert_edges_symmetric(graph);
    assert_edge_order_canonical(graph);
    assert_edge_count_consistent(graph);
}

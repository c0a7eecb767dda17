//! Static adjacency over the passable tiles of a maze.

use crate::error::SpaceError;
use crate::grid::TileGrid;
use chomp_core::{Direction, TileCoord, TileId};
use smallvec::SmallVec;
use std::fmt;

/// Dense index of a node (passable tile) within a [`MazeGraph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// The node's position in the graph's node arena.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A directed edge to a passable cardinal neighbour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    /// Direction of the step from the source node.
    pub direction: Direction,
    /// Destination node.
    pub to: NodeId,
}

#[derive(Clone, Debug)]
struct Node {
    tile: TileId,
    coord: TileCoord,
    edges: SmallVec<[Edge; 4]>,
}

/// Adjacency relation over the passable tiles of a [`TileGrid`].
///
/// Built once per maze layout with [`MazeGraph::build`] and immutable
/// afterwards, so it can be shared (e.g. behind an `Arc`) by any number of
/// concurrent sensor queries. Nodes live in a dense arena ordered row-major;
/// each node keeps its edges in [`Direction::ALL`] order, which is the
/// expansion order every search relies on for reproducible tie-breaks.
///
/// Eating a pellet changes a tile's state but never the graph: pellets are
/// not walls. Walls and gates have no node at all, and looking one up fails
/// with [`SpaceError::NotInGraph`].
#[derive(Clone, Debug)]
pub struct MazeGraph {
    rows: u32,
    cols: u32,
    nodes: Vec<Node>,
    node_of_tile: Vec<Option<NodeId>>,
    edge_count: usize,
    fingerprint: u64,
}

impl MazeGraph {
    /// Build the graph for `grid`'s current layout.
    ///
    /// Each passable tile becomes a node; each of its four cardinal
    /// neighbours (honouring the grid's edge behavior) that is also passable
    /// becomes an edge. A tile is never its own neighbour, which can only
    /// arise on a wrapping grid one tile wide.
    ///
    /// # Examples
    ///
    /// ```
    /// use chomp_core::{TileCoord, TileState::{Empty as E, Wall as W}};
    /// use chomp_space::{EdgeBehavior, MazeGraph, TileGrid};
    ///
    /// let grid = TileGrid::from_rows(
    ///     vec![vec![W, W, W], vec![E, E, E], vec![W, E, W]],
    ///     EdgeBehavior::Absorb,
    /// )
    /// .unwrap();
    /// let graph = MazeGraph::build(&grid).unwrap();
    /// assert_eq!(graph.node_count(), 4);
    ///
    /// let centre = graph.node(TileCoord::new(1, 1)).unwrap();
    /// assert_eq!(graph.edges(centre).len(), 3);
    /// assert!(graph.node(TileCoord::new(0, 0)).is_err());
    /// ```
    pub fn build(grid: &TileGrid) -> Result<Self, SpaceError> {
        let mut node_of_tile = vec![None; grid.tile_count()];
        let mut nodes = Vec::new();

        for (coord, state) in grid.iter() {
            if state.is_passable() {
                let tile = grid.tile_id(coord)?;
                node_of_tile[tile.0 as usize] = Some(NodeId(nodes.len() as u32));
                nodes.push(Node {
                    tile,
                    coord,
                    edges: SmallVec::new(),
                });
            }
        }
        if nodes.is_empty() {
            return Err(SpaceError::NoPassableTiles);
        }

        let mut edge_count = 0;
        for node in &mut nodes {
            for direction in Direction::ALL {
                let Some(nb) = grid.neighbour(node.coord, direction) else {
                    continue;
                };
                if nb == node.coord {
                    continue;
                }
                let nb_tile = grid.tile_id(nb)?;
                if let Some(to) = node_of_tile[nb_tile.0 as usize] {
                    node.edges.push(Edge { direction, to });
                    edge_count += 1;
                }
            }
        }

        tracing::debug!(
            rows = grid.rows(),
            cols = grid.cols(),
            nodes = nodes.len(),
            edges = edge_count,
            "built maze graph"
        );

        Ok(Self {
            rows: grid.rows(),
            cols: grid.cols(),
            nodes,
            node_of_tile,
            edge_count,
            fingerprint: grid.layout_fingerprint(),
        })
    }

    /// Number of nodes (passable tiles).
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Grid dimensions the graph was built for, as `(rows, cols)`.
    pub fn dims(&self) -> (u32, u32) {
        (self.rows, self.cols)
    }

    /// [`TileGrid::layout_fingerprint`] of the grid the graph was built from.
    pub fn layout_fingerprint(&self) -> u64 {
        self.fingerprint
    }

    /// Look up the node of a passable tile.
    ///
    /// Fails with [`SpaceError::CoordOutOfBounds`] outside the grid and with
    /// [`SpaceError::NotInGraph`] for walls and gates.
    pub fn node(&self, coord: TileCoord) -> Result<NodeId, SpaceError> {
        if coord.row < 0
            || coord.row >= self.rows as i32
            || coord.col < 0
            || coord.col >= self.cols as i32
        {
            return Err(SpaceError::CoordOutOfBounds {
                coord,
                rows: self.rows,
                cols: self.cols,
            });
        }
        let tile = coord.row as usize * self.cols as usize + coord.col as usize;
        self.node_of_tile[tile].ok_or(SpaceError::NotInGraph { coord })
    }

    /// Like [`node`](Self::node) but returns `None` instead of an error.
    pub fn try_node(&self, coord: TileCoord) -> Option<NodeId> {
        self.node(coord).ok()
    }

    /// Coordinate of a node.
    pub fn coord(&self, node: NodeId) -> TileCoord {
        self.nodes[node.index()].coord
    }

    /// Tile arena index of a node.
    pub fn tile(&self, node: NodeId) -> TileId {
        self.nodes[node.index()].tile
    }

    /// Outgoing edges of a node in [`Direction::ALL`] order.
    pub fn edges(&self, node: NodeId) -> &[Edge] {
        &self.nodes[node.index()].edges
    }

    /// The neighbour reached from `node` by stepping in `direction`, if that
    /// step lands on a passable tile.
    pub fn neighbour(&self, node: NodeId, direction: Direction) -> Option<NodeId> {
        self.edges(node)
            .iter()
            .find(|e| e.direction == direction)
            .map(|e| e.to)
    }

    /// All node ids in arena (row-major) order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len() as u32).map(NodeId)
    }

    /// Whether `grid` has the layout this graph was built from: same
    /// dimensions, edge behavior and passable tiles.
    pub fn matches(&self, grid: &TileGrid) -> bool {
        grid.rows() == self.rows
            && grid.cols() == self.cols
            && grid.layout_fingerprint() == self.fingerprint
            && grid
                .iter()
                .zip(&self.node_of_tile)
                .all(|((_, state), node)| state.is_passable() == node.is_some())
    }
}

// MazeGraph is shared across agents' sensor queries without locking.
const _: () = {
    #[allow(dead_code)]
    fn assert_send_sync<T: Send + Sync>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send_sync::<MazeGraph>();
    }
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use crate::edge::EdgeBehavior;
    use chomp_core::TileState::{self, Empty as E, Pellet as P, Wall as W};
    use proptest::prelude::*;

    fn grid(rows: Vec<Vec<TileState>>, edge: EdgeBehavior) -> TileGrid {
        TileGrid::from_rows(rows, edge).unwrap()
    }

    fn plus_shape() -> TileGrid {
        grid(
            vec![
                vec![W, E, W],
                vec![E, E, E],
                vec![W, E, W],
            ],
            EdgeBehavior::Absorb,
        )
    }

    #[test]
    fn edges_follow_direction_order() {
        let g = MazeGraph::build(&plus_shape()).unwrap();
        let centre = g.node(TileCoord::new(1, 1)).unwrap();
        let dirs: Vec<Direction> = g.edges(centre).iter().map(|e| e.direction).collect();
        assert_eq!(dirs, Direction::ALL.to_vec());
        assert_eq!(g.coord(g.edges(centre)[0].to), TileCoord::new(0, 1));
    }

    #[test]
    fn walls_are_absent() {
        let g = MazeGraph::build(&plus_shape()).unwrap();
        assert_eq!(g.node_count(), 5);
        assert_eq!(g.edge_count(), 8);
        assert_eq!(
            g.node(TileCoord::new(0, 0)),
            Err(SpaceError::NotInGraph {
                coord: TileCoord::new(0, 0)
            })
        );
        assert!(matches!(
            g.node(TileCoord::new(5, 0)),
            Err(SpaceError::CoordOutOfBounds { .. })
        ));
    }

    #[test]
    fn all_walls_fails_at_build_time() {
        let g = TileGrid::new(3, 3, EdgeBehavior::Absorb).unwrap();
        assert_eq!(MazeGraph::build(&g).unwrap_err(), SpaceError::NoPassableTiles);
    }

    #[test]
    fn wrap_connects_tunnel_ends() {
        let g = MazeGraph::build(&grid(
            vec![vec![W, W, W, W], vec![E, P, P, E], vec![W, W, W, W]],
            EdgeBehavior::Wrap,
        ))
        .unwrap();
        let west = g.node(TileCoord::new(1, 0)).unwrap();
        let east = g.node(TileCoord::new(1, 3)).unwrap();
        assert_eq!(g.neighbour(west, Direction::Left), Some(east));
        assert_eq!(g.neighbour(east, Direction::Right), Some(west));
    }

    #[test]
    fn single_wide_wrap_has_no_self_loops() {
        let g = MazeGraph::build(&grid(vec![vec![E], vec![E], vec![E]], EdgeBehavior::Wrap))
            .unwrap();
        for n in g.nodes() {
            assert!(g.edges(n).iter().all(|e| e.to != n));
        }
    }

    #[test]
    fn eating_pellets_keeps_layout() {
        let mut tiles = grid(vec![vec![P, P, E]], EdgeBehavior::Absorb);
        let g = MazeGraph::build(&tiles).unwrap();
        tiles.consume(TileCoord::new(0, 0)).unwrap();
        assert!(g.matches(&tiles));
        assert_eq!(g.layout_fingerprint(), tiles.layout_fingerprint());
        assert_eq!(g.node_count(), 3);
    }

    #[test]
    fn different_layout_does_not_match() {
        let g = MazeGraph::build(&plus_shape()).unwrap();
        let other = grid(vec![vec![E, E, E]; 3], EdgeBehavior::Absorb);
        assert!(!g.matches(&other));

        let wrapped = grid(
            vec![vec![W, E, W], vec![E, E, E], vec![W, E, W]],
            EdgeBehavior::Wrap,
        );
        assert!(!g.matches(&wrapped));
    }

    #[test]
    fn compliance_plus_shape() {
        let tiles = plus_shape();
        compliance::run_full_compliance(&tiles, &MazeGraph::build(&tiles).unwrap());
    }

    fn arb_grid() -> impl Strategy<Value = TileGrid> {
        (1usize..8, 1usize..8, any::<bool>()).prop_flat_map(|(rows, cols, wrap)| {
            prop::collection::vec(prop::bool::weighted(0.65), rows * cols).prop_map(move |open| {
                let edge = if wrap {
                    EdgeBehavior::Wrap
                } else {
                    EdgeBehavior::Absorb
                };
                let rows_v = open
                    .chunks(cols)
                    .map(|chunk| chunk.iter().map(|&o| if o { E } else { W }).collect())
                    .collect();
                TileGrid::from_rows(rows_v, edge).unwrap()
            })
        })
    }

    proptest! {
        #[test]
        fn random_layouts_satisfy_compliance(tiles in arb_grid()) {
            match MazeGraph::build(&tiles) {
                Ok(g) => compliance::run_full_compliance(&tiles, &g),
                Err(e) => prop_assert_eq!(e, SpaceError::NoPassableTiles),
            }
        }
    }
}

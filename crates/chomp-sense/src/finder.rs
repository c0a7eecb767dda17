//! The per-tick query context and the nearest-target distance queries.

use crate::error::SenseError;
use crate::ghosts::GhostView;
use crate::threat::ThreatProbe;
use crate::traverse::{Traversal, Visit};
use chomp_core::{Distance, Entity, TileCoord, TileState};
use chomp_space::{MazeGraph, NodeId, TileGrid};

/// Sensor queries over one maze for one tick.
///
/// Borrows the shared [`MazeGraph`], the live [`TileGrid`] and the live ghost
/// positions, so nothing can move while a query runs and no result can go
/// stale. Construction is cheap; build a new finder every tick.
///
/// # Examples
///
/// ```
/// use chomp_core::{Distance, Entity, TileCoord, TileState::{Empty as E, Pellet as P}};
/// use chomp_sense::PathFinder;
/// use chomp_space::{EdgeBehavior, MazeGraph, TileGrid};
///
/// let tiles = TileGrid::from_rows(vec![vec![E, E, E, P]], EdgeBehavior::Absorb).unwrap();
/// let graph = MazeGraph::build(&tiles).unwrap();
/// let ghosts: Vec<Entity> = Vec::new();
///
/// let finder = PathFinder::new(&graph, &tiles, &ghosts[..]).unwrap();
/// let start = TileCoord::new(0, 0);
/// assert_eq!(finder.distance_to_nearest_pellet(start).unwrap(), Distance::hops(3));
/// assert_eq!(finder.distance_to_nearest_ghost(start).unwrap(), Distance::UNREACHABLE);
/// ```
pub struct PathFinder<'a, G: GhostView + ?Sized = [Entity]> {
    pub(crate) graph: &'a MazeGraph,
    pub(crate) tiles: &'a TileGrid,
    pub(crate) ghosts: &'a G,
    pub(crate) probe: ThreatProbe,
}

impl<'a, G: GhostView + ?Sized> PathFinder<'a, G> {
    /// Create a finder with the default [`ThreatProbe`].
    ///
    /// Fails with [`SenseError::GridMismatch`] when `graph` was built for a
    /// maze of different dimensions than `tiles`, and with
    /// [`SenseError::LayoutMismatch`] when the dimensions agree but the
    /// walls do not.
    pub fn new(graph: &'a MazeGraph, tiles: &'a TileGrid, ghosts: &'a G) -> Result<Self, SenseError> {
        let (graph_rows, graph_cols) = graph.dims();
        if (graph_rows, graph_cols) != (tiles.rows(), tiles.cols()) {
            return Err(SenseError::GridMismatch {
                graph_rows,
                graph_cols,
                grid_rows: tiles.rows(),
                grid_cols: tiles.cols(),
            });
        }
        if graph.layout_fingerprint() != tiles.layout_fingerprint() {
            return Err(SenseError::LayoutMismatch {
                graph: graph.layout_fingerprint(),
                grid: tiles.layout_fingerprint(),
            });
        }
        Ok(Self {
            graph,
            tiles,
            ghosts,
            probe: ThreatProbe::default(),
        })
    }

    /// Replace the threat probe bounds.
    pub fn with_threat_probe(mut self, probe: ThreatProbe) -> Self {
        self.probe = probe;
        self
    }

    /// The threat probe bounds in use.
    pub fn threat_probe(&self) -> ThreatProbe {
        self.probe
    }

    /// The graph being searched.
    pub fn graph(&self) -> &'a MazeGraph {
        self.graph
    }

    /// Hop distance from `start` to the nearest pellet or power pellet.
    ///
    /// Zero when `start` itself holds one; [`Distance::UNREACHABLE`] when no
    /// pellet is reachable.
    pub fn distance_to_nearest_pellet(&self, start: TileCoord) -> Result<Distance, SenseError> {
        self.nearest(start, |node| self.state(node).is_pellet())
    }

    /// Hop distance from `start` to the nearest tile occupied by a ghost.
    ///
    /// Ghost tiles are checked when the search reaches them, against the
    /// positions borrowed at construction.
    pub fn distance_to_nearest_ghost(&self, start: TileCoord) -> Result<Distance, SenseError> {
        self.nearest(start, |node| self.ghost_on(node))
    }

    fn nearest(&self, start: TileCoord, is_target: impl Fn(NodeId) -> bool) -> Result<Distance, SenseError> {
        let start = self.graph.node(start)?;
        let found = Traversal::new(self.graph).breadth_first(
            [Visit::new(start, 0, ())],
            None,
            |_, _| (),
            |v| is_target(v.node),
        );
        Ok(found.map_or(Distance::UNREACHABLE, |v| Distance::hops(v.hops)))
    }

    pub(crate) fn state(&self, node: NodeId) -> TileState {
        self.tiles.state_at(self.graph.tile(node))
    }

    pub(crate) fn ghost_on(&self, node: NodeId) -> bool {
        self.ghosts.ghost_at(self.graph.coord(node))
    }
}

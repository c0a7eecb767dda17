//! Nearest power pellet together with the first step towards it.

use crate::error::SenseError;
use crate::finder::PathFinder;
use crate::ghosts::GhostView;
use crate::traverse::{Traversal, Visit};
use chomp_core::{Direction, Distance, TileCoord, TileState};

/// Where the nearest power pellet is, seen from a start tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PowerPelletBearing {
    /// Hop distance to the power pellet.
    pub distance: Distance,
    /// The first step of a shortest path towards it.
    ///
    /// `None` when no power pellet is reachable, and also when the start
    /// tile itself holds one.
    pub direction: Option<Direction>,
}

impl PowerPelletBearing {
    /// The bearing reported when no power pellet is reachable.
    pub const NONE: PowerPelletBearing = PowerPelletBearing {
        distance: Distance::UNREACHABLE,
        direction: None,
    };
}

impl<G: GhostView + ?Sized> PathFinder<'_, G> {
    /// Find the nearest power pellet and the direction to head in.
    ///
    /// The search is seeded with every passable neighbour of `start`, each
    /// tagged with the direction that reaches it, and `start` is never
    /// revisited. Each discovered tile inherits the tag of the tile that
    /// discovered it, so the reported direction always starts a shortest
    /// path. When several shortest paths exist, the direction earliest in
    /// [`Direction::ALL`] wins.
    ///
    /// # Examples
    ///
    /// ```
    /// use chomp_core::{Direction, Distance, Entity, TileCoord};
    /// use chomp_core::TileState::{Empty as E, PowerPellet as O, Wall as W};
    /// use chomp_sense::PathFinder;
    /// use chomp_space::{EdgeBehavior, MazeGraph, TileGrid};
    ///
    /// let tiles = TileGrid::from_rows(
    ///     vec![vec![W, W, W, W], vec![E, E, E, O], vec![W, W, W, W]],
    ///     EdgeBehavior::Absorb,
    /// )
    /// .unwrap();
    /// let graph = MazeGraph::build(&tiles).unwrap();
    /// let finder = PathFinder::new(&graph, &tiles, &[] as &[Entity]).unwrap();
    ///
    /// let bearing = finder.nearest_power_pellet(TileCoord::new(1, 1)).unwrap();
    /// assert_eq!(bearing.distance, Distance::hops(2));
    /// assert_eq!(bearing.direction, Some(Direction::Right));
    /// ```
    pub fn nearest_power_pellet(&self, start: TileCoord) -> Result<PowerPelletBearing, SenseError> {
        let start_node = self.graph.node(start)?;
        if self.state(start_node) == TileState::PowerPellet {
            return Ok(PowerPelletBearing {
                distance: Distance::ZERO,
                direction: None,
            });
        }

        let mut traversal = Traversal::new(self.graph);
        traversal.mark(start_node);
        let seeds = self
            .graph
            .edges(start_node)
            .iter()
            .map(|edge| Visit::new(edge.to, 1, edge.direction));
        let found = traversal.breadth_first(
            seeds,
            None,
            |parent, _| parent.acc,
            |v| self.state(v.node) == TileState::PowerPellet,
        );

        Ok(found.map_or(PowerPelletBearing::NONE, |v| PowerPelletBearing {
            distance: Distance::hops(v.hops),
            direction: Some(v.acc),
        }))
    }
}

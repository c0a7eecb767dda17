//! Short-range ghost threat probe.

use crate::error::SenseError;
use crate::finder::PathFinder;
use crate::ghosts::GhostView;
use crate::traverse::{Traversal, Visit};
use chomp_core::TileCoord;

/// Search bounds for [`PathFinder::check_for_ghost`].
///
/// The probe follows a corridor for at most `corridor_limit` tiles, then
/// looks `expansion_rounds` tiles past the junction it ends at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThreatProbe {
    /// Corridor tiles walked before the probe gives up. Default: 8.
    pub corridor_limit: u32,
    /// Breadth-first rounds explored beyond the junction. Default: 2.
    pub expansion_rounds: u32,
}

impl Default for ThreatProbe {
    fn default() -> Self {
        Self {
            corridor_limit: 8,
            expansion_rounds: 2,
        }
    }
}

impl<G: GhostView + ?Sized> PathFinder<'_, G> {
    /// Whether a ghost lurks a short way down the corridor that starts at
    /// `direction_tile`, looking away from `start`.
    ///
    /// The probe steps along the corridor while the current tile has exactly
    /// one tile it has not seen yet, checking each tile as it steps onto it.
    /// Corridors longer than [`ThreatProbe::corridor_limit`] report no
    /// threat. At the first junction or dead end it checks that tile and
    /// every tile within [`ThreatProbe::expansion_rounds`] hops of it that
    /// is not behind the probe.
    ///
    /// # Examples
    ///
    /// ```
    /// use chomp_core::{Entity, TileCoord, TileState::Empty as E};
    /// use chomp_sense::PathFinder;
    /// use chomp_space::{EdgeBehavior, MazeGraph, TileGrid};
    ///
    /// let tiles = TileGrid::from_rows(vec![vec![E; 6]], EdgeBehavior::Absorb).unwrap();
    /// let graph = MazeGraph::build(&tiles).unwrap();
    /// let ghosts = vec![Entity::ghost(1, TileCoord::new(0, 4))];
    /// let finder = PathFinder::new(&graph, &tiles, &ghosts[..]).unwrap();
    ///
    /// let start = TileCoord::new(0, 1);
    /// assert!(finder.check_for_ghost(start, TileCoord::new(0, 2)).unwrap());
    /// assert!(!finder.check_for_ghost(start, TileCoord::new(0, 0)).unwrap());
    /// ```
    pub fn check_for_ghost(&self, start: TileCoord, direction_tile: TileCoord) -> Result<bool, SenseError> {
        let start_node = self.graph.node(start)?;
        let mut current = self.graph.node(direction_tile)?;

        let mut traversal = Traversal::new(self.graph);
        traversal.mark(start_node);
        traversal.mark(current);

        let mut walked = 0;
        while let Some(next) = traversal.sole_unvisited(current) {
            walked += 1;
            if walked > self.probe.corridor_limit {
                return Ok(false);
            }
            if self.ghost_on(current) {
                tracing::trace!(tile = %self.graph.coord(current), walked, "ghost in corridor");
                return Ok(true);
            }
            traversal.mark(next);
            current = next;
        }

        let hit = traversal.breadth_first(
            [Visit::new(current, 0, ())],
            Some(self.probe.expansion_rounds),
            |_, _| (),
            |v| self.ghost_on(v.node),
        );
        if let Some(v) = &hit {
            tracing::trace!(
                tile = %self.graph.coord(v.node),
                junction = %self.graph.coord(current),
                "ghost past junction"
            );
        }
        Ok(hit.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chomp_core::TileState::{self, Empty as E, Wall as W};
    use chomp_space::{EdgeBehavior, MazeGraph, TileGrid};

    fn probe(rows: Vec<Vec<TileState>>, ghosts: &[TileCoord], start: TileCoord, dir_tile: TileCoord) -> bool {
        let tiles = TileGrid::from_rows(rows, EdgeBehavior::Absorb).unwrap();
        let graph = MazeGraph::build(&tiles).unwrap();
        PathFinder::new(&graph, &tiles, ghosts)
            .unwrap()
            .check_for_ghost(start, dir_tile)
            .unwrap()
    }

    fn corridor_then_room(len: usize) -> Vec<Vec<TileState>> {
        // Row 2 is a corridor from column 0 to `len`, opening into a 3x3 room.
        let width = len + 4;
        let mut rows = vec![vec![W; width]; 5];
        for cell in rows[2].iter_mut().take(len + 1) {
            *cell = E;
        }
        for row in rows.iter_mut().take(4).skip(1) {
            for cell in row.iter_mut().skip(len + 1).take(3) {
                *cell = E;
            }
        }
        rows
    }

    #[test]
    fn ghost_inside_corridor() {
        let rows = corridor_then_room(10);
        let hit = probe(rows, &[TileCoord::new(2, 5)], TileCoord::new(2, 0), TileCoord::new(2, 1));
        assert!(hit);
    }

    #[test]
    fn ghost_on_eighth_corridor_tile_is_seen() {
        let rows = vec![vec![E; 14]];
        let hit = probe(rows, &[TileCoord::new(0, 8)], TileCoord::new(0, 0), TileCoord::new(0, 1));
        assert!(hit);
    }

    #[test]
    fn ghost_beyond_eighth_corridor_tile_is_missed() {
        let rows = vec![vec![E; 14]];
        let hit = probe(rows, &[TileCoord::new(0, 9)], TileCoord::new(0, 0), TileCoord::new(0, 1));
        assert!(!hit);
    }

    #[test]
    fn ghost_within_two_rounds_of_junction() {
        // Corridor of 3 tiles, junction at column 4, room spans columns 4..=6.
        let rows = corridor_then_room(3);
        let start = TileCoord::new(2, 0);
        let first = TileCoord::new(2, 1);
        assert!(probe(rows.clone(), &[TileCoord::new(2, 4)], start, first));
        assert!(probe(rows.clone(), &[TileCoord::new(1, 5)], start, first));
        assert!(probe(rows.clone(), &[TileCoord::new(2, 6)], start, first));
        assert!(!probe(rows, &[TileCoord::new(1, 6)], start, first));
    }

    #[test]
    fn ghost_behind_start_is_ignored() {
        let rows = vec![vec![E; 5]];
        let hit = probe(rows, &[TileCoord::new(0, 0)], TileCoord::new(0, 1), TileCoord::new(0, 2));
        assert!(!hit);
    }

    #[test]
    fn dead_end_is_checked() {
        let rows = vec![vec![E, E, E]];
        let hit = probe(rows, &[TileCoord::new(0, 2)], TileCoord::new(0, 0), TileCoord::new(0, 1));
        assert!(hit);
    }

    #[test]
    fn custom_bounds() {
        let tiles = TileGrid::from_rows(vec![vec![E; 14]], EdgeBehavior::Absorb).unwrap();
        let graph = MazeGraph::build(&tiles).unwrap();
        let ghosts = [TileCoord::new(0, 11)];
        let finder = PathFinder::new(&graph, &tiles, &ghosts[..]).unwrap();
        let start = TileCoord::new(0, 0);
        let first = TileCoord::new(0, 1);
        assert!(!finder.check_for_ghost(start, first).unwrap());

        let finder = finder.with_threat_probe(ThreatProbe {
            corridor_limit: 12,
            expansion_rounds: 0,
        });
        assert!(finder.check_for_ghost(start, first).unwrap());
    }

    #[test]
    fn wall_direction_tile_is_an_error() {
        let tiles = TileGrid::from_rows(vec![vec![E, W]], EdgeBehavior::Absorb).unwrap();
        let graph = MazeGraph::build(&tiles).unwrap();
        let finder = PathFinder::new(&graph, &tiles, &[] as &[TileCoord]).unwrap();
        assert!(finder
            .check_for_ghost(TileCoord::new(0, 0), TileCoord::new(0, 1))
            .is_err());
    }
}

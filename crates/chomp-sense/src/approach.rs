//! Per-direction pellet approach scores.

use crate::error::SenseError;
use crate::finder::PathFinder;
use crate::ghosts::GhostView;
use crate::traverse::{Traversal, Visit};
use chomp_core::{Direction, TileCoord, TileState};

/// Approach scores for the four directions out of a start tile.
///
/// A direction has a score only if it is open and its search found a target.
/// Raw scores are `distance - pellet_weight * points`, lower is better;
/// normalised scores map the lowest raw score to 1.0 and the highest to 0.0.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ApproachScores {
    raw: [Option<f32>; 4],
    normalized: [Option<f32>; 4],
}

impl ApproachScores {
    fn from_raw(raw: [Option<f32>; 4]) -> Self {
        let found = raw.iter().flatten().copied();
        let min = found.clone().fold(f32::INFINITY, f32::min);
        let max = found.fold(f32::NEG_INFINITY, f32::max);
        let range = max - min;
        let normalized = raw.map(|score| {
            score.map(|s| {
                // Exact: nearly equal scores still spread over [0, 1].
                if min == max {
                    1.0
                } else {
                    (max - s) / range
                }
            })
        });
        Self { raw, normalized }
    }

    /// Raw score for `direction`.
    pub fn raw(&self, direction: Direction) -> Option<f32> {
        self.raw[direction.index()]
    }

    /// Normalised score for `direction`, in `[0, 1]`.
    pub fn normalized(&self, direction: Direction) -> Option<f32> {
        self.normalized[direction.index()]
    }

    /// The highest normalised score, or 0.0 when no direction found a target.
    pub fn best(&self) -> f32 {
        self.normalized.iter().flatten().copied().fold(0.0, f32::max)
    }

    /// Whether any direction found a target.
    pub fn any_found(&self) -> bool {
        self.raw.iter().any(Option::is_some)
    }
}

impl<G: GhostView + ?Sized> PathFinder<'_, G> {
    /// Score each open direction out of `start` by how cheaply it leads to
    /// pellets.
    ///
    /// Every direction gets its own search that starts on the neighbour in
    /// that direction and never re-enters `start`. Along the way it counts
    /// plain pellets on the discovery path. It aims for the nearest power
    /// pellet and settles for the nearest plain pellet when none is
    /// reachable. A larger `pellet_weight` favours routes through more
    /// pellets over shorter ones.
    pub fn pellet_approach_scores(
        &self,
        start: TileCoord,
        pellet_weight: f32,
    ) -> Result<ApproachScores, SenseError> {
        let start_node = self.graph.node(start)?;
        let points_of = |state: TileState| u32::from(state == TileState::Pellet);
        let mut raw = [None; 4];

        for edge in self.graph.edges(start_node) {
            let mut traversal = Traversal::new(self.graph);
            traversal.mark(start_node);
            let mut first_pellet: Option<(u32, u32)> = None;

            let seed = Visit::new(edge.to, 1, points_of(self.state(edge.to)));
            let power = traversal.breadth_first(
                [seed],
                None,
                |parent, e| parent.acc + points_of(self.state(e.to)),
                |v| match self.state(v.node) {
                    TileState::PowerPellet => true,
                    TileState::Pellet => {
                        first_pellet.get_or_insert((v.hops, v.acc));
                        false
                    }
                    _ => false,
                },
            );

            let target = power.map(|v| (v.hops, v.acc)).or(first_pellet);
            raw[edge.direction.index()] =
                target.map(|(distance, points)| distance as f32 - pellet_weight * points as f32);
        }

        Ok(ApproachScores::from_raw(raw))
    }

    /// The best normalised approach score out of `start`; see
    /// [`pellet_approach_scores`](Self::pellet_approach_scores).
    ///
    /// 1.0 whenever any direction finds a target and all found directions
    /// score the same; 0.0 when none does.
    pub fn normalized_pellet_approach_score(
        &self,
        start: TileCoord,
        pellet_weight: f32,
    ) -> Result<f32, SenseError> {
        self.pellet_approach_scores(start, pellet_weight)
            .map(|scores| scores.best())
    }
}

//! Turns one tick's maze state into a feature vector.

use crate::config::{ConfigError, SensorConfig};
use crate::features::{FeatureKind, FeatureLayout, FeatureVector};
use crate::world::MazeWorld;
use chomp_core::{Distance, Entity, RelativeDirection, TileCoord};
use chomp_sense::{PathFinder, PowerPelletBearing, SenseError};
use chomp_space::MazeGraph;

/// Computes the configured features for an agent.
///
/// Per-direction features are taken in [`RelativeDirection::ALL`] order
/// around the agent's facing. Distances in a direction are measured from the
/// neighbouring tile that way plus the one step onto it; a direction the
/// agent cannot move in reads as unreachable.
#[derive(Clone, Debug)]
pub struct SensorAssembler {
    config: SensorConfig,
    layout: FeatureLayout,
}

impl SensorAssembler {
    /// Validate `config` and compile its layout.
    pub fn new(config: SensorConfig) -> Result<Self, ConfigError> {
        let layout = config.validate()?;
        Ok(Self { config, layout })
    }

    /// The configuration in use.
    pub fn config(&self) -> &SensorConfig {
        &self.config
    }

    /// The compiled layout.
    pub fn layout(&self) -> &FeatureLayout {
        &self.layout
    }

    /// Compute every configured feature for `agent`.
    pub fn assemble<W: MazeWorld + ?Sized>(
        &self,
        graph: &MazeGraph,
        world: &W,
        agent: &Entity,
    ) -> Result<FeatureVector, SenseError> {
        let finder =
            PathFinder::new(graph, world.tiles(), world.entities())?.with_threat_probe(self.config.threat);
        let mut probe = Probe::new(finder, world, agent);
        let unreachable = self.config.unreachable;
        let mut values = Vec::with_capacity(self.layout.len());

        for kind in self.layout.kinds() {
            match kind {
                FeatureKind::CanMove => {
                    values.extend(probe.movable.map(|m| if m { 1.0 } else { 0.0 }));
                }
                FeatureKind::PelletDistance => {
                    values.extend(probe.pellet_distances()?.map(|d| d.encode(unreachable)));
                }
                FeatureKind::GhostDistance => {
                    values.extend(probe.ghost_distances()?.map(|d| d.encode(unreachable)));
                }
                FeatureKind::GhostThreat => {
                    for step in probe.steps {
                        let threat = match step {
                            Some(tile) => probe.finder.check_for_ghost(agent.tile, tile)?,
                            None => false,
                        };
                        values.push(if threat { 1.0 } else { 0.0 });
                    }
                }
                FeatureKind::NearestPelletOneHot => {
                    let distances = probe.pellet_distances()?;
                    let nearest = distances.iter().copied().min().filter(|d| d.is_reachable());
                    values.extend(distances.map(|d| if Some(d) == nearest { 1.0 } else { 0.0 }));
                }
                FeatureKind::PowerPelletDirection => {
                    let bearing = probe.bearing()?;
                    values.extend(RelativeDirection::ALL.map(|rel| {
                        if bearing.direction == Some(rel.resolve(agent.facing)) {
                            1.0
                        } else {
                            0.0
                        }
                    }));
                }
                FeatureKind::ApproachScore => {
                    let scores = probe
                        .finder
                        .pellet_approach_scores(agent.tile, self.config.pellet_weight)?;
                    for rel in RelativeDirection::ALL {
                        let score = match probe.steps[rel.index()] {
                            Some(_) => scores.normalized(rel.resolve(agent.facing)),
                            None => None,
                        };
                        values.push(score.unwrap_or(0.0));
                    }
                }
                FeatureKind::Score => values.push(world.score() as f32),
                FeatureKind::PelletsRemaining => values.push(world.pellets_remaining() as f32),
                FeatureKind::PowerPelletDistance => {
                    values.push(probe.bearing()?.distance.encode(unreachable));
                }
                FeatureKind::GhostAlert => {
                    let radius = self.config.ghost_alert_radius;
                    let alert = probe
                        .ghost_distances()?
                        .iter()
                        .any(|d| d.get().is_some_and(|h| h < radius));
                    values.push(if alert { 1.0 } else { 0.0 });
                }
            }
        }

        debug_assert_eq!(values.len(), self.layout.len());
        Ok(FeatureVector::new(values))
    }
}

/// Per-tick query results shared between features.
struct Probe<'a> {
    finder: PathFinder<'a>,
    agent: &'a Entity,
    movable: [bool; 4],
    steps: [Option<TileCoord>; 4],
    pellet: Option<[Distance; 4]>,
    ghost: Option<[Distance; 4]>,
    bearing: Option<PowerPelletBearing>,
}

impl<'a> Probe<'a> {
    fn new<W: MazeWorld + ?Sized>(finder: PathFinder<'a>, world: &'a W, agent: &'a Entity) -> Self {
        let graph = finder.graph();
        let movable = RelativeDirection::ALL.map(|rel| world.can_move(agent, rel.resolve(agent.facing)));
        let steps = RelativeDirection::ALL.map(|rel| {
            if !movable[rel.index()] {
                return None;
            }
            world
                .tiles()
                .neighbour(agent.tile, rel.resolve(agent.facing))
                .filter(|&tile| graph.try_node(tile).is_some())
        });
        Self {
            finder,
            agent,
            movable,
            steps,
            pellet: None,
            ghost: None,
            bearing: None,
        }
    }

    fn through_steps(
        &self,
        query: impl Fn(&PathFinder<'a>, TileCoord) -> Result<Distance, SenseError>,
    ) -> Result<[Distance; 4], SenseError> {
        let mut out = [Distance::UNREACHABLE; 4];
        for (slot, step) in out.iter_mut().zip(self.steps) {
            if let Some(tile) = step {
                *slot = query(&self.finder, tile)?.plus(1);
            }
        }
        Ok(out)
    }

    fn pellet_distances(&mut self) -> Result<[Distance; 4], SenseError> {
        if let Some(d) = self.pellet {
            return Ok(d);
        }
        let d = self.through_steps(|f, tile| f.distance_to_nearest_pellet(tile))?;
        self.pellet = Some(d);
        Ok(d)
    }

    fn ghost_distances(&mut self) -> Result<[Distance; 4], SenseError> {
        if let Some(d) = self.ghost {
            return Ok(d);
        }
        let d = self.through_steps(|f, tile| f.distance_to_nearest_ghost(tile))?;
        self.ghost = Some(d);
        Ok(d)
    }

    fn bearing(&mut self) -> Result<PowerPelletBearing, SenseError> {
        if let Some(b) = self.bearing {
            return Ok(b);
        }
        let b = self.finder.nearest_power_pellet(self.agent.tile)?;
        self.bearing = Some(b);
        Ok(b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chomp_core::TileState::{Empty as E, Pellet as P, PowerPellet as O, Wall as W};
    use chomp_core::{Direction, EntityId, TileState};
    use chomp_space::{EdgeBehavior, TileGrid};

    struct Fixed {
        tiles: TileGrid,
        entities: Vec<Entity>,
    }

    impl MazeWorld for Fixed {
        fn tiles(&self) -> &TileGrid {
            &self.tiles
        }
        fn entities(&self) -> &[Entity] {
            &self.entities
        }
        fn score(&self) -> i64 {
            120
        }
        fn kill(&mut self, _agent: EntityId) {}
    }

    fn world(rows: Vec<Vec<TileState>>, entities: Vec<Entity>) -> (Fixed, MazeGraph) {
        let tiles = TileGrid::from_rows(rows, EdgeBehavior::Absorb).unwrap();
        let graph = MazeGraph::build(&tiles).unwrap();
        (Fixed { tiles, entities }, graph)
    }

    #[test]
    fn corridor_facing_right() {
        // Agent at column 1 facing right: forward is Right, behind is Left.
        let agent = Entity::pacman(0, TileCoord::new(1, 1), Direction::Right);
        let ghost = Entity::ghost(1, TileCoord::new(1, 5));
        let (w, g) = world(
            vec![
                vec![W, W, W, W, W, W, W],
                vec![P, E, E, P, E, E, W],
                vec![W, W, W, W, W, W, W],
            ],
            vec![agent, ghost],
        );
        let asm = SensorAssembler::new(SensorConfig::neat()).unwrap();
        let v = asm.assemble(&g, &w, &agent).unwrap();
        let layout = asm.layout();

        // forward, left (up), right (down), behind
        assert_eq!(v.feature(layout, FeatureKind::CanMove), Some(&[1.0, 0.0, 0.0, 1.0][..]));
        assert_eq!(
            v.feature(layout, FeatureKind::PelletDistance),
            Some(&[2.0, -1.0, -1.0, 1.0][..])
        );
        assert_eq!(
            v.feature(layout, FeatureKind::GhostDistance),
            Some(&[4.0, -1.0, -1.0, 6.0][..])
        );
        assert_eq!(v.feature(layout, FeatureKind::Score), Some(&[120.0][..]));
        assert_eq!(v.feature(layout, FeatureKind::PelletsRemaining), Some(&[2.0][..]));
    }

    #[test]
    fn one_hot_features() {
        let agent = Entity::pacman(0, TileCoord::new(0, 2), Direction::Up);
        let (w, g) = world(vec![vec![P, E, E, E, P, O]], vec![agent]);
        let asm = SensorAssembler::new(SensorConfig::with_features(vec![
            FeatureKind::NearestPelletOneHot,
            FeatureKind::PowerPelletDirection,
            FeatureKind::PowerPelletDistance,
        ]))
        .unwrap();
        let v = asm.assemble(&g, &w, &agent).unwrap();
        let layout = asm.layout();
        // Facing up: left is Left, right is Right. Both pellets are 2 hops away.
        assert_eq!(
            v.feature(layout, FeatureKind::NearestPelletOneHot),
            Some(&[0.0, 1.0, 1.0, 0.0][..])
        );
        assert_eq!(
            v.feature(layout, FeatureKind::PowerPelletDirection),
            Some(&[0.0, 0.0, 1.0, 0.0][..])
        );
        assert_eq!(v.feature(layout, FeatureKind::PowerPelletDistance), Some(&[3.0][..]));
    }

    #[test]
    fn nothing_reachable_sets_no_one_hot() {
        let agent = Entity::pacman(0, TileCoord::new(0, 0), Direction::Right);
        let (w, g) = world(vec![vec![E, E, E]], vec![agent]);
        let asm = SensorAssembler::new(SensorConfig::tournament()).unwrap();
        let v = asm.assemble(&g, &w, &agent).unwrap();
        assert_eq!(
            v.feature(asm.layout(), FeatureKind::NearestPelletOneHot),
            Some(&[0.0; 4][..])
        );
    }
}

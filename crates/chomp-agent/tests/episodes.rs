//! Integration test: tick behaviors driven against mock worlds.

use std::sync::Arc;

use chomp_agent::{
    AgentState, DecisionPolicy, FeatureKind, FeatureVector, MazeWorld, PolicyError, PolicyOutput,
    SensorConfig, TickBehavior, TickError, TickOutcome,
};
use chomp_core::{Direction, Distance, EntityId, TileCoord};
use chomp_sense::{PathFinder, SenseError};
use chomp_space::{EdgeBehavior, MazeGraph, SpaceError};
use chomp_test_utils::{classic, parse_rows, ConstantPolicy, FailingPolicy, MockWorld, ScriptedPolicy};

const AGENT: EntityId = EntityId(0);

fn open_five_by_five() -> MockWorld {
    let maze = parse_rows(
        &[" .   ", "     ", "  P  ", "     ", "     "],
        EdgeBehavior::Absorb,
    )
    .unwrap();
    MockWorld::new(maze)
}

fn graph_of(world: &MockWorld) -> Arc<MazeGraph> {
    Arc::new(MazeGraph::build(world.tiles()).unwrap())
}

// ── End-to-end scenario ─────────────────────────────────────────────

#[test]
fn open_maze_with_one_pellet_and_no_ghosts() {
    let mut world = open_five_by_five();
    let graph = graph_of(&world);
    let agent_tile = TileCoord::new(2, 2);

    let finder = PathFinder::new(&graph, world.tiles(), world.entities()).unwrap();
    assert_eq!(finder.distance_to_nearest_pellet(agent_tile).unwrap(), Distance::hops(3));
    assert_eq!(finder.distance_to_nearest_ghost(agent_tile).unwrap(), Distance::UNREACHABLE);

    let mut behavior =
        TickBehavior::new(AGENT, graph, SensorConfig::neat(), ScriptedPolicy::recording()).unwrap();
    behavior.tick(&mut world).unwrap();

    let layout = behavior.layout();
    let seen = behavior.policy().last_seen().unwrap();
    assert_eq!(seen.len(), 14);
    assert_eq!(seen.feature(layout, FeatureKind::GhostDistance), Some(&[-1.0; 4][..]));
    // Facing left: forward (2, 1), left (3, 2), right (1, 2), behind (2, 3).
    assert_eq!(
        seen.feature(layout, FeatureKind::PelletDistance),
        Some(&[3.0, 5.0, 3.0, 5.0][..])
    );
    assert_eq!(seen.feature(layout, FeatureKind::CanMove), Some(&[1.0; 4][..]));
    assert_eq!(seen.feature(layout, FeatureKind::PelletsRemaining), Some(&[1.0][..]));
}

// ── Watchdog ───────────────────────────────────────────────────────

#[test]
fn default_watchdog_terminates_on_tick_2401() {
    let mut world = open_five_by_five();
    let mut behavior = TickBehavior::new(
        AGENT,
        graph_of(&world),
        SensorConfig::tournament(),
        ConstantPolicy::direction(Direction::Right),
    )
    .unwrap();

    for tick in 1..=2400 {
        assert_eq!(
            behavior.tick(&mut world).unwrap(),
            TickOutcome::Move(Direction::Right),
            "tick {tick}"
        );
    }
    assert!(world.killed().is_empty());
    assert_eq!(behavior.tick(&mut world).unwrap(), TickOutcome::Terminated(Direction::Up));
    assert_eq!(behavior.state(), AgentState::Terminated);
    assert_eq!(world.killed(), &[AGENT]);

    assert_eq!(behavior.tick(&mut world).unwrap().direction(), Direction::Up);
    assert_eq!(world.killed().len(), 1);
}

#[test]
fn scoring_keeps_the_watchdog_quiet() {
    let mut world = open_five_by_five();
    let mut config = SensorConfig::tournament();
    config.watchdog.stall_limit = 5;
    let mut behavior =
        TickBehavior::new(AGENT, graph_of(&world), config, ConstantPolicy::direction(Direction::Up))
            .unwrap();
    for tick in 1..=30 {
        if tick % 5 == 0 {
            world.set_score(tick);
        }
        assert!(matches!(behavior.tick(&mut world), Ok(TickOutcome::Move(_))), "tick {tick}");
    }
}

// ── Failures ───────────────────────────────────────────────────────

#[test]
fn failing_policy_kills_the_agent() {
    let mut world = open_five_by_five();
    let mut behavior =
        TickBehavior::new(AGENT, graph_of(&world), SensorConfig::neat(), FailingPolicy::new(2)).unwrap();
    behavior.tick(&mut world).unwrap();
    behavior.tick(&mut world).unwrap();
    assert!(matches!(
        behavior.tick(&mut world),
        Err(TickError::Policy(PolicyError::Failed { .. }))
    ));
    assert_eq!(behavior.state(), AgentState::Terminated);
    assert!(world.is_killed(AGENT));
    assert_eq!(behavior.policy().calls(), 3);
}

#[test]
fn out_of_range_scores_kill_the_agent() {
    let mut world = open_five_by_five();
    let policy = ScriptedPolicy::new([Ok(PolicyOutput::Scores(vec![0.0, 0.0, 0.0, 0.0, 9.0]))]);
    let mut behavior = TickBehavior::new(AGENT, graph_of(&world), SensorConfig::neat(), policy).unwrap();
    assert_eq!(
        behavior.tick(&mut world),
        Err(TickError::Policy(PolicyError::OutputOutOfRange { index: 4 }))
    );
    assert!(world.is_killed(AGENT));
    assert!(behavior.policy().reported.is_empty());
}

#[test]
fn agent_off_the_graph_is_a_sense_error() {
    let maze = parse_rows(&["#####", "#.P #", "#####"], EdgeBehavior::Absorb).unwrap();
    let mut world = MockWorld::new(maze);
    let graph = graph_of(&world);
    world.place(AGENT, TileCoord::new(0, 2));
    let config = SensorConfig::with_features(vec![FeatureKind::PowerPelletDistance]);
    let mut behavior = TickBehavior::new(AGENT, graph, config, ScriptedPolicy::recording()).unwrap();
    assert_eq!(
        behavior.tick(&mut world),
        Err(TickError::Sense(SenseError::Space(SpaceError::NotInGraph {
            coord: TileCoord::new(0, 2)
        })))
    );
    assert_eq!(behavior.state(), AgentState::Active);
}

// ── Full episode ───────────────────────────────────────────────────

/// Scores each direction by the nearest-pellet one-hot of the tournament
/// layout (can-move x4, then nearest-pellet x4).
struct NearestPellet;

impl DecisionPolicy for NearestPellet {
    fn decide(&mut self, features: &FeatureVector) -> Result<PolicyOutput, PolicyError> {
        Ok(PolicyOutput::Scores(features.as_slice()[4..8].to_vec()))
    }
}

#[test]
fn greedy_agent_clears_pellets_on_the_classic_maze() {
    let maze = classic().unwrap();
    let start_pellets = maze.tiles.pellets_remaining();
    // The ghost is drawn first, so it takes id 0.
    let agent = maze.pacman().unwrap().id;
    let mut world = MockWorld::new(maze);
    let mut behavior =
        TickBehavior::new(agent, graph_of(&world), SensorConfig::tournament(), NearestPellet).unwrap();

    for _ in 0..200 {
        let direction = behavior.tick(&mut world).unwrap().direction();
        world.step(agent, direction);
    }

    assert!(world.score() >= 200, "score {}", world.score());
    assert!(world.pellets_remaining() < start_pellets);
    assert_eq!(behavior.state(), AgentState::Active);
}

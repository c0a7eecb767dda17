//! Greedy agent episode on the classic maze.
//!
//! Demonstrates: build a profile → wrap it in a mock world → tick a
//! behavior that always heads for the nearest pellet → move the agent →
//! repeat until the maze is clear or the watchdog gives up.
//!
//! Run with `RUST_LOG=chomp_agent=debug` to see watchdog and kill events.

use chomp_agent::{
    AgentState, DecisionPolicy, FeatureKind, FeatureLayout, FeatureVector, MazeWorld,
    PolicyError, PolicyOutput, SensorConfig, TickBehavior,
};
use chomp_bench::classic_profile;
use chomp_test_utils::MockWorld;

/// Scores each relative direction by the nearest-pellet one-hot.
struct Greedy {
    layout: FeatureLayout,
}

impl DecisionPolicy for Greedy {
    fn decide(&mut self, features: &FeatureVector) -> Result<PolicyOutput, PolicyError> {
        let one_hot = features
            .feature(&self.layout, FeatureKind::NearestPelletOneHot)
            .ok_or_else(|| PolicyError::Failed {
                reason: "nearest-pellet feature not configured".into(),
            })?;
        Ok(PolicyOutput::Scores(one_hot.to_vec()))
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    println!("=== Chomp Greedy Episode ===\n");

    let profile = classic_profile().unwrap();
    let agent = profile.agent().unwrap().id;
    let graph = profile.graph.clone();
    let mut world = MockWorld::new(profile.maze);

    let mut config = SensorConfig::tournament();
    // Give up after five stalled seconds instead of forty.
    config.watchdog.stall_limit = 5 * 60;
    let layout = config.validate().unwrap();
    let mut behavior = TickBehavior::new(agent, graph, config, Greedy { layout }).unwrap();

    let start_pellets = world.pellets_remaining();
    println!("Pellets: {start_pellets}");

    let mut ticks = 0u32;
    while world.pellets_remaining() > 0 && behavior.state() == AgentState::Active {
        let direction = behavior.tick(&mut world).unwrap().direction();
        world.step(agent, direction);
        ticks += 1;

        if ticks % 250 == 0 {
            println!(
                "  tick {ticks:>5}: score={:>5}, pellets={:>3}",
                world.score(),
                world.pellets_remaining(),
            );
        }
    }

    println!();
    println!("Finished after {ticks} ticks");
    println!("  score:   {}", world.score());
    println!("  eaten:   {}", start_pellets - world.pellets_remaining());
    println!("  state:   {:?}", behavior.state());
}

//! The per-agent tick state machine.

use crate::assembler::SensorAssembler;
use crate::config::{ConfigError, SensorConfig};
use crate::error::TickError;
use crate::features::FeatureLayout;
use crate::policy::{argmax, DecisionPolicy, PolicyError, PolicyOutput};
use crate::watchdog::{Watchdog, WatchdogVerdict};
use crate::world::MazeWorld;
use chomp_core::{Direction, EntityId};
use chomp_space::MazeGraph;
use std::sync::Arc;

/// Lifecycle of an agent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AgentState {
    /// Sensing and deciding every tick.
    Active,
    /// Killed by the watchdog or by a policy failure. Terminal.
    Terminated,
}

/// Result of one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// The policy chose a direction.
    Move(Direction),
    /// The agent is terminated; the configured default direction is returned.
    Terminated(Direction),
}

impl TickOutcome {
    /// The direction to hand to the movement executor.
    pub fn direction(self) -> Direction {
        match self {
            TickOutcome::Move(d) | TickOutcome::Terminated(d) => d,
        }
    }
}

/// Drives one agent: sense, check progress, decide.
///
/// Each [`tick`](Self::tick) while [`AgentState::Active`]:
///
/// 1. Feeds the world score to the [`Watchdog`]. When it expires the agent
///    is killed and the default direction returned without consulting the
///    policy.
/// 2. Assembles the configured features around the agent's facing.
/// 3. Asks the policy. Score outputs pick the highest-scoring
///    [`RelativeDirection`](chomp_core::RelativeDirection); malformed
///    outputs kill the agent and surface as [`TickError::Policy`].
/// 4. Reports the score plus the score modifier back to the policy.
///
/// Once terminated every tick returns [`TickOutcome::Terminated`].
pub struct TickBehavior<P> {
    agent: EntityId,
    graph: Arc<MazeGraph>,
    assembler: SensorAssembler,
    watchdog: Watchdog,
    policy: P,
    state: AgentState,
    score_modifier: i64,
}

impl<P: DecisionPolicy> TickBehavior<P> {
    /// Create a behavior for `agent` in the maze `graph` was built for.
    pub fn new(
        agent: EntityId,
        graph: Arc<MazeGraph>,
        config: SensorConfig,
        policy: P,
    ) -> Result<Self, ConfigError> {
        let watchdog = Watchdog::new(config.watchdog);
        let assembler = SensorAssembler::new(config)?;
        Ok(Self {
            agent,
            graph,
            assembler,
            watchdog,
            policy,
            state: AgentState::Active,
            score_modifier: 0,
        })
    }

    /// The agent this behavior drives.
    pub fn agent(&self) -> EntityId {
        self.agent
    }

    /// Current lifecycle state.
    pub fn state(&self) -> AgentState {
        self.state
    }

    /// Layout of the feature vectors handed to the policy.
    pub fn layout(&self) -> &FeatureLayout {
        self.assembler.layout()
    }

    /// The watchdog's current counters.
    pub fn watchdog(&self) -> &Watchdog {
        &self.watchdog
    }

    /// The policy.
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// The policy, mutably.
    pub fn policy_mut(&mut self) -> &mut P {
        &mut self.policy
    }

    /// Give the policy back.
    pub fn into_policy(self) -> P {
        self.policy
    }

    /// Added to the score reported to the policy.
    pub fn score_modifier(&self) -> i64 {
        self.score_modifier
    }

    /// Set the amount added to the score reported to the policy.
    pub fn set_score_modifier(&mut self, modifier: i64) {
        self.score_modifier = modifier;
    }

    /// Run one tick against `world`.
    pub fn tick<W: MazeWorld + ?Sized>(&mut self, world: &mut W) -> Result<TickOutcome, TickError> {
        let fallback = self.assembler.config().default_direction;
        if self.state == AgentState::Terminated {
            return Ok(TickOutcome::Terminated(fallback));
        }

        let agent = *world
            .entity(self.agent)
            .ok_or(TickError::AgentMissing { id: self.agent })?;
        let score = world.score();

        if self.watchdog.observe(score) == WatchdogVerdict::Expired {
            tracing::debug!(
                agent = %self.agent,
                stalled_ticks = self.watchdog.stalled_ticks(),
                score,
                "watchdog expired"
            );
            self.terminate(world);
            return Ok(TickOutcome::Terminated(fallback));
        }

        let features = self.assembler.assemble(&self.graph, &*world, &agent)?;
        let decided = self.policy.decide(&features).and_then(|output| match output {
            PolicyOutput::Direction(d) => Ok(d),
            PolicyOutput::Scores(scores) => argmax(&scores).map(|rel| rel.resolve(agent.facing)),
        });
        let direction = match decided {
            Ok(d) => d,
            Err(err) => return Err(self.reject(world, err)),
        };

        self.policy
            .report_score(score.saturating_add(self.score_modifier));
        Ok(TickOutcome::Move(direction))
    }

    fn reject<W: MazeWorld + ?Sized>(&mut self, world: &mut W, err: PolicyError) -> TickError {
        tracing::warn!(agent = %self.agent, error = %err, "decision policy output rejected");
        self.terminate(world);
        TickError::Policy(err)
    }

    fn terminate<W: MazeWorld + ?Sized>(&mut self, world: &mut W) {
        self.state = AgentState::Terminated;
        world.kill(self.agent);
        tracing::debug!(agent = %self.agent, "agent killed");
    }
}

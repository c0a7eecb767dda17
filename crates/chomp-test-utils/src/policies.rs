//! Reusable decision policies.
//!
//! - [`ConstantPolicy`]: returns the same output every tick.
//! - [`ScriptedPolicy`]: replays a fixed list of outputs and records inputs.
//! - [`FailingPolicy`]: fails deterministically after N calls.

use chomp_agent::{DecisionPolicy, FeatureVector, PolicyError, PolicyOutput};
use chomp_core::Direction;
use std::collections::VecDeque;

/// Returns the same output on every call.
#[derive(Clone, Debug)]
pub struct ConstantPolicy {
    pub output: PolicyOutput,
}

impl ConstantPolicy {
    pub fn new(output: PolicyOutput) -> Self {
        Self { output }
    }

    pub fn direction(direction: Direction) -> Self {
        Self::new(PolicyOutput::Direction(direction))
    }
}

impl DecisionPolicy for ConstantPolicy {
    fn decide(&mut self, _features: &FeatureVector) -> Result<PolicyOutput, PolicyError> {
        Ok(self.output.clone())
    }
}

/// Replays scripted outputs in order, then repeats `fallback`.
///
/// Every feature vector it is shown and every reported score is kept for
/// assertions.
#[derive(Clone, Debug)]
pub struct ScriptedPolicy {
    script: VecDeque<Result<PolicyOutput, PolicyError>>,
    fallback: PolicyOutput,
    pub seen: Vec<FeatureVector>,
    pub reported: Vec<i64>,
}

impl ScriptedPolicy {
    pub fn new(script: impl IntoIterator<Item = Result<PolicyOutput, PolicyError>>) -> Self {
        Self {
            script: script.into_iter().collect(),
            fallback: PolicyOutput::Direction(Direction::Up),
            seen: Vec::new(),
            reported: Vec::new(),
        }
    }

    /// A policy that only records and always answers `Up`.
    pub fn recording() -> Self {
        Self::new([])
    }

    pub fn with_fallback(mut self, fallback: PolicyOutput) -> Self {
        self.fallback = fallback;
        self
    }

    /// The most recent feature vector, if any.
    pub fn last_seen(&self) -> Option<&FeatureVector> {
        self.seen.last()
    }
}

impl DecisionPolicy for ScriptedPolicy {
    fn decide(&mut self, features: &FeatureVector) -> Result<PolicyOutput, PolicyError> {
        self.seen.push(features.clone());
        self.script
            .pop_front()
            .unwrap_or_else(|| Ok(self.fallback.clone()))
    }

    fn report_score(&mut self, score: i64) {
        self.reported.push(score);
    }
}

/// Answers `Up` for `succeed_count` calls, then fails every call.
#[derive(Clone, Debug)]
pub struct FailingPolicy {
    pub succeed_count: usize,
    calls: usize,
}

impl FailingPolicy {
    pub fn new(succeed_count: usize) -> Self {
        Self {
            succeed_count,
            calls: 0,
        }
    }

    /// How many times `decide()` has been called.
    pub fn calls(&self) -> usize {
        self.calls
    }
}

impl DecisionPolicy for FailingPolicy {
    fn decide(&mut self, _features: &FeatureVector) -> Result<PolicyOutput, PolicyError> {
        let n = self.calls;
        self.calls += 1;
        if n >= self.succeed_count {
            return Err(PolicyError::Failed {
                reason: format!("deliberate failure after {} successful calls", self.succeed_count),
            });
        }
        Ok(PolicyOutput::Direction(Direction::Up))
    }
}

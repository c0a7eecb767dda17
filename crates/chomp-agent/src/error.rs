//! Error types for agent ticks.

use crate::policy::PolicyError;
use chomp_core::EntityId;
use chomp_sense::SenseError;

/// Errors from [`TickBehavior::tick`](crate::TickBehavior::tick).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum TickError {
    /// A sensor query failed, e.g. the agent stands on a tile outside the
    /// maze graph.
    #[error("sensing failed: {0}")]
    Sense(#[from] SenseError),
    /// The policy failed or returned an unusable output. The agent has been
    /// killed.
    #[error("decision policy failed: {0}")]
    Policy(#[from] PolicyError),
    /// The world has no entity with the agent's id.
    #[error("agent {id} is not in the world")]
    AgentMissing {
        /// The agent's id.
        id: EntityId,
    },
}

//! Sensor configuration, validation, and error types.
//!
//! [`SensorConfig`] is the input for constructing a
//! [`TickBehavior`](crate::TickBehavior). [`validate()`](SensorConfig::validate)
//! checks it once at construction so a running agent never meets a bad
//! setting mid-episode.

use crate::features::{FeatureKind, FeatureLayout};
use chomp_core::Direction;
use chomp_sense::ThreatProbe;

// ── WatchdogConfig ─────────────────────────────────────────────────

/// Configuration for the no-progress watchdog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WatchdogConfig {
    /// Consecutive ticks without a score increase tolerated before the agent
    /// is terminated. Default: 2400 (40 seconds at 60 ticks per second).
    pub stall_limit: u32,
}

impl WatchdogConfig {
    /// Ticks per second of the reference game loop.
    pub const TICKS_PER_SECOND: u32 = 60;
}

impl Default for WatchdogConfig {
    fn default() -> Self {
        Self {
            stall_limit: Self::TICKS_PER_SECOND * 40,
        }
    }
}

// ── SensorConfig ───────────────────────────────────────────────────

/// What an agent senses each tick and how.
#[derive(Clone, Debug, PartialEq)]
pub struct SensorConfig {
    /// Features to compute, in feature-vector order. Default: [`neat()`](Self::neat).
    pub features: Vec<FeatureKind>,
    /// Numeric value written for an unreachable distance. Default: -1.0.
    pub unreachable: f32,
    /// Reward per pellet on an approach route. Default: 1.0.
    pub pellet_weight: f32,
    /// Ghost distance (hops) below which [`FeatureKind::GhostAlert`] fires.
    /// Default: 5.
    pub ghost_alert_radius: u32,
    /// Threat probe bounds.
    pub threat: ThreatProbe,
    /// Watchdog settings.
    pub watchdog: WatchdogConfig,
    /// Direction returned once the agent is terminated. Default: `Up`.
    pub default_direction: Direction,
}

impl SensorConfig {
    /// Movement, pellet and ghost distances per direction, then score and
    /// pellets remaining: 14 values.
    pub fn neat() -> Self {
        Self::with_features(vec![
            FeatureKind::CanMove,
            FeatureKind::PelletDistance,
            FeatureKind::GhostDistance,
            FeatureKind::Score,
            FeatureKind::PelletsRemaining,
        ])
    }

    /// Movement and a one-hot of the nearest-pellet directions: 8 values.
    pub fn tournament() -> Self {
        Self::with_features(vec![FeatureKind::CanMove, FeatureKind::NearestPelletOneHot])
    }

    /// Default settings with a custom feature list.
    pub fn with_features(features: Vec<FeatureKind>) -> Self {
        Self {
            features,
            unreachable: -1.0,
            pellet_weight: 1.0,
            ghost_alert_radius: 5,
            threat: ThreatProbe::default(),
            watchdog: WatchdogConfig::default(),
            default_direction: Direction::Up,
        }
    }

    /// Check the configuration and compile its feature layout.
    pub fn validate(&self) -> Result<FeatureLayout, ConfigError> {
        let layout = FeatureLayout::new(&self.features)?;
        if self.watchdog.stall_limit == 0 {
            return Err(ConfigError::ZeroStallLimit);
        }
        if !self.unreachable.is_finite() {
            return Err(ConfigError::NonFinite {
                name: "unreachable",
                value: self.unreachable,
            });
        }
        if !self.pellet_weight.is_finite() {
            return Err(ConfigError::NonFinite {
                name: "pellet_weight",
                value: self.pellet_weight,
            });
        }
        if self.pellet_weight < 0.0 {
            return Err(ConfigError::NegativePelletWeight {
                value: self.pellet_weight,
            });
        }
        Ok(layout)
    }
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self::neat()
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SensorConfig::validate()`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The feature list is empty.
    #[error("no features configured")]
    NoFeatures,
    /// A feature appears twice in the feature list.
    #[error("feature {kind} is listed more than once")]
    DuplicateFeature {
        /// The repeated kind.
        kind: FeatureKind,
    },
    /// The watchdog would terminate every agent on its first tick.
    #[error("watchdog stall limit must be at least one tick")]
    ZeroStallLimit,
    /// A numeric setting is NaN or infinite.
    #[error("{name} must be finite, got {value}")]
    NonFinite {
        /// Setting name.
        name: &'static str,
        /// The invalid value.
        value: f32,
    },
    /// Pellet weight is negative.
    #[error("pellet weight must not be negative, got {value}")]
    NegativePelletWeight {
        /// The invalid value.
        value: f32,
    },
}

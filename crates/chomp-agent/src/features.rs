//! Feature catalogue, layout and the per-tick feature vector.

use crate::config::ConfigError;
use chomp_core::RelativeDirection;
use indexmap::map::Entry;
use indexmap::IndexMap;
use std::fmt;
use std::ops::Range;

// ── FeatureKind ────────────────────────────────────────────────────

/// A feature the sensor assembler can compute.
///
/// Per-direction kinds contribute four values in
/// [`RelativeDirection::ALL`] order (forward, left, right, behind); global
/// kinds contribute one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FeatureKind {
    /// 1.0 if the agent can step that way, else 0.0.
    CanMove,
    /// Hops to the nearest pellet through the neighbour in that direction.
    PelletDistance,
    /// Hops to the nearest ghost through the neighbour in that direction.
    GhostDistance,
    /// 1.0 if the threat probe finds a ghost down that corridor.
    GhostThreat,
    /// 1.0 on every direction whose pellet distance is the minimum.
    NearestPelletOneHot,
    /// 1.0 on the first step towards the nearest power pellet.
    PowerPelletDirection,
    /// Normalised pellet approach score, 0.0 for directions without one.
    ApproachScore,
    /// Current score.
    Score,
    /// Pellets and power pellets left in the maze.
    PelletsRemaining,
    /// Hops to the nearest power pellet from the agent's tile.
    PowerPelletDistance,
    /// 1.0 if any direction's ghost distance is inside the alert radius.
    GhostAlert,
}

impl FeatureKind {
    /// Every kind, in declaration order.
    pub const ALL: [FeatureKind; 11] = [
        FeatureKind::CanMove,
        FeatureKind::PelletDistance,
        FeatureKind::GhostDistance,
        FeatureKind::GhostThreat,
        FeatureKind::NearestPelletOneHot,
        FeatureKind::PowerPelletDirection,
        FeatureKind::ApproachScore,
        FeatureKind::Score,
        FeatureKind::PelletsRemaining,
        FeatureKind::PowerPelletDistance,
        FeatureKind::GhostAlert,
    ];

    /// Whether the kind yields one value per relative direction.
    pub fn is_per_direction(self) -> bool {
        !matches!(
            self,
            FeatureKind::Score
                | FeatureKind::PelletsRemaining
                | FeatureKind::PowerPelletDistance
                | FeatureKind::GhostAlert
        )
    }

    /// Number of values the kind contributes.
    pub fn width(self) -> usize {
        if self.is_per_direction() {
            RelativeDirection::ALL.len()
        } else {
            1
        }
    }

    /// Stable snake_case name.
    pub fn name(self) -> &'static str {
        match self {
            FeatureKind::CanMove => "can_move",
            FeatureKind::PelletDistance => "pellet_distance",
            FeatureKind::GhostDistance => "ghost_distance",
            FeatureKind::GhostThreat => "ghost_threat",
            FeatureKind::NearestPelletOneHot => "nearest_pellet",
            FeatureKind::PowerPelletDirection => "power_pellet_direction",
            FeatureKind::ApproachScore => "approach_score",
            FeatureKind::Score => "score",
            FeatureKind::PelletsRemaining => "pellets_remaining",
            FeatureKind::PowerPelletDistance => "power_pellet_distance",
            FeatureKind::GhostAlert => "ghost_alert",
        }
    }
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── FeatureLayout ──────────────────────────────────────────────────

/// Offsets of each configured feature within a [`FeatureVector`].
///
/// Compiled once from the configured feature list; the same list always
/// yields the same layout, so every tick of an agent produces vectors with
/// identical schema.
///
/// # Examples
///
/// ```
/// use chomp_agent::{FeatureKind, FeatureLayout};
///
/// let layout = FeatureLayout::new(&[FeatureKind::CanMove, FeatureKind::Score]).unwrap();
/// assert_eq!(layout.len(), 5);
/// assert_eq!(layout.range(FeatureKind::Score), Some(4..5));
/// assert_eq!(layout.labels()[1], "can_move.left");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeatureLayout {
    offsets: IndexMap<FeatureKind, Range<usize>>,
    len: usize,
}

impl FeatureLayout {
    /// Lay out `kinds` in order. Fails on an empty list or a repeated kind.
    pub fn new(kinds: &[FeatureKind]) -> Result<Self, ConfigError> {
        if kinds.is_empty() {
            return Err(ConfigError::NoFeatures);
        }
        let mut offsets = IndexMap::with_capacity(kinds.len());
        let mut len = 0;
        for &kind in kinds {
            match offsets.entry(kind) {
                Entry::Occupied(_) => return Err(ConfigError::DuplicateFeature { kind }),
                Entry::Vacant(slot) => {
                    slot.insert(len..len + kind.width());
                }
            }
            len += kind.width();
        }
        Ok(Self { offsets, len })
    }

    /// Total number of values.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the layout has no values. Never true for a built layout.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index range of `kind`, if configured.
    pub fn range(&self, kind: FeatureKind) -> Option<Range<usize>> {
        self.offsets.get(&kind).cloned()
    }

    /// Whether `kind` is configured.
    pub fn contains(&self, kind: FeatureKind) -> bool {
        self.offsets.contains_key(&kind)
    }

    /// Configured kinds in layout order.
    pub fn kinds(&self) -> impl Iterator<Item = FeatureKind> + '_ {
        self.offsets.keys().copied()
    }

    /// One label per value, e.g. `ghost_distance.behind` or `score`.
    pub fn labels(&self) -> Vec<String> {
        let mut labels = Vec::with_capacity(self.len);
        for kind in self.kinds() {
            if kind.is_per_direction() {
                for rel in RelativeDirection::ALL {
                    labels.push(format!("{kind}.{rel}"));
                }
            } else {
                labels.push(kind.name().to_owned());
            }
        }
        labels
    }
}

// ── FeatureVector ──────────────────────────────────────────────────

/// The numeric inputs handed to a decision policy for one tick.
#[derive(Clone, Debug, PartialEq)]
pub struct FeatureVector {
    values: Vec<f32>,
}

impl FeatureVector {
    /// Wrap raw values.
    pub fn new(values: Vec<f32>) -> Self {
        Self { values }
    }

    /// All values in layout order.
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// Number of values.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the vector is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The values `layout` assigns to `kind`.
    pub fn feature(&self, layout: &FeatureLayout, kind: FeatureKind) -> Option<&[f32]> {
        self.values.get(layout.range(kind)?)
    }

    /// Consume into the raw values.
    pub fn into_inner(self) -> Vec<f32> {
        self.values
    }
}

impl AsRef<[f32]> for FeatureVector {
    fn as_ref(&self) -> &[f32] {
        &self.values
    }
}

//! Hop-count distances with an unreachable sentinel.

use std::fmt;

/// Number of graph edges along a shortest path.
///
/// [`Distance::UNREACHABLE`] is the reserved "no target in this connected
/// region" marker. It compares greater than every reachable distance, so the
/// nearest of several results is still a plain `min`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Distance(u32);

impl Distance {
    /// Distance to a target on the start tile itself.
    pub const ZERO: Distance = Distance(0);

    /// Sentinel for a target that cannot be reached.
    pub const UNREACHABLE: Distance = Distance(u32::MAX);

    /// A reachable distance of `hops` edges.
    ///
    /// `u32::MAX` is reserved; it saturates to the largest reachable value.
    pub fn hops(hops: u32) -> Self {
        Self(hops.min(u32::MAX - 1))
    }

    /// Whether a target was found.
    pub fn is_reachable(self) -> bool {
        self != Self::UNREACHABLE
    }

    /// The hop count, or `None` for the sentinel.
    pub fn get(self) -> Option<u32> {
        self.is_reachable().then_some(self.0)
    }

    /// Add `extra` hops. The sentinel stays unreachable.
    pub fn plus(self, extra: u32) -> Self {
        match self.get() {
            Some(h) => Self::hops(h.saturating_add(extra)),
            None => Self::UNREACHABLE,
        }
    }

    /// Numeric feature encoding: the hop count, or `unreachable` for the
    /// sentinel.
    pub fn encode(self, unreachable: f32) -> f32 {
        match self.get() {
            Some(h) => h as f32,
            None => unreachable,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(h) => write!(f, "{h}"),
            None => f.write_str("unreachable"),
        }
    }
}

//! Border behavior for tile grids.

/// How a grid treats steps that leave its bounds.
///
/// # Examples
///
/// ```
/// use chomp_core::{Direction, TileCoord};
/// use chomp_space::{EdgeBehavior, TileGrid};
///
/// let absorb = TileGrid::new(3, 5, EdgeBehavior::Absorb).unwrap();
/// let wrap = TileGrid::new(3, 5, EdgeBehavior::Wrap).unwrap();
/// let west_edge = TileCoord::new(1, 0);
///
/// assert_eq!(absorb.neighbour(west_edge, Direction::Left), None);
/// assert_eq!(wrap.neighbour(west_edge, Direction::Left), Some(TileCoord::new(1, 4)));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EdgeBehavior {
    /// Out-of-bounds neighbour does not exist.
    #[default]
    Absorb,
    /// Out-of-bounds neighbour wraps to the opposite side (tunnels).
    Wrap,
}

impl EdgeBehavior {
    /// Resolve a single axis value. Returns `None` for an absorbed step.
    pub(crate) fn resolve_axis(self, val: i32, len: u32) -> Option<i32> {
        let n = len as i32;
        if val >= 0 && val < n {
            return Some(val);
        }
        match self {
            EdgeBehavior::Absorb => None,
            EdgeBehavior::Wrap => Some(((val % n) + n) % n),
        }
    }
}

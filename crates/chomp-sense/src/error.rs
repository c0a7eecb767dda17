//! Error types for sensor queries.

use chomp_space::SpaceError;

/// Errors from path-finding queries.
///
/// An unreachable target is not an error: it is reported as
/// [`Distance::UNREACHABLE`](chomp_core::Distance::UNREACHABLE). Errors here
/// mean the caller passed something the graph cannot answer for.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SenseError {
    /// A start tile is not a graph node, or lies outside the grid.
    #[error("invalid query tile: {0}")]
    Space(#[from] SpaceError),

    /// The graph and the tile grid were built for different mazes.
    #[error("maze graph is {graph_rows}x{graph_cols} but tile grid is {grid_rows}x{grid_cols}")]
    GridMismatch {
        /// Graph rows.
        graph_rows: u32,
        /// Graph columns.
        graph_cols: u32,
        /// Grid rows.
        grid_rows: u32,
        /// Grid columns.
        grid_cols: u32,
    },

    /// The graph and the tile grid have the same dimensions but different
    /// walls.
    #[error("maze graph was built for a different layout than the tile grid")]
    LayoutMismatch {
        /// Fingerprint of the layout the graph was built from.
        graph: u64,
        /// Fingerprint of the tile grid's layout.
        grid: u64,
    },
}

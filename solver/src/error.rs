//! Errors surfaced by grid construction, strategy lookup and route
//! composition.
//!
//! An unreachable endpoint is not among them: searches report it as an
//! empty path with no cost.

use crate::grid::Cell;

pub type Result<T> = std::result::Result<T, RouteError>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RouteError {
    /// Non-positive dimensions or a coordinate outside the grid
    #[error("invalid grid spec: {0}")]
    InvalidGridSpec(String),

    /// Traversal cost that is zero, negative or not finite
    #[error("invalid cost {cost} at {cell}: costs must be finite and positive")]
    InvalidCost { cell: Cell, cost: f64 },

    #[error("unknown strategy '{0}' (expected one of: bfs, dfs, dijkstra)")]
    UnknownStrategy(String),

    /// Fewer than two waypoints
    #[error("a route needs at least 2 waypoints, got {0}")]
    DegenerateWaypoints(usize),

    /// Waypoint coordinate outside the grid
    #[error("waypoint ({row}, {col}) lies outside the {rows}x{cols} grid")]
    InvalidWaypoint {
        row: i64,
        col: i64,
        rows: usize,
        cols: usize,
    },
}

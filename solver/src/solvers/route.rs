use log::{debug, warn};

use crate::algorithms::SearchStrategy;
use crate::error::{Result, RouteError};
use crate::grid::{Cell, Grid};

/// A search chained across every consecutive waypoint pair.
///
/// Join cells shared by neighbouring segments appear once in `path`;
/// `explored` keeps every segment's trace in full, repeats included.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResult {
    pub path: Vec<Cell>,
    pub explored: Vec<Cell>,
    pub cost: Option<f64>,
}

impl RouteResult {
    pub fn is_reachable(&self) -> bool {
        self.cost.is_some()
    }

    pub fn nodes_explored(&self) -> usize {
        self.explored.len()
    }

    pub fn path_length(&self) -> usize {
        self.path.len()
    }
}

/// `[start, stops.., end]`
pub fn waypoints(start: Cell, stops: impl IntoIterator<Item = Cell>, end: Cell) -> Vec<Cell> {
    std::iter::once(start)
        .chain(stops)
        .chain(std::iter::once(end))
        .collect()
}

/// Run `strategy` once per consecutive waypoint pair and merge the results.
///
/// The first unreachable segment ends the route: the returned path is
/// empty, the cost is `None`, and `explored` holds every trace gathered up
/// to and including the failing segment.
pub fn compose<S: SearchStrategy + ?Sized>(
    strategy: &S,
    grid: &Grid,
    waypoints: &[Cell],
) -> Result<RouteResult> {
    if waypoints.len() < 2 {
        return Err(RouteError::DegenerateWaypoints(waypoints.len()));
    }

    let mut path: Vec<Cell> = Vec::new();
    let mut explored = Vec::new();
    let mut total = 0.0;

    for (i, pair) in waypoints.windows(2).enumerate() {
        let (start, end) = (pair[0], pair[1]);
        let segment = strategy.search(grid, start, end);
        explored.extend(segment.explored);

        let Some(cost) = segment.cost.filter(|_| !segment.path.is_empty()) else {
            warn!(
                "{}: segment {} {start} -> {end} unreachable after {} explored",
                strategy.name(),
                i + 1,
                explored.len()
            );
            return Ok(RouteResult {
                path: Vec::new(),
                explored,
                cost: None,
            });
        };

        debug!(
            "{}: segment {} {start} -> {end}: {} cells, cost {cost}",
            strategy.name(),
            i + 1,
            segment.path.len()
        );

        let skip = usize::from(i > 0);
        path.extend(segment.path.into_iter().skip(skip));
        total += cost;
    }

    Ok(RouteResult {
        path,
        explored,
        cost: Some(total),
    })
}

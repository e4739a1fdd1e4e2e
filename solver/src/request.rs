//! Request and response shapes for the outer shell.
//!
//! A request carries untyped coordinates; converting it validates them
//! against the grid it describes before any search runs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::algorithms::Strategy;
use crate::error::{Result, RouteError};
use crate::grid::{Cell, DEFAULT_COLS, DEFAULT_ROWS, Grid, GridBuilder};
use crate::solvers::{Comparison, RouteResult, StrategyReport, waypoints};

/// A route request as read from JSON.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteRequest {
    /// Grid height (defaults to 20)
    pub rows: Option<i64>,

    /// Grid width (defaults to 30)
    pub cols: Option<i64>,

    /// Blocked cells as `[row, col]`
    #[serde(default)]
    pub obstacles: Vec<[i64; 2]>,

    /// Entry cost overrides as `[row, col, cost]`
    #[serde(default)]
    pub traffic: Vec<(i64, i64, f64)>,

    pub start: [i64; 2],

    pub end: [i64; 2],

    /// Intermediate stops, visited in order
    #[serde(default)]
    pub stops: Vec<[i64; 2]>,

    /// Strategy name, if the request picks one
    pub algorithm: Option<String>,
}

impl RouteRequest {
    pub fn grid(&self) -> Result<Grid> {
        let rows = dimension("rows", self.rows, DEFAULT_ROWS)?;
        let cols = dimension("cols", self.cols, DEFAULT_COLS)?;

        GridBuilder::new(rows, cols)
            .obstacles(self.obstacles.iter().map(|&[r, c]| (r, c)))
            .traffic_all(self.traffic.iter().copied())
            .build()
    }

    /// `[start, stops.., end]`, each checked against `grid`'s bounds.
    pub fn waypoints(&self, grid: &Grid) -> Result<Vec<Cell>> {
        let start = locate(grid, self.start)?;
        let end = locate(grid, self.end)?;
        let stops = self
            .stops
            .iter()
            .map(|&p| locate(grid, p))
            .collect::<Result<Vec<_>>>()?;

        Ok(waypoints(start, stops, end))
    }

    /// `None` when the request names no strategy.
    pub fn strategy(&self) -> Option<Result<Strategy>> {
        self.algorithm.as_deref().map(Strategy::from_name)
    }
}

fn dimension(name: &str, value: Option<i64>, default: usize) -> Result<usize> {
    match value {
        None => Ok(default),
        Some(v) => usize::try_from(v)
            .ok()
            .filter(|&v| v > 0)
            .ok_or_else(|| RouteError::InvalidGridSpec(format!("{name} must be positive, got {v}"))),
    }
}

fn locate(grid: &Grid, [row, col]: [i64; 2]) -> Result<Cell> {
    Cell::from_signed(row, col)
        .filter(|&cell| grid.contains(cell))
        .ok_or(RouteError::InvalidWaypoint {
            row,
            col,
            rows: grid.rows(),
            cols: grid.cols(),
        })
}

/// Response for a single strategy run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResponse {
    pub path: Vec<Cell>,
    pub explored: Vec<Cell>,
    /// `null` when unreachable
    pub cost: Option<f64>,
    pub nodes_explored: usize,
}

impl From<RouteResult> for RouteResponse {
    fn from(route: RouteResult) -> Self {
        let nodes_explored = route.nodes_explored();
        Self {
            path: route.path,
            explored: route.explored,
            cost: route.cost,
            nodes_explored,
        }
    }
}

/// One strategy's entry in a run-all response.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategyResponse {
    #[serde(flatten)]
    pub route: RouteResponse,
    pub path_length: usize,
}

impl From<&StrategyReport> for StrategyResponse {
    fn from(report: &StrategyReport) -> Self {
        Self {
            path_length: report.path_length(),
            route: report.route.clone().into(),
        }
    }
}

pub type CompareResponse = BTreeMap<Strategy, StrategyResponse>;

impl From<&Comparison> for CompareResponse {
    fn from(comparison: &Comparison) -> Self {
        comparison
            .reports
            .iter()
            .map(|r| (r.strategy, r.into()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solvers::{compare_all, compose};

    fn parse(json: &str) -> RouteRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn defaults() {
        let request = parse(r#"{"start": [0, 0], "end": [19, 29]}"#);
        let grid = request.grid().unwrap();
        assert_eq!(grid.bounds(), (20, 30));
        assert_eq!(
            request.waypoints(&grid).unwrap(),
            vec![Cell::new(0, 0), Cell::new(19, 29)]
        );
        assert!(request.strategy().is_none());
    }

    #[test]
    fn full_request() {
        let request = parse(
            r#"{
                "rows": 3, "cols": 3,
                "obstacles": [[0, 1]],
                "traffic": [[2, 2, 4], [1, 1, 2.5]],
                "start": [0, 0], "end": [0, 2], "stops": [[2, 2]],
                "algorithm": "dijkstra"
            }"#,
        );
        let grid = request.grid().unwrap();
        assert!(grid.is_blocked(Cell::new(0, 1)));
        assert_eq!(grid.cost(Cell::new(2, 2)), 4.0);
        assert_eq!(grid.cost(Cell::new(1, 1)), 2.5);
        assert_eq!(
            request.waypoints(&grid).unwrap(),
            vec![Cell::new(0, 0), Cell::new(2, 2), Cell::new(0, 2)]
        );
        assert_eq!(request.strategy(), Some(Ok(Strategy::Dijkstra)));
    }

    #[test]
    fn rejects_bad_input() {
        let request = parse(r#"{"rows": 0, "start": [0, 0], "end": [1, 1]}"#);
        assert!(matches!(request.grid(), Err(RouteError::InvalidGridSpec(_))));

        let request = parse(r#"{"rows": 4611686018427387904, "cols": 4, "start": [0, 0], "end": [1, 1]}"#);
        assert!(matches!(request.grid(), Err(RouteError::InvalidGridSpec(_))));

        let request = parse(r#"{"rows": 2, "cols": 2, "obstacles": [[5, 5]], "start": [0, 0], "end": [1, 1]}"#);
        assert!(matches!(request.grid(), Err(RouteError::InvalidGridSpec(_))));

        let request = parse(r#"{"rows": 2, "cols": 2, "traffic": [[1, 1, 0]], "start": [0, 0], "end": [1, 1]}"#);
        assert!(matches!(request.grid(), Err(RouteError::InvalidCost { .. })));

        let request = parse(r#"{"rows": 2, "cols": 2, "start": [0, 0], "end": [1, -1]}"#);
        let grid = request.grid().unwrap();
        assert_eq!(
            request.waypoints(&grid),
            Err(RouteError::InvalidWaypoint {
                row: 1,
                col: -1,
                rows: 2,
                cols: 2
            })
        );

        let request = parse(r#"{"start": [0, 0], "end": [1, 1], "algorithm": "greedy"}"#);
        assert_eq!(
            request.strategy(),
            Some(Err(RouteError::UnknownStrategy("greedy".into())))
        );
    }

    #[test]
    fn route_response_shape() {
        let request = parse(r#"{"rows": 2, "cols": 2, "start": [0, 0], "end": [1, 1]}"#);
        let grid = request.grid().unwrap();
        let points = request.waypoints(&grid).unwrap();
        let route = compose(&Strategy::Bfs, &grid, &points).unwrap();

        let json = serde_json::to_value(RouteResponse::from(route)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "path": [[0, 0], [0, 1], [1, 1]],
                "explored": [[0, 0], [0, 1], [1, 0], [1, 1]],
                "cost": 2.0,
                "nodes_explored": 4
            })
        );
    }

    #[test]
    fn unreachable_cost_is_null() {
        let request = parse(
            r#"{"rows": 2, "cols": 2, "obstacles": [[0, 1], [1, 0]], "start": [0, 0], "end": [1, 1]}"#,
        );
        let grid = request.grid().unwrap();
        let points = request.waypoints(&grid).unwrap();
        let route = compose(&Strategy::Dfs, &grid, &points).unwrap();

        let json = serde_json::to_value(RouteResponse::from(route)).unwrap();
        assert_eq!(json["cost"], serde_json::Value::Null);
        assert_eq!(json["path"], serde_json::json!([]));
        assert_eq!(json["nodes_explored"], 1);
    }

    #[test]
    fn compare_response_keys() {
        let request = parse(r#"{"rows": 3, "cols": 3, "start": [0, 0], "end": [2, 2]}"#);
        let grid = request.grid().unwrap();
        let points = request.waypoints(&grid).unwrap();
        let comparison = compare_all(&grid, &points).unwrap();

        let response = CompareResponse::from(&comparison);
        let json = serde_json::to_value(&response).unwrap();
        let keys: Vec<_> = json.as_object().unwrap().keys().cloned().collect();
        assert_eq!(keys, vec!["bfs", "dfs", "dijkstra"]);
        assert_eq!(json["dijkstra"]["path_length"], 5);
        assert_eq!(json["dijkstra"]["cost"], 4.0);
    }
}

use std::time::{Duration, Instant};

use log::{debug, info};

use crate::algorithms::Strategy;
use crate::error::{Result, RouteError};
use crate::grid::{Cell, Grid};

use super::route::{RouteResult, compose};

pub struct StrategyReport {
    pub strategy: Strategy,
    pub route: RouteResult,
    pub planning_time: Duration,
}

impl StrategyReport {
    pub fn nodes_explored(&self) -> usize {
        self.route.nodes_explored()
    }

    pub fn path_length(&self) -> usize {
        self.route.path_length()
    }
}

/// One report per registered strategy, in registry order.
pub struct Comparison {
    pub reports: Vec<StrategyReport>,
}

impl Comparison {
    pub fn get(&self, strategy: Strategy) -> Option<&StrategyReport> {
        self.reports.iter().find(|r| r.strategy == strategy)
    }

    /// Cheapest reachable route; ties keep registry order.
    pub fn best_by_cost(&self) -> Option<&StrategyReport> {
        self.reports
            .iter()
            .filter_map(|r| r.route.cost.map(|cost| (cost, r)))
            .min_by(|(a, _), (b, _)| a.total_cmp(b))
            .map(|(_, r)| r)
    }

    pub fn fewest_explored(&self) -> Option<&StrategyReport> {
        self.reports.iter().min_by_key(|r| r.nodes_explored())
    }
}

/// Run every registered strategy over the same grid and waypoints.
pub fn compare_all(grid: &Grid, waypoints: &[Cell]) -> Result<Comparison> {
    if waypoints.len() < 2 {
        return Err(RouteError::DegenerateWaypoints(waypoints.len()));
    }

    info!(
        "comparing {} strategies over {} waypoints",
        Strategy::ALL.len(),
        waypoints.len()
    );

    let reports = Strategy::all()
        .map(|strategy| {
            let planning_start = Instant::now();
            let route = compose(&strategy, grid, waypoints)?;
            let planning_time = planning_start.elapsed();

            debug!(
                "{strategy}: {} cells, {} explored in {planning_time:?}",
                route.path_length(),
                route.nodes_explored()
            );

            Ok(StrategyReport {
                strategy,
                route,
                planning_time,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Comparison { reports })
}

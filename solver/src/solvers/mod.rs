mod compare;
mod route;

pub use compare::{Comparison, StrategyReport, compare_all};
pub use route::{RouteResult, compose, waypoints};

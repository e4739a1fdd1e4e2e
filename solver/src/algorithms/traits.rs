use crate::grid::{Cell, Grid};

pub trait SearchStrategy {
    /// Search from `start` to `end` over a read-only grid. An unreachable
    /// `end` is reported through [`SearchResult::unreachable`], not as an
    /// error.
    fn search(&self, grid: &Grid, start: Cell, end: Cell) -> SearchResult;

    fn name(&self) -> &'static str;
}

/// Outcome of a single start→end search.
///
/// `path` runs from start to end inclusive and is empty when no path
/// exists. `explored` lists cells in the order the strategy finalized them.
/// `cost` is `None` when `end` is unreachable.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    pub path: Vec<Cell>,
    pub explored: Vec<Cell>,
    pub cost: Option<f64>,
}

impl SearchResult {
    pub fn found(path: Vec<Cell>, explored: Vec<Cell>, cost: f64) -> Self {
        Self {
            path,
            explored,
            cost: Some(cost),
        }
    }

    pub fn unreachable(explored: Vec<Cell>) -> Self {
        Self {
            path: Vec::new(),
            explored,
            cost: None,
        }
    }

    pub fn is_reachable(&self) -> bool {
        !self.path.is_empty()
    }
}

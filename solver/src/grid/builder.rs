use log::trace;

use super::{Cell, DEFAULT_COLS, DEFAULT_COST, DEFAULT_ROWS, Grid, MAX_CELLS};
use crate::error::{Result, RouteError};

/// Collects obstacle and traffic input for a [`Grid`].
///
/// Coordinates arrive as signed integers straight from untyped input and
/// are only checked in [`GridBuilder::build`], so a builder never panics.
#[derive(Debug, Clone)]
pub struct GridBuilder {
    rows: usize,
    cols: usize,
    obstacles: Vec<(i64, i64)>,
    traffic: Vec<(i64, i64, f64)>,
}

impl GridBuilder {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            obstacles: Vec::new(),
            traffic: Vec::new(),
        }
    }

    pub fn obstacle(mut self, row: i64, col: i64) -> Self {
        self.obstacles.push((row, col));
        self
    }

    pub fn obstacles(mut self, cells: impl IntoIterator<Item = (i64, i64)>) -> Self {
        self.obstacles.extend(cells);
        self
    }

    /// Later entries for the same cell override earlier ones.
    pub fn traffic(mut self, row: i64, col: i64, cost: f64) -> Self {
        self.traffic.push((row, col, cost));
        self
    }

    pub fn traffic_all(mut self, entries: impl IntoIterator<Item = (i64, i64, f64)>) -> Self {
        self.traffic.extend(entries);
        self
    }

    pub fn build(self) -> Result<Grid> {
        if self.rows == 0 || self.cols == 0 {
            return Err(RouteError::InvalidGridSpec(format!(
                "dimensions must be positive, got {}x{}",
                self.rows, self.cols
            )));
        }

        let size = self
            .rows
            .checked_mul(self.cols)
            .filter(|&size| size <= MAX_CELLS)
            .ok_or_else(|| {
                RouteError::InvalidGridSpec(format!(
                    "{}x{} grid is too large (at most {MAX_CELLS} cells)",
                    self.rows, self.cols
                ))
            })?;
        let mut blocked = vec![false; size];
        let mut costs = vec![DEFAULT_COST; size];

        for &(row, col) in &self.obstacles {
            let cell = self.locate("obstacle", row, col)?;
            blocked[cell.to_index(self.cols)] = true;
        }

        for &(row, col, cost) in &self.traffic {
            let cell = self.locate("traffic", row, col)?;
            if !cost.is_finite() || cost <= 0.0 {
                return Err(RouteError::InvalidCost { cell, cost });
            }
            costs[cell.to_index(self.cols)] = cost;
        }

        trace!(
            "built {}x{} grid: {} obstacles, {} traffic overrides",
            self.rows,
            self.cols,
            self.obstacles.len(),
            self.traffic.len()
        );

        Ok(Grid::from_parts(self.rows, self.cols, blocked, costs))
    }

    fn locate(&self, what: &str, row: i64, col: i64) -> Result<Cell> {
        Cell::from_signed(row, col)
            .filter(|c| c.row < self.rows && c.col < self.cols)
            .ok_or_else(|| {
                RouteError::InvalidGridSpec(format!(
                    "{what} ({row}, {col}) outside {}x{} grid",
                    self.rows, self.cols
                ))
            })
    }
}

impl Default for GridBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}

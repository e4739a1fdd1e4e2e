use super::cell::Cell;

/// Immutable traversal surface produced by [`GridBuilder`](super::GridBuilder).
///
/// Blocked flags and entry costs are stored row-major, one slot per cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    blocked: Vec<bool>,
    costs: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Grid {
    pub(super) fn from_parts(rows: usize, cols: usize, blocked: Vec<bool>, costs: Vec<f64>) -> Self {
        debug_assert_eq!(blocked.len(), rows * cols);
        debug_assert_eq!(costs.len(), rows * cols);
        Self {
            blocked,
            costs,
            rows,
            cols,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn bounds(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    pub fn is_blocked(&self, cell: Cell) -> bool {
        self.contains(cell) && self.blocked[cell.to_index(self.cols)]
    }

    /// In bounds and not blocked.
    pub fn is_valid(&self, cell: Cell) -> bool {
        self.contains(cell) && !self.blocked[cell.to_index(self.cols)]
    }

    /// Valid cells one axis-aligned step away: right, down, left, up.
    pub fn neighbors(&self, cell: Cell) -> Vec<Cell> {
        cell.adjacent().filter(|c| self.is_valid(*c)).collect()
    }

    /// Cost charged for entering `cell`.
    ///
    /// # Panics
    ///
    /// Panics if `cell` lies outside the grid.
    pub fn cost(&self, cell: Cell) -> f64 {
        assert!(
            self.contains(cell),
            "{cell} outside {}x{} grid",
            self.rows,
            self.cols
        );
        self.costs[cell.to_index(self.cols)]
    }

    /// Sum of entry costs along `path`, skipping the first cell.
    pub fn path_cost(&self, path: &[Cell]) -> f64 {
        path.iter().skip(1).map(|&c| self.cost(c)).sum()
    }

    pub fn blocked_count(&self) -> usize {
        self.blocked.iter().filter(|&&b| b).count()
    }
}

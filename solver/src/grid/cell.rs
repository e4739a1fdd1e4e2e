use std::fmt;
use std::ops::Add;

use serde::Serialize;

/// Row/col deltas of the four axis-aligned steps, in expansion order.
pub const STEPS: [(isize, isize); 4] = [(0, 1), (1, 0), (0, -1), (-1, 0)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(into = "[usize; 2]")]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// None when either coordinate is negative
    pub fn from_signed(row: i64, col: i64) -> Option<Self> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        Some(Self::new(row, col))
    }

    pub fn to_index(self, cols: usize) -> usize {
        self.row * cols + self.col
    }

    pub fn from_index(index: usize, cols: usize) -> Self {
        Self::new(index / cols, index % cols)
    }

    pub fn manhattan_distance(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Candidate cells one step away, in [`STEPS`] order, before any bounds
    /// or obstacle filtering beyond the origin.
    pub fn adjacent(self) -> impl Iterator<Item = Self> {
        STEPS.into_iter().filter_map(move |step| self + step)
    }
}

impl Add<(isize, isize)> for Cell {
    type Output = Option<Self>;

    fn add(self, (dr, dc): (isize, isize)) -> Self::Output {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        Some(Self::new(row, col))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<Cell> for [usize; 2] {
    fn from(cell: Cell) -> Self {
        [cell.row, cell.col]
    }
}

mod bounded;
mod builder;
mod cell;

pub use bounded::Grid;
pub use builder::GridBuilder;
pub use cell::{Cell, STEPS};

pub const DEFAULT_ROWS: usize = 20;
pub const DEFAULT_COLS: usize = 30;
pub const DEFAULT_COST: f64 = 1.0;
/// Upper bound on `rows * cols` accepted by [`GridBuilder::build`].
pub const MAX_CELLS: usize = 1 << 24;

pub mod algorithms;
pub mod error;
pub mod grid;
pub mod request;
pub mod solvers;

pub use algorithms::{SearchResult, SearchStrategy, Strategy};
pub use error::{Result, RouteError};
pub use grid::{Cell, Grid, GridBuilder};
pub use solvers::{Comparison, RouteResult, compare_all, compose, waypoints};

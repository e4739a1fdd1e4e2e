mod bfs;
mod dfs;
mod dijkstra;
mod registry;
pub mod traits;

pub use bfs::BFS;
pub use dfs::DFS;
pub use dijkstra::Dijkstra;
pub use registry::Strategy;
pub use traits::{SearchResult, SearchStrategy};

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::Serialize;

use crate::error::{Result, RouteError};
use crate::grid::{Cell, Grid};

use super::{BFS, DFS, Dijkstra, SearchResult, SearchStrategy};

/// Registered search strategies, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    Bfs,
    Dfs,
    Dijkstra,
}

static REGISTRY: LazyLock<HashMap<&'static str, Strategy>> =
    LazyLock::new(|| Strategy::ALL.into_iter().map(|s| (s.name(), s)).collect());

impl Strategy {
    pub const ALL: [Self; 3] = [Self::Bfs, Self::Dfs, Self::Dijkstra];

    pub fn all() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter()
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Bfs => BFS.name(),
            Self::Dfs => DFS.name(),
            Self::Dijkstra => Dijkstra.name(),
        }
    }

    pub fn from_name(name: &str) -> Result<Self> {
        REGISTRY
            .get(name)
            .copied()
            .ok_or_else(|| RouteError::UnknownStrategy(name.to_string()))
    }
}

impl SearchStrategy for Strategy {
    fn search(&self, grid: &Grid, start: Cell, end: Cell) -> SearchResult {
        match self {
            Self::Bfs => BFS.search(grid, start, end),
            Self::Dfs => DFS.search(grid, start, end),
            Self::Dijkstra => Dijkstra.search(grid, start, end),
        }
    }

    fn name(&self) -> &'static str {
        Strategy::name(self)
    }
}

impl FromStr for Strategy {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for strategy in Strategy::all() {
            assert_eq!(Strategy::from_name(strategy.name()), Ok(strategy));
            assert_eq!(strategy.to_string().parse::<Strategy>(), Ok(strategy));
        }
    }

    #[test]
    fn registry_names() {
        let names: Vec<_> = Strategy::all().map(|s| s.name()).collect();
        assert_eq!(names, vec!["bfs", "dfs", "dijkstra"]);
    }

    #[test]
    fn unknown_name() {
        assert_eq!(
            Strategy::from_name("astar"),
            Err(RouteError::UnknownStrategy("astar".into()))
        );
        // lookup is exact
        assert!(Strategy::from_name("BFS").is_err());
    }

    #[test]
    fn serde_uses_registry_names() {
        for strategy in Strategy::all() {
            let json = serde_json::to_string(&strategy).unwrap();
            assert_eq!(json, format!("\"{}\"", strategy.name()));
        }
    }

    #[test]
    fn dispatches_to_matching_algorithm() {
        let grid = crate::grid::GridBuilder::new(2, 2).build().unwrap();
        let (start, end) = (Cell::new(0, 0), Cell::new(0, 1));
        assert_eq!(Strategy::Bfs.search(&grid, start, end), BFS.search(&grid, start, end));
        assert_eq!(Strategy::Dfs.search(&grid, start, end), DFS.search(&grid, start, end));
        assert_eq!(
            Strategy::Dijkstra.search(&grid, start, end),
            Dijkstra.search(&grid, start, end)
        );
    }
}

use std::collections::HashSet;

use crate::grid::{Cell, Grid};

use super::traits::{SearchResult, SearchStrategy};

/// Depth-first search over a stack of `(cell, path-so-far)` entries.
///
/// A cell may be pushed several times before its first pop; duplicates are
/// discarded when popped. Neighbors pushed last are explored first, so the
/// explored order runs against the grid's neighbor order.
#[allow(clippy::upper_case_acronyms)]
pub struct DFS;

impl SearchStrategy for DFS {
    fn search(&self, grid: &Grid, start: Cell, end: Cell) -> SearchResult {
        let mut visited = HashSet::new();
        let mut stack = vec![(start, vec![start])];
        let mut explored = Vec::new();

        while let Some((current, path)) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            explored.push(current);

            if current == end {
                let cost = grid.path_cost(&path);
                return SearchResult::found(path, explored, cost);
            }

            for neighbor in grid.neighbors(current) {
                if !visited.contains(&neighbor) {
                    let mut next = path.clone();
                    next.push(neighbor);
                    stack.push((neighbor, next));
                }
            }
        }

        SearchResult::unreachable(explored)
    }

    fn name(&self) -> &'static str {
        "dfs"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::GridBuilder;

    fn c(row: usize, col: usize) -> Cell {
        Cell::new(row, col)
    }

    #[test]
    fn start_equals_end() {
        let grid = GridBuilder::new(3, 3).build().unwrap();
        let result = DFS.search(&grid, c(2, 0), c(2, 0));
        assert_eq!(result.path, vec![c(2, 0)]);
        assert_eq!(result.explored, vec![c(2, 0)]);
        assert_eq!(result.cost, Some(0.0));
    }

    #[test]
    fn explores_last_pushed_first() {
        // from (0,0) the pushes are (0,1) then (1,0); (1,0) pops first
        let grid = GridBuilder::new(2, 2).build().unwrap();
        let result = DFS.search(&grid, c(0, 0), c(0, 1));
        assert_eq!(result.explored, vec![c(0, 0), c(1, 0), c(1, 1), c(0, 1)]);
        assert_eq!(result.path, vec![c(0, 0), c(1, 0), c(1, 1), c(0, 1)]);
        assert_eq!(result.cost, Some(3.0));
    }

    #[test]
    fn duplicate_pushes_are_skipped_on_pop() {
        let grid = GridBuilder::new(3, 3).build().unwrap();
        let result = DFS.search(&grid, c(0, 0), c(2, 2));
        let unique: HashSet<_> = result.explored.iter().collect();
        assert_eq!(unique.len(), result.explored.len());
        assert_eq!(result.path.first(), Some(&c(0, 0)));
        assert_eq!(result.path.last(), Some(&c(2, 2)));
    }

    #[test]
    fn avoids_obstacle() {
        let grid = GridBuilder::new(3, 3).obstacle(0, 1).build().unwrap();
        let result = DFS.search(&grid, c(0, 0), c(0, 2));
        assert!(result.is_reachable());
        assert!(!result.path.contains(&c(0, 1)));
        for pair in result.path.windows(2) {
            assert_eq!(pair[0].manhattan_distance(pair[1]), 1);
        }
    }

    #[test]
    fn unreachable() {
        let grid = GridBuilder::new(3, 3)
            .obstacles([(0, 1), (1, 0)])
            .build()
            .unwrap();
        let result = DFS.search(&grid, c(0, 0), c(2, 2));
        assert_eq!(result.path, Vec::new());
        assert_eq!(result.explored, vec![c(0, 0)]);
        assert_eq!(result.cost, None);
    }
}

use std::collections::{HashSet, VecDeque};

use crate::grid::{Cell, Grid};

use super::traits::{SearchResult, SearchStrategy};

/// Breadth-first search: fewest steps, costs only reported.
///
/// Cells are marked visited when enqueued and recorded as explored when
/// dequeued. Each queue entry carries its own path prefix.
#[allow(clippy::upper_case_acronyms)]
pub struct BFS;

impl SearchStrategy for BFS {
    fn search(&self, grid: &Grid, start: Cell, end: Cell) -> SearchResult {
        let mut visited = HashSet::from([start]);
        let mut queue = VecDeque::from([(start, vec![start])]);
        let mut explored = Vec::new();

        while let Some((current, path)) = queue.pop_front() {
            explored.push(current);

            if current == end {
                let cost = grid.path_cost(&path);
                return SearchResult::found(path, explored, cost);
            }

            for neighbor in grid.neighbors(current) {
                if visited.insert(neighbor) {
                    let mut next = path.clone();
                    next.push(neighbor);
                    queue.push_back((neighbor, next));
                }
            }
        }

        SearchResult::unreachable(explored)
    }

    fn name(&self) -> &'static str {
        "bfs"
    }
}

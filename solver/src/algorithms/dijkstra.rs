use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

use log::trace;

use crate::grid::{Cell, Grid};

use super::traits::{SearchResult, SearchStrategy};

#[derive(Copy, Clone, Debug)]
struct State {
    cost: f64,
    cell: Cell,
}

// min-heap on (cost, row, col); costs are finite so total_cmp is a total order
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.cell.row.cmp(&self.cell.row))
            .then_with(|| other.cell.col.cmp(&self.cell.col))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}

/// Uniform-cost search, minimizing the summed entry cost of the path.
///
/// Stale heap entries are left in place and skipped once their cell has
/// been finalized.
pub struct Dijkstra;

impl SearchStrategy for Dijkstra {
    fn search(&self, grid: &Grid, start: Cell, end: Cell) -> SearchResult {
        if start == end {
            return SearchResult::found(vec![start], vec![start], 0.0);
        }

        let mut heap = BinaryHeap::from([State {
            cost: 0.0,
            cell: start,
        }]);
        let mut distances: HashMap<Cell, f64> = HashMap::from([(start, 0.0)]);
        let mut came_from: HashMap<Cell, Cell> = HashMap::new();
        let mut finalized: HashSet<Cell> = HashSet::new();
        let mut explored = Vec::new();

        while let Some(State { cost, cell }) = heap.pop() {
            if !finalized.insert(cell) {
                trace!("skipping stale entry {cell} at {cost}");
                continue;
            }
            explored.push(cell);

            if cell == end {
                break;
            }

            for neighbor in grid.neighbors(cell) {
                if finalized.contains(&neighbor) {
                    continue;
                }

                let candidate = cost + grid.cost(neighbor);
                let improves = distances
                    .get(&neighbor)
                    .is_none_or(|&current| candidate < current);

                if improves {
                    distances.insert(neighbor, candidate);
                    came_from.insert(neighbor, cell);
                    heap.push(State {
                        cost: candidate,
                        cell: neighbor,
                    });
                }
            }
        }

        match (
            reconstruct_path(&came_from, start, end),
            distances.get(&end),
        ) {
            (Some(path), Some(&cost)) => SearchResult::found(path, explored, cost),
            _ => SearchResult::unreachable(explored),
        }
    }

    fn name(&self) -> &'static str {
        "dijkstra"
    }
}

fn reconstruct_path(came_from: &HashMap<Cell, Cell>, start: Cell, end: Cell) -> Option<Vec<Cell>> {
    let mut path = vec![end];
    let mut current = end;

    while current != start {
        current = *came_from.get(&current)?;
        path.push(current);
    }

    path.reverse();
    Some(path)
}

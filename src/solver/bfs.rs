use std::collections::VecDeque;

use grid_util::point::Point;

use crate::pathing_grid::PathingGrid;
use crate::solver::{begin, GridSolver, SearchResult};
use crate::BFS_ORDER;

/// Breadth-first search with a FIFO frontier. Finds a path with the fewest steps.
///
/// Cells are marked visited when they are enqueued rather than when they are dequeued, so no
/// cell enters the queue twice.
#[derive(Clone, Debug, Default)]
pub struct BfsSolver;

impl GridSolver for BfsSolver {
    fn name(&self) -> &'static str {
        "BFS"
    }

    fn search(&self, grid: &mut PathingGrid, start: Point, end: Point) -> SearchResult {
        let (mut trace, endpoints) = begin(self.name(), grid, start, end);
        let Some((start_ix, end_ix)) = endpoints else {
            return trace.finish(None);
        };
        let mut queue = VecDeque::from([start_ix]);
        grid.cell_mut(start_ix).is_visited = true;

        while let Some(current) = queue.pop_front() {
            trace.visit(grid, current);
            if current == end_ix {
                grid.cell_mut(current).is_target = true;
                return trace.finish(Some(end));
            }
            for n in grid.neighbour_indices(current, &BFS_ORDER).into_iter().flatten() {
                let neighbour = grid.cell_mut(n);
                if neighbour.is_wall || neighbour.is_visited {
                    continue;
                }
                neighbour.previous_cell = Some(current);
                neighbour.is_visited = true;
                queue.push_back(n);
            }
        }
        trace.finish(None)
    }
}

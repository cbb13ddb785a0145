use grid_util::point::Point;

use crate::pathing_grid::PathingGrid;
use crate::solver::{begin, GridSolver, SearchResult};
use crate::DFS_ORDER;

/// Depth-first search with a LIFO frontier. Finds a path whenever one exists, but not
/// necessarily a short one.
///
/// A cell is marked visited when it is expanded. It can be pushed from several branches before
/// that happens; the copies popped afterwards are skipped. The back-pointer is rewritten on
/// every push, and the latest push is the copy on top of the stack, so a cell is always
/// expanded with the pointer its expanding copy set.
#[derive(Clone, Debug, Default)]
pub struct DfsSolver;

impl GridSolver for DfsSolver {
    fn name(&self) -> &'static str {
        "DFS"
    }

    fn search(&self, grid: &mut PathingGrid, start: Point, end: Point) -> SearchResult {
        let (mut trace, endpoints) = begin(self.name(), grid, start, end);
        let Some((start_ix, end_ix)) = endpoints else {
            return trace.finish(None);
        };
        let mut stack = vec![start_ix];

        while let Some(current) = stack.pop() {
            if grid.cell_by_number(current).map_or(true, |cell| cell.is_visited()) {
                continue;
            }
            grid.cell_mut(current).is_visited = true;
            trace.visit(grid, current);
            if current == end_ix {
                grid.cell_mut(current).is_target = true;
                return trace.finish(Some(end));
            }
            for n in grid.neighbour_indices(current, &DFS_ORDER).into_iter().flatten() {
                let neighbour = grid.cell_mut(n);
                if neighbour.is_wall || neighbour.is_visited {
                    continue;
                }
                neighbour.previous_cell = Some(current);
                stack.push(n);
            }
        }
        trace.finish(None)
    }
}

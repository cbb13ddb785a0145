use fxhash::FxBuildHasher;
use grid_util::point::Point;
use indexmap::IndexSet;

use crate::pathing_grid::PathingGrid;
use crate::solver::{begin, GridSolver, SearchResult};
use crate::{DIJKSTRA_ORDER, UNREACHABLE};

type FxIndexSet<K> = IndexSet<K, FxBuildHasher>;

/// Uniform-cost search with explicit distance labels. Every step costs 1, which makes the
/// result as short as breadth-first search while the labels stay meaningful for weighted
/// variants.
///
/// The unfinalized cells are kept in row-major order and rescanned for the smallest label on
/// every iteration, so ties go to the cell that comes first in that order.
#[derive(Clone, Debug, Default)]
pub struct DijkstraSolver;

impl GridSolver for DijkstraSolver {
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn search(&self, grid: &mut PathingGrid, start: Point, end: Point) -> SearchResult {
        let (mut trace, endpoints) = begin(self.name(), grid, start, end);
        let Some((start_ix, end_ix)) = endpoints else {
            return trace.finish(None);
        };
        // Only the start of this run is at 0, whichever cell is flagged as start.
        for cell in grid.cells_mut() {
            cell.distance_from_start = UNREACHABLE;
        }
        grid.cell_mut(start_ix).distance_from_start = 0;
        let mut remaining: FxIndexSet<usize> =
            grid.flatten().map(|cell| cell.cell_number()).collect();

        while let Some((position, current, distance)) = closest(grid, &remaining) {
            remaining.shift_remove_index(position);
            if distance == UNREACHABLE {
                break;
            }
            // Walls never receive a finite label, so only a walled start gets here.
            if grid.cell_mut(current).is_wall {
                continue;
            }
            grid.cell_mut(current).is_visited = true;
            trace.visit(grid, current);
            if current == end_ix {
                grid.cell_mut(current).is_target = true;
                return trace.finish(Some(end));
            }
            let relaxed = distance + 1;
            for n in grid.neighbour_indices(current, &DIJKSTRA_ORDER).into_iter().flatten() {
                let neighbour = grid.cell_mut(n);
                if neighbour.is_wall || neighbour.is_visited {
                    continue;
                }
                if relaxed < neighbour.distance_from_start {
                    neighbour.distance_from_start = relaxed;
                    neighbour.previous_cell = Some(current);
                }
            }
        }
        trace.finish(None)
    }
}

/// Position in `remaining`, cell number and label of the first cell with the smallest label.
fn closest(grid: &PathingGrid, remaining: &FxIndexSet<usize>) -> Option<(usize, usize, u32)> {
    remaining
        .iter()
        .enumerate()
        .filter_map(|(position, &ix)| {
            grid.cell_by_number(ix)
                .map(|cell| (position, ix, cell.distance_from_start()))
        })
        .min_by_key(|&(_, _, distance)| distance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::BfsSolver;

    fn rc(row: i32, col: i32) -> Point {
        Point::new(col, row)
    }

    #[test]
    fn labels_count_steps_from_start() {
        // |S  |
        // | # |
        // |  E|
        let mut grid: PathingGrid = "S..\n.#.\n..E".parse().unwrap();
        let end = rc(2, 2);
        let result = DijkstraSolver.search(&mut grid, rc(0, 0), end);
        assert!(result.found());
        assert_eq!(grid.cell(end).unwrap().distance_from_start(), 4);
        assert_eq!(grid.cell(rc(0, 2)).unwrap().distance_from_start(), 2);
        assert_eq!(grid.cell(rc(1, 1)).unwrap().distance_from_start(), UNREACHABLE);
        let distances = grid
            .back_pointers(end)
            .map(|cell| cell.distance_from_start())
            .collect::<Vec<_>>();
        assert_eq!(distances, vec![4, 3, 2, 1, 0]);
    }

    #[test]
    fn ties_go_to_row_major_order() {
        let mut grid = PathingGrid::new(3, 3);
        let result = DijkstraSolver.search(&mut grid, rc(0, 0), rc(2, 2));
        assert_eq!(
            result.visited,
            vec![
                rc(0, 0),
                rc(0, 1),
                rc(1, 0),
                rc(0, 2),
                rc(1, 1),
                rc(2, 0),
                rc(1, 2),
                rc(2, 1),
                rc(2, 2)
            ]
        );
        // (1, 2) is finalized before (2, 1) and relaxes the end first.
        assert_eq!(
            grid.reconstruct_path(rc(2, 2)),
            vec![rc(0, 0), rc(0, 1), rc(0, 2), rc(1, 2), rc(2, 2)]
        );
    }

    #[test]
    fn walled_start_finds_nothing() {
        //  __
        // |# |
        // |  |
        //  __
        let mut grid: PathingGrid = "#.\n..".parse().unwrap();
        let end = rc(1, 1);
        let result = DijkstraSolver.search(&mut grid, rc(0, 0), end);
        assert!(!result.found());
        assert!(result.visited.is_empty());
        assert!(grid.flatten().all(|cell| cell.distance_from_start() == UNREACHABLE
            || cell.is_wall()));
        assert!(grid.reconstruct_path(end).is_empty());
    }

    #[test]
    fn same_length_as_bfs() {
        let layout = "S..#....\n.#.#.##.\n.#...#..\n.####.#.\n......#E";
        let start = rc(0, 0);
        let end = rc(4, 7);
        let mut grid: PathingGrid = layout.parse().unwrap();
        let dijkstra_path = DijkstraSolver.get_path(&mut grid, start, end).unwrap();
        let bfs_path = BfsSolver.get_path(&mut grid, start, end).unwrap();
        assert_eq!(dijkstra_path.len(), bfs_path.len());
    }
}

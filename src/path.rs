use grid_util::point::Point;

use crate::cell::Cell;
use crate::pathing_grid::PathingGrid;

impl PathingGrid {
    /// Walks the back-pointers left by the last search, from `end` towards the start. The walk
    /// is lazy and can be restarted by cloning the iterator. A point outside the grid yields
    /// nothing.
    pub fn back_pointers(&self, end: Point) -> impl Iterator<Item = &Cell> + Clone + '_ {
        std::iter::successors(self.cell(end), move |cell| {
            cell.previous_cell()
                .and_then(|ix| self.cell_by_number(ix))
        })
        // Chains are acyclic, the bound keeps a corrupted chain finite.
        .take(self.len())
    }

    /// The path found by the last search, from the start to `end` inclusive. Empty if `end` was
    /// not reached, that is if it has no back-pointer and is not the start of the last search.
    /// The search start is the only cell a search visits without linking it, so a flagged start
    /// that the last search never touched has no path either.
    pub fn reconstruct_path(&self, end: Point) -> Vec<Point> {
        let reached = self.cell(end).map_or(false, |cell| {
            cell.previous_cell().is_some() || cell.is_visited() || cell.is_target()
        });
        if !reached {
            return Vec::new();
        }
        let mut path = self.back_pointers(end).map(Cell::point).collect::<Vec<_>>();
        path.reverse();
        path
    }
}

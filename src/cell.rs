use grid_util::point::Point;

use crate::UNREACHABLE;

/// One position of a [PathingGrid](crate::pathing_grid::PathingGrid).
///
/// The layout flags (`is_wall`, `is_start_point`, `is_end_point`) persist until they are
/// edited through the grid. The remaining fields are search state that every search resets
/// before it runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    cell_number: usize,
    row: usize,
    col: usize,
    pub(crate) is_wall: bool,
    pub(crate) is_start_point: bool,
    pub(crate) is_end_point: bool,
    pub(crate) is_visited: bool,
    pub(crate) distance_from_start: u32,
    pub(crate) previous_cell: Option<usize>,
    pub(crate) is_target: bool,
}

impl Cell {
    pub(crate) fn new(cell_number: usize, row: usize, col: usize) -> Cell {
        Cell {
            cell_number,
            row,
            col,
            is_wall: false,
            is_start_point: false,
            is_end_point: false,
            is_visited: false,
            distance_from_start: UNREACHABLE,
            previous_cell: None,
            is_target: false,
        }
    }

    /// Row-major index of the cell, which is also its index in the grid storage.
    pub fn cell_number(&self) -> usize {
        self.cell_number
    }
    pub fn row(&self) -> usize {
        self.row
    }
    pub fn col(&self) -> usize {
        self.col
    }
    /// The cell position with `x` as column and `y` as row.
    pub fn point(&self) -> Point {
        Point::new(self.col as i32, self.row as i32)
    }
    pub fn is_wall(&self) -> bool {
        self.is_wall
    }
    pub fn is_start_point(&self) -> bool {
        self.is_start_point
    }
    pub fn is_end_point(&self) -> bool {
        self.is_end_point
    }
    pub fn is_visited(&self) -> bool {
        self.is_visited
    }
    /// Steps from the start found by the last uniform-cost search, [UNREACHABLE] otherwise.
    pub fn distance_from_start(&self) -> u32 {
        self.distance_from_start
    }
    /// Cell number of the cell this one was reached from during the last search.
    pub fn previous_cell(&self) -> Option<usize> {
        self.previous_cell
    }
    pub fn is_target(&self) -> bool {
        self.is_target
    }
    pub(crate) fn is_endpoint(&self) -> bool {
        self.is_start_point || self.is_end_point
    }

    pub(crate) fn clear_search_state(&mut self) {
        self.is_visited = false;
        self.distance_from_start = UNREACHABLE;
        self.previous_cell = None;
        self.is_target = false;
    }
}

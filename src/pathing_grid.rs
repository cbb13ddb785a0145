use core::fmt;
use std::str::FromStr;

use grid_util::direction::Direction;
use grid_util::grid::{Grid, SimpleGrid};
use grid_util::point::Point;
use itertools::Itertools;
use log::info;
use petgraph::unionfind::UnionFind;

use crate::cell::Cell;
use crate::error::GridError;
use crate::{DOWN, RIGHT};

/// [PathingGrid] owns the cells of the board in a [SimpleGrid], laid out row-major with `x` as
/// column and `y` as row. Back-pointers between cells are cell numbers, which double as indices
/// into the storage. In addition to the cells it maintains a [UnionFind] over 4-connected open
/// cells so reachability can be checked without searching.
#[derive(Clone, Debug)]
pub struct PathingGrid {
    pub(crate) grid: SimpleGrid<Cell>,
    start: Option<usize>,
    end: Option<usize>,
    pub components: UnionFind<usize>,
    pub components_dirty: bool,
}

impl Default for PathingGrid {
    fn default() -> PathingGrid {
        PathingGrid::new(0, 0)
    }
}

impl PathingGrid {
    /// Creates a grid of open cells. Every cell is its own component until
    /// [generate_components](Self::generate_components) runs, so the components start dirty.
    pub fn new(width: usize, height: usize) -> PathingGrid {
        let values = (0..width * height)
            .map(|ix| Cell::new(ix, ix / width.max(1), ix % width.max(1)))
            .collect();
        PathingGrid {
            grid: SimpleGrid {
                width,
                height,
                values,
            },
            start: None,
            end: None,
            components: UnionFind::new(width * height),
            components_dirty: true,
        }
    }
    pub fn width(&self) -> usize {
        self.grid.width()
    }
    pub fn height(&self) -> usize {
        self.grid.height()
    }
    pub fn len(&self) -> usize {
        self.grid.values.len()
    }
    pub fn is_empty(&self) -> bool {
        self.grid.values.is_empty()
    }

    pub fn in_bounds(&self, point: Point) -> bool {
        self.grid.point_in_bounds(point)
    }
    /// Cell number of the point, checked against the grid bounds.
    pub fn index(&self, point: Point) -> Option<usize> {
        if self.in_bounds(point) {
            Some(self.grid.get_ix_point(&point))
        } else {
            None
        }
    }
    pub fn cell(&self, point: Point) -> Option<&Cell> {
        self.index(point).map(|ix| &self.grid.values[ix])
    }
    /// Looks a cell up by its cell number.
    pub fn cell_by_number(&self, cell_number: usize) -> Option<&Cell> {
        self.grid.values.get(cell_number)
    }
    pub(crate) fn cell_mut(&mut self, ix: usize) -> &mut Cell {
        &mut self.grid.values[ix]
    }
    pub(crate) fn cells_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.grid.values.iter_mut()
    }

    /// All cells in row-major order.
    pub fn flatten(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.grid.values.iter()
    }
    /// The 2D view of the grid, one slice per row.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.grid.values.chunks(self.width().max(1))
    }

    /// Cell numbers of the neighbours of `ix` in the given direction order. Positions outside
    /// the grid are `None`; walls and visited cells are left for the caller to filter.
    pub(crate) fn neighbour_indices(
        &self,
        ix: usize,
        order: &[Direction; 4],
    ) -> [Option<usize>; 4] {
        let point = self.grid.values[ix].point();
        order.map(|direction| self.index(point + direction))
    }
    fn open_neighbours(&self, ix: usize) -> impl Iterator<Item = usize> + '_ {
        self.neighbour_indices(ix, &crate::BFS_ORDER)
            .into_iter()
            .flatten()
            .filter(|&n| !self.grid.values[n].is_wall)
    }

    pub fn start(&self) -> Option<Point> {
        self.start.map(|ix| self.grid.values[ix].point())
    }
    pub fn end(&self) -> Option<Point> {
        self.end.map(|ix| self.grid.values[ix].point())
    }
    pub fn is_wall(&self, point: Point) -> bool {
        self.cell(point).map_or(false, Cell::is_wall)
    }

    fn checked_index(&self, point: Point) -> Result<usize, GridError> {
        self.index(point).ok_or(GridError::OutOfBounds(point))
    }

    /// Blocks or opens a cell. Joins newly connected components and flags the components
    /// as dirty if components are (potentially) broken apart into multiple.
    pub fn set_wall(&mut self, point: Point, blocked: bool) -> Result<(), GridError> {
        let ix = self.checked_index(point)?;
        if blocked && self.grid.values[ix].is_endpoint() {
            return Err(GridError::EndpointWall(point));
        }
        self.set_wall_unchecked(ix, blocked);
        Ok(())
    }
    /// Flips the wall flag of a cell and returns the new value.
    pub fn toggle_wall(&mut self, point: Point) -> Result<bool, GridError> {
        let blocked = !self.is_wall(point);
        self.set_wall(point, blocked)?;
        Ok(blocked)
    }
    pub(crate) fn set_wall_unchecked(&mut self, ix: usize, blocked: bool) {
        if self.grid.values[ix].is_wall == blocked {
            return;
        }
        self.grid.values[ix].is_wall = blocked;
        if blocked {
            self.components_dirty = true;
        } else {
            let neighbours = self.open_neighbours(ix).collect::<Vec<_>>();
            for n in neighbours {
                self.components.union(ix, n);
            }
        }
    }
    /// Opens every cell, keeping start and end in place.
    pub fn clear_walls(&mut self) {
        for ix in 0..self.grid.values.len() {
            self.grid.values[ix].is_wall = false;
        }
        self.components_dirty = true;
    }

    /// Moves the start point to `point`, clearing a wall there.
    pub fn set_start(&mut self, point: Point) -> Result<(), GridError> {
        let ix = self.checked_index(point)?;
        if self.grid.values[ix].is_end_point {
            return Err(GridError::EndpointOverlap(point));
        }
        self.clear_start();
        self.set_wall_unchecked(ix, false);
        let cell = &mut self.grid.values[ix];
        cell.is_start_point = true;
        cell.distance_from_start = 0;
        self.start = Some(ix);
        Ok(())
    }
    /// Moves the end point to `point`, clearing a wall there.
    pub fn set_end(&mut self, point: Point) -> Result<(), GridError> {
        let ix = self.checked_index(point)?;
        if self.grid.values[ix].is_start_point {
            return Err(GridError::EndpointOverlap(point));
        }
        self.clear_end();
        self.set_wall_unchecked(ix, false);
        self.grid.values[ix].is_end_point = true;
        self.end = Some(ix);
        Ok(())
    }
    pub fn clear_start(&mut self) {
        if let Some(ix) = self.start.take() {
            let cell = &mut self.grid.values[ix];
            cell.is_start_point = false;
            cell.distance_from_start = crate::UNREACHABLE;
        }
    }
    pub fn clear_end(&mut self) {
        if let Some(ix) = self.end.take() {
            self.grid.values[ix].is_end_point = false;
        }
    }

    /// Clears all search state. Walls are cleared unless `keep_walls` is set, start and end
    /// unless `keep_endpoints` is set.
    pub fn reset(&mut self, keep_walls: bool, keep_endpoints: bool) {
        for cell in self.grid.values.iter_mut() {
            cell.clear_search_state();
        }
        if !keep_walls {
            self.clear_walls();
        }
        if keep_endpoints {
            if let Some(ix) = self.start {
                self.grid.values[ix].distance_from_start = 0;
            }
        } else {
            self.clear_start();
            self.clear_end();
        }
    }
    /// Clears the search state of every cell, and with `clear_walls` also walls, start and end.
    pub fn reset_transient(&mut self, clear_walls: bool) {
        self.reset(!clear_walls, !clear_walls);
    }

    /// Checks if start and goal are on the same connected component.
    pub fn reachable(&self, start: &Point, goal: &Point) -> bool {
        !self.unreachable(start, goal)
    }
    /// Checks if start and goal are not on the same connected component.
    pub fn unreachable(&self, start: &Point, goal: &Point) -> bool {
        match (self.index(*start), self.index(*goal)) {
            (Some(start_ix), Some(goal_ix)) => {
                self.grid.values[start_ix].is_wall
                    || self.grid.values[goal_ix].is_wall
                    || !self.components.equiv(start_ix, goal_ix)
            }
            _ => true,
        }
    }
    /// Regenerates the components if they are marked as dirty.
    pub fn update(&mut self) {
        if self.components_dirty {
            self.generate_components();
        }
    }
    /// Generates a new [UnionFind] structure and links up open neighbours to the same components.
    pub fn generate_components(&mut self) {
        info!(
            "Generating connected components for {}x{} grid",
            self.width(),
            self.height()
        );
        self.components = UnionFind::new(self.grid.values.len());
        self.components_dirty = false;
        for ix in 0..self.grid.values.len() {
            if self.grid.values[ix].is_wall {
                continue;
            }
            // Right and down suffice, the other two links are made from the neighbour.
            let point = self.grid.values[ix].point();
            let linked = [RIGHT, DOWN]
                .into_iter()
                .filter_map(|direction| self.index(point + direction))
                .filter(|&n| !self.grid.values[n].is_wall)
                .collect::<Vec<_>>();
            for n in linked {
                self.components.union(ix, n);
            }
        }
    }
}

fn symbol(cell: &Cell) -> char {
    if cell.is_start_point {
        'S'
    } else if cell.is_end_point {
        'E'
    } else if cell.is_wall {
        '#'
    } else {
        '.'
    }
}

/// Renders the layout with `S` start, `E` end, `#` wall and `.` open, one line per row.
impl fmt::Display for PathingGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", row.iter().map(symbol).join(""))?;
        }
        Ok(())
    }
}

/// Parses the layout written by [Display](fmt::Display). Blank lines and surrounding
/// whitespace are ignored.
impl FromStr for PathingGrid {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>();
        let width = match lines.first() {
            Some(line) => line.chars().count(),
            None => return Err(GridError::EmptyLayout),
        };
        let mut grid = PathingGrid::new(width, lines.len());
        for (row, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(GridError::RaggedRow {
                    row,
                    expected: width,
                    found,
                });
            }
            for (col, symbol) in line.chars().enumerate() {
                let point = Point::new(col as i32, row as i32);
                match symbol {
                    '.' => {}
                    '#' => grid.set_wall(point, true)?,
                    'S' if grid.start.is_some() => return Err(GridError::DuplicateStart { row, col }),
                    'S' => grid.set_start(point)?,
                    'E' if grid.end.is_some() => return Err(GridError::DuplicateEnd { row, col }),
                    'E' => grid.set_end(point)?,
                    symbol => return Err(GridError::UnknownSymbol { symbol, row, col }),
                }
            }
        }
        grid.generate_components();
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::UNREACHABLE;

    #[test]
    fn cells_are_numbered_row_major() {
        let grid = PathingGrid::new(4, 3);
        let numbers = grid.flatten().map(Cell::cell_number).collect::<Vec<_>>();
        assert_eq!(numbers, (0..12).collect::<Vec<_>>());
        let cell = grid.cell(Point::new(1, 2)).unwrap();
        assert_eq!((cell.row(), cell.col(), cell.cell_number()), (2, 1, 9));
        assert_eq!(grid.rows().count(), 3);
        assert!(grid.rows().all(|row| row.len() == 4));
    }

    #[test]
    fn bounds_are_checked_before_indexing() {
        let grid = PathingGrid::new(2, 2);
        assert_eq!(grid.index(Point::new(-1, 0)), None);
        assert_eq!(grid.index(Point::new(0, 2)), None);
        assert_eq!(grid.index(Point::new(1, 1)), Some(3));
        // |01|
        // |23|
        assert_eq!(
            grid.neighbour_indices(0, &crate::BFS_ORDER),
            [Some(1), None, Some(2), None]
        );
    }

    #[test]
    fn endpoints_cannot_be_walls() {
        let mut grid = PathingGrid::new(3, 1);
        let p = Point::new(1, 0);
        grid.set_wall(p, true).unwrap();
        grid.set_start(p).unwrap();
        assert!(!grid.is_wall(p));
        assert_eq!(grid.set_wall(p, true), Err(GridError::EndpointWall(p)));
        assert_eq!(grid.set_end(p), Err(GridError::EndpointOverlap(p)));
        assert_eq!(
            grid.toggle_wall(Point::new(5, 0)),
            Err(GridError::OutOfBounds(Point::new(5, 0)))
        );
    }

    #[test]
    fn moving_the_start_clears_the_old_flag() {
        let mut grid = PathingGrid::new(3, 1);
        grid.set_start(Point::new(0, 0)).unwrap();
        grid.set_start(Point::new(2, 0)).unwrap();
        assert_eq!(grid.start(), Some(Point::new(2, 0)));
        assert_eq!(grid.flatten().filter(|c| c.is_start_point()).count(), 1);
        let old = grid.cell(Point::new(0, 0)).unwrap();
        assert_eq!(old.distance_from_start(), UNREACHABLE);
        assert_eq!(grid.cell(Point::new(2, 0)).unwrap().distance_from_start(), 0);
        grid.clear_start();
        assert_eq!(grid.start(), None);
    }

    #[test]
    fn reset_keeps_what_is_asked_for() {
        let mut grid: PathingGrid = "S#\n.E".parse().unwrap();
        grid.cell_mut(2).is_visited = true;
        grid.cell_mut(2).previous_cell = Some(0);
        grid.reset(true, true);
        assert!(grid.is_wall(Point::new(1, 0)));
        assert_eq!(grid.start(), Some(Point::new(0, 0)));
        assert!(!grid.cell_by_number(2).unwrap().is_visited());
        assert_eq!(grid.cell_by_number(2).unwrap().previous_cell(), None);
        grid.reset(true, false);
        assert!(grid.is_wall(Point::new(1, 0)));
        assert_eq!((grid.start(), grid.end()), (None, None));
    }

    #[test]
    fn reset_transient_with_walls_clears_everything() {
        let mut grid: PathingGrid = "S#.\n.#.\n..E".parse().unwrap();
        for cell in grid.cells_mut() {
            cell.is_visited = true;
            cell.is_target = true;
            cell.distance_from_start = 3;
            cell.previous_cell = Some(0);
        }
        grid.reset_transient(true);
        assert!(grid.flatten().all(|cell| !cell.is_visited()
            && !cell.is_wall()
            && !cell.is_target()
            && cell.previous_cell().is_none()
            && cell.distance_from_start() == UNREACHABLE
            && !cell.is_start_point()
            && !cell.is_end_point()));
    }

    #[test]
    fn layout_round_trips() {
        let layout = "S..#\n.##.\n...E\n";
        let grid: PathingGrid = layout.parse().unwrap();
        assert_eq!((grid.width(), grid.height()), (4, 3));
        assert_eq!(grid.start(), Some(Point::new(0, 0)));
        assert_eq!(grid.end(), Some(Point::new(3, 2)));
        assert_eq!(grid.to_string(), layout);
    }

    #[test]
    fn malformed_layouts_are_rejected() {
        assert_eq!("".parse::<PathingGrid>().unwrap_err(), GridError::EmptyLayout);
        assert_eq!(
            "...\n..".parse::<PathingGrid>().unwrap_err(),
            GridError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            }
        );
        assert_eq!(
            ".x".parse::<PathingGrid>().unwrap_err(),
            GridError::UnknownSymbol {
                symbol: 'x',
                row: 0,
                col: 1
            }
        );
        assert_eq!(
            "S.S".parse::<PathingGrid>().unwrap_err(),
            GridError::DuplicateStart { row: 0, col: 2 }
        );
        assert_eq!(
            "E\nE".parse::<PathingGrid>().unwrap_err(),
            GridError::DuplicateEnd { row: 1, col: 0 }
        );
    }

    /// Tests whether points are correctly mapped to different connected components
    #[test]
    fn test_component_generation() {
        //  ___
        // | # |
        // | # |
        //  ___
        let mut grid: PathingGrid = ".#.\n.#.".parse().unwrap();
        let p1 = Point::new(0, 0);
        let p2 = Point::new(1, 1);
        let p3 = Point::new(0, 1);
        let p4 = Point::new(2, 0);
        assert!(grid.unreachable(&p1, &p2));
        assert!(grid.reachable(&p1, &p3));
        assert!(grid.unreachable(&p1, &p4));
        grid.set_wall(Point::new(1, 1), false).unwrap();
        assert!(grid.reachable(&p1, &p4));
        grid.set_wall(Point::new(1, 1), true).unwrap();
        assert!(grid.components_dirty);
        grid.update();
        assert!(grid.unreachable(&p1, &p4));
    }

    /// Asserts that the two corners are connected on a 4-grid.
    #[test]
    fn reachable_around_obstacle() {
        // |S  |
        // | # |
        // |  G|
        //  ___
        let mut grid = PathingGrid::new(3, 3);
        grid.set_wall(Point::new(1, 1), true).unwrap();
        grid.generate_components();
        assert!(grid.reachable(&Point::new(0, 0), &Point::new(2, 2)));
        assert!(grid.unreachable(&Point::new(0, 0), &Point::new(3, 3)));
    }
}

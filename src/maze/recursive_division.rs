use grid_util::point::Point;
use log::info;
use rand::Rng;

use crate::pathing_grid::PathingGrid;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Orientation {
    /// Runs along a row, spanning columns.
    Horizontal,
    /// Runs along a column, spanning rows.
    Vertical,
}

struct Divider<'a, R: ?Sized> {
    grid: &'a mut PathingGrid,
    keep_open: [Option<usize>; 4],
    rng: &'a mut R,
    walls: usize,
}

/// Builds a maze by recursive division. Existing walls are cleared first.
///
/// Each step splits the current region along its longer axis (rows win ties) with a wall on a
/// randomly chosen odd position, then recurses into both halves. Regions narrower than two cells
/// in either direction are left alone, and a wall spanning exactly two cells is not drawn.
///
/// Every wall leaves an opening. A crossed endpoint stays open and is the opening; when it sits
/// on an odd position the cell before it is opened as well. Endpoints are the `start` and `end`
/// arguments and the cells the grid flags as start and end. Otherwise one of the even positions
/// of the wall is left open at random. Walls only land on odd lines, so openings on even
/// positions are never closed by a later wall.
pub fn recursive_division_maze<R: Rng + ?Sized>(
    grid: &mut PathingGrid,
    start: Option<Point>,
    end: Option<Point>,
    rng: &mut R,
) {
    grid.clear_walls();
    let rows = (0..grid.height()).collect::<Vec<_>>();
    let cols = (0..grid.width()).collect::<Vec<_>>();
    let flagged = |point: Option<Point>| point.and_then(|p| grid.index(p));
    let keep_open = [
        flagged(start),
        flagged(end),
        flagged(grid.start()),
        flagged(grid.end()),
    ];
    let mut divider = Divider {
        grid,
        keep_open,
        rng,
        walls: 0,
    };
    divider.divide(&rows, &cols);
    info!(
        "Recursive division placed {} walls on {}x{} grid",
        divider.walls,
        divider.grid.width(),
        divider.grid.height()
    );
}

impl<R: Rng + ?Sized> Divider<'_, R> {
    fn divide(&mut self, rows: &[usize], cols: &[usize]) {
        if rows.len() < 2 || cols.len() < 2 {
            return;
        }
        if cols.len() > rows.len() {
            let position = self.odd_position(cols.len());
            self.draw(Orientation::Vertical, cols[position], rows);
            self.divide(rows, &cols[..position]);
            self.divide(rows, &cols[position + 1..]);
        } else {
            let position = self.odd_position(rows.len());
            self.draw(Orientation::Horizontal, rows[position], cols);
            self.divide(&rows[..position], cols);
            self.divide(&rows[position + 1..], cols);
        }
    }

    /// A random odd index below `len`, which is at least 2.
    fn odd_position(&mut self, len: usize) -> usize {
        2 * self.rng.gen_range(0..len / 2) + 1
    }

    /// Draws a wall on `line` across `span`. Every span starts on an even index and is
    /// contiguous.
    fn draw(&mut self, orientation: Orientation, line: usize, span: &[usize]) {
        if span.len() == 2 {
            return;
        }
        let mut wall = Vec::with_capacity(span.len());
        let mut skipped = Vec::new();
        for &across in span {
            let (row, col) = match orientation {
                Orientation::Horizontal => (line, across),
                Orientation::Vertical => (across, line),
            };
            let point = Point::new(col as i32, row as i32);
            let Some(ix) = self.grid.index(point) else {
                continue;
            };
            if self.keep_open.contains(&Some(ix)) {
                skipped.push(across);
            } else {
                wall.push((across, ix));
            }
        }

        if skipped.is_empty() {
            let even = wall
                .iter()
                .enumerate()
                .filter(|&(_, &(across, _))| across % 2 == 0)
                .map(|(position, _)| position)
                .collect::<Vec<_>>();
            if !even.is_empty() {
                let gap = even[self.rng.gen_range(0..even.len())];
                wall.remove(gap);
            }
        } else {
            for across in skipped.into_iter().filter(|across| across % 2 == 1) {
                wall.retain(|&(other, _)| other + 1 != across);
            }
        }

        for (_, ix) in wall {
            self.grid.set_wall_unchecked(ix, true);
            self.walls += 1;
        }
    }
}

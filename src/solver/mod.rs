use core::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};

use grid_util::point::Point;
use log::{debug, warn};

use crate::error::GridError;
use crate::pathing_grid::PathingGrid;

pub mod bfs;
pub mod dfs;
pub mod dijkstra;

pub use bfs::BfsSolver;
pub use dfs::DfsSolver;
pub use dijkstra::DijkstraSolver;

/// Outcome of one search run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SearchResult {
    /// Cells in the order the search processed them, starting with the start cell.
    pub visited: Vec<Point>,
    /// The end point if the search reached it.
    pub target: Option<Point>,
    /// Wall-clock time from entry to return.
    pub elapsed: Duration,
}

impl SearchResult {
    pub fn found(&self) -> bool {
        self.target.is_some()
    }
    pub fn cells_scanned(&self) -> usize {
        self.visited.len()
    }
    pub fn elapsed_millis(&self) -> u128 {
        self.elapsed.as_millis()
    }
}

/// Records the visited order and the clock of a running search.
pub(crate) struct Trace {
    name: &'static str,
    started: Instant,
    visited: Vec<Point>,
}

impl Trace {
    fn new(name: &'static str) -> Trace {
        Trace {
            name,
            started: Instant::now(),
            visited: Vec::new(),
        }
    }
    pub(crate) fn visit(&mut self, grid: &PathingGrid, ix: usize) {
        if let Some(cell) = grid.cell_by_number(ix) {
            self.visited.push(cell.point());
        }
    }
    pub(crate) fn finish(self, target: Option<Point>) -> SearchResult {
        let result = SearchResult {
            visited: self.visited,
            target,
            elapsed: self.started.elapsed(),
        };
        debug!(
            "{} scanned {} cells in {:?}, target {}",
            self.name,
            result.cells_scanned(),
            result.elapsed,
            if result.found() { "found" } else { "not found" }
        );
        result
    }
}

/// Starts the clock, resets the search state of the grid and resolves the endpoints. Returns
/// `None` together with the trace if either endpoint lies outside the grid.
pub(crate) fn begin(
    name: &'static str,
    grid: &mut PathingGrid,
    start: Point,
    end: Point,
) -> (Trace, Option<(usize, usize)>) {
    let trace = Trace::new(name);
    grid.reset_transient(false);
    match (grid.index(start), grid.index(end)) {
        (Some(start_ix), Some(end_ix)) => (trace, Some((start_ix, end_ix))),
        _ => {
            warn!("{}: {} or {} lies outside the grid", name, start, end);
            (trace, None)
        }
    }
}

/// A search over a [PathingGrid]. Implementations mutate the search state of the cells in
/// place, so a grid runs one search at a time.
pub trait GridSolver {
    fn name(&self) -> &'static str;

    /// Runs the search from `start` until `end` is processed or the frontier is exhausted.
    fn search(&self, grid: &mut PathingGrid, start: Point, end: Point) -> SearchResult;

    /// Runs the search and reconstructs the path if the end was reached.
    fn get_path(&self, grid: &mut PathingGrid, start: Point, end: Point) -> Option<Vec<Point>> {
        if self.search(grid, start, end).found() {
            Some(grid.reconstruct_path(end))
        } else {
            None
        }
    }
}

/// Breadth-first search, see [BfsSolver].
pub fn bfs(grid: &mut PathingGrid, start: Point, end: Point) -> SearchResult {
    BfsSolver.search(grid, start, end)
}
/// Depth-first search, see [DfsSolver].
pub fn dfs(grid: &mut PathingGrid, start: Point, end: Point) -> SearchResult {
    DfsSolver.search(grid, start, end)
}
/// Uniform-cost search, see [DijkstraSolver].
pub fn uniform_cost(grid: &mut PathingGrid, start: Point, end: Point) -> SearchResult {
    DijkstraSolver.search(grid, start, end)
}

/// The searches a caller can choose between.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Dijkstra,
    Bfs,
    Dfs,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Dijkstra, Algorithm::Bfs, Algorithm::Dfs];

    /// Human readable name.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "Dijkstra's algorithm",
            Algorithm::Bfs => "Breadth-first Search",
            Algorithm::Dfs => "Depth-first Search",
        }
    }
    pub fn solver(self) -> &'static dyn GridSolver {
        match self {
            Algorithm::Dijkstra => &DijkstraSolver,
            Algorithm::Bfs => &BfsSolver,
            Algorithm::Dfs => &DfsSolver,
        }
    }
    pub fn run(self, grid: &mut PathingGrid, start: Point, end: Point) -> SearchResult {
        self.solver().search(grid, start, end)
    }
    /// Only breadth-first and uniform-cost search return shortest paths.
    pub fn is_optimal(self) -> bool {
        !matches!(self, Algorithm::Dfs)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let id = match self {
            Algorithm::Dijkstra => "DIJKSTRA",
            Algorithm::Bfs => "BFS",
            Algorithm::Dfs => "DFS",
        };
        f.write_str(id)
    }
}

impl FromStr for Algorithm {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| GridError::UnknownAlgorithm(s.to_owned()))
    }
}

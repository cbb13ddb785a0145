//! # grid_search
//!
//! Classic uninformed searches on a 4-connected grid of [Cell]s with walls:
//! [breadth-first](solver::bfs), [depth-first](solver::dfs) and a
//! [uniform-cost (Dijkstra)](solver::uniform_cost) search. Each search records the order in
//! which it processed cells and leaves back-pointers on the grid from which
//! [PathingGrid::reconstruct_path] recovers the route. Obstacle layouts can be drawn by hand or
//! produced by the [random](maze::random_maze) and
//! [recursive division](maze::recursive_division_maze) generators.
//!
//! ```
//! use grid_search::{pathing_grid::PathingGrid, solver::bfs};
//! use grid_util::direction::Direction;
//! ```

pub mod cell;
pub mod error;
pub mod maze;
pub mod path;
pub mod pathing_grid;
pub mod solver;

use grid_util::direction::Direction;

pub use cell::Cell;
pub use pathing_grid::PathingGrid;

/// Distance label of a cell no uniform-cost search has reached.
pub const UNREACHABLE: u32 = u32::MAX;

/// Largest divisor drawn per cell by [maze::random_maze].
pub const RANDOM_WALL_MAX_DIVISOR: usize = 10;

/// Rows grow with `y`, which [Direction] calls north, so a step up the board (row - 1) is
/// [Direction::SOUTH].
pub const UP: Direction = Direction::SOUTH;
/// One row down the board (row + 1).
pub const DOWN: Direction = Direction::NORTH;
pub const LEFT: Direction = Direction::WEST;
pub const RIGHT: Direction = Direction::EAST;

/// Neighbour order of breadth-first search.
pub const BFS_ORDER: [Direction; 4] = [RIGHT, UP, DOWN, LEFT];
/// Push order of depth-first search; the last direction is explored first.
pub const DFS_ORDER: [Direction; 4] = [RIGHT, DOWN, LEFT, UP];
/// Relaxation order of uniform-cost search.
pub const DIJKSTRA_ORDER: [Direction; 4] = [LEFT, RIGHT, UP, DOWN];

//! Obstacle layouts for a [PathingGrid](crate::pathing_grid::PathingGrid). The random source is
//! passed in, so a seeded generator reproduces a maze exactly.
mod random;
mod recursive_division;

pub use random::random_maze;
pub use recursive_division::recursive_division_maze;

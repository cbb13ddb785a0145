use grid_util::point::Point;
use thiserror::Error;

/// Failures of the grid editing and layout parsing surface. Searches and maze generators do
/// not fail; an unreachable end simply yields no target.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("{0} lies outside the grid")]
    OutOfBounds(Point),
    #[error("{0} holds the start or end point and cannot become a wall")]
    EndpointWall(Point),
    #[error("{0} already holds the other endpoint")]
    EndpointOverlap(Point),
    #[error("layout contains no rows")]
    EmptyLayout,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown symbol {symbol:?} at row {row}, column {col}")]
    UnknownSymbol { symbol: char, row: usize, col: usize },
    #[error("second start point at row {row}, column {col}")]
    DuplicateStart { row: usize, col: usize },
    #[error("second end point at row {row}, column {col}")]
    DuplicateEnd { row: usize, col: usize },
    #[error("unknown algorithm {0:?}, expected one of DIJKSTRA, BFS, DFS")]
    UnknownAlgorithm(String),
}

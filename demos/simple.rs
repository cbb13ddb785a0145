use grid_search::pathing_grid::PathingGrid;
use grid_search::solver::{bfs, DfsSolver, GridSolver};
use grid_util::point::Point;

// In this example a path is found on a 3x3 grid with shape
//  ___
// |S  |
// | # |
// |  E|
//  ___
// where
// - # marks an obstacle
// - S marks the start
// - E marks the end
//
// Nodes have a 4-neighborhood

fn main() {
    env_logger::init();
    let mut pathing_grid = PathingGrid::new(3, 3);
    let start = Point::new(0, 0);
    let end = Point::new(2, 2);
    pathing_grid.set_start(start).unwrap();
    pathing_grid.set_end(end).unwrap();
    pathing_grid.set_wall(Point::new(1, 1), true).unwrap();
    print!("{}", pathing_grid);

    let result = bfs(&mut pathing_grid, start, end);
    println!("Visited {} cells:", result.cells_scanned());
    for p in &result.visited {
        println!("{:?}", p);
    }
    println!("Path:");
    for p in pathing_grid.reconstruct_path(end) {
        println!("{:?}", p);
    }

    let path = DfsSolver.get_path(&mut pathing_grid, start, end).unwrap();
    println!("DFS path has {} cells", path.len());
}

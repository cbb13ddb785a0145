use grid_search::maze::{random_maze, recursive_division_maze};
use grid_search::pathing_grid::PathingGrid;
use grid_search::solver::Algorithm;
use grid_util::point::Point;
use rand::{rngs::StdRng, SeedableRng};

// Generates a recursive division maze and a random maze on a 30x15 grid with the start in the
// top left and the end in the bottom right corner, then runs every algorithm on both and draws
// the path found, marked with `o`.

fn draw(grid: &PathingGrid, path: &[Point]) {
    for (y, row) in grid.rows().enumerate() {
        let line = row
            .iter()
            .enumerate()
            .map(|(x, cell)| {
                let p = Point::new(x as i32, y as i32);
                if cell.is_start_point() {
                    'S'
                } else if cell.is_end_point() {
                    'E'
                } else if path.contains(&p) {
                    'o'
                } else if cell.is_wall() {
                    '#'
                } else {
                    '.'
                }
            })
            .collect::<String>();
        println!("{}", line);
    }
}

fn solve_all(grid: &mut PathingGrid, start: Point, end: Point) {
    for algorithm in Algorithm::ALL {
        let result = algorithm.run(grid, start, end);
        let path = grid.reconstruct_path(end);
        println!(
            "{}: scanned {} cells, travelled {} cells, took {} ms",
            algorithm.name(),
            result.cells_scanned(),
            path.len(),
            result.elapsed_millis()
        );
        if result.found() {
            draw(grid, &path);
        } else {
            println!("No path found");
        }
        println!();
    }
}

fn main() {
    env_logger::init();
    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(42);
    let mut rng = StdRng::seed_from_u64(seed);
    let (w, h) = (30, 15);
    let start = Point::new(0, 0);
    let end = Point::new(w as i32 - 1, h as i32 - 1);
    let mut grid = PathingGrid::new(w, h);
    grid.set_start(start).unwrap();
    grid.set_end(end).unwrap();

    println!("Recursive division maze (seed {seed})");
    recursive_division_maze(&mut grid, Some(start), Some(end), &mut rng);
    solve_all(&mut grid, start, end);

    println!("Random maze (seed {seed})");
    grid.reset(false, true);
    random_maze(&mut grid, &mut rng);
    solve_all(&mut grid, start, end);
}

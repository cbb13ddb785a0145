use log::info;
use rand::Rng;

use crate::pathing_grid::PathingGrid;
use crate::RANDOM_WALL_MAX_DIVISOR;

/// Sprinkles walls over the grid. Each cell other than start and end draws a divisor in
/// `1..=10` and becomes a wall exactly when its cell number is a multiple of it; existing walls
/// are overwritten either way. Nothing guarantees the end stays reachable.
pub fn random_maze<R: Rng + ?Sized>(grid: &mut PathingGrid, rng: &mut R) {
    let mut walls = 0;
    for ix in 0..grid.len() {
        let Some(cell) = grid.cell_by_number(ix) else {
            continue;
        };
        if cell.is_start_point() || cell.is_end_point() {
            continue;
        }
        let divisor = rng.gen_range(1..=RANDOM_WALL_MAX_DIVISOR);
        let blocked = cell.cell_number() % divisor == 0;
        grid.set_wall_unchecked(ix, blocked);
        walls += blocked as usize;
    }
    info!("Random maze placed {} walls on {} cells", walls, grid.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use grid_util::point::Point;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn endpoints_stay_open() {
        let mut rng = StdRng::seed_from_u64(0);
        for _ in 0..100 {
            let mut grid = PathingGrid::new(6, 6);
            grid.set_start(Point::new(0, 0)).unwrap();
            grid.set_end(Point::new(5, 5)).unwrap();
            random_maze(&mut grid, &mut rng);
            assert!(!grid.is_wall(Point::new(0, 0)));
            assert!(!grid.is_wall(Point::new(5, 5)));
        }
    }

    /// Cell 0 is a multiple of every divisor.
    #[test]
    fn cell_zero_is_always_a_wall() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = PathingGrid::new(4, 4);
        random_maze(&mut grid, &mut rng);
        assert!(grid.is_wall(Point::new(0, 0)));
    }

    #[test]
    fn same_seed_same_maze() {
        let mut first = PathingGrid::new(8, 8);
        let mut second = PathingGrid::new(8, 8);
        random_maze(&mut first, &mut StdRng::seed_from_u64(3));
        random_maze(&mut second, &mut StdRng::seed_from_u64(3));
        assert_eq!(first.to_string(), second.to_string());
    }
}

//! Iterative recursive-backtracker carving over a fully walled grid.

use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

use crate::grid::Grid;
use crate::types::{Dimensions, Direction, Pos};

pub struct MazeGenerator {
    seed: u64,
}

impl MazeGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn generate(&self, dims: Dimensions) -> Grid {
        let mut grid = Grid::walled(dims);
        if dims.is_empty() {
            return grid;
        }

        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        let mut current = dims.entry();
        grid.mark_visited(current);
        let mut stack = vec![current];

        loop {
            let candidates = unvisited_neighbors(&grid, current);
            if !candidates.is_empty() {
                let (direction, next) = candidates[pick_index(&mut rng, candidates.len())];
                grid.carve(current, direction);
                stack.push(current);
                current = next;
                grid.mark_visited(next);
            } else if let Some(previous) = stack.pop() {
                current = previous;
            } else {
                break;
            }
        }

        log::debug!(
            "carved {}x{} maze from seed {} ({} passages)",
            dims.rows,
            dims.cols,
            self.seed,
            grid.carved_edge_count()
        );
        grid
    }
}

fn unvisited_neighbors(grid: &Grid, pos: Pos) -> Vec<(Direction, Pos)> {
    Direction::ALL
        .into_iter()
        .filter_map(|direction| grid.neighbor(pos, direction).map(|next| (direction, next)))
        .filter(|(_, next)| !grid.is_visited(*next))
        .collect()
}

fn pick_index(rng: &mut ChaCha8Rng, len: usize) -> usize {
    debug_assert!(len > 0);
    (rng.next_u64() % len as u64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_produces_identical_grid() {
        let dims = Dimensions::new(12, 8);
        assert_eq!(MazeGenerator::new(7).generate(dims), MazeGenerator::new(7).generate(dims));
    }

    #[test]
    fn different_seeds_produce_different_grids() {
        let dims = Dimensions::square(10);
        assert_ne!(MazeGenerator::new(1).generate(dims), MazeGenerator::new(2).generate(dims));
    }

    #[test]
    fn every_cell_is_visited_and_tree_shaped() {
        for (rows, cols) in [(5, 5), (1, 9), (9, 1), (13, 4), (50, 50)] {
            let grid = MazeGenerator::new(42).generate(Dimensions::new(rows, cols));
            assert!(grid.all_visited(), "{rows}x{cols} left unvisited cells");
            assert!(grid.asymmetric_walls().is_empty());
            assert!(grid.open_border_sides().is_empty());
            assert_eq!(grid.carved_edge_count(), rows * cols - 1);
        }
    }

    #[test]
    fn single_row_is_one_corridor() {
        let grid = MazeGenerator::new(3).generate(Dimensions::new(1, 6));
        for x in 0..5 {
            assert!(!grid.has_wall(Pos::new(x, 0), Direction::Right));
        }
        assert!(grid.cells().iter().all(|cell| cell.has_wall(Direction::Up)));
    }

    #[test]
    fn single_cell_is_visited_without_carving() {
        let grid = MazeGenerator::new(3).generate(Dimensions::square(1));
        assert!(grid.all_visited());
        assert_eq!(grid.cells()[0].walls, [true; 4]);
    }

    #[test]
    fn empty_dimensions_produce_empty_grid() {
        let grid = MazeGenerator::new(3).generate(Dimensions::new(0, 4));
        assert!(grid.is_empty());
    }
}

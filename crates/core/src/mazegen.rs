//! Perfect-maze generation by randomized depth-first carving.

mod generator;
mod seed;

pub use generator::MazeGenerator;
pub use seed::derive_generation_seed;

use crate::grid::Grid;
use crate::types::Dimensions;

pub fn generate_maze(seed: u64, dims: Dimensions) -> Grid {
    MazeGenerator::new(seed).generate(dims)
}

#[cfg(test)]
mod tests {
    use super::{Dimensions, MazeGenerator};

    #[test]
    fn generate_maze_matches_generator_output() {
        let dims = Dimensions::new(7, 9);
        let from_helper = super::generate_maze(123, dims);
        let from_generator = MazeGenerator::new(123).generate(dims);
        assert_eq!(from_helper, from_generator);
    }
}

use rand::{Rng, SeedableRng, rngs::StdRng};

mod disjoint_set;
mod kruskal;

pub use disjoint_set::DisjointSet;
pub use kruskal::randomized_kruskal;

use crate::maze::Maze;

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// Generates a perfect maze of `width x height` cells.
///
/// The returned maze is carved: every cell is linked only to the neighbors it
/// shares a passage with, and there is exactly one simple path between any two cells.
///
/// Panics if either width or height is 0.
pub fn generate_maze<R: Rng + ?Sized>(width: u8, height: u8, rng: &mut R) -> Maze {
    let mut maze = Maze::new(width, height);
    let carving = randomized_kruskal(&maze, rng);
    maze.connect_all_neighbors();
    maze.carve(carving);
    maze
}

//! Maze generation and solving over a binary tile grid.
//!
//! Mazes are carved by randomized Prim's algorithm into a [`Grid`] where logical cells sit on
//! odd/odd positions, and solved by filling dead ends before a breadth-first search picks the final
//! path.

pub mod algorithms;
pub mod array;
pub mod dims;
pub mod error;
pub mod grid;
pub mod neighbors;
pub mod progress;
pub mod ser;
pub mod solve;

use algorithms::{seeded, MazeGenerator as _, Prims};
use progress::ProgressHandle;
use solve::{DeadEndFiller, MazeSolver as _};

pub use dims::Cell;
pub use error::MazeError;
pub use grid::{Grid, Tile};

/// Generates a perfect maze of `h x w` logical cells.
///
/// The same seed always produces the same maze. Without one, a random seed is drawn.
pub fn generate(h: usize, w: usize, seed: Option<u64>) -> Result<Grid, MazeError> {
    let (seed, mut rng) = seeded(seed);
    log::debug!("Generating {}x{} maze with seed {}", h, w, seed);

    Prims.generate(h, w, &mut rng, ProgressHandle::new())
}

/// Solves `grid` from `start` to `end`, returning the path with both endpoints included.
///
/// `grid` is left untouched. The seed only matters for mazes with several equally short
/// solutions, where it decides which one is returned.
pub fn solve(grid: &Grid, start: Cell, end: Cell, seed: Option<u64>) -> Result<Vec<Cell>, MazeError> {
    let (_, mut rng) = seeded(seed);

    DeadEndFiller.solve(grid, start, end, &mut rng)
}

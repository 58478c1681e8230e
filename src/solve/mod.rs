mod dead_end_filler;
mod shortest_path;

use std::fmt;

use crate::{algorithms::Random, dims::Cell, error::MazeError, grid::Grid};
pub use dead_end_filler::{DeadEndFiller, FillReport};
pub use shortest_path::ShortestPath;

pub trait MazeSolver: fmt::Debug + Sync + Send {
    /// Finds a path from `start` to `end`, both inclusive.
    ///
    /// The grid is only read, solvers that need scratch space work on their own copy.
    fn solve(
        &self,
        grid: &Grid,
        start: Cell,
        end: Cell,
        rng: &mut Random,
    ) -> Result<Vec<Cell>, MazeError>;
}

/// Endpoints have to be open logical cells inside the grid.
pub(crate) fn check_endpoint(grid: &Grid, pos: Cell) -> Result<(), MazeError> {
    let tile = grid.get(pos)?;
    if !pos.is_odd() {
        return Err(MazeError::NotACell(pos));
    }
    if tile.is_wall() {
        return Err(MazeError::UnreachableOrBlocked(pos));
    }
    Ok(())
}

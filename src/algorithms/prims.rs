use hashbrown::HashSet;
use rand::Rng as _;

use super::{MazeGenerator, Random};
use crate::{
    dims::Cell,
    error::MazeError,
    grid::{Grid, Tile},
    neighbors::find_neighbors,
    progress::ProgressHandle,
};

/// Randomized Prim's algorithm.
///
/// The tree grows from a random cell. Each step opens a uniformly chosen frontier cell and connects
/// it to one random cell already in the tree, so the result is a perfect maze: every logical cell is
/// open and there is exactly one path between any two of them.
#[derive(Debug, Default)]
pub struct Prims;

impl Prims {
    /// Grows the tree from the already open `start` until every logical cell of `grid` is in it.
    fn carve(
        &self,
        grid: &mut Grid,
        start: Cell,
        rng: &mut Random,
        progress: &ProgressHandle,
    ) -> Result<(), MazeError> {
        let (h, w) = grid.logical_size();
        let cell_count = h * w;
        let mut visited = 1;

        // `frontier` is indexed for random picks, `in_frontier` keeps it free of duplicates
        let mut frontier = find_neighbors(grid, start, false, rng).into_vec();
        let mut in_frontier: HashSet<Cell> = frontier.iter().copied().collect();

        while visited < cell_count {
            if frontier.is_empty() {
                log::warn!("Frontier exhausted after {} of {} cells", visited, cell_count);
                return Err(MazeError::Incomplete {
                    carved: visited,
                    total: cell_count,
                });
            }

            let next = frontier.swap_remove(rng.gen_range(0..frontier.len()));
            in_frontier.remove(&next);

            grid.set(next, Tile::Open)?;
            visited += 1;

            if let Some(&joined) = find_neighbors(grid, next, true, rng).first() {
                grid.set(next.midpoint(joined), Tile::Open)?;
            }

            for cell in find_neighbors(grid, next, false, rng) {
                if in_frontier.insert(cell) {
                    frontier.push(cell);
                }
            }

            progress.lock().done = visited;
            if progress.is_stopped() {
                return Err(MazeError::Aborted);
            }
        }

        Ok(())
    }
}

impl MazeGenerator for Prims {
    fn generate(
        &self,
        h: usize,
        w: usize,
        rng: &mut Random,
        progress: ProgressHandle,
    ) -> Result<Grid, MazeError> {
        let mut grid = Grid::for_cells(h, w)?;
        let cell_count = h * w;
        progress.lock().from = self.guess_progress_complexity(h, w);

        let start = grid
            .iter_cells()
            .nth(rng.gen_range(0..cell_count))
            .ok_or(MazeError::Incomplete {
                carved: 0,
                total: cell_count,
            })?;
        grid.set(start, Tile::Open)?;
        log::debug!("Prim's {}x{} starting at {}", h, w, start);

        self.carve(&mut grid, start, rng, &progress)?;
        progress.lock().finish();

        Ok(grid)
    }
}

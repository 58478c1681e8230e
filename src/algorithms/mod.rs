mod prims;

use std::fmt;

use rand::{thread_rng, Rng as _, SeedableRng as _};

use crate::{error::MazeError, grid::Grid, progress::ProgressHandle};
pub use prims::Prims;

/// Random number generator used for anything, where determinism is required.
pub type Random = rand_xoshiro::Xoshiro256StarStar;

/// Seeds a [`Random`], drawing a fresh seed when none is given. Returns the seed that was used, so
/// it can be reported and the run reproduced.
pub fn seeded(seed: Option<u64>) -> (u64, Random) {
    let seed = seed.unwrap_or_else(|| thread_rng().gen());
    (seed, Random::seed_from_u64(seed))
}

pub trait MazeGenerator: fmt::Debug + Sync + Send {
    /// Carves a maze of `h x w` logical cells into a fresh grid.
    fn generate(
        &self,
        h: usize,
        w: usize,
        rng: &mut Random,
        progress: ProgressHandle,
    ) -> Result<Grid, MazeError>;

    fn guess_progress_complexity(&self, h: usize, w: usize) -> usize {
        h * w
    }
}

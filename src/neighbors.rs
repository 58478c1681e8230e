//! Lattice neighbors of logical cells.
//!
//! Two logical cells are neighbors when they are two tiles apart along one axis, with the tile
//! between them being their shared wall. Every query shuffles its result, so neither generation nor
//! solving favours a direction.

use rand::seq::SliceRandom as _;
use smallvec::SmallVec;

use crate::{
    algorithms::Random,
    dims::Cell,
    grid::{Grid, Tile},
};

pub type Neighbors = SmallVec<[Cell; 4]>;

/// Inside the outer wall ring.
pub fn is_interior(grid: &Grid, pos: Cell) -> bool {
    let (h, w) = (grid.height() as i32, grid.width() as i32);
    0 < pos.row() && pos.row() < h - 1 && 0 < pos.col() && pos.col() < w - 1
}

/// Candidate neighbor positions of `cell`, two steps away and inside the wall ring.
fn lattice(grid: &Grid, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
    Cell::directions()
        .into_iter()
        .map(move |dir| cell + dir * 2)
        .filter(move |&n| is_interior(grid, n))
}

/// Neighbors of `cell` filtered by state.
///
/// With `visited` set only open neighbors are returned, otherwise only walled (not yet carved)
/// ones. The wall between `cell` and the neighbor is not looked at.
pub fn find_neighbors(grid: &Grid, cell: Cell, visited: bool, rng: &mut Random) -> Neighbors {
    let wanted = if visited { Tile::Open } else { Tile::Wall };

    let mut found = lattice(grid, cell)
        .filter(|&n| grid.get(n) == Ok(wanted))
        .collect::<Neighbors>();
    found.shuffle(rng);
    found
}

/// Open neighbors of `cell` that are also connected to it through an open wall tile, i.e. the edges
/// of the carved maze graph.
pub fn find_unblocked_neighbors(grid: &Grid, cell: Cell, rng: &mut Random) -> Neighbors {
    let mut found = unblocked(grid, cell).collect::<Neighbors>();
    found.shuffle(rng);
    found
}

/// Unshuffled [`find_unblocked_neighbors`], for callers that only count or need a fixed order.
pub fn unblocked(grid: &Grid, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
    lattice(grid, cell).filter(move |&n| grid.is_open(cell.midpoint(n)) && grid.is_open(n))
}

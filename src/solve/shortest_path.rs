use std::collections::VecDeque;

use hashbrown::{hash_map::Entry, HashMap};

use super::{check_endpoint, MazeSolver};
use crate::{
    algorithms::Random, dims::Cell, error::MazeError, grid::Grid,
    neighbors::find_unblocked_neighbors,
};

/// Breadth-first search over the carved maze graph.
///
/// Always yields a shortest path. Among equally short ones the winner depends on the neighbor
/// order, which is shuffled by `rng`, so a fixed seed gives a fixed path.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShortestPath;

impl MazeSolver for ShortestPath {
    fn solve(
        &self,
        grid: &Grid,
        start: Cell,
        end: Cell,
        rng: &mut Random,
    ) -> Result<Vec<Cell>, MazeError> {
        check_endpoint(grid, start)?;
        check_endpoint(grid, end)?;

        if start == end {
            return Ok(vec![start]);
        }

        // cell -> the cell it was reached from
        let mut came_from = HashMap::new();
        came_from.insert(start, start);
        let mut queue = VecDeque::from([start]);

        while let Some(cell) = queue.pop_front() {
            if cell == end {
                return Ok(backtrack(&came_from, start, end));
            }

            for next in find_unblocked_neighbors(grid, cell, rng) {
                if let Entry::Vacant(entry) = came_from.entry(next) {
                    entry.insert(cell);
                    queue.push_back(next);
                }
            }
        }

        Err(MazeError::NoPathExists { start, end })
    }
}

fn backtrack(came_from: &HashMap<Cell, Cell>, start: Cell, end: Cell) -> Vec<Cell> {
    let mut path = vec![end];
    let mut current = end;
    while current != start {
        current = came_from[&current];
        path.push(current);
    }
    path.reverse();
    path
}

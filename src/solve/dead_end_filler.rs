use super::{check_endpoint, MazeSolver, ShortestPath};
use crate::{
    algorithms::Random,
    dims::Cell,
    error::MazeError,
    grid::{Grid, Tile},
    neighbors::{unblocked, Neighbors},
};

/// Summary of one [`DeadEndFiller::fill`] run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FillReport {
    /// Cells turned into walls.
    pub filled: usize,
    /// Dead ends found by scanning, each one followed along its corridor.
    pub chains: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FillState {
    Scanning,
    Filling(Cell),
    Done,
}

/// Solver that walls off dead ends until only the solution corridors remain.
///
/// On a perfect maze the cells left open after filling are exactly the solution. Braided mazes can
/// keep loops that neither endpoint needs, so the final path is always picked by a
/// [`ShortestPath`] search over the filled grid.
#[derive(Debug, Default, Clone, Copy)]
pub struct DeadEndFiller;

impl DeadEndFiller {
    /// Fills dead ends of `grid` in place. `start` and `end` are forced open and never filled.
    pub fn fill(&self, grid: &mut Grid, start: Cell, end: Cell) -> Result<FillReport, MazeError> {
        grid.set(start, Tile::Open)?;
        grid.set(end, Tile::Open)?;

        let mut report = FillReport::default();
        let mut state = FillState::Scanning;

        loop {
            state = match state {
                FillState::Scanning => match Self::find_dead_end(grid, start, end) {
                    Some(dead_end) => {
                        report.chains += 1;
                        FillState::Filling(dead_end)
                    }
                    None => FillState::Done,
                },
                FillState::Filling(dead_end) => {
                    let remaining: Neighbors = unblocked(grid, dead_end).collect();
                    Self::fill_dead_end(grid, dead_end)?;
                    report.filled += 1;

                    // keep walking the corridor while it keeps turning into dead ends
                    match remaining.as_slice() {
                        [next] if Self::is_dead_end(grid, *next, start, end) => {
                            FillState::Filling(*next)
                        }
                        _ => FillState::Scanning,
                    }
                }
                FillState::Done => break,
            };
        }

        Ok(report)
    }

    /// Validates the endpoints and returns a filled copy of `grid`.
    pub fn reduce(
        &self,
        grid: &Grid,
        start: Cell,
        end: Cell,
    ) -> Result<(Grid, FillReport), MazeError> {
        check_endpoint(grid, start)?;
        check_endpoint(grid, end)?;

        let mut work = grid.clone();
        let report = self.fill(&mut work, start, end)?;
        log::debug!(
            "Filled {} dead end cells in {} chains",
            report.filled,
            report.chains
        );

        Ok((work, report))
    }

    /// Open, not an endpoint, and connected to at most one other cell.
    fn is_dead_end(grid: &Grid, cell: Cell, start: Cell, end: Cell) -> bool {
        cell != start && cell != end && grid.is_open(cell) && unblocked(grid, cell).nth(1).is_none()
    }

    fn find_dead_end(grid: &Grid, start: Cell, end: Cell) -> Option<Cell> {
        grid.iter_cells()
            .find(|&cell| Self::is_dead_end(grid, cell, start, end))
    }

    fn fill_dead_end(grid: &mut Grid, dead_end: Cell) -> Result<(), MazeError> {
        grid.set(dead_end, Tile::Wall)?;
        for dir in Cell::directions() {
            grid.set(dead_end + dir, Tile::Wall)?;
        }
        Ok(())
    }
}

impl MazeSolver for DeadEndFiller {
    fn solve(
        &self,
        grid: &Grid,
        start: Cell,
        end: Cell,
        rng: &mut Random,
    ) -> Result<Vec<Cell>, MazeError> {
        if start == end {
            check_endpoint(grid, start)?;
            return Ok(vec![start]);
        }

        let (filled, _) = self.reduce(grid, start, end)?;

        match ShortestPath.solve(&filled, start, end, rng) {
            Err(MazeError::NoPathExists { .. }) => {
                log::debug!("No path left after filling, searching the original grid");
                ShortestPath.solve(grid, start, end, rng)
            }
            res => res,
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng as _;

    use super::*;
    use crate::{
        algorithms::{MazeGenerator as _, Prims},
        progress::ProgressHandle,
        solve::tests::parse_grid,
    };

    fn rng() -> Random {
        Random::seed_from_u64(11)
    }

    /// Consecutive cells are lattice neighbors joined by an open tile, all inside `grid`'s open
    /// cells.
    fn assert_valid_path(grid: &Grid, path: &[Cell]) {
        for &cell in path {
            assert!(grid.is_open(cell), "{} is not open", cell);
        }
        for pair in path.windows(2) {
            assert_eq!((pair[0] - pair[1]).abs_sum(), 2);
            assert!(grid.is_open(pair[0].midpoint(pair[1])));
        }
    }

    #[test]
    fn hand_built_corridor_skips_branch() {
        // corridor (1,1) -> (1,3) -> (3,3), dead end branch at (3,1)
        let grid = parse_grid(&[
            "11111", //
            "10001", //
            "10101", //
            "10101", //
            "11111",
        ]);

        let path = DeadEndFiller
            .solve(&grid, Cell(1, 1), Cell(3, 3), &mut rng())
            .unwrap();
        assert_eq!(path, vec![Cell(1, 1), Cell(1, 3), Cell(3, 3)]);
        assert!(!path.contains(&Cell(3, 1)));

        let (filled, report) = DeadEndFiller.reduce(&grid, Cell(1, 1), Cell(3, 3)).unwrap();
        assert_eq!(report, FillReport { filled: 1, chains: 1 });
        assert_eq!(filled.get(Cell(3, 1)), Ok(Tile::Wall));
        assert_eq!(filled.get(Cell(2, 1)), Ok(Tile::Wall));
    }

    #[test]
    fn chains_along_corridors() {
        let grid = parse_grid(&[
            "1111111", //
            "1000001", //
            "1011101", //
            "1010101", //
            "1010111", //
            "1000001", //
            "1111111",
        ]);
        let (start, end) = (Cell(1, 1), Cell(5, 5));

        let (filled, report) = DeadEndFiller.reduce(&grid, start, end).unwrap();
        assert_eq!(report, FillReport { filled: 4, chains: 2 });

        let expected = vec![Cell(1, 1), Cell(3, 1), Cell(5, 1), Cell(5, 3), Cell(5, 5)];
        assert_eq!(filled.open_cells().collect::<Vec<_>>(), {
            let mut sorted = expected.clone();
            sorted.sort();
            sorted
        });

        let path = DeadEndFiller.solve(&grid, start, end, &mut rng()).unwrap();
        assert_eq!(path, expected);
    }

    #[test]
    fn isolated_cell_does_not_stop_scanning() {
        // (1,5) is open with no connections and comes first in scan order, the real dead end is
        // the branch down to (5,3)
        let grid = parse_grid(&[
            "1111111", //
            "1111101", //
            "1111111", //
            "1000001", //
            "1110111", //
            "1110111", //
            "1111111",
        ]);
        let (start, end) = (Cell(3, 1), Cell(3, 5));

        let (filled, report) = DeadEndFiller.reduce(&grid, start, end).unwrap();
        assert_eq!(report, FillReport { filled: 2, chains: 2 });
        assert_eq!(filled.get(Cell(1, 5)), Ok(Tile::Wall));
        assert_eq!(filled.get(Cell(5, 3)), Ok(Tile::Wall));
        assert_eq!(filled.get(Cell(4, 3)), Ok(Tile::Wall));

        let path = DeadEndFiller.solve(&grid, start, end, &mut rng()).unwrap();
        assert_eq!(path, vec![Cell(3, 1), Cell(3, 3), Cell(3, 5)]);
    }

    #[test]
    fn long_corridor_is_filled_in_one_chain() {
        let mut grid = Grid::for_cells(1, 500).unwrap();
        for col in 1..1000 {
            grid.set(Cell(1, col), Tile::Open).unwrap();
        }

        let (_, report) = DeadEndFiller.reduce(&grid, Cell(1, 1), Cell(1, 501)).unwrap();
        assert_eq!(report, FillReport { filled: 249, chains: 1 });
    }

    #[test]
    fn braided_maze_keeps_loops() {
        // every wall between cells is open, so there are no dead ends at all
        let grid = parse_grid(&[
            "1111111", //
            "1000001", //
            "1000001", //
            "1000001", //
            "1000001", //
            "1000001", //
            "1111111",
        ]);
        let (start, end) = (Cell(1, 1), Cell(5, 5));

        let (filled, report) = DeadEndFiller.reduce(&grid, start, end).unwrap();
        assert_eq!(report.filled, 0);
        assert_eq!(filled, grid);

        let path = DeadEndFiller.solve(&grid, start, end, &mut rng()).unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&end));
        assert_valid_path(&grid, &path);
    }

    #[test]
    fn disconnected_maze() {
        let grid = parse_grid(&["11111", "10101", "11111"]);
        assert_eq!(
            DeadEndFiller.solve(&grid, Cell(1, 1), Cell(1, 3), &mut rng()),
            Err(MazeError::NoPathExists {
                start: Cell(1, 1),
                end: Cell(1, 3)
            })
        );
    }

    #[test]
    fn bad_endpoints() {
        let grid = parse_grid(&["11111", "10001", "11111"]);
        assert_eq!(
            DeadEndFiller.solve(&grid, Cell(1, 1), Cell(5, 5), &mut rng()),
            Err(MazeError::OutOfBounds(Cell(5, 5)))
        );
        assert_eq!(
            DeadEndFiller.solve(&grid, Cell(0, 0), Cell(0, 0), &mut rng()),
            Err(MazeError::NotACell(Cell(0, 0)))
        );

        let grid = parse_grid(&["11111", "10111", "11111"]);
        assert_eq!(
            DeadEndFiller.solve(&grid, Cell(1, 3), Cell(1, 1), &mut rng()),
            Err(MazeError::UnreachableOrBlocked(Cell(1, 3)))
        );
    }

    #[test]
    fn generated_mazes() {
        for seed in 0..20 {
            let mut gen_rng = Random::seed_from_u64(seed);
            let grid = Prims
                .generate(9, 13, &mut gen_rng, ProgressHandle::new())
                .unwrap();
            let original = grid.clone();

            let start = grid.open_cells().next().unwrap();
            let end = grid.open_cells().last().unwrap();

            let path = DeadEndFiller.solve(&grid, start, end, &mut rng()).unwrap();
            assert_eq!(path.first(), Some(&start));
            assert_eq!(path.last(), Some(&end));
            assert_valid_path(&original, &path);
            assert_eq!(grid, original, "solving must not touch the input");

            // perfect mazes have a single path, so filling leaves exactly it
            let (filled, _) = DeadEndFiller.reduce(&grid, start, end).unwrap();
            assert_eq!(filled.open_cells().count(), path.len());

            let bfs = ShortestPath.solve(&grid, start, end, &mut rng()).unwrap();
            assert_eq!(bfs, path);

            for cell in grid.open_cells().step_by(7) {
                assert_eq!(
                    DeadEndFiller.solve(&grid, cell, cell, &mut rng()),
                    Ok(vec![cell])
                );
            }
        }
    }

    #[test]
    fn same_seed_same_path() {
        let grid = parse_grid(&[
            "111111111", //
            "100000001", //
            "100000001", //
            "100000001", //
            "100000001", //
            "100000001", //
            "111111111",
        ]);
        let (start, end) = (Cell(1, 1), Cell(5, 7));

        let a = DeadEndFiller.solve(&grid, start, end, &mut rng()).unwrap();
        let b = DeadEndFiller.solve(&grid, start, end, &mut rng()).unwrap();
        assert_eq!(a, b);
        assert_valid_path(&grid, &a);
    }
}

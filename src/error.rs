use thiserror::Error;

use crate::dims::Cell;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MazeError {
    #[error("Invalid maze dimensions {height}x{width}, both must be at least 1 and fit the grid")]
    InvalidDimensions { height: i64, width: i64 },
    #[error("Position {0} is outside of the grid")]
    OutOfBounds(Cell),
    #[error("Position {0} is not a logical cell")]
    NotACell(Cell),
    #[error("Position {0} is walled off")]
    UnreachableOrBlocked(Cell),
    #[error("No path exists between {start} and {end}")]
    NoPathExists { start: Cell, end: Cell },
    #[error("Invalid tile value {0}, expected 0 or 1")]
    InvalidTile(u8),
    #[error("Malformed grid; {0}")]
    Malformed(String),
    #[error("Generation aborted")]
    Aborted,
    #[error("Generation carved only {carved} of {total} cells")]
    Incomplete { carved: usize, total: usize },
}

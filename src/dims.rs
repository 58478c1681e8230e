use std::{
    fmt,
    ops::{Add, Div, Mul, Sub},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

/// Position in the tile grid as `(row, col)`.
///
/// Logical maze cells sit on odd/odd positions, everything else is a wall slot. Coordinates are
/// signed, so stepping past the edge produces a position that bounds checks reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell(pub i32, pub i32);

impl Cell {
    pub const UP: Cell = Cell(-1, 0);
    pub const DOWN: Cell = Cell(1, 0);
    pub const LEFT: Cell = Cell(0, -1);
    pub const RIGHT: Cell = Cell(0, 1);

    pub fn row(self) -> i32 {
        self.0
    }

    pub fn col(self) -> i32 {
        self.1
    }

    /// Unit offsets in the order up, down, left, right.
    pub fn directions() -> [Cell; 4] {
        [Cell::UP, Cell::DOWN, Cell::LEFT, Cell::RIGHT]
    }

    /// Both coordinates odd, i.e. a logical maze cell rather than a wall slot.
    pub fn is_odd(self) -> bool {
        self.0 % 2 == 1 && self.1 % 2 == 1
    }

    pub fn abs_sum(self) -> i32 {
        self.0.abs() + self.1.abs()
    }

    /// Tile exactly between two cells.
    pub fn midpoint(self, other: Cell) -> Cell {
        (self + other) / 2
    }

    /// Iterates all odd/odd positions in `[0, height) x [0, width)`, row-major.
    pub fn iter_odd(height: i32, width: i32) -> impl Iterator<Item = Cell> {
        (1..height)
            .step_by(2)
            .flat_map(move |row| (1..width).step_by(2).map(move |col| Cell(row, col)))
    }
}

impl Add for Cell {
    type Output = Cell;

    fn add(self, other: Cell) -> Cell {
        Cell(self.0 + other.0, self.1 + other.1)
    }
}

impl Sub for Cell {
    type Output = Cell;

    fn sub(self, other: Cell) -> Cell {
        Cell(self.0 - other.0, self.1 - other.1)
    }
}

impl Mul<i32> for Cell {
    type Output = Cell;

    fn mul(self, other: i32) -> Cell {
        Cell(self.0 * other, self.1 * other)
    }
}

impl Div<i32> for Cell {
    type Output = Cell;

    fn div(self, other: i32) -> Cell {
        Cell(self.0 / other, self.1 / other)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

/// Parses `row,col`, as typed on the command line.
impl FromStr for Cell {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s
            .split_once(',')
            .ok_or_else(|| format!("expected `row,col`, got `{}`", s))?;
        let row = row.trim().parse().map_err(|e| format!("bad row: {}", e))?;
        let col = col.trim().parse().map_err(|e| format!("bad col: {}", e))?;
        Ok(Cell(row, col))
    }
}

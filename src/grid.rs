use std::fmt;

use crate::{array::Array2D, dims::Cell, error::MazeError};

/// Single grid slot. Converts to `1` for a wall and `0` for an open passage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tile {
    Open,
    #[default]
    Wall,
}

impl Tile {
    pub fn is_open(self) -> bool {
        self == Tile::Open
    }

    pub fn is_wall(self) -> bool {
        self == Tile::Wall
    }
}

impl From<Tile> for u8 {
    fn from(tile: Tile) -> Self {
        match tile {
            Tile::Open => 0,
            Tile::Wall => 1,
        }
    }
}

impl TryFrom<u8> for Tile {
    type Error = MazeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Tile::Open),
            1 => Ok(Tile::Wall),
            other => Err(MazeError::InvalidTile(other)),
        }
    }
}

/// Binary occupancy grid of a maze.
///
/// A maze of `h x w` logical cells is stored as a `2h+1 x 2w+1` grid. Logical cells live at odd/odd
/// positions and the tile between two of them is the wall (or passage) connecting them. The size is
/// fixed for the lifetime of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    tiles: Array2D<Tile>,
}

impl Grid {
    fn new(height: usize, width: usize) -> Self {
        Self {
            tiles: Array2D::new(Tile::Wall, height, width),
        }
    }

    /// Fully walled grid able to hold `h x w` logical cells.
    pub fn for_cells(h: usize, w: usize) -> Result<Self, MazeError> {
        match (extent(h), extent(w)) {
            (Some(height), Some(width)) => Ok(Self::new(height, width)),
            _ => Err(MazeError::InvalidDimensions {
                height: i64::try_from(h).unwrap_or(i64::MAX),
                width: i64::try_from(w).unwrap_or(i64::MAX),
            }),
        }
    }

    /// Builds a grid from rows of `0`/`1` values.
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self, MazeError> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(MazeError::Malformed("grid has no tiles".into()));
        }

        let mut buf = Vec::with_capacity(height * width);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                return Err(MazeError::Malformed(format!(
                    "row {} has {} tiles, expected {}",
                    i,
                    row.len(),
                    width
                )));
            }
            for &value in row.iter() {
                buf.push(Tile::try_from(value)?);
            }
        }

        Self::from_tiles(buf, height, width)
    }

    /// Wraps `buf` as a `height x width` grid. Both sides must have the `2n+1` shape of a
    /// [`Grid::for_cells`] grid, otherwise logical cells would land on the border.
    pub(crate) fn from_tiles(buf: Vec<Tile>, height: usize, width: usize) -> Result<Self, MazeError> {
        for (side, len) in [("height", height), ("width", width)] {
            if extent(len / 2) != Some(len) {
                return Err(MazeError::Malformed(format!(
                    "{} {} is not of the form 2n+1 with n >= 1",
                    side, len
                )));
            }
        }

        let tiles = Array2D::from_vec(buf, height, width).ok_or_else(|| {
            MazeError::Malformed(format!("tile count doesn't match {}x{}", height, width))
        })?;

        Ok(Self { tiles })
    }

    pub fn height(&self) -> usize {
        self.tiles.height()
    }

    pub fn width(&self) -> usize {
        self.tiles.width()
    }

    /// Number of logical cells as `(h, w)`.
    pub fn logical_size(&self) -> (usize, usize) {
        (self.height() / 2, self.width() / 2)
    }

    pub fn is_in_bounds(&self, pos: Cell) -> bool {
        self.tiles.dim_to_idx(pos).is_some()
    }

    pub fn get(&self, pos: Cell) -> Result<Tile, MazeError> {
        self.tiles.get(pos).copied().ok_or(MazeError::OutOfBounds(pos))
    }

    pub fn set(&mut self, pos: Cell, tile: Tile) -> Result<(), MazeError> {
        let slot = self.tiles.get_mut(pos).ok_or(MazeError::OutOfBounds(pos))?;
        *slot = tile;
        Ok(())
    }

    /// Open and in bounds. Never fails, out of bounds counts as a wall.
    pub fn is_open(&self, pos: Cell) -> bool {
        self.tiles.get(pos).is_some_and(|t| t.is_open())
    }

    /// All logical cells, row-major. Both sides fit `i32`, construction checks it.
    pub fn iter_cells(&self) -> impl Iterator<Item = Cell> {
        Cell::iter_odd(self.height() as i32, self.width() as i32)
    }

    /// Open logical cells, row-major.
    pub fn open_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.iter_cells().filter(move |&c| self.is_open(c))
    }

    pub fn tiles(&self) -> impl Iterator<Item = Tile> + '_ {
        self.tiles.iter().copied()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.tiles.rows()
    }

    /// Renders the grid, marking the given cells (and the tiles between consecutive ones) with
    /// `path`.
    pub fn render(&self, wall: char, open: char, path: char, cells: &[Cell]) -> String {
        let mut overlay = Array2D::new(false, self.height(), self.width());
        for pair in cells.windows(2) {
            if let Some(slot) = overlay.get_mut(pair[0].midpoint(pair[1])) {
                *slot = true;
            }
        }
        for &cell in cells {
            if let Some(slot) = overlay.get_mut(cell) {
                *slot = true;
            }
        }

        let mut out = String::with_capacity((self.width() + 1) * self.height());
        for pos in self.tiles.iter_pos() {
            out.push(match (overlay[pos], self.tiles[pos]) {
                (true, _) => path,
                (false, Tile::Wall) => wall,
                (false, Tile::Open) => open,
            });
            if pos.col() as usize == self.width() - 1 {
                out.push('\n');
            }
        }
        out
    }
}

/// Tile extent holding `cells` logical cells, `None` when there are none or the extent doesn't fit
/// a [`Cell`] coordinate.
fn extent(cells: usize) -> Option<usize> {
    if cells == 0 {
        return None;
    }

    cells
        .checked_mul(2)
        .and_then(|n| n.checked_add(1))
        .filter(|&n| i32::try_from(n).is_ok())
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render('#', ' ', '.', &[]))
    }
}

use std::ops;

use crate::dims::Cell;

/// Dense row-major 2D buffer, indexed by [`Cell`] as `(row, col)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Array2D<T> {
    buf: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Array2D<T> {
    /// Wraps an existing buffer, `None` if its length doesn't match the size.
    pub fn from_vec(buf: Vec<T>, height: usize, width: usize) -> Option<Self> {
        if buf.len() != width * height {
            return None;
        }

        Some(Self { buf, width, height })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn dim_to_idx(&self, pos: Cell) -> Option<usize> {
        let Cell(row, col) = pos;
        if row < 0 || col < 0 {
            return None;
        }

        let (row, col) = (row as usize, col as usize);
        if row >= self.height || col >= self.width {
            return None;
        }

        Some(row * self.width + col)
    }

    pub fn idx_to_dim(&self, idx: usize) -> Option<Cell> {
        if idx >= self.buf.len() {
            return None;
        }

        let row = idx / self.width;
        let col = idx % self.width;

        Some(Cell(row as i32, col as i32))
    }

    pub fn get(&self, pos: Cell) -> Option<&T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get(i))
    }

    pub fn get_mut(&mut self, pos: Cell) -> Option<&mut T> {
        self.dim_to_idx(pos).and_then(|i| self.buf.get_mut(i))
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    pub fn iter_pos(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.buf.len()).filter_map(move |i| self.idx_to_dim(i))
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.buf.chunks(self.width.max(1))
    }
}

impl<T: Clone> Array2D<T> {
    pub fn new(item: T, height: usize, width: usize) -> Self {
        Self {
            buf: vec![item; width * height],
            width,
            height,
        }
    }
}

impl<T> ops::Index<Cell> for Array2D<T> {
    type Output = T;

    fn index(&self, index: Cell) -> &Self::Output {
        self.get(index)
            .unwrap_or_else(|| panic!("Index out of bounds: {}", index))
    }
}

impl<T> ops::IndexMut<Cell> for Array2D<T> {
    fn index_mut(&mut self, index: Cell) -> &mut Self::Output {
        self.get_mut(index)
            .unwrap_or_else(|| panic!("Index out of bounds: {}", index))
    }
}

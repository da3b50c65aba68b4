use std::ops::{Index, IndexMut};

use derive_more::{Constructor, From, Into};

/// Matrix coordinate. Row `i` corresponds to `seq1[i - 1]`, column `j` to `seq2[j - 1]`.
#[derive(
    Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Default, Constructor, From, Into,
)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    /// First row or first column, i.e. no symbols consumed from one of the sequences.
    #[inline(always)]
    pub fn is_boundary(&self) -> bool {
        self.row == 0 || self.col == 0
    }
}

/// Dense row-major grid.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Matrix<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

pub type ScoreMatrix<S> = Matrix<S>;

impl<T: Copy + Default> Matrix<T> {
    pub fn new(rows: usize, cols: usize) -> Self {
        let mut matrix = Self {
            rows: 0,
            cols: 0,
            data: Vec::new(),
        };
        matrix.reset(rows, cols);
        matrix
    }

    /// Resize the matrix, filling every cell with the default value. The allocation is reused.
    pub fn reset(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
        self.data.clear();
        self.data.resize(rows * cols, T::default());
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, cell: Cell) -> Option<&T> {
        if cell.row < self.rows && cell.col < self.cols {
            Some(&self.data[cell.row * self.cols + cell.col])
        } else {
            None
        }
    }

    pub fn row(&self, row: usize) -> &[T] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Cells outside the first row and column in row-major order.
    pub fn interior(&self) -> impl Iterator<Item = Cell> {
        let cols = self.cols;
        (1..self.rows).flat_map(move |row| (1..cols).map(move |col| Cell { row, col }))
    }
}

impl<T> Index<Cell> for Matrix<T> {
    type Output = T;

    #[inline(always)]
    fn index(&self, cell: Cell) -> &Self::Output {
        debug_assert!(cell.row < self.rows && cell.col < self.cols);
        &self.data[cell.row * self.cols + cell.col]
    }
}

impl<T> IndexMut<Cell> for Matrix<T> {
    #[inline(always)]
    fn index_mut(&mut self, cell: Cell) -> &mut Self::Output {
        debug_assert!(cell.row < self.rows && cell.col < self.cols);
        &mut self.data[cell.row * self.cols + cell.col]
    }
}

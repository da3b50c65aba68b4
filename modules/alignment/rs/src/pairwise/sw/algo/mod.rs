use std::fmt::{Debug, Formatter};

pub use local::FullScan;

use crate::pairwise::sw::Cell;
use crate::Score;

mod local;

/// Move that produced the value of a matrix cell.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Direction {
    /// From (i-1, j-1): one symbol from each sequence
    Diagonal = 0,
    /// From (i-1, j): a seq1 symbol against a gap
    Up = 1,
    /// From (i, j-1): a seq2 symbol against a gap
    Left = 2,
    /// Restart at zero, the cell terminates any path through it
    Reset = 3,
}

impl Direction {
    /// All directions in the canonical tie order.
    pub const ALL: [Direction; 4] = [
        Direction::Diagonal,
        Direction::Up,
        Direction::Left,
        Direction::Reset,
    ];

    #[inline(always)]
    fn bit(self) -> u8 {
        1 << (self as u8)
    }

    /// Cell the move originates from, `None` for `Reset`. The cell must not lie on the boundary.
    #[inline(always)]
    pub fn predecessor(&self, cell: Cell) -> Option<Cell> {
        debug_assert!(!cell.is_boundary());
        match self {
            Direction::Diagonal => Some(Cell::new(cell.row - 1, cell.col - 1)),
            Direction::Up => Some(Cell::new(cell.row - 1, cell.col)),
            Direction::Left => Some(Cell::new(cell.row, cell.col - 1)),
            Direction::Reset => None,
        }
    }
}

/// Set of tied directions packed into a single byte.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Directions(u8);

impl Directions {
    pub const fn empty() -> Self {
        Self(0)
    }

    #[inline(always)]
    pub fn insert(&mut self, direction: Direction) {
        self.0 |= direction.bit();
    }

    #[inline(always)]
    pub fn contains(&self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// First direction in the canonical order.
    #[inline(always)]
    pub fn first(&self) -> Option<Direction> {
        self.iter().next()
    }

    pub fn iter(&self) -> DirectionsIter {
        DirectionsIter(self.0)
    }
}

impl From<Direction> for Directions {
    fn from(value: Direction) -> Self {
        Self(value.bit())
    }
}

impl FromIterator<Direction> for Directions {
    fn from_iter<T: IntoIterator<Item = Direction>>(iter: T) -> Self {
        let mut result = Directions::empty();
        for direction in iter {
            result.insert(direction);
        }
        result
    }
}

impl IntoIterator for Directions {
    type Item = Direction;
    type IntoIter = DirectionsIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Debug for Directions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[derive(Copy, Clone, Debug)]
pub struct DirectionsIter(u8);

impl Iterator for DirectionsIter {
    type Item = Direction;

    #[inline(always)]
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            return None;
        }
        let index = self.0.trailing_zeros() as usize;
        // Drop the lowest set bit
        self.0 &= self.0 - 1;
        Some(Direction::ALL[index])
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.0.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for DirectionsIter {}

// Smith-Waterman scans run row-by-row and notify the tracer about every filled cell

#[allow(unused_variables)]
pub trait Tracer {
    type Score: Score;

    fn reset(&mut self, rows: usize, cols: usize) {}

    fn row_start(&mut self, row: usize) {}
    fn row_end(&mut self, row: usize) {}

    fn cell(&mut self, row: usize, col: usize, score: Self::Score, directions: Directions) {}
}

use std::marker::PhantomData;
use std::ops::Range;

use derive_getters::{Dissolve, Getters};

pub use exhaustive::Extents;

use crate::pairwise::sw::algo::{Direction, Directions, Tracer};
use crate::pairwise::sw::{Cell, Matrix};
use crate::Score;

mod exhaustive;

/// Path through the matrix, listed from the terminal cell to the origin cell.
#[derive(Clone, Eq, PartialEq, Debug, Getters, Dissolve)]
pub struct Trace {
    /// Moves in alignment order. Never contains `Reset`.
    steps: Vec<Direction>,
    /// Visited cells including the terminal one, `steps.len() + 1` in total
    cells: Vec<Cell>,
}

impl Trace {
    pub(crate) fn new(steps: Vec<Direction>, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), steps.len() + 1);
        debug_assert!(steps.iter().all(|x| *x != Direction::Reset));
        Self { steps, cells }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn terminal(&self) -> Cell {
        self.cells[0]
    }

    pub fn origin(&self) -> Cell {
        self.cells[self.cells.len() - 1]
    }

    /// Consumed part of the first sequence (0-based, end-exclusive).
    pub fn seq1(&self) -> Range<usize> {
        self.terminal().row..self.origin().row
    }

    /// Consumed part of the second sequence (0-based, end-exclusive).
    pub fn seq2(&self) -> Range<usize> {
        self.terminal().col..self.origin().col
    }
}

/// Tied directions of every scanned cell.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct TraceMatrix<S: Score> {
    directions: Matrix<Directions>,
    _phantom: PhantomData<S>,
}

impl<S: Score> TraceMatrix<S> {
    pub fn new() -> Self {
        Self {
            directions: Matrix::default(),
            _phantom: Default::default(),
        }
    }

    pub fn rows(&self) -> usize {
        self.directions.rows()
    }

    pub fn cols(&self) -> usize {
        self.directions.cols()
    }

    /// Directions of the cell, empty for boundary cells.
    #[inline(always)]
    pub fn directions(&self, cell: Cell) -> Directions {
        self.directions[cell]
    }

    /// Follow the first direction of every cell until a reset or the boundary.
    pub fn path(&self, origin: Cell) -> Trace {
        let mut steps = Vec::new();
        let mut cells = vec![origin];

        let mut cell = origin;
        while !cell.is_boundary() {
            let next = self.directions[cell]
                .first()
                .and_then(|direction| direction.predecessor(cell).map(|prev| (direction, prev)));
            match next {
                Some((direction, prev)) => {
                    steps.push(direction);
                    cells.push(prev);
                    cell = prev;
                }
                None => break,
            }
        }

        steps.reverse();
        cells.reverse();
        Trace::new(steps, cells)
    }
}

impl<S: Score> Tracer for TraceMatrix<S> {
    type Score = S;

    fn reset(&mut self, rows: usize, cols: usize) {
        self.directions.reset(rows, cols);
    }

    #[inline(always)]
    fn cell(&mut self, row: usize, col: usize, _: Self::Score, directions: Directions) {
        self.directions[Cell::new(row, col)] = directions;
    }
}

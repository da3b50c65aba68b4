use crate::pairwise::sw::algo::{Directions, Tracer};
use crate::pairwise::sw::storage::AlignmentSeed;
use crate::pairwise::sw::Cell;
use crate::Score;

use super::Storage;

/// Keeps every cell that attains the maximum score, in scan order.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Best<S: Score> {
    score: S,
    cells: Vec<Cell>,
}

impl<S: Score> Best<S> {
    pub fn new() -> Self {
        Self {
            score: S::min_value(),
            cells: Vec::new(),
        }
    }
}

impl<S: Score> Default for Best<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Score> Tracer for Best<S> {
    type Score = S;

    fn reset(&mut self, _: usize, _: usize) {
        self.score = S::min_value();
        self.cells.clear();
    }

    #[inline(always)]
    fn cell(&mut self, row: usize, col: usize, score: Self::Score, _: Directions) {
        if score > self.score {
            self.score = score;
            self.cells.clear();
            self.cells.push(Cell::new(row, col));
        } else if score == self.score {
            self.cells.push(Cell::new(row, col));
        }
    }
}

impl<S: Score> Storage for Best<S> {
    fn optimum(&self) -> S {
        if self.cells.is_empty() {
            S::zero()
        } else {
            self.score
        }
    }

    fn finalize(&mut self) -> Vec<AlignmentSeed<S>> {
        let score = self.score;
        self.cells
            .drain(..)
            .map(|cell| AlignmentSeed {
                row: cell.row,
                col: cell.col,
                score,
            })
            .collect()
    }
}

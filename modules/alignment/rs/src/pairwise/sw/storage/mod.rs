pub use best::Best;

use crate::pairwise::sw::algo::Tracer;
use crate::pairwise::sw::Cell;
use crate::Score;

mod best;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct AlignmentSeed<S: Score> {
    pub row: usize,
    pub col: usize,
    pub score: S,
}

impl<S: Score> AlignmentSeed<S> {
    pub fn cell(&self) -> Cell {
        Cell::new(self.row, self.col)
    }
}

pub trait Storage: Tracer {
    /// Highest score observed since the last reset, zero if no cell was scanned.
    fn optimum(&self) -> <Self as Tracer>::Score;

    fn finalize(&mut self) -> Vec<AlignmentSeed<<Self as Tracer>::Score>>;
}

use std::marker::PhantomData;

use crate::pairwise::sw::algo::{self, Directions};
use crate::Score;

/// Fan-out of the scan notifications to the storage and the trace matrix.
pub struct Tracers<S, Storage, TraceMat>
where
    S: Score,
    Storage: algo::Tracer<Score = S>,
    TraceMat: algo::Tracer<Score = S>,
{
    pub storage: Storage,
    pub tracemat: TraceMat,
    pub _phantom: PhantomData<S>,
}

impl<S, Storage, TraceMat> algo::Tracer for Tracers<S, Storage, TraceMat>
where
    S: Score,
    Storage: algo::Tracer<Score = S>,
    TraceMat: algo::Tracer<Score = S>,
{
    type Score = S;

    #[inline(always)]
    fn reset(&mut self, rows: usize, cols: usize) {
        self.storage.reset(rows, cols);
        self.tracemat.reset(rows, cols);
    }

    #[inline(always)]
    fn row_start(&mut self, row: usize) {
        self.storage.row_start(row);
        self.tracemat.row_start(row);
    }

    #[inline(always)]
    fn row_end(&mut self, row: usize) {
        self.storage.row_end(row);
        self.tracemat.row_end(row);
    }

    #[inline(always)]
    fn cell(&mut self, row: usize, col: usize, score: Self::Score, directions: Directions) {
        self.storage.cell(row, col, score, directions);
        self.tracemat.cell(row, col, score, directions);
    }
}

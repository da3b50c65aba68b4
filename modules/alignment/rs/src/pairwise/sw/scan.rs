use std::cell::OnceCell;

use derive_getters::Getters;

use crate::pairwise::alignment::Alignment;
use crate::pairwise::sw::storage::AlignmentSeed;
use crate::pairwise::sw::traceback::{Extents, TraceMatrix};
use crate::pairwise::sw::{Cell, ScoreMatrix};
use crate::{Alignable, Score};

/// Read-only outcome of a single Smith-Waterman scan.
#[derive(Clone, Debug, Getters)]
pub struct Scan<S: Score> {
    scores: ScoreMatrix<S>,
    tracemat: TraceMatrix<S>,
    /// Maximum score in the matrix
    optimum: S,
    /// Cells attaining the optimum as reported by the storage
    seeds: Vec<AlignmentSeed<S>>,
    #[getter(skip)]
    extents: OnceCell<Extents>,
}

impl<S: Score> Scan<S> {
    pub(crate) fn new(
        scores: ScoreMatrix<S>,
        tracemat: TraceMatrix<S>,
        optimum: S,
        seeds: Vec<AlignmentSeed<S>>,
    ) -> Self {
        debug_assert_eq!(scores.rows(), tracemat.rows());
        debug_assert_eq!(scores.cols(), tracemat.cols());
        Self {
            scores,
            tracemat,
            optimum,
            seeds,
            extents: OnceCell::new(),
        }
    }

    #[inline(always)]
    pub fn score(&self, cell: Cell) -> S {
        self.scores[cell]
    }

    /// Longest-path bookkeeping, built on first use.
    pub fn extents(&self) -> &Extents {
        self.extents.get_or_init(|| Extents::new(&self.tracemat))
    }

    /// The alignment obtained by always following the first tied direction.
    pub fn single<Smb, S1, S2>(&self, cell: Cell, seq1: &S1, seq2: &S2) -> Alignment<S>
    where
        Smb: Copy + PartialEq + Into<char>,
        S1: Alignable<Symbol = Smb>,
        S2: Alignable<Symbol = Smb>,
    {
        Alignment::new(self.tracemat.path(cell), self.score(cell), seq1, seq2)
    }

    /// Every maximal-length alignment ending at the cell.
    pub fn co_optimal<Smb, S1, S2>(&self, cell: Cell, seq1: &S1, seq2: &S2) -> Vec<Alignment<S>>
    where
        Smb: Copy + PartialEq + Into<char>,
        S1: Alignable<Symbol = Smb>,
        S2: Alignable<Symbol = Smb>,
    {
        let score = self.score(cell);
        self.extents()
            .paths(cell)
            .into_iter()
            .map(|trace| Alignment::new(trace, score, seq1, seq2))
            .collect()
    }
}

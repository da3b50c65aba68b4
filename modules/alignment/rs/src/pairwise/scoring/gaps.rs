use derive_more::Constructor;

use crate::pairwise::scoring::Score;

// Gaps are scored column by column, there is no opening cost
pub trait Scorer {
    type Score: Score;

    /// Score of a gap placed in seq1 in front of the seq2 symbol at `pos`
    fn seq1_gap(&self, pos: usize) -> Self::Score;
    /// Score of a gap placed in seq2 in front of the seq1 symbol at `pos`
    fn seq2_gap(&self, pos: usize) -> Self::Score;
}

pub trait PosInvariantScorer {
    type GapScore: Score;

    fn gap(&self) -> Self::GapScore;
}

impl<T: PosInvariantScorer> Scorer for T {
    type Score = <Self as PosInvariantScorer>::GapScore;

    #[inline(always)]
    fn seq1_gap(&self, _: usize) -> Self::Score {
        self.gap()
    }

    #[inline(always)]
    fn seq2_gap(&self, _: usize) -> Self::Score {
        self.gap()
    }
}

/// Fixed penalty for every gap column.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash, Constructor)]
pub struct Linear<S: Score> {
    pub penalty: S,
}

impl<S: Score> PosInvariantScorer for Linear<S> {
    type GapScore = S;

    #[inline(always)]
    fn gap(&self) -> Self::GapScore {
        self.penalty
    }
}

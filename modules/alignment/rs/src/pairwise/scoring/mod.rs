use derive_getters::Dissolve;
use derive_more::Constructor;

pub use delegate::Delegate;

pub use crate::Score;

mod delegate;
pub mod gaps;
pub mod symbols;

/// Complete scoring scheme: symbol-pair scores and gap penalties sharing one score type.
pub trait Scheme:
    gaps::Scorer<Score = <Self as Scheme>::Score>
    + symbols::Scorer<Score = <Self as Scheme>::Score, Symbol = <Self as Scheme>::Symbol>
{
    type Score: Score;
    type Symbol;
}

pub fn compose<ScoreType, Symbol, S, G>(symbols: S, gaps: G) -> Delegate<ScoreType, Symbol, S, G>
where
    ScoreType: Score,
    S: symbols::Scorer<Symbol = Symbol, Score = ScoreType>,
    G: gaps::Scorer<Score = ScoreType>,
{
    Delegate::new(symbols, gaps)
}

/// Match/mismatch/linear-gap scoring parameters.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Constructor, Dissolve)]
pub struct Scoring<S: Score> {
    pub match_score: S,
    pub mismatch_score: S,
    pub gap_penalty: S,
}

impl<S: Score> Scoring<S> {
    /// Equality-based symbol scoring with a linear gap penalty.
    pub fn scheme<Symbol: PartialEq>(
        &self,
    ) -> Delegate<S, Symbol, symbols::Equality<S, Symbol>, gaps::Linear<S>> {
        compose(
            symbols::Equality::new(self.match_score, self.mismatch_score),
            gaps::Linear::new(self.gap_penalty),
        )
    }
}

impl<S: Score> Default for Scoring<S> {
    fn default() -> Self {
        let three = S::one() + S::one() + S::one();
        Scoring {
            match_score: three,
            mismatch_score: S::zero() - three,
            gap_penalty: S::zero() - (S::one() + S::one()),
        }
    }
}

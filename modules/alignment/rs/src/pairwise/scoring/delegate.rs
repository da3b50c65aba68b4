use std::marker::PhantomData;

use crate::pairwise::scoring::{gaps, symbols, Score};

pub struct Delegate<ScoreType, Symbol, S, G>
where
    ScoreType: Score,
    S: symbols::Scorer<Symbol = Symbol, Score = ScoreType>,
    G: gaps::Scorer<Score = ScoreType>,
{
    pub symbols: S,
    pub gaps: G,
    symbol: PhantomData<Symbol>,
    score: PhantomData<ScoreType>,
}

impl<ScoreType, Symbol, S, G> Delegate<ScoreType, Symbol, S, G>
where
    ScoreType: Score,
    S: symbols::Scorer<Symbol = Symbol, Score = ScoreType>,
    G: gaps::Scorer<Score = ScoreType>,
{
    pub fn new(symbols: S, gaps: G) -> Self {
        Delegate {
            symbols,
            gaps,
            symbol: Default::default(),
            score: Default::default(),
        }
    }
}

impl<ScoreType, Symbol, S, G> gaps::Scorer for Delegate<ScoreType, Symbol, S, G>
where
    ScoreType: Score,
    S: symbols::Scorer<Symbol = Symbol, Score = ScoreType>,
    G: gaps::Scorer<Score = ScoreType>,
{
    type Score = ScoreType;

    #[inline(always)]
    fn seq1_gap(&self, pos: usize) -> Self::Score {
        self.gaps.seq1_gap(pos)
    }

    #[inline(always)]
    fn seq2_gap(&self, pos: usize) -> Self::Score {
        self.gaps.seq2_gap(pos)
    }
}

impl<ScoreType, Symbol, S, G> symbols::Scorer for Delegate<ScoreType, Symbol, S, G>
where
    ScoreType: Score,
    S: symbols::Scorer<Symbol = Symbol, Score = ScoreType>,
    G: gaps::Scorer<Score = ScoreType>,
{
    type Score = ScoreType;
    type Symbol = Symbol;

    #[inline(always)]
    fn score(&self, posa: usize, a: &Self::Symbol, posb: usize, b: &Self::Symbol) -> Self::Score {
        self.symbols.score(posa, a, posb, b)
    }
}

impl<ScoreType, Symbol, S, G> super::Scheme for Delegate<ScoreType, Symbol, S, G>
where
    ScoreType: Score,
    S: symbols::Scorer<Symbol = Symbol, Score = ScoreType>,
    G: gaps::Scorer<Score = ScoreType>,
{
    type Score = ScoreType;
    type Symbol = Symbol;
}

use swalign_alignment_rs::pairwise::scoring::{self, Scoring};
use swalign_alignment_rs::pairwise::{sw, Alignment, Op};

mod exhaustive;
mod local;
mod properties;

pub type Score = i32;
pub type Symbol = u8;

pub type Scheme = scoring::Delegate<
    Score,
    Symbol,
    scoring::symbols::Equality<Score, Symbol>,
    scoring::gaps::Linear<Score>,
>;
pub type Engine = sw::Engine<Score, Symbol, sw::storage::Best<Score>, Scheme>;

pub fn engine(scoring: Scoring<Score>) -> Engine {
    sw::Engine::new(sw::storage::Best::new(), scoring.scheme())
}

/// RLE of the same alignment with the sequences swapped
pub fn invrle(rle: &str) -> String {
    let gapfirst = Op::GapFirst.symbol();
    let gapsecond = Op::GapSecond.symbol();
    rle.chars()
        .map(|x| {
            if x == gapfirst {
                gapsecond
            } else if x == gapsecond {
                gapfirst
            } else {
                x
            }
        })
        .collect::<String>()
}

/// Score of the alignment recomputed column by column
pub fn rescore(alignment: &Alignment<Score>, scoring: &Scoring<Score>) -> Score {
    alignment
        .ops()
        .iter()
        .map(|op| match op {
            Op::Match => scoring.match_score,
            Op::Mismatch => scoring.mismatch_score,
            Op::GapFirst | Op::GapSecond => scoring.gap_penalty,
        })
        .sum()
}

/// Every sequence over the alphabet with length in the given range
pub fn all_sequences(alphabet: &[u8], lengths: std::ops::RangeInclusive<usize>) -> Vec<Vec<u8>> {
    let mut result = Vec::new();
    let mut layer: Vec<Vec<u8>> = vec![Vec::new()];
    for len in 1..=*lengths.end() {
        layer = layer
            .iter()
            .flat_map(|prefix| {
                alphabet.iter().map(move |symbol| {
                    let mut seq = prefix.clone();
                    seq.push(*symbol);
                    seq
                })
            })
            .collect();
        if lengths.contains(&len) {
            result.extend(layer.iter().cloned());
        }
    }
    result
}

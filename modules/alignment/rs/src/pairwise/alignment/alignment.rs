use std::fmt::{Display, Formatter};
use std::ops::Range;

use derive_getters::{Dissolve, Getters};

use crate::pairwise::sw::traceback::Trace;
use crate::pairwise::sw::Cell;
use crate::pairwise::{Op, Step};
use crate::{Alignable, Score};

use super::utils;

/// Placeholder printed in the gapped sequence.
pub const GAP: char = '-';

/// A local alignment between two sequences.
#[derive(Clone, Eq, PartialEq, Debug, Getters, Dissolve)]
pub struct Alignment<S: Score> {
    /// Value of the matrix cell the alignment ends at
    score: S,
    origin: Cell,
    /// Per-column operations, left to right
    ops: Vec<Op>,
    /// Aligned part of the first sequence (0-based, end-exclusive)
    seq1: Range<usize>,
    /// Aligned part of the second sequence (0-based, end-exclusive)
    seq2: Range<usize>,
    aligned1: String,
    markers: String,
    aligned2: String,
    /// Matrix cells visited by the traceback, from the terminal cell to the origin
    path: Vec<Cell>,
}

impl<S: Score> Alignment<S> {
    pub fn new<Smb, S1, S2>(trace: Trace, score: S, seq1: &S1, seq2: &S2) -> Self
    where
        Smb: Copy + PartialEq + Into<char>,
        S1: Alignable<Symbol = Smb>,
        S2: Alignable<Symbol = Smb>,
    {
        let (seq1range, seq2range) = (trace.seq1(), trace.seq2());
        let origin = trace.origin();
        let (steps, path) = trace.dissolve();

        let ops = utils::disambiguate(&steps, seq1, seq1range.start, seq2, seq2range.start);

        let mut aligned1 = String::with_capacity(ops.len());
        let mut markers = String::with_capacity(ops.len());
        let mut aligned2 = String::with_capacity(ops.len());

        let (mut s1, mut s2) = (seq1range.start, seq2range.start);
        for op in &ops {
            let (a, b): (char, char) = match op {
                Op::GapFirst => (GAP, (*seq2.at(s2)).into()),
                Op::GapSecond => ((*seq1.at(s1)).into(), GAP),
                Op::Match | Op::Mismatch => ((*seq1.at(s1)).into(), (*seq2.at(s2)).into()),
            };
            aligned1.push(a);
            markers.push(op.marker());
            aligned2.push(b);
            op.apply(&mut s1, &mut s2, 1);
        }
        debug_assert_eq!((s1, s2), (seq1range.end, seq2range.end));

        Self {
            score,
            origin,
            ops,
            seq1: seq1range,
            seq2: seq2range,
            aligned1,
            markers,
            aligned2,
            path,
        }
    }

    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn steps(&self) -> Vec<Step<usize>> {
        Step::runs(&self.ops)
    }

    /// Run-length encoded operations, e.g. `3=1v2=`.
    pub fn rle(&self) -> String {
        Step::rle_string(self.steps().iter())
    }

    /// Longest run of consecutive matches. Gaps and mismatches break the run.
    pub fn longest_match_streak(&self) -> usize {
        Step::longest(self.steps().iter(), Op::Match)
    }
}

impl<S: Score> Display for Alignment<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.aligned1)?;
        writeln!(f, "{}", self.markers)?;
        write!(f, "{}", self.aligned2)
    }
}

/// `Op` represents a single column of a pairwise alignment.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub enum Op {
    /// A gap placed in the first sequence: only a symbol of the second sequence is consumed (v)
    GapFirst,
    /// A gap placed in the second sequence: only a symbol of the first sequence is consumed (^)
    GapSecond,
    /// Identical symbols (=)
    Match,
    /// Different symbols (X)
    Mismatch,
}

impl Op {
    /// Returns `true` if the operation consumes a symbol from both sequences.
    pub fn is_diagonal(&self) -> bool {
        matches!(self, Op::Match | Op::Mismatch)
    }

    /// Returns the compact (RLE) symbol of the operation.
    pub fn symbol(&self) -> char {
        match self {
            Op::GapFirst => 'v',
            Op::GapSecond => '^',
            Op::Match => '=',
            Op::Mismatch => 'X',
        }
    }

    /// Returns the character drawn between the aligned sequences for this column.
    pub fn marker(&self) -> char {
        match self {
            Op::GapFirst | Op::GapSecond => ' ',
            Op::Match => '|',
            Op::Mismatch => 'X',
        }
    }

    /// Advances sequence positions by `len` columns of this operation.
    pub fn apply(&self, seq1: &mut usize, seq2: &mut usize, len: usize) {
        match self {
            Op::GapFirst => *seq2 += len,
            Op::GapSecond => *seq1 += len,
            Op::Match | Op::Mismatch => {
                *seq1 += len;
                *seq2 += len;
            }
        }
    }
}

use crate::pairwise::sw::algo::Direction;
use crate::pairwise::Op;
use crate::Alignable;

/// Resolve traceback moves into alignment operations.
/// Diagonal moves become matches or mismatches depending on the symbols they pair.
pub fn disambiguate<Smb, S1, S2>(
    steps: &[Direction],
    seq1: &S1,
    seq1offset: usize,
    seq2: &S2,
    seq2offset: usize,
) -> Vec<Op>
where
    Smb: PartialEq,
    S1: Alignable<Symbol = Smb>,
    S2: Alignable<Symbol = Smb>,
{
    let (mut s1, mut s2) = (seq1offset, seq2offset);
    let mut result = Vec::with_capacity(steps.len());
    for step in steps {
        let op = match step {
            Direction::Diagonal if seq1.at(s1) == seq2.at(s2) => Op::Match,
            Direction::Diagonal => Op::Mismatch,
            Direction::Up => Op::GapSecond,
            Direction::Left => Op::GapFirst,
            Direction::Reset => {
                log::error!("Reset direction inside a traceback path at ({s1}, {s2})");
                continue;
            }
        };
        op.apply(&mut s1, &mut s2, 1);
        result.push(op);
    }
    result
}

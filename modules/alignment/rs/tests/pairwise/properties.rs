use std::cmp::max;
use std::collections::HashSet;

use swalign_alignment_rs::pairwise::sw::algo::{Direction, Directions};
use swalign_alignment_rs::pairwise::sw::Cell;

use super::*;

const SCORINGS: [(Score, Score, Score); 3] = [(3, -3, -2), (1, -1, 0), (2, -1, -3)];

fn pairs() -> Vec<(Vec<u8>, Vec<u8>)> {
    let sequences = all_sequences(b"AC", 1..=4);
    let mut result = Vec::with_capacity(sequences.len() * sequences.len());
    for seq1 in &sequences {
        for seq2 in &sequences {
            result.push((seq1.clone(), seq2.clone()));
        }
    }
    result
}

#[test]
fn test_recurrence() {
    for (ms, mm, gap) in SCORINGS {
        let mut engine = engine(Scoring::new(ms, mm, gap));
        for (seq1, seq2) in pairs() {
            let scan = engine.scan_all(&seq1, &seq2);
            let scores = scan.scores();

            for col in 0..scores.cols() {
                assert_eq!(scan.score(Cell::new(0, col)), 0);
            }
            for row in 0..scores.rows() {
                assert_eq!(scan.score(Cell::new(row, 0)), 0);
            }

            let mut optimum = 0;
            for cell in scores.interior() {
                let (row, col) = (cell.row, cell.col);
                let symbol = if seq1[row - 1] == seq2[col - 1] { ms } else { mm };
                let candidates = [
                    (Direction::Diagonal, scan.score(Cell::new(row - 1, col - 1)) + symbol),
                    (Direction::Up, scan.score(Cell::new(row - 1, col)) + gap),
                    (Direction::Left, scan.score(Cell::new(row, col - 1)) + gap),
                    (Direction::Reset, 0),
                ];
                let value = candidates.iter().map(|x| x.1).max().unwrap_or(0);
                let tags: Directions = candidates
                    .iter()
                    .filter(|x| x.1 == value)
                    .map(|x| x.0)
                    .collect();

                assert!(scan.score(cell) >= 0);
                assert_eq!(scan.score(cell), value);
                assert_eq!(scan.tracemat().directions(cell), tags);
                optimum = max(optimum, value);
            }

            assert_eq!(*scan.optimum(), optimum);
            assert!(!scan.seeds().is_empty());
            assert!(scan.seeds().iter().all(|x| x.score == optimum));
            assert!(scan.seeds().windows(2).all(|x| x[0].cell() < x[1].cell()));
        }
    }
}

#[test]
fn test_single_path() {
    for (ms, mm, gap) in SCORINGS {
        let scoring = Scoring::new(ms, mm, gap);
        let mut engine = engine(scoring);
        for (seq1, seq2) in pairs() {
            let scan = engine.scan_all(&seq1, &seq2);
            for cell in scan.scores().interior() {
                let alignment = scan.single(cell, &seq1, &seq2);

                let terminal = alignment.path()[0];
                let directions = scan.tracemat().directions(terminal);
                assert!(terminal.is_boundary() || directions.first() == Some(Direction::Reset));
                assert_eq!(rescore(&alignment, &scoring), scan.score(cell));
                assert_eq!(alignment.path().len(), alignment.len() + 1);
            }
        }
    }
}

#[test]
fn test_exhaustive() {
    for (ms, mm, gap) in SCORINGS {
        let scoring = Scoring::new(ms, mm, gap);
        let mut engine = engine(scoring);
        for (seq1, seq2) in pairs() {
            let scan = engine.scan_all(&seq1, &seq2);
            for cell in scan.scores().interior() {
                let alignments = scan.co_optimal(cell, &seq1, &seq2);
                assert!(!alignments.is_empty());

                let length = alignments[0].len();
                let mut unique = HashSet::new();
                for alignment in &alignments {
                    assert_eq!(alignment.len(), length);
                    assert_eq!(rescore(alignment, &scoring), scan.score(cell));
                    assert!(unique.insert(alignment.path().clone()));
                }

                // Nothing reachable by the single-path walk is longer
                assert!(scan.single(cell, &seq1, &seq2).len() <= length);
            }
        }
    }
}

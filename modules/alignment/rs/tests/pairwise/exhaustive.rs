use swalign_alignment_rs::pairwise::sw::Cell;

use super::*;

struct Workload<'a> {
    seq1: &'a [u8],
    seq2: &'a [u8],
    scoring: Scoring<Score>,
    cell: (usize, usize),
    expected: Vec<[&'a str; 3]>,
}

fn ensure(w: Workload<'_>) {
    let mut engine = engine(w.scoring);
    let scan = engine.scan_all(&w.seq1, &w.seq2);
    let cell = Cell::from(w.cell);

    let alignments = scan.co_optimal(cell, &w.seq1, &w.seq2);
    let lines: Vec<[&str; 3]> = alignments
        .iter()
        .map(|x| [x.aligned1().as_str(), x.markers().as_str(), x.aligned2().as_str()])
        .collect();
    assert_eq!(lines, w.expected);

    let length = scan.extents().len(cell);
    for alignment in &alignments {
        assert_eq!(*alignment.origin(), cell);
        assert_eq!(alignment.len(), length);
        assert_eq!(alignment.path().len(), length + 1);
        assert_eq!(*alignment.score(), scan.score(cell));
        assert_eq!(rescore(alignment, &w.scoring), scan.score(cell));
    }
}

#[test]
fn test_co_optimal() {
    let workload = vec![
        Workload {
            seq1: b"TGTTACGG",
            seq2: b"GGTTGACTA",
            scoring: Scoring::default(),
            cell: (6, 7),
            expected: vec![["GTT-AC", "||| ||", "GTTGAC"]],
        },
        Workload {
            seq1: b"TGTTACGG",
            seq2: b"GGTTGACTA",
            scoring: Scoring::default(),
            cell: (7, 9),
            expected: vec![
                ["GTT-AC-G", "||| || X", "GTTGACTA"],
                ["GTT-ACG-", "||| ||X ", "GTTGACTA"],
            ],
        },
        Workload {
            seq1: b"TGTTACGG",
            seq2: b"GGTTGACTA",
            scoring: Scoring::default(),
            cell: (8, 8),
            expected: vec![
                ["GTT-ACGG", "||| || X", "GTTGAC-T"],
                ["GTT-ACGG", "||| ||X ", "GTTGACT-"],
            ],
        },
        Workload {
            seq1: b"ATAT",
            seq2: b"AT",
            scoring: Scoring::new(1, -1, 0),
            cell: (4, 2),
            expected: vec![["ATAT", "|  |", "A--T"], ["ATAT", "||  ", "AT--"]],
        },
        Workload {
            seq1: b"GATC",
            seq2: b"GTAC",
            scoring: Scoring::new(2, -1, -1),
            cell: (4, 4),
            expected: vec![["G-ATC", "| | |", "GTA-C"], ["GAT-C", "| | |", "G-TAC"]],
        },
        Workload {
            seq1: b"AAAA",
            seq2: b"TTTT",
            scoring: Scoring::default(),
            cell: (2, 3),
            expected: vec![["", "", ""]],
        },
    ];

    for w in workload {
        ensure(w);
    }
}

#[test]
fn test_boundary_origin() {
    let mut engine = engine(Scoring::default());
    let (seq1, seq2): (&[u8], &[u8]) = (b"ACGT", b"ACGT");
    let scan = engine.scan_all(&seq1, &seq2);

    let alignments = scan.co_optimal(Cell::new(0, 2), &seq1, &seq2);
    assert_eq!(alignments.len(), 1);
    assert!(alignments[0].is_empty());
}

#[test]
fn test_long_path() {
    // Deep paths must not depend on the call stack
    let seq: Vec<u8> = b"ACGT".iter().copied().cycle().take(1_000).collect();
    let mut engine = engine(Scoring::default());
    let scan = engine.scan_all(&seq, &seq);
    assert_eq!(*scan.optimum(), 3_000);

    let cell = scan.seeds()[0].cell();
    assert_eq!(cell, Cell::new(1_000, 1_000));

    let alignments = scan.co_optimal(cell, &seq, &seq);
    assert_eq!(alignments.len(), 1);
    assert_eq!(alignments[0].rle(), "1000=");
    assert_eq!(alignments[0], scan.single(cell, &seq, &seq));
}

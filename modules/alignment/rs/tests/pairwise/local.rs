use super::*;

struct Workload<'a> {
    seq1: (&'a [u8], usize),
    seq2: (&'a [u8], usize),
    score: Score,
    rle: &'a str,
}

fn ensure(engine: &mut Engine, w: Workload<'_>) {
    let invrle = invrle(w.rle);

    for (seq1, seq2, rle) in [(w.seq1, w.seq2, w.rle), (w.seq2, w.seq1, invrle.as_str())] {
        let scan = engine.scan_all(&seq1.0, &seq2.0);
        let seed = scan.seeds().first().unwrap_or_else(|| {
            panic!("No alignment: {:?} & {:?}", seq1.0, seq2.0)
        });
        let alignment = scan.single(seed.cell(), &seq1.0, &seq2.0);

        assert_eq!(alignment.seq1().start, seq1.1);
        assert_eq!(alignment.seq2().start, seq2.1);
        assert_eq!(*alignment.score(), w.score);
        assert_eq!(*scan.optimum(), w.score);
        assert_eq!(alignment.rle(), rle);
    }
}

fn test_empty(engine: &mut Engine) {
    let workload: Vec<(&[u8], &[u8])> = vec![(b"ACGT", b""), (b"", b"ACGT"), (b"", b"")];
    for (seq1, seq2) in workload {
        let scan = engine.scan_all(&seq1, &seq2);
        assert_eq!(*scan.optimum(), 0);
        assert!(scan.seeds().is_empty());
    }
}

fn test_no_similarity(engine: &mut Engine) {
    let workload: Vec<(&[u8], &[u8])> = vec![(b"ACGT", b"----"), (b"_", b"A"), (b"AAAA", b"TTTT")];
    for (seq1, seq2) in workload {
        let scan = engine.scan_all(&seq1, &seq2);
        assert_eq!(*scan.optimum(), 0);
        // Every cell ties at zero
        assert_eq!(scan.seeds().len(), seq1.len() * seq2.len());
        for seed in scan.seeds() {
            assert!(scan.single(seed.cell(), &seq1, &seq2).is_empty());
        }
    }
}

fn test_no_gaps(engine: &mut Engine) {
    let workload = vec![
        Workload {
            seq1: (b"AAGAA", 1),
            seq2: (b"AGA", 0),
            score: 9,
            rle: "3=",
        },
        Workload {
            seq1: (b"AGTCCCGTGTCCCAGGGG", 0),
            seq2: (b"AGTC", 0),
            score: 12,
            rle: "4=",
        },
        Workload {
            seq1: (b"CGCGCGCGTTT", 6),
            seq2: (b"CGTTT", 0),
            score: 15,
            rle: "5=",
        },
        Workload {
            seq1: (b"AAAA", 0),
            seq2: (b"AAAA", 0),
            score: 12,
            rle: "4=",
        },
    ];

    for w in workload {
        ensure(engine, w);
    }
}

fn test_linear_gaps(engine: &mut Engine) {
    let workload = vec![
        Workload {
            seq1: (b"AAAGGGAGGGTTTA", 3),
            seq2: (b"GGGGGGG", 0),
            score: 16,
            rle: "3=1^3=",
        },
        Workload {
            seq1: (b"ACGTACGTTTACGT", 0),
            seq2: (b"ACGTACGTACGT", 0),
            score: 32,
            rle: "7=2^5=",
        },
        Workload {
            seq1: (b"GATTACAGATTACA", 0),
            seq2: (b"GATTACGATTACA", 0),
            score: 37,
            rle: "6=1^7=",
        },
        Workload {
            seq1: (b"TTTTTTTTAAAAAAAACCCCCCCC", 0),
            seq2: (b"TTTTTTTTCCCCCCCC", 0),
            score: 32,
            rle: "8=8^8=",
        },
        Workload {
            seq1: (b"TGTTACGG", 1),
            seq2: (b"GGTTGACTA", 1),
            score: 13,
            rle: "3=1v2=",
        },
    ];

    for w in workload {
        ensure(engine, w);
    }
}

fn test_expensive_gaps(engine: &mut Engine) {
    let workload = vec![
        Workload {
            seq1: (b"AAAGGGAGGGTTTA", 3),
            seq2: (b"GGGGGGG", 0),
            score: 11,
            rle: "3=1X3=",
        },
        Workload {
            seq1: (b"TTTTTTTTAAAAAAAACCCCCCCC", 0),
            seq2: (b"TTTTTTTTCCCCCCCC", 0),
            score: 16,
            rle: "8=",
        },
        Workload {
            seq1: (b"GATTACAGATTACA", 0),
            seq2: (b"GATTACGATTACA", 0),
            score: 23,
            rle: "6=1^7=",
        },
    ];

    for w in workload {
        ensure(engine, w);
    }
}

#[test]
pub fn test_all() {
    let mut engine = engine(Scoring::default());
    test_empty(&mut engine);
    test_no_similarity(&mut engine);
    test_no_gaps(&mut engine);
    test_linear_gaps(&mut engine);

    engine.with_scoring(Scoring::new(2, -1, -3).scheme());
    test_expensive_gaps(&mut engine);
}

#[test]
pub fn test_identical() -> eyre::Result<()> {
    let mut engine = engine(Scoring::default());
    let (seq1, seq2): (&[u8], &[u8]) = (b"ABC", b"ABC");
    let scan = engine.scan_all(&seq1, &seq2);

    let seed = scan
        .seeds()
        .first()
        .ok_or_else(|| eyre::eyre!("No seeds"))?;
    let alignment = scan.single(seed.cell(), &seq1, &seq2);
    assert_eq!(*alignment.score(), 9);
    assert_eq!(alignment.aligned1(), "ABC");
    assert_eq!(alignment.markers(), "|||");
    assert_eq!(alignment.aligned2(), "ABC");
    Ok(())
}

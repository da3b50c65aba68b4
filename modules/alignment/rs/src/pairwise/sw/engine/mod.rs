use std::marker::PhantomData;

use tracers::Tracers;

use crate::pairwise::scoring;
use crate::pairwise::sw::{algo, storage, traceback, Scan};
use crate::{Alignable, Score};

mod tracers;

pub struct Engine<S, Smb, Storage, Scheme>
where
    S: Score,
    Scheme: scoring::Scheme<Score = S, Symbol = Smb>,
    Storage: storage::Storage + algo::Tracer<Score = S>,
{
    algo: algo::FullScan<S>,
    scoring: Scheme,
    tracers: Tracers<S, Storage, traceback::TraceMatrix<S>>,
    _symbol: PhantomData<Smb>,
}

impl<S, Smb, Storage, Scheme> Engine<S, Smb, Storage, Scheme>
where
    S: Score,
    Scheme: scoring::Scheme<Score = S, Symbol = Smb>,
    Storage: storage::Storage + algo::Tracer<Score = S>,
{
    pub fn new(storage: Storage, scoring: Scheme) -> Self {
        let tracers = Tracers {
            storage,
            tracemat: traceback::TraceMatrix::new(),
            _phantom: Default::default(),
        };
        Self {
            algo: algo::FullScan::new(),
            scoring,
            tracers,
            _symbol: Default::default(),
        }
    }

    pub fn with_scoring(&mut self, scoring: Scheme) {
        self.scoring = scoring;
    }

    /// Fill the score and trace matrices for the two sequences.
    /// Empty sequences produce a boundary-only scan with a zero optimum.
    pub fn scan_all<S1, S2>(&mut self, seq1: &S1, seq2: &S2) -> Scan<S>
    where
        S1: Alignable<Symbol = Smb>,
        S2: Alignable<Symbol = Smb>,
    {
        self.algo
            .scan_all(seq1, seq2, &self.scoring, &mut self.tracers);

        let optimum = self.tracers.storage.optimum();
        let seeds = self.tracers.storage.finalize();
        log::debug!(
            "Scanned {}x{} matrix: optimum {}, {} seed(s)",
            seq1.len() + 1,
            seq2.len() + 1,
            optimum,
            seeds.len()
        );

        Scan::new(
            self.algo.take_scores(),
            std::mem::take(&mut self.tracers.tracemat),
            optimum,
            seeds,
        )
    }
}

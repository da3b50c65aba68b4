use std::cmp::Reverse;

use derive_getters::{Dissolve, Getters};
use eyre::{ensure, Result};

use crate::pairwise::alignment::AlignmentSet;
use crate::pairwise::sw::Scan;
use crate::{Alignable, Score};

/// Selects high-scoring cells and ranks their co-optimal alignments by the longest match streak.
#[derive(Copy, Clone, PartialEq, Debug, Getters, Dissolve)]
pub struct Ranker {
    /// Minimum run of consecutive matches an alignment must contain
    min_streak: usize,
    /// Fraction of the optimum a cell must reach to be expanded
    fraction: f64,
}

impl Ranker {
    pub fn new(min_streak: usize, fraction: f64) -> Result<Self> {
        ensure!(
            fraction.is_finite() && (0.0..=1.0).contains(&fraction),
            "Threshold fraction must be within [0, 1], got {fraction}"
        );
        Ok(Self {
            min_streak,
            fraction,
        })
    }

    pub fn threshold<S: Score>(&self, optimum: S) -> f64 {
        optimum.as_() * self.fraction
    }

    pub fn select_and_rank<S, Smb, S1, S2>(
        &self,
        scan: &Scan<S>,
        seq1: &S1,
        seq2: &S2,
    ) -> AlignmentSet<S>
    where
        S: Score,
        Smb: Copy + PartialEq + Into<char>,
        S1: Alignable<Symbol = Smb>,
        S2: Alignable<Symbol = Smb>,
    {
        let threshold = self.threshold(*scan.optimum());

        let mut candidates = 0;
        let mut ranked = Vec::new();
        for cell in scan.scores().interior() {
            if scan.score(cell).as_() < threshold {
                continue;
            }
            for alignment in scan.co_optimal(cell, seq1, seq2) {
                candidates += 1;
                let streak = alignment.longest_match_streak();
                if streak >= self.min_streak {
                    ranked.push((streak, alignment));
                }
            }
        }
        // Stable: ties keep the discovery order
        ranked.sort_by_key(|(streak, _)| Reverse(*streak));

        log::debug!(
            "Threshold {threshold}: {candidates} candidate alignment(s), {} kept",
            ranked.len()
        );

        AlignmentSet::new(
            threshold,
            ranked.into_iter().map(|(_, alignment)| alignment).collect(),
        )
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self {
            min_streak: 3,
            fraction: 0.6,
        }
    }
}

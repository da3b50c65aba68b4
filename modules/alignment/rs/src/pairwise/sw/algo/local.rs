use std::cmp::max;

use crate::pairwise::scoring;
use crate::pairwise::sw::algo::{Direction, Directions, Tracer};
use crate::pairwise::sw::{Cell, ScoreMatrix};
use crate::{Alignable, Score};

/// Full (m+1)x(n+1) local alignment scan with a linear gap model.
#[derive(Clone, Debug, Default)]
pub struct FullScan<S: Score> {
    scores: ScoreMatrix<S>,
}

impl<S: Score> FullScan<S> {
    pub fn new() -> Self {
        Self {
            scores: ScoreMatrix::default(),
        }
    }

    pub fn scores(&self) -> &ScoreMatrix<S> {
        &self.scores
    }

    /// Hand over the score matrix of the last scan, leaving an empty one behind.
    pub fn take_scores(&mut self) -> ScoreMatrix<S> {
        std::mem::take(&mut self.scores)
    }

    pub fn scan_all<Smb, S1, S2, Scheme, T>(
        &mut self,
        seq1: &S1,
        seq2: &S2,
        scoring: &Scheme,
        tracer: &mut T,
    ) where
        S1: Alignable<Symbol = Smb>,
        S2: Alignable<Symbol = Smb>,
        Scheme: scoring::Scheme<Score = S, Symbol = Smb>,
        T: Tracer<Score = S>,
    {
        let (rows, cols) = (seq1.len() + 1, seq2.len() + 1);
        self.scores.reset(rows, cols);
        tracer.reset(rows, cols);

        for row in 1..rows {
            tracer.row_start(row);
            let s1 = seq1.at(row - 1);
            // Moving down consumes a seq1 symbol against a gap in seq2
            let up_gap = scoring.seq2_gap(row - 1);

            for col in 1..cols {
                // Saturate so that extreme scores never wrap around
                let diagonal = self.scores[Cell::new(row - 1, col - 1)]
                    .saturating_add(scoring.score(row - 1, s1, col - 1, seq2.at(col - 1)));
                let up = self.scores[Cell::new(row - 1, col)].saturating_add(up_gap);
                let left =
                    self.scores[Cell::new(row, col - 1)].saturating_add(scoring.seq1_gap(col - 1));

                let score = max(max(diagonal, up), max(left, S::zero()));
                let mut directions = Directions::empty();
                for (direction, candidate) in [
                    (Direction::Diagonal, diagonal),
                    (Direction::Up, up),
                    (Direction::Left, left),
                    (Direction::Reset, S::zero()),
                ] {
                    if candidate == score {
                        directions.insert(direction);
                    }
                }

                self.scores[Cell::new(row, col)] = score;
                tracer.cell(row, col, score, directions);
            }
            tracer.row_end(row);
        }
    }
}

use std::fmt::{Display, Formatter};

use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;

pub use render::AnnotatedMatrix;

use crate::pairwise::alignment::Alignment;
use crate::pairwise::scoring::Scoring;
use crate::pairwise::sw::storage::Best;
use crate::pairwise::sw::{Engine, Matrix};
use crate::pairwise::Ranker;
use crate::{Score, Sequence};

mod render;

/// Which of the cells tying for the optimum are reported in the best-alignment mode.
#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Hash)]
pub enum TieBreak {
    /// First cell in row-major order
    #[default]
    First,
    /// Last cell in row-major order
    Last,
    /// One alignment per tied cell
    All,
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Search {
    /// Single-path traceback from the optimum
    Best(TieBreak),
    /// Every co-optimal alignment of the cells passing the threshold, ranked by match streak
    Ranked(Ranker),
}

impl Default for Search {
    fn default() -> Self {
        Search::Best(TieBreak::default())
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default, Hash)]
pub enum MatrixDisplay {
    #[default]
    None,
    Plain,
    /// Colour headers and the cells visited by the reported alignments
    Highlighted,
}

#[derive(Copy, Clone, PartialEq, Debug, Default, Constructor, Dissolve)]
pub struct Mode {
    pub search: Search,
    pub display: MatrixDisplay,
}

#[derive(Clone, PartialEq, Debug, Getters, Dissolve)]
pub struct AlignmentReport<S: Score> {
    seq1: Sequence,
    seq2: Sequence,
    /// Optimal local alignment score
    score: S,
    /// Acceptance threshold, ranked mode only
    threshold: Option<f64>,
    alignments: Vec<Alignment<S>>,
    matrix: Option<AnnotatedMatrix<S>>,
}

impl<S: Score> Display for AlignmentReport<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SEQ1: {}", self.seq1)?;
        writeln!(f, "SEQ2: {}", self.seq2)?;
        writeln!(f, "SCORE: {}", self.score)?;
        if let Some(threshold) = self.threshold {
            writeln!(f, "THRESHOLD: {threshold}")?;
        }
        writeln!(f)?;

        for alignment in &self.alignments {
            writeln!(f, "{alignment}")?;
            writeln!(f)?;
        }

        if let Some(matrix) = &self.matrix {
            write!(f, "{matrix}")?;
        }
        Ok(())
    }
}

/// Align two raw sequences. Both are normalised to uppercase before the scan.
pub fn align<S: Score>(
    seq1: &str,
    seq2: &str,
    scoring: Scoring<S>,
    mode: Mode,
) -> AlignmentReport<S> {
    let (seq1, seq2) = (Sequence::new(seq1), Sequence::new(seq2));

    let mut engine = Engine::new(Best::new(), scoring.scheme());
    let scan = engine.scan_all(&seq1, &seq2);
    let score = *scan.optimum();

    if score.is_zero() && !seq1.is_empty() && !seq2.is_empty() {
        log::warn!("No similarity between {seq1} and {seq2}: every score is zero");
    }

    let (threshold, alignments) = match mode.search {
        Search::Best(_) if score.is_zero() => (None, Vec::new()),
        Search::Best(tiebreak) => {
            let seeds = scan.seeds();
            let chosen = match tiebreak {
                TieBreak::First => &seeds[..seeds.len().min(1)],
                TieBreak::Last => &seeds[seeds.len().saturating_sub(1)..],
                TieBreak::All => &seeds[..],
            };
            let alignments: Vec<_> = chosen
                .iter()
                .map(|seed| scan.single(seed.cell(), &seq1, &seq2))
                .collect();
            (None, alignments)
        }
        Search::Ranked(ranker) => {
            let (threshold, alignments) = ranker.select_and_rank(&scan, &seq1, &seq2).dissolve();
            (Some(threshold), alignments)
        }
    };

    let matrix = match mode.display {
        MatrixDisplay::None => None,
        MatrixDisplay::Plain => Some(AnnotatedMatrix::new(
            seq1.clone(),
            seq2.clone(),
            scan.scores().clone(),
            None,
        )),
        MatrixDisplay::Highlighted => {
            let scores = scan.scores();
            let mut marked = Matrix::new(scores.rows(), scores.cols());
            for cell in alignments.iter().flat_map(|x| x.path()) {
                marked[*cell] = true;
            }
            Some(AnnotatedMatrix::new(
                seq1.clone(),
                seq2.clone(),
                scores.clone(),
                Some(marked),
            ))
        }
    };

    AlignmentReport {
        seq1,
        seq2,
        score,
        threshold,
        alignments,
        matrix,
    }
}

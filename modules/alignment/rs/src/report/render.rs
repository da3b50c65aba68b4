use std::fmt::{Display, Formatter};

use derive_getters::Getters;
use derive_more::Constructor;
use itertools::Itertools;

use crate::pairwise::sw::{Cell, Matrix, ScoreMatrix};
use crate::{Score, Sequence};

const GREEN: &str = "\x1b[92m";
const YELLOW: &str = "\x1b[93m";
const RESET: &str = "\x1b[0m";

/// Score matrix with sequence headers. When `marked` is set the output is coloured
/// with ANSI escapes: headers in green, marked cells in yellow.
#[derive(Clone, PartialEq, Debug, Getters, Constructor)]
pub struct AnnotatedMatrix<S: Score> {
    seq1: Sequence,
    seq2: Sequence,
    scores: ScoreMatrix<S>,
    marked: Option<Matrix<bool>>,
}

impl<S: Score> AnnotatedMatrix<S> {
    /// Marked cells outside the headers, row-major.
    pub fn marked_cells(&self) -> Vec<Cell> {
        match &self.marked {
            None => Vec::new(),
            Some(marked) => marked.interior().filter(|x| marked[*x]).collect(),
        }
    }

    fn header(&self, symbol: impl Display) -> String {
        match self.marked {
            None => symbol.to_string(),
            Some(_) => format!("{GREEN}{symbol}{RESET}"),
        }
    }

    fn value(&self, cell: Cell) -> String {
        let score = self.scores[cell];
        match &self.marked {
            Some(marked) if marked[cell] => format!("{YELLOW}{score}{RESET}"),
            _ => score.to_string(),
        }
    }
}

impl<S: Score> Display for AnnotatedMatrix<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let cols = self.scores.cols();

        let header = std::iter::once(self.header('\\'))
            .chain(self.seq2.symbols().iter().map(|x| self.header(x)))
            .join("\t");
        writeln!(f, "{header}")?;

        for (row, symbol) in (1..self.scores.rows()).zip(self.seq1.symbols()) {
            let line = std::iter::once(self.header(symbol))
                .chain((1..cols).map(|col| self.value(Cell::new(row, col))))
                .join("\t");
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

use derive_getters::{Dissolve, Getters};
use derive_more::Constructor;

use crate::Score;

use super::Alignment;

/// Alignments accepted under a common score threshold, best first.
#[derive(Clone, PartialEq, Debug, Getters, Dissolve, Constructor)]
pub struct AlignmentSet<S: Score> {
    threshold: f64,
    alignments: Vec<Alignment<S>>,
}

impl<S: Score> AlignmentSet<S> {
    pub fn len(&self) -> usize {
        self.alignments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alignments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Alignment<S>> {
        self.alignments.iter()
    }
}

impl<S: Score> IntoIterator for AlignmentSet<S> {
    type Item = Alignment<S>;
    type IntoIter = std::vec::IntoIter<Alignment<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.alignments.into_iter()
    }
}

impl<'a, S: Score> IntoIterator for &'a AlignmentSet<S> {
    type Item = &'a Alignment<S>;
    type IntoIter = std::slice::Iter<'a, Alignment<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.alignments.iter()
    }
}

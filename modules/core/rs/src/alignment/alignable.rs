use crate::Sequence;

/// Random-access view over the symbols of a sequence that can be aligned.
pub trait Alignable {
    /// The type of individual symbols/elements being aligned.
    type Symbol;

    /// Returns true if there is nothing to align.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of symbols.
    fn len(&self) -> usize;

    /// Returns the symbol at the given 0-based position.
    fn at(&self, pos: usize) -> &Self::Symbol;
}

impl<T: Copy> Alignable for &[T] {
    type Symbol = T;

    #[inline(always)]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self[pos]
    }
}

impl<T: Copy> Alignable for Vec<T> {
    type Symbol = T;

    #[inline(always)]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self[pos]
    }
}

impl Alignable for Sequence {
    type Symbol = char;

    #[inline(always)]
    fn len(&self) -> usize {
        self.symbols().len()
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> &Self::Symbol {
        &self.symbols()[pos]
    }
}

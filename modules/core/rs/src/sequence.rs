use std::fmt::{Display, Formatter};

use derive_getters::{Dissolve, Getters};

/// An immutable sequence of uppercase symbols.
#[derive(Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Default, Getters, Dissolve)]
pub struct Sequence {
    symbols: Vec<char>,
}

impl Sequence {
    /// Normalizes the raw text to uppercase and splits it into symbols.
    pub fn new(raw: &str) -> Self {
        Self {
            symbols: raw.to_uppercase().chars().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl From<&str> for Sequence {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for Sequence {
    fn from(value: String) -> Self {
        Self::new(&value)
    }
}

impl Display for Sequence {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

use crate::core::models::ids::AtomType;
use std::fmt;

/// An ordered tuple of atom types, one per atom of an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pattern<const N: usize>(pub [AtomType; N]);

impl<const N: usize> Pattern<N> {
    pub fn types(&self) -> &[AtomType; N] {
        &self.0
    }

    pub fn reversed(&self) -> Self {
        let mut types = self.0;
        types.reverse();
        Self(types)
    }

    pub fn sorted(&self) -> Self {
        let mut types = self.0;
        types.sort_unstable();
        Self(types)
    }

    /// Renders the pattern as a bracketed, comma-separated list.
    pub fn render(&self, open: char, close: char) -> String {
        let inner: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        format!("{}{}{}", open, inner.join(","), close)
    }
}

impl<const N: usize> From<[AtomType; N]> for Pattern<N> {
    fn from(types: [AtomType; N]) -> Self {
        Self(types)
    }
}

impl<const N: usize> fmt::Display for Pattern<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{}", inner.join("-"))
    }
}

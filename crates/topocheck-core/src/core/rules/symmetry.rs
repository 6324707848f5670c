//! Per-category comparison of an observed atom-type pattern against an allowed one.
//!
//! Bonds, angles, and dihedrals are read the same way from either end, so a pattern
//! matches an allowed pattern or its reverse. Impropers are compared as a multiset
//! of four types, ignoring order entirely.

use super::pattern::Pattern;
use crate::core::models::ids::AtomType;
use crate::core::models::interaction::Category;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symmetry {
    /// Equal as written or after full reversal.
    Reversible,
    /// Equal as multisets.
    Unordered,
}

impl Symmetry {
    pub fn matches<const N: usize>(self, observed: &Pattern<N>, allowed: &Pattern<N>) -> bool {
        match self {
            Self::Reversible => observed == allowed || observed.reversed() == *allowed,
            Self::Unordered => observed.sorted() == allowed.sorted(),
        }
    }
}

impl Category {
    pub const fn symmetry(self) -> Symmetry {
        match self {
            Self::Bond | Self::Angle | Self::Dihedral => Symmetry::Reversible,
            Self::Improper => Symmetry::Unordered,
        }
    }
}

pub fn bond_matches(observed: [AtomType; 2], allowed: [AtomType; 2]) -> bool {
    Category::Bond
        .symmetry()
        .matches(&Pattern(observed), &Pattern(allowed))
}

pub fn angle_matches(observed: [AtomType; 3], allowed: [AtomType; 3]) -> bool {
    Category::Angle
        .symmetry()
        .matches(&Pattern(observed), &Pattern(allowed))
}

pub fn dihedral_matches(observed: [AtomType; 4], allowed: [AtomType; 4]) -> bool {
    Category::Dihedral
        .symmetry()
        .matches(&Pattern(observed), &Pattern(allowed))
}

pub fn improper_matches(observed: [AtomType; 4], allowed: [AtomType; 4]) -> bool {
    Category::Improper
        .symmetry()
        .matches(&Pattern(observed), &Pattern(allowed))
}

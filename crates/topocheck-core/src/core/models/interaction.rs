use super::ids::{AtomId, InteractionTypeId};
use std::fmt;

/// The four kinds of bonded interaction found in a data file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Bond,
    Angle,
    Dihedral,
    Improper,
}

impl Category {
    /// Categories in the order they are validated.
    pub const ALL: [Category; 4] = [
        Category::Bond,
        Category::Angle,
        Category::Dihedral,
        Category::Improper,
    ];

    /// Number of atoms taking part in one interaction of this category.
    pub const fn arity(self) -> usize {
        match self {
            Self::Bond => 2,
            Self::Angle => 3,
            Self::Dihedral | Self::Improper => 4,
        }
    }

    pub const fn plural(self) -> &'static str {
        match self {
            Self::Bond => "bonds",
            Self::Angle => "angles",
            Self::Dihedral => "dihedrals",
            Self::Improper => "impropers",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Bond => "bond",
                Self::Angle => "angle",
                Self::Dihedral => "dihedral",
                Self::Improper => "improper",
            }
        )
    }
}

/// One bonded interaction: its type tag and the atoms involved, in file order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interaction<const N: usize> {
    pub type_id: InteractionTypeId,
    pub atoms: [AtomId; N],
    pub line: usize, // 1-based source line, 0 when built in memory
}

impl<const N: usize> Interaction<N> {
    pub fn new(type_id: InteractionTypeId, atoms: [AtomId; N]) -> Self {
        Self {
            type_id,
            atoms,
            line: 0,
        }
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line = line;
        self
    }
}

pub type Bond = Interaction<2>;
pub type Angle = Interaction<3>;
pub type Dihedral = Interaction<4>;
pub type Improper = Interaction<4>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arity_matches_category() {
        assert_eq!(Category::Bond.arity(), 2);
        assert_eq!(Category::Angle.arity(), 3);
        assert_eq!(Category::Dihedral.arity(), 4);
        assert_eq!(Category::Improper.arity(), 4);
    }

    #[test]
    fn display_and_plural_names() {
        assert_eq!(Category::Bond.to_string(), "bond");
        assert_eq!(Category::Improper.to_string(), "improper");
        assert_eq!(Category::Angle.plural(), "angles");
        assert_eq!(Category::Dihedral.plural(), "dihedrals");
    }

    #[test]
    fn all_lists_categories_in_validation_order() {
        assert_eq!(
            Category::ALL,
            [
                Category::Bond,
                Category::Angle,
                Category::Dihedral,
                Category::Improper
            ]
        );
    }

    #[test]
    fn interaction_new_has_no_source_line() {
        let bond = Bond::new(3, [1, 2]);
        assert_eq!(bond.type_id, 3);
        assert_eq!(bond.atoms, [1, 2]);
        assert_eq!(bond.line, 0);
        assert_eq!(bond.at_line(12).line, 12);
    }
}

use super::atom::AtomTable;
use super::interaction::{Angle, Bond, Category, Dihedral, Improper};

/// Everything read from a data file that the checker needs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Topology {
    pub atoms: AtomTable,
    pub bonds: Vec<Bond>,
    pub angles: Vec<Angle>,
    pub dihedrals: Vec<Dihedral>,
    pub impropers: Vec<Improper>,
}

impl Topology {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::Bond => self.bonds.len(),
            Category::Angle => self.angles.len(),
            Category::Dihedral => self.dihedrals.len(),
            Category::Improper => self.impropers.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty() && Category::ALL.iter().all(|&c| self.count(c) == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_reports_each_category() {
        let topology = Topology {
            atoms: [(1, 1), (2, 2), (3, 1)].into_iter().collect(),
            bonds: vec![Bond::new(1, [1, 2]), Bond::new(1, [2, 3])],
            angles: vec![Angle::new(1, [1, 2, 3])],
            dihedrals: Vec::new(),
            impropers: Vec::new(),
        };
        assert_eq!(topology.count(Category::Bond), 2);
        assert_eq!(topology.count(Category::Angle), 1);
        assert_eq!(topology.count(Category::Dihedral), 0);
        assert_eq!(topology.count(Category::Improper), 0);
        assert!(!topology.is_empty());
    }

    #[test]
    fn default_topology_is_empty() {
        assert!(Topology::new().is_empty());
    }
}

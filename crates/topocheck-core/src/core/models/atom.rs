use super::ids::{AtomId, AtomType};
use std::collections::HashMap;
use std::collections::hash_map;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AtomTable {
    types: HashMap<AtomId, AtomType>,
}

impl AtomTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the type of an atom. A repeated ID replaces the earlier entry and
    /// returns the type it had.
    pub(crate) fn insert(&mut self, id: AtomId, atom_type: AtomType) -> Option<AtomType> {
        self.types.insert(id, atom_type)
    }

    pub fn type_of(&self, id: AtomId) -> Option<AtomType> {
        self.types.get(&id).copied()
    }

    pub fn contains(&self, id: AtomId) -> bool {
        self.types.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    pub fn iter(&self) -> hash_map::Iter<'_, AtomId, AtomType> {
        self.types.iter()
    }
}

impl FromIterator<(AtomId, AtomType)> for AtomTable {
    fn from_iter<I: IntoIterator<Item = (AtomId, AtomType)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (id, atom_type) in iter {
            table.insert(id, atom_type);
        }
        table
    }
}

use crate::core::io::lammps::DataFileError;
use crate::core::models::ids::{AtomId, AtomType, InteractionTypeId};
use crate::core::models::interaction::Category;
use crate::core::rules::allowlist::AllowListError;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Malformed input: {0}")]
    MalformedInput(#[from] DataFileError),

    #[error(
        "Dangling reference: {category} of type {type_id}{} refers to atom {atom_id}, which is not defined in the Atoms section",
        on_line(.line)
    )]
    DanglingReference {
        category: Category,
        type_id: InteractionTypeId,
        atom_id: AtomId,
        line: usize,
    },

    #[error("{0}")]
    InconsistentTopology(Box<Inconsistency>),

    #[error(
        "No allow-list rule for {category} type {type_id}{} and unknown interaction types are rejected",
        on_line(.line)
    )]
    UnknownInteractionType {
        category: Category,
        type_id: InteractionTypeId,
        line: usize,
    },

    #[error("Allow-list error: {0}")]
    AllowList(#[from] AllowListError),
}

impl CheckError {
    /// True when the input was well-formed but its topology broke a rule, as opposed
    /// to input that could not be read or resolved.
    pub fn is_validation_failure(&self) -> bool {
        matches!(
            self,
            Self::InconsistentTopology(_) | Self::UnknownInteractionType { .. }
        )
    }
}

fn on_line(line: &usize) -> String {
    if *line == 0 {
        String::new()
    } else {
        format!(" (line {})", line)
    }
}

/// The first interaction whose atom types are not allowed for its interaction type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inconsistency {
    pub category: Category,
    pub type_id: InteractionTypeId,
    pub atoms: Vec<AtomId>,
    pub atom_types: Vec<AtomType>,
    pub allowed: Vec<String>,
    pub line: usize,
}

fn dashed<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("-")
}

impl fmt::Display for Inconsistency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.category.to_string();
        let mut capitalized = name.chars();
        let title = match capitalized.next() {
            Some(first) => first.to_uppercase().chain(capitalized).collect::<String>(),
            None => String::new(),
        };
        let allowed_label = match self.category {
            Category::Improper => "Allowed (unordered) sets",
            _ => "Allowed types",
        };

        writeln!(f, "Inconsistent {} found{}!", name, on_line(&self.line))?;
        writeln!(f, "  {} type: {}", title, self.type_id)?;
        writeln!(f, "  Atoms: {}", dashed(&self.atoms))?;
        writeln!(f, "  Atom types: {}", dashed(&self.atom_types))?;
        write!(f, "  {}: {}", allowed_label, self.allowed.join(", "))
    }
}

use super::pattern::Pattern;
use crate::core::models::ids::{AtomType, InteractionTypeId};
use crate::core::models::interaction::Category;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use thiserror::Error;

/// Outcome of looking up an observed pattern in an allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// No rule is defined for the interaction type.
    Unconstrained,
    Allowed,
    Rejected,
}

/// Permitted atom-type patterns for one interaction category, keyed by interaction type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowList<const N: usize> {
    category: Category,
    rules: BTreeMap<InteractionTypeId, Vec<Pattern<N>>>,
}

impl<const N: usize> AllowList<N> {
    pub fn new(category: Category) -> Self {
        debug_assert_eq!(category.arity(), N, "allow-list arity must match category");
        Self {
            category,
            rules: BTreeMap::new(),
        }
    }

    /// Adds a permitted pattern for `type_id`. Patterns keep their declaration order
    /// and duplicates are dropped.
    pub fn allow(&mut self, type_id: InteractionTypeId, types: [AtomType; N]) {
        let patterns = self.rules.entry(type_id).or_default();
        let pattern = Pattern(types);
        if !patterns.contains(&pattern) {
            patterns.push(pattern);
        }
    }

    pub fn with_rule(
        mut self,
        type_id: InteractionTypeId,
        patterns: impl IntoIterator<Item = [AtomType; N]>,
    ) -> Self {
        self.rules.entry(type_id).or_default();
        for types in patterns {
            self.allow(type_id, types);
        }
        self
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn patterns(&self, type_id: InteractionTypeId) -> Option<&[Pattern<N>]> {
        self.rules.get(&type_id).map(Vec::as_slice)
    }

    pub fn type_ids(&self) -> impl Iterator<Item = InteractionTypeId> + '_ {
        self.rules.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn permits(&self, type_id: InteractionTypeId, observed: &Pattern<N>) -> Verdict {
        let Some(patterns) = self.rules.get(&type_id) else {
            return Verdict::Unconstrained;
        };
        let symmetry = self.category.symmetry();
        if patterns.iter().any(|allowed| symmetry.matches(observed, allowed)) {
            Verdict::Allowed
        } else {
            Verdict::Rejected
        }
    }

    /// Renders every allowed pattern for `type_id`, in declaration order.
    ///
    /// Ordered categories use parentheses, impropers use braces to signal that
    /// their order is not significant.
    pub fn render_patterns(&self, type_id: InteractionTypeId) -> Vec<String> {
        let (open, close) = match self.category {
            Category::Improper => ('{', '}'),
            _ => ('(', ')'),
        };
        self.patterns(type_id)
            .unwrap_or_default()
            .iter()
            .map(|p| p.render(open, close))
            .collect()
    }
}

/// The allow-lists of all four interaction categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AllowLists {
    pub bonds: AllowList<2>,
    pub angles: AllowList<3>,
    pub dihedrals: AllowList<4>,
    pub impropers: AllowList<4>,
}

impl Default for AllowLists {
    fn default() -> Self {
        Self {
            bonds: AllowList::new(Category::Bond),
            angles: AllowList::new(Category::Angle),
            dihedrals: AllowList::new(Category::Dihedral),
            impropers: AllowList::new(Category::Improper),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct RawAllowLists {
    #[serde(default)]
    bonds: BTreeMap<String, Vec<[AtomType; 2]>>,
    #[serde(default)]
    angles: BTreeMap<String, Vec<[AtomType; 3]>>,
    #[serde(default)]
    dihedrals: BTreeMap<String, Vec<[AtomType; 4]>>,
    #[serde(default)]
    impropers: BTreeMap<String, Vec<[AtomType; 4]>>,
}

impl AllowLists {
    pub fn load(path: &Path) -> Result<Self, AllowListError> {
        let origin = path.to_string_lossy().to_string();
        let content = std::fs::read_to_string(path).map_err(|e| AllowListError::Io {
            path: origin.clone(),
            source: e,
        })?;
        Self::decode(&content, &origin)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, AllowListError> {
        Self::decode(content, "<inline>")
    }

    fn decode(content: &str, origin: &str) -> Result<Self, AllowListError> {
        let raw: RawAllowLists = toml::from_str(content).map_err(|e| AllowListError::Toml {
            path: origin.to_string(),
            source: e,
        })?;
        Ok(Self {
            bonds: convert(raw.bonds, Category::Bond, origin)?,
            angles: convert(raw.angles, Category::Angle, origin)?,
            dihedrals: convert(raw.dihedrals, Category::Dihedral, origin)?,
            impropers: convert(raw.impropers, Category::Improper, origin)?,
        })
    }
}

fn convert<const N: usize>(
    raw: BTreeMap<String, Vec<[AtomType; N]>>,
    category: Category,
    origin: &str,
) -> Result<AllowList<N>, AllowListError> {
    let mut list = AllowList::new(category);
    for (key, patterns) in raw {
        let type_id = key
            .trim()
            .parse::<InteractionTypeId>()
            .map_err(|_| AllowListError::InvalidTypeId {
                path: origin.to_string(),
                table: category.plural(),
                key: key.clone(),
            })?;
        list = list.with_rule(type_id, patterns);
    }
    Ok(list)
}

#[derive(Debug, Error)]
pub enum AllowListError {
    #[error("File I/O error for '{path}': {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("TOML parsing error for '{path}': {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    #[error("Invalid interaction type '{key}' in [{table}] of '{path}': expected an integer")]
    InvalidTypeId {
        path: String,
        table: &'static str,
        key: String,
    },
}

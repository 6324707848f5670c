use phf::{Map, phf_map};

/// The section of a data file the reader is currently inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// Before the first recognized header: title, counts, and box bounds.
    Preamble,
    Atoms,
    Bonds,
    Angles,
    Dihedrals,
    Impropers,
    /// A recognized section whose body is not needed (velocities, coefficients, masses).
    Ignored,
}

static SECTION_HEADERS: Map<&'static str, Section> = phf_map! {
    "Atoms" => Section::Atoms,
    "Bonds" => Section::Bonds,
    "Angles" => Section::Angles,
    "Dihedrals" => Section::Dihedrals,
    "Impropers" => Section::Impropers,
    "Velocities" => Section::Ignored,
    "Masses" => Section::Ignored,
    "PairCoeffs" => Section::Ignored,
    "BondCoeffs" => Section::Ignored,
    "AngleCoeffs" => Section::Ignored,
    "DihedralCoeffs" => Section::Ignored,
    "ImproperCoeffs" => Section::Ignored,
};

impl Section {
    /// Returns the section opened by `line`, if the line is a section header.
    ///
    /// Matching is by prefix, so `Atoms # full` opens the atoms section. No keyword
    /// is a prefix of another, so at most one keyword can match.
    pub fn from_header(line: &str) -> Option<Section> {
        SECTION_HEADERS
            .entries()
            .find(|(keyword, _)| line.starts_with(**keyword))
            .map(|(_, section)| *section)
    }

    /// Moves to the next state: headers switch sections, every other line stays put.
    pub fn transition(self, line: &str) -> Section {
        Self::from_header(line).unwrap_or(self)
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Preamble => "preamble",
            Self::Atoms => "Atoms",
            Self::Bonds => "Bonds",
            Self::Angles => "Angles",
            Self::Dihedrals => "Dihedrals",
            Self::Impropers => "Impropers",
            Self::Ignored => "ignored",
        }
    }
}

use crate::core::io::sections::Section;
use crate::core::io::traits::TopologyFile;
use crate::core::models::interaction::Interaction;
use crate::core::models::topology::Topology;
use std::io::{self, BufRead};
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

const ATOM_ID_COLUMN: usize = 0;
const ATOM_TYPE_COLUMN: usize = 2;
const INTERACTION_TYPE_COLUMN: usize = 1;
const FIRST_MEMBER_COLUMN: usize = 2;

#[derive(Debug, Error)]
pub enum DataFileError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Parse error on line {line} in {} section: {kind}", .section.name())]
    Parse {
        line: usize,
        section: Section,
        kind: DataFileParseErrorKind,
    },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataFileParseErrorKind {
    #[error("Expected at least {expected} columns, found {found}")]
    MissingColumn { expected: usize, found: usize },
    #[error("Invalid integer in column {column} (value: '{value}')")]
    InvalidInt { column: usize, value: String },
}

/// Reader for LAMMPS data files.
///
/// Only the `Atoms`, `Bonds`, `Angles`, `Dihedrals`, and `Impropers` sections are
/// decoded. Lines before the first header and the bodies of the coefficient,
/// mass, and velocity sections are skipped without looking at their columns.
pub struct LammpsDataFile;

impl TopologyFile for LammpsDataFile {
    type Error = DataFileError;

    fn read_from(reader: &mut impl BufRead) -> Result<Topology, Self::Error> {
        let mut topology = Topology::new();
        let mut section = Section::Preamble;

        for (line_num, line_res) in reader.lines().enumerate() {
            let raw = line_res?;
            let line_num = line_num + 1;
            let line = raw.trim();

            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            if let Some(next) = Section::from_header(line) {
                if next != section {
                    debug!("Line {}: entering {} section.", line_num, next.name());
                }
                section = next;
                continue;
            }

            let parts: Vec<&str> = line.split_whitespace().collect();
            let row = Row {
                parts: &parts,
                line: line_num,
                section,
            };

            match section {
                Section::Preamble | Section::Ignored => {}
                Section::Atoms => {
                    let id = row.column(ATOM_ID_COLUMN)?;
                    let atom_type = row.column(ATOM_TYPE_COLUMN)?;
                    topology.atoms.insert(id, atom_type);
                }
                Section::Bonds => topology.bonds.push(row.interaction()?),
                Section::Angles => topology.angles.push(row.interaction()?),
                Section::Dihedrals => topology.dihedrals.push(row.interaction()?),
                Section::Impropers => topology.impropers.push(row.interaction()?),
            }
        }

        debug!(
            "Parsed {} atoms, {} bonds, {} angles, {} dihedrals, {} impropers.",
            topology.atoms.len(),
            topology.bonds.len(),
            topology.angles.len(),
            topology.dihedrals.len(),
            topology.impropers.len()
        );
        Ok(topology)
    }
}

struct Row<'a> {
    parts: &'a [&'a str],
    line: usize,
    section: Section,
}

impl Row<'_> {
    fn error(&self, kind: DataFileParseErrorKind) -> DataFileError {
        DataFileError::Parse {
            line: self.line,
            section: self.section,
            kind,
        }
    }

    fn column<T: FromStr>(&self, column: usize) -> Result<T, DataFileError> {
        let value = self.parts.get(column).ok_or_else(|| {
            self.error(DataFileParseErrorKind::MissingColumn {
                expected: column + 1,
                found: self.parts.len(),
            })
        })?;
        value.parse().map_err(|_| {
            self.error(DataFileParseErrorKind::InvalidInt {
                column,
                value: (*value).to_string(),
            })
        })
    }

    fn interaction<const N: usize>(&self) -> Result<Interaction<N>, DataFileError> {
        let type_id = self.column(INTERACTION_TYPE_COLUMN)?;
        let mut atoms = [0; N];
        for (offset, atom) in atoms.iter_mut().enumerate() {
            *atom = self.column(FIRST_MEMBER_COLUMN + offset)?;
        }
        Ok(Interaction::new(type_id, atoms).at_line(self.line))
    }
}

use crate::core::models::topology::Topology;
use std::error::Error;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Defines the interface for reading a topology from a structured text format.
///
/// Implementors handle format-specific parsing. Readers never validate
/// cross-references between sections; that is left to the validator.
pub trait TopologyFile {
    /// The error type for read operations.
    type Error: Error + From<io::Error>;

    /// Reads a topology from a buffered reader.
    ///
    /// # Arguments
    ///
    /// * `reader` - The buffered reader to read from.
    ///
    /// # Return
    ///
    /// Returns the parsed topology.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or the reader encounters an I/O issue.
    fn read_from(reader: &mut impl BufRead) -> Result<Topology, Self::Error>;

    /// Reads a topology from a file path.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the file to read.
    ///
    /// # Return
    ///
    /// Returns the parsed topology.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsing fails.
    fn read_from_path<P: AsRef<Path>>(path: P) -> Result<Topology, Self::Error> {
        let file = File::open(path)?;
        let mut reader = BufReader::new(file);
        Self::read_from(&mut reader)
    }
}

//! Provides input functionality for simulation topology files.
//!
//! This module contains the reader for LAMMPS data files and the trait-based
//! interface shared by topology readers. Readers only extract atom types and
//! bonded interactions; everything else in the file is skipped.

pub mod lammps;
pub mod sections;
pub mod traits;

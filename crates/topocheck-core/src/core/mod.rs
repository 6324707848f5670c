//! # Core Module
//!
//! This module provides the building blocks of the checker: the data structures a
//! topology is parsed into, the reader that produces them, and the rules they are
//! validated against.
//!
//! ## Architecture
//!
//! - **Topology Representation** ([`models`]) - Atom table, interactions, and the parsed topology
//! - **File I/O** ([`io`]) - Section-based reader for LAMMPS data files
//! - **Reference Knowledge** ([`rules`]) - Allow-lists and per-category symmetry rules
//!
//! ## Key Capabilities
//!
//! - **Single-pass parsing** with an explicit section state machine
//! - **Arity-checked interactions** for bonds, angles, dihedrals, and impropers
//! - **Strongly typed allow-lists** loaded from TOML configuration
//! - **Independently testable symmetry rules** for each interaction category

pub mod io;
pub mod models;
pub mod rules;

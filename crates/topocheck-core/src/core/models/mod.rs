//! # Core Models Module
//!
//! This module contains the data structures used to represent the topology of a
//! simulation input: which type every atom has, and which atoms take part in each
//! bonded interaction.
//!
//! ## Overview
//!
//! The models are built once by a file reader, read by the validator, and then
//! discarded. None of them are mutated after parsing. They are designed to:
//!
//! - **Mirror the data file** - Interactions keep file order and their source line
//! - **Stay arity-safe** - Interaction and pattern arity are encoded in the type
//! - **Remain cheap to inspect** - Lookups by atom ID are hash-based
//!
//! ## Key Components
//!
//! - [`ids`] - Integer identifier aliases for atoms, atom types, and interaction types
//! - [`atom`] - The atom-ID to atom-type table
//! - [`interaction`] - Interaction categories and fixed-arity interaction records
//! - [`topology`] - The complete parsed topology
//!
//! ## Usage
//!
//! ```ignore
//! use topocheck::core::models::topology::Topology;
//! use topocheck::core::models::interaction::Category;
//!
//! let topology: Topology = /* read from a data file */;
//! println!("{} bonds", topology.count(Category::Bond));
//! ```

pub mod atom;
pub mod ids;
pub mod interaction;
pub mod topology;

//! # topocheck
//!
//! A library for checking the bonded topology of LAMMPS data files against reference
//! tables of chemically allowed atom-type patterns, before a molecular-dynamics run
//! consumes the file.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Immutable data models (`Topology`, `AtomTable`), the
//!   data-file reader, and the allow-list rules with their per-category symmetry.
//!
//! - **[`engine`]: The Logic Core.** The validator that resolves atom types and checks
//!   allow-list membership, together with its configuration, error taxonomy, and
//!   progress reporting.
//!
//! - **[`workflows`]: The Public API.** Complete checking procedures that parse, load,
//!   validate all four interaction categories in order, and return a report.
//!
//! ## Example
//!
//! ```ignore
//! use topocheck::engine::{config::CheckConfig, progress::ProgressReporter};
//! use topocheck::workflows::check;
//!
//! let report = check::run_from_paths(
//!     Path::new("topology.data"),
//!     Path::new("allowed.toml"),
//!     &CheckConfig::default(),
//!     &ProgressReporter::new(),
//! )?;
//! println!("{}", report);
//! ```

pub mod core;
pub mod engine;
pub mod workflows;

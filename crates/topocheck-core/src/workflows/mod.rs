//! # Workflows Module
//!
//! This module provides the high-level entry points of the library. A workflow ties the
//! readers in [`crate::core`] to the validator in [`crate::engine`] and returns a
//! report a caller can print or inspect.
//!
//! ## Architecture
//!
//! - **Check Workflow** ([`check`]) - Parse a data file, load allow-lists, and validate
//!   bonds, angles, dihedrals, and impropers in that order.
//!
//! ## Key Capabilities
//!
//! - **End-to-end checking** from file paths or already-loaded inputs
//! - **Fail-fast semantics** with the first inconsistency reported in category order
//! - **Progress monitoring** through [`crate::engine::progress::ProgressReporter`]

pub mod check;

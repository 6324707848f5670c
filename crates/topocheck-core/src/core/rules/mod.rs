//! # Rules Module
//!
//! This module holds the reference knowledge the checker validates against: which
//! atom-type patterns each interaction type is allowed to have, and how patterns of
//! each interaction category compare under symmetry.
//!
//! ## Key Components
//!
//! - [`pattern`] - Fixed-arity atom-type patterns and their rendering
//! - [`symmetry`] - One pure comparison rule per interaction category
//! - [`allowlist`] - Allow-lists keyed by interaction type, loaded from TOML
//!
//! ## Usage
//!
//! ```ignore
//! use topocheck::core::rules::allowlist::AllowLists;
//!
//! let allow_lists = AllowLists::load(Path::new("allowed.toml"))?;
//! let verdict = allow_lists.bonds.permits(1, &[5, 7]);
//! ```

pub mod allowlist;
pub mod pattern;
pub mod symmetry;

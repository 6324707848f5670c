//! # Engine Module
//!
//! This module implements the validation engine: it takes a parsed topology and the
//! allow-lists, and checks every bonded interaction against them.
//!
//! ## Overview
//!
//! Validation is a pure, read-only pass. Each interaction category is checked
//! independently; the first inconsistency aborts the run with an error carrying
//! enough context to diagnose the problem without re-running.
//!
//! ## Architecture
//!
//! - **Validation** ([`validator`]) - Atom-type resolution and allow-list membership checks
//! - **Configuration** ([`config`]) - How unknown interaction types are treated
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events
//! - **Error Handling** ([`error`]) - The error taxonomy shared by the whole pipeline

pub mod config;
pub mod error;
pub mod progress;
pub mod validator;

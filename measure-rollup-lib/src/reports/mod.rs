//! Report generation for aggregated component trees
//!
//! This module turns the measures held by a component tree into output for
//! human consumption and programmatic processing.
//!
//! # Implementation Model
//!
//! Reports are produced in two steps:
//!
//! 1. [`collect`] walks the tree from the root, parents before their children, and
//!    gathers each component's reportable measures into a [`ReportableNode`]. Hidden
//!    metrics and measures that only restate an elidable best value are dropped;
//!    memory-only measures are dropped unless explicitly requested.
//! 2. A generator renders the collected nodes:
//!    - **Console**: indented tree with aligned, word-wrapped values and optional ANSI colors
//!    - **JSON**: machine-readable structured data
//!
//! Value formatting (precision, percentages, whole counts) lives in the `common` module
//! so both generators agree on how a measure reads.

mod common;
mod console;
mod json;
mod reportable_node;

pub use console::generate as generate_console;
pub use json::generate as generate_json;
pub use reportable_node::{ReportableNode, ReportedMeasure, collect};

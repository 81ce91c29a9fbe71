//! Command-line interface and orchestration for measure-rollup
//!
//! This module implements the CLI commands and wires the metric catalogue, the
//! aggregation engine, and the report generators together. It handles argument
//! parsing, configuration management, and the high-level workflows.
//!
//! # Implementation Model
//!
//! The module is organized around four commands:
//!
//! ## Commands
//!
//! - **aggregate**: Load a JSON component tree, record its leaf measures and raw
//!   coverage data, derive every computed metric bottom-up, and generate reports
//! - **init**: Generate a default configuration file
//! - **validate**: Check configuration file syntax and the metric dependency graph
//! - **metrics**: List the configured metrics in evaluation order
//!
//! ## Execution Flow
//!
//! The `run` function parses command-line arguments using clap and routes
//! to the appropriate command handler. The aggregate command:
//!
//! 1. Loads the configuration and builds the metric catalogue from it
//! 2. Reads the input tree into a `ProjectTree` and an `InMemoryMeasureStore`
//! 3. Runs the scheduler over the tree
//! 4. Collects the reportable measures and renders console and/or JSON output
//!
//! Configuration is managed through a TOML file (`rollup.toml`) holding the
//! disabled metrics, report options, and user-defined metrics with their formulas.
//!
//! All output goes through the [`Host`] trait so commands run unchanged against
//! in-memory buffers in tests.

mod aggregate;
mod common;
mod config;
mod host;
mod init;
mod input;
mod metrics;
mod run;
mod validate;

pub use aggregate::{AggregateArgs, aggregate_tree};
#[cfg(debug_assertions)]
pub use config::Config;
pub use host::Host;
pub use init::{InitArgs, init_config};
pub use metrics::{MetricsArgs, list_metrics};
pub use run::run;
pub use validate::{ValidateArgs, validate_config};

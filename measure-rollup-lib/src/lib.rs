#![doc(hidden)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Core library for measure-rollup
//!
//! This library consolidates all functionality for the measure-rollup tool, which derives
//! code metrics on aggregate components (directories, projects) from the measures recorded
//! on their children.
//!
//! # Module Organization
//!
//! - [`commands`]: Command-line interface and orchestration
//! - [`metrics`]: Metric definitions and the catalogue that orders them
//! - [`measures`]: Measures recorded on components and helpers to select them
//! - [`formulas`]: Aggregation strategies deriving a metric from children measures
//! - [`distribution`]: Histogram-shaped measures and their text encoding
//! - [`coverage`]: Line and branch coverage measures built from raw per-line data
//! - [`engine`]: Component tree, measure store, and the bottom-up scheduler
//! - [`reports`]: Report generation in multiple formats

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

#[cfg(any(debug_assertions, test))]
pub mod commands;
#[cfg(not(any(debug_assertions, test)))]
mod commands;

#[cfg(any(debug_assertions, test))]
pub mod coverage;
#[cfg(not(any(debug_assertions, test)))]
mod coverage;

#[cfg(any(debug_assertions, test))]
pub mod distribution;
#[cfg(not(any(debug_assertions, test)))]
mod distribution;

#[cfg(any(debug_assertions, test))]
pub mod engine;
#[cfg(not(any(debug_assertions, test)))]
mod engine;

#[cfg(any(debug_assertions, test))]
pub mod formulas;
#[cfg(not(any(debug_assertions, test)))]
mod formulas;

#[cfg(any(debug_assertions, test))]
pub mod measures;
#[cfg(not(any(debug_assertions, test)))]
mod measures;

#[cfg(any(debug_assertions, test))]
pub mod metrics;
#[cfg(not(any(debug_assertions, test)))]
mod metrics;

#[cfg(any(debug_assertions, test))]
pub mod reports;
#[cfg(not(any(debug_assertions, test)))]
mod reports;

pub use crate::commands::{Host, run};

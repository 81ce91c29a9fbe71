//! Line and branch coverage measures derived from raw per-line data
//!
//! A [`CoverageMeasuresBuilder`] collects hit counts and condition counts per line
//! for one file and turns them into the measures of a [`CoverageType`]: unit tests,
//! integration tests (`it_` keys), or all tests combined (`overall_` keys).

mod builder;
mod coverage_type;

pub use builder::CoverageMeasuresBuilder;
pub use coverage_type::CoverageType;

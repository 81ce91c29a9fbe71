//! Metric definitions and the catalogue that registers them
//!
//! A metric is a named, typed kind of measurement such as `ncloc` or
//! `function_complexity_distribution`. Measures recorded on components always refer
//! to a metric through its key.
//!
//! # Implementation Model
//!
//! The core abstraction is the [`Metric`] type. Each metric has:
//! - **Key**: Stable identifier referenced by stored measures (e.g., `lines_to_cover`)
//! - **Value type**: What kind of payload a measure carries ([`ValueType`])
//! - **Direction**: Whether higher values are better or worse ([`Direction`])
//! - **Best/worst values**: Ideal and worst values; measures equal to the best value may be elided
//! - **Formula**: Optional aggregation strategy used to derive the metric on aggregate components
//!
//! Built-in metrics are statically registered in `metric_def.rs` as a table of
//! [`MetricDef`] constructors. A [`MetricCatalogue`] is an explicit registry value
//! holding those core metrics plus any user-defined ones. It validates the formula
//! dependency graph and computes the order in which derived metrics must be evaluated,
//! so there is no global metric state.

mod catalogue;
mod direction;
mod metric;
mod metric_def;
mod value_type;

pub use catalogue::MetricCatalogue;
pub use direction::Direction;
pub use metric::{Metric, MetricBuilder};
pub use metric_def::{
    DOMAIN_COMPLEXITY, DOMAIN_DESIGN, DOMAIN_DOCUMENTATION, DOMAIN_DUPLICATION, DOMAIN_GENERAL, DOMAIN_INTEGRATION_TESTS,
    DOMAIN_OVERALL_TESTS, DOMAIN_RULES, DOMAIN_SIZE, DOMAIN_TESTS, METRIC_DEFINITIONS, MetricDef, keys,
};
pub use value_type::ValueType;

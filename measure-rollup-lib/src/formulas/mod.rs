//! Aggregation strategies that derive a metric from other measures
//!
//! # Implementation Model
//!
//! A [`Formula`] is a pure function from a read-only view of one node
//! ([`FormulaData`]) and the target metric ([`FormulaContext`]) to zero or one
//! [`Measure`](crate::measures::Measure). The set of formulas is closed, so `Formula`
//! is an enum selected when a metric is registered, and each variant delegates to a
//! function in its own module:
//!
//! - `sum_child_values`: sum of the children's values
//! - `mean`: arithmetic mean of the children's values
//! - `weighted_mean`: mean of the children's values weighted by another metric
//! - `average`: ratio of sums, with an optional fallback for the numerator
//! - `sum_child_distribution`: bucket-wise merge of the children's range distributions
//!
//! Leaves compute from their own measures; aggregates compute from their direct
//! children only. A formula never overwrites a value already recorded on the node and
//! reports "not applicable" by returning `None`, never by failing.
//!
//! [`Formula::depends_upon`] lists the metrics a formula reads besides its target. The
//! catalogue uses it to order evaluation.

mod average;
mod formula;
mod formula_context;
mod formula_data;
mod mean;
mod sum_child_distribution;
mod sum_child_values;
mod weighted_mean;

#[cfg(test)]
mod test_support;

pub use formula::Formula;
pub use formula_context::FormulaContext;
pub use formula_data::FormulaData;

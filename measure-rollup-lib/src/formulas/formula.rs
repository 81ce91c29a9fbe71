use super::{FormulaContext, FormulaData, average, mean, sum_child_distribution, sum_child_values, weighted_mean};
use crate::engine::Scope;
use crate::measures::Measure;
use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

/// How a metric is derived from other measures.
///
/// Formulas are pure: the same view of the tree always yields the same result, and a
/// formula never writes anything itself.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, IntoStaticStr)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Formula {
    /// Sum of the children's values.
    SumChildValues {
        /// Produce `0` instead of nothing when no child has a value.
        #[serde(default)]
        zero_if_none: bool,
    },

    /// Arithmetic mean of the children's values.
    Mean {
        /// Produce `0` instead of nothing when no child has a value.
        #[serde(default)]
        force_zero: bool,
    },

    /// Mean of the children's values weighted by another metric.
    WeightedMean {
        weight: CompactString,

        /// Produce `0` instead of nothing when no child has both a value and a weight.
        #[serde(default)]
        zero_if_none: bool,
    },

    /// Ratio of sums: `main / by`, where `main` falls back to `fallback` when missing.
    Average {
        main: CompactString,
        by: CompactString,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        fallback: Option<CompactString>,
    },

    /// Bucket-by-bucket merge of the children's range distributions.
    SumChildDistribution {
        /// Results on nodes with a finer scope are kept in memory only.
        #[serde(default = "default_minimum_scope")]
        minimum_scope_to_persist: Scope,

        /// Bottom limits of the buckets; adopted from the first child when absent.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bottom_limits: Option<Vec<f64>>,
    },
}

const fn default_minimum_scope() -> Scope {
    Scope::File
}

impl Formula {
    #[must_use]
    pub const fn sum_child_values(zero_if_none: bool) -> Self {
        Self::SumChildValues { zero_if_none }
    }

    #[must_use]
    pub const fn mean(force_zero: bool) -> Self {
        Self::Mean { force_zero }
    }

    #[must_use]
    pub fn weighted_mean(weight: impl Into<CompactString>, zero_if_none: bool) -> Self {
        Self::WeightedMean {
            weight: weight.into(),
            zero_if_none,
        }
    }

    #[must_use]
    pub fn average(main: impl Into<CompactString>, by: impl Into<CompactString>) -> Self {
        Self::Average {
            main: main.into(),
            by: by.into(),
            fallback: None,
        }
    }

    #[must_use]
    pub fn average_with_fallback(main: impl Into<CompactString>, by: impl Into<CompactString>, fallback: impl Into<CompactString>) -> Self {
        Self::Average {
            main: main.into(),
            by: by.into(),
            fallback: Some(fallback.into()),
        }
    }

    #[must_use]
    pub const fn sum_child_distribution(minimum_scope_to_persist: Scope) -> Self {
        Self::SumChildDistribution {
            minimum_scope_to_persist,
            bottom_limits: None,
        }
    }

    #[must_use]
    pub const fn sum_child_distribution_with_limits(minimum_scope_to_persist: Scope, bottom_limits: Vec<f64>) -> Self {
        Self::SumChildDistribution {
            minimum_scope_to_persist,
            bottom_limits: Some(bottom_limits),
        }
    }

    /// The name used for this kind of formula in configuration files.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        self.into()
    }

    /// The metrics that must be computed before this formula runs. The target metric is never listed.
    #[must_use]
    pub fn depends_upon(&self) -> Vec<&str> {
        match self {
            Self::SumChildValues { .. } | Self::Mean { .. } | Self::SumChildDistribution { .. } => Vec::new(),
            Self::WeightedMean { weight, .. } => vec![weight.as_str()],
            Self::Average { main, by, fallback } => {
                let mut keys = vec![main.as_str(), by.as_str()];
                keys.extend(fallback.as_deref());
                keys
            }
        }
    }

    /// Compute the target metric for the node described by `data`.
    ///
    /// Returns `None` when the node already holds a value or payload for the target metric, or
    /// when the inputs are missing or degenerate.
    #[must_use]
    pub fn calculate(&self, data: &FormulaData<'_>, ctx: &FormulaContext<'_>) -> Option<Measure> {
        if data
            .measure(ctx.target_key())
            .is_some_and(|existing| existing.value().is_some() || existing.data().is_some())
        {
            return None;
        }

        match self {
            Self::SumChildValues { zero_if_none } => sum_child_values::calculate(data, ctx, *zero_if_none),
            Self::Mean { force_zero } => mean::calculate(data, ctx, *force_zero),
            Self::WeightedMean { weight, zero_if_none } => weighted_mean::calculate(data, ctx, weight, *zero_if_none),
            Self::Average { main, by, fallback } => average::calculate(data, ctx, main, by, fallback.as_deref()),
            Self::SumChildDistribution {
                minimum_scope_to_persist,
                bottom_limits,
            } => sum_child_distribution::calculate(data, ctx, *minimum_scope_to_persist, bottom_limits.as_deref()),
        }
    }
}

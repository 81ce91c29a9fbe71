use super::{Direction, ValueType};
use crate::Result;
use crate::formulas::Formula;
use compact_str::CompactString;
use ohno::bail;

/// Best value assigned to percentage metrics whose direction is [`Direction::Better`].
const PERCENT_CEILING: f64 = 100.0;

/// A named, typed kind of measurement.
///
/// Metrics are immutable once built. Use [`Metric::builder`] to create one.
#[derive(Debug, Clone, PartialEq)]
pub struct Metric {
    key: CompactString,
    name: CompactString,
    description: Option<CompactString>,
    value_type: ValueType,
    direction: Direction,
    qualitative: bool,
    domain: Option<CompactString>,
    best_value: Option<f64>,
    worst_value: Option<f64>,
    optimized_best_value: bool,
    hidden: bool,
    formula: Option<Formula>,
}

impl Metric {
    /// Start building a metric with the mandatory key, display name, and value type.
    #[must_use]
    pub fn builder(key: impl Into<CompactString>, name: impl Into<CompactString>, value_type: ValueType) -> MetricBuilder {
        MetricBuilder {
            key: key.into(),
            name: name.into(),
            description: None,
            value_type,
            direction: Direction::None,
            qualitative: false,
            domain: None,
            best_value: None,
            worst_value: None,
            optimized_best_value: false,
            hidden: false,
            formula: None,
        }
    }

    /// The stable identifier referenced by stored measures.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        self.value_type
    }

    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    #[must_use]
    pub const fn is_qualitative(&self) -> bool {
        self.qualitative
    }

    #[must_use]
    pub fn domain(&self) -> Option<&str> {
        self.domain.as_deref()
    }

    #[must_use]
    pub const fn best_value(&self) -> Option<f64> {
        self.best_value
    }

    #[must_use]
    pub const fn worst_value(&self) -> Option<f64> {
        self.worst_value
    }

    /// Whether measures equal to the best value may be left out of durable storage.
    #[must_use]
    pub const fn is_optimized_best_value(&self) -> bool {
        self.optimized_best_value
    }

    #[must_use]
    pub const fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// The aggregation strategy used to derive this metric, if any.
    #[must_use]
    pub const fn formula(&self) -> Option<&Formula> {
        self.formula.as_ref()
    }

    #[must_use]
    pub const fn is_distribution(&self) -> bool {
        matches!(self.value_type, ValueType::Distrib | ValueType::Data)
    }

    pub(crate) fn clear_formula(&mut self) {
        self.formula = None;
    }
}

/// Incremental constructor for [`Metric`].
#[derive(Debug, Clone)]
pub struct MetricBuilder {
    key: CompactString,
    name: CompactString,
    description: Option<CompactString>,
    value_type: ValueType,
    direction: Direction,
    qualitative: bool,
    domain: Option<CompactString>,
    best_value: Option<f64>,
    worst_value: Option<f64>,
    optimized_best_value: bool,
    hidden: bool,
    formula: Option<Formula>,
}

impl MetricBuilder {
    #[must_use]
    pub fn description(mut self, description: impl Into<CompactString>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub const fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    #[must_use]
    pub const fn qualitative(mut self, qualitative: bool) -> Self {
        self.qualitative = qualitative;
        self
    }

    #[must_use]
    pub fn domain(mut self, domain: impl Into<CompactString>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    #[must_use]
    pub const fn best_value(mut self, value: f64) -> Self {
        self.best_value = Some(value);
        self
    }

    #[must_use]
    pub const fn worst_value(mut self, value: f64) -> Self {
        self.worst_value = Some(value);
        self
    }

    #[must_use]
    pub const fn optimized_best_value(mut self, optimized: bool) -> Self {
        self.optimized_best_value = optimized;
        self
    }

    #[must_use]
    pub const fn hidden(mut self, hidden: bool) -> Self {
        self.hidden = hidden;
        self
    }

    #[must_use]
    pub fn formula(mut self, formula: Formula) -> Self {
        self.formula = Some(formula);
        self
    }

    /// Finish the metric.
    ///
    /// Percentage metrics always get their best and worst values from their direction,
    /// overriding anything set explicitly.
    ///
    /// # Errors
    ///
    /// Returns an error if the key or the name is blank.
    pub fn build(self) -> Result<Metric> {
        if self.key.trim().is_empty() {
            bail!("metric key must not be blank");
        }

        if self.name.trim().is_empty() {
            bail!("metric '{}' must have a non-blank name", self.key);
        }

        let (best_value, worst_value) = if self.value_type == ValueType::Percent {
            if self.direction == Direction::Better {
                (Some(PERCENT_CEILING), Some(0.0))
            } else {
                (Some(0.0), Some(PERCENT_CEILING))
            }
        } else {
            (self.best_value, self.worst_value)
        };

        Ok(Metric {
            key: self.key,
            name: self.name,
            description: self.description,
            value_type: self.value_type,
            direction: self.direction,
            qualitative: self.qualitative,
            domain: self.domain,
            best_value,
            worst_value,
            optimized_best_value: self.optimized_best_value,
            hidden: self.hidden,
            formula: self.formula,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_build_minimal_metric() {
        let metric = Metric::builder("ncloc", "Lines of code", ValueType::Int).build().unwrap();

        assert_eq!(metric.key(), "ncloc");
        assert_eq!(metric.name(), "Lines of code");
        assert_eq!(metric.value_type(), ValueType::Int);
        assert_eq!(metric.direction(), Direction::None);
        assert!(metric.description().is_none());
        assert!(metric.best_value().is_none());
        assert!(metric.formula().is_none());
        assert!(!metric.is_optimized_best_value());
        assert!(!metric.is_hidden());
    }

    #[test]
    fn test_blank_key_is_rejected() {
        let result = Metric::builder("  ", "Lines", ValueType::Int).build();
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let result = Metric::builder("lines", "", ValueType::Int).build();
        let message = result.unwrap_err().to_string();
        assert!(message.contains("lines"), "error should name the metric: {message}");
    }

    #[test]
    fn test_percent_best_and_worst_follow_direction() {
        for direction in Direction::iter() {
            let metric = Metric::builder("density", "Density", ValueType::Percent)
                .direction(direction)
                .best_value(42.0)
                .worst_value(7.0)
                .build()
                .unwrap();

            let best = metric.best_value().unwrap();
            let worst = metric.worst_value().unwrap();
            assert!((best + worst - 100.0).abs() < f64::EPSILON, "best and worst should be symmetric");

            if direction == Direction::Better {
                assert!((best - 100.0).abs() < f64::EPSILON);
                assert!(worst.abs() < f64::EPSILON);
            } else {
                assert!(best.abs() < f64::EPSILON);
                assert!((worst - 100.0).abs() < f64::EPSILON);
            }
        }
    }

    #[test]
    fn test_explicit_best_value_kept_for_non_percent() {
        let metric = Metric::builder("violations", "Violations", ValueType::Int)
            .direction(Direction::Worst)
            .best_value(0.0)
            .optimized_best_value(true)
            .build()
            .unwrap();

        assert_eq!(metric.best_value(), Some(0.0));
        assert!(metric.worst_value().is_none());
        assert!(metric.is_optimized_best_value());
    }

    #[test]
    fn test_distribution_types() {
        let distrib = Metric::builder("d", "D", ValueType::Distrib).build().unwrap();
        let data = Metric::builder("d", "D", ValueType::Data).build().unwrap();
        let int = Metric::builder("d", "D", ValueType::Int).build().unwrap();

        assert!(distrib.is_distribution());
        assert!(data.is_distribution());
        assert!(!int.is_distribution());
    }
}

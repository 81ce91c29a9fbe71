use super::{Level, PersistenceMode, round_half_up};
use crate::Result;
use crate::metrics::Metric;
use compact_str::CompactString;
use ohno::bail;

/// Number of decimals numeric values are rounded to unless stated otherwise.
pub const DEFAULT_PRECISION: u8 = 1;

/// Number of comparison periods a measure can carry a variation for.
pub const MAX_VARIATIONS: usize = 5;

/// The concrete value of one metric for one component.
///
/// Slot identity is the tuple (metric key, characteristic, requirement, person id) and is
/// compared with [`Measure::same_slot`]. `PartialEq` compares every field.
#[derive(Debug, Clone, PartialEq)]
pub struct Measure {
    metric_key: CompactString,
    value: Option<f64>,
    data: Option<String>,
    variations: [Option<f64>; MAX_VARIATIONS],
    persistence_mode: PersistenceMode,
    alert_status: Option<Level>,
    alert_text: Option<String>,
    id: Option<u64>,
    description: Option<String>,
    tendency: Option<i32>,
    url: Option<String>,
    characteristic: Option<CompactString>,
    requirement: Option<CompactString>,
    person_id: Option<u64>,
    rule_key: Option<CompactString>,
}

impl Measure {
    /// Create an empty measure for a metric.
    #[must_use]
    pub fn new(metric_key: impl Into<CompactString>) -> Self {
        Self {
            metric_key: metric_key.into(),
            value: None,
            data: None,
            variations: [None; MAX_VARIATIONS],
            persistence_mode: PersistenceMode::Durable,
            alert_status: None,
            alert_text: None,
            id: None,
            description: None,
            tendency: None,
            url: None,
            characteristic: None,
            requirement: None,
            person_id: None,
            rule_key: None,
        }
    }

    /// Create a measure holding a numeric value rounded to [`DEFAULT_PRECISION`].
    ///
    /// # Errors
    ///
    /// Returns an error if the value is NaN.
    pub fn with_value(metric_key: impl Into<CompactString>, value: f64) -> Result<Self> {
        let mut measure = Self::new(metric_key);
        measure.set_value(Some(value))?;
        Ok(measure)
    }

    /// Create a measure holding an integral count.
    #[must_use]
    #[expect(clippy::cast_precision_loss, reason = "counts beyond 2^53 are not meaningful metric values")]
    pub fn with_count(metric_key: impl Into<CompactString>, count: u64) -> Self {
        let mut measure = Self::new(metric_key);
        measure.value = Some(count as f64);
        measure
    }

    /// Create a measure holding a text payload.
    #[must_use]
    pub fn with_data(metric_key: impl Into<CompactString>, data: impl Into<String>) -> Self {
        let mut measure = Self::new(metric_key);
        measure.data = Some(data.into());
        measure
    }

    #[must_use]
    pub fn metric_key(&self) -> &str {
        &self.metric_key
    }

    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        self.value
    }

    /// Set the numeric value, rounded to [`DEFAULT_PRECISION`] decimals.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is NaN. The measure is left unchanged in that case.
    pub fn set_value(&mut self, value: Option<f64>) -> Result<()> {
        self.set_value_with_precision(value, DEFAULT_PRECISION)
    }

    /// Set the numeric value, rounded half-up to `precision` decimals.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is NaN. The measure is left unchanged in that case.
    pub fn set_value_with_precision(&mut self, value: Option<f64>, precision: u8) -> Result<()> {
        self.value = match value {
            Some(v) if v.is_nan() => bail!("measure '{}' cannot hold a NaN value", self.metric_key),
            Some(v) => Some(round_half_up(v, precision)),
            None => None,
        };

        Ok(())
    }

    #[must_use]
    pub fn data(&self) -> Option<&str> {
        self.data.as_deref()
    }

    pub fn set_data(&mut self, data: Option<String>) {
        self.data = data;
    }

    /// The variation for a 1-based period index, or `None` when unset or out of range.
    #[must_use]
    pub fn variation(&self, period: usize) -> Option<f64> {
        period.checked_sub(1).and_then(|slot| self.variations.get(slot).copied().flatten())
    }

    /// Set the variation for a 1-based period index.
    ///
    /// # Errors
    ///
    /// Returns an error if the period is outside `1..=MAX_VARIATIONS` or the value is NaN.
    pub fn set_variation(&mut self, period: usize, variation: Option<f64>) -> Result<()> {
        if variation.is_some_and(f64::is_nan) {
            bail!("variation {period} of measure '{}' cannot be NaN", self.metric_key);
        }

        let Some(slot) = period.checked_sub(1).and_then(|slot| self.variations.get_mut(slot)) else {
            bail!("variation period must be between 1 and {MAX_VARIATIONS}, got {period}");
        };

        *slot = variation;
        Ok(())
    }

    #[must_use]
    pub const fn variations(&self) -> &[Option<f64>; MAX_VARIATIONS] {
        &self.variations
    }

    #[must_use]
    pub const fn persistence_mode(&self) -> PersistenceMode {
        self.persistence_mode
    }

    pub const fn set_persistence_mode(&mut self, mode: PersistenceMode) {
        self.persistence_mode = mode;
    }

    #[must_use]
    pub const fn with_persistence_mode(mut self, mode: PersistenceMode) -> Self {
        self.persistence_mode = mode;
        self
    }

    #[must_use]
    pub const fn alert_status(&self) -> Option<Level> {
        self.alert_status
    }

    #[must_use]
    pub const fn with_alert_status(mut self, level: Level) -> Self {
        self.alert_status = Some(level);
        self
    }

    #[must_use]
    pub fn alert_text(&self) -> Option<&str> {
        self.alert_text.as_deref()
    }

    #[must_use]
    pub fn with_alert_text(mut self, text: impl Into<String>) -> Self {
        self.alert_text = Some(text.into());
        self
    }

    #[must_use]
    pub const fn id(&self) -> Option<u64> {
        self.id
    }

    #[must_use]
    pub const fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub const fn tendency(&self) -> Option<i32> {
        self.tendency
    }

    #[must_use]
    pub const fn with_tendency(mut self, tendency: i32) -> Self {
        self.tendency = Some(tendency);
        self
    }

    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    #[must_use]
    pub fn characteristic(&self) -> Option<&str> {
        self.characteristic.as_deref()
    }

    #[must_use]
    pub fn with_characteristic(mut self, characteristic: impl Into<CompactString>) -> Self {
        self.characteristic = Some(characteristic.into());
        self
    }

    #[must_use]
    pub fn requirement(&self) -> Option<&str> {
        self.requirement.as_deref()
    }

    #[must_use]
    pub fn with_requirement(mut self, requirement: impl Into<CompactString>) -> Self {
        self.requirement = Some(requirement.into());
        self
    }

    #[must_use]
    pub const fn person_id(&self) -> Option<u64> {
        self.person_id
    }

    #[must_use]
    pub const fn with_person_id(mut self, person_id: u64) -> Self {
        self.person_id = Some(person_id);
        self
    }

    #[must_use]
    pub fn rule_key(&self) -> Option<&str> {
        self.rule_key.as_deref()
    }

    #[must_use]
    pub fn with_rule_key(mut self, rule_key: impl Into<CompactString>) -> Self {
        self.rule_key = Some(rule_key.into());
        self
    }

    /// Whether the measure is not scoped to a rule, characteristic, or person.
    #[must_use]
    pub const fn is_plain(&self) -> bool {
        self.rule_key.is_none() && self.characteristic.is_none() && self.person_id.is_none()
    }

    /// Whether both measures occupy the same slot, ignoring their values.
    #[must_use]
    pub fn same_slot(&self, other: &Self) -> bool {
        self.metric_key == other.metric_key
            && self.characteristic == other.characteristic
            && self.requirement == other.requirement
            && self.person_id == other.person_id
    }

    /// Whether the measure carries nothing beyond the metric's best value and can be elided.
    #[must_use]
    #[expect(clippy::float_cmp, reason = "best values are compared exactly after rounding")]
    pub fn is_best_value(&self, metric: &Metric) -> bool {
        if !metric.is_optimized_best_value() {
            return false;
        }

        let Some(best) = metric.best_value() else {
            return false;
        };

        self.value.is_none_or(|v| v == best)
            && self.id.is_none()
            && self.alert_status.is_none()
            && self.description.is_none()
            && self.tendency.is_none()
            && self.url.is_none()
            && self.data.is_none()
            && self.variations.iter().all(|variation| variation.is_none_or(|v| v == 0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::{Direction, ValueType};

    fn optimized_metric() -> Metric {
        Metric::builder("violations", "Violations", ValueType::Int)
            .direction(Direction::Worst)
            .best_value(0.0)
            .optimized_best_value(true)
            .build()
            .unwrap()
    }

    #[test]
    fn test_value_is_rounded_to_default_precision() {
        let measure = Measure::with_value("coverage", 66.666).unwrap();
        assert_eq!(measure.value(), Some(66.7));

        let measure = Measure::with_value("coverage", 0.25).unwrap();
        assert_eq!(measure.value(), Some(0.3));
    }

    #[test]
    fn test_value_with_explicit_precision() {
        let mut measure = Measure::new("coverage");
        measure.set_value_with_precision(Some(2.345_67), 3).unwrap();
        assert_eq!(measure.value(), Some(2.346));

        measure.set_value_with_precision(Some(7.5), 0).unwrap();
        assert_eq!(measure.value(), Some(8.0));

        measure.set_value_with_precision(Some(1.005), 2).unwrap();
        assert_eq!(measure.value(), Some(1.01));
    }

    #[test]
    fn test_huge_values_stay_finite() {
        let measure = Measure::with_value("ncloc", f64::MAX).unwrap();
        assert_eq!(measure.value(), Some(f64::MAX));

        let mut measure = Measure::new("ncloc");
        measure.set_value_with_precision(Some(f64::MIN), 6).unwrap();
        assert_eq!(measure.value(), Some(f64::MIN));
    }

    #[test]
    fn test_nan_is_rejected() {
        let mut measure = Measure::with_value("coverage", 1.0).unwrap();
        assert!(measure.set_value(Some(f64::NAN)).is_err());
        assert_eq!(measure.value(), Some(1.0), "a rejected value leaves the measure unchanged");

        assert!(Measure::with_value("coverage", f64::NAN).is_err());
    }

    #[test]
    fn test_value_can_be_cleared() {
        let mut measure = Measure::with_count("lines", 3);
        measure.set_value(None).unwrap();
        assert!(measure.value().is_none());
    }

    #[test]
    fn test_variations_use_one_based_periods() {
        let mut measure = Measure::new("ncloc");
        measure.set_variation(1, Some(4.0)).unwrap();
        measure.set_variation(MAX_VARIATIONS, Some(-2.0)).unwrap();

        assert_eq!(measure.variation(1), Some(4.0));
        assert_eq!(measure.variation(5), Some(-2.0));
        assert!(measure.variation(2).is_none());
        assert!(measure.variation(0).is_none());
        assert!(measure.variation(6).is_none());

        assert!(measure.set_variation(0, Some(1.0)).is_err());
        assert!(measure.set_variation(6, Some(1.0)).is_err());
        assert!(measure.set_variation(2, Some(f64::NAN)).is_err());
    }

    #[test]
    fn test_same_slot_ignores_value() {
        let a = Measure::with_count("violations", 3).with_characteristic("RELIABILITY");
        let b = Measure::with_count("violations", 7).with_characteristic("RELIABILITY");
        let c = Measure::with_count("violations", 3).with_characteristic("SECURITY");

        assert!(a.same_slot(&b));
        assert_ne!(a, b);
        assert!(!a.same_slot(&c));
        assert!(!a.same_slot(&Measure::with_count("violations", 3).with_person_id(12)));
    }

    #[test]
    fn test_rule_key_is_not_part_of_slot_but_makes_measure_scoped() {
        let plain = Measure::with_count("violations", 3);
        let by_rule = Measure::with_count("violations", 3).with_rule_key("rust:S1234");

        assert!(plain.is_plain());
        assert!(!by_rule.is_plain());
        assert!(plain.same_slot(&by_rule));
    }

    #[test]
    fn test_is_best_value() {
        let metric = optimized_metric();

        assert!(Measure::with_count("violations", 0).is_best_value(&metric));
        assert!(Measure::new("violations").is_best_value(&metric));
        assert!(!Measure::with_count("violations", 1).is_best_value(&metric));

        let mut with_zero_variation = Measure::with_count("violations", 0);
        with_zero_variation.set_variation(1, Some(0.0)).unwrap();
        assert!(with_zero_variation.is_best_value(&metric));

        let mut with_variation = Measure::with_count("violations", 0);
        with_variation.set_variation(3, Some(1.0)).unwrap();
        assert!(!with_variation.is_best_value(&metric));
    }

    #[test]
    fn test_auxiliary_fields_prevent_best_value() {
        let metric = optimized_metric();
        let base = || Measure::with_count("violations", 0);

        assert!(!base().with_id(1).is_best_value(&metric));
        assert!(!base().with_alert_status(Level::Ok).is_best_value(&metric));
        assert!(!base().with_description("desc").is_best_value(&metric));
        assert!(!base().with_tendency(0).is_best_value(&metric));
        assert!(!base().with_url("http://example.com").is_best_value(&metric));

        let mut with_data = base();
        with_data.set_data(Some("x".into()));
        assert!(!with_data.is_best_value(&metric));
    }

    #[test]
    fn test_best_value_needs_optimized_metric_with_best_value() {
        let not_optimized = Metric::builder("violations", "Violations", ValueType::Int)
            .best_value(0.0)
            .build()
            .unwrap();
        let no_best = Metric::builder("violations", "Violations", ValueType::Int)
            .optimized_best_value(true)
            .build()
            .unwrap();

        let measure = Measure::with_count("violations", 0);
        assert!(!measure.is_best_value(&not_optimized));
        assert!(!measure.is_best_value(&no_best));
    }

    #[test]
    fn test_persistence_mode_defaults_to_durable() {
        let measure = Measure::with_data("profile", "Sonar way");
        assert_eq!(measure.persistence_mode(), PersistenceMode::Durable);

        let measure = measure.with_persistence_mode(PersistenceMode::MemoryOnly);
        assert!(!measure.persistence_mode().is_durable());
    }
}

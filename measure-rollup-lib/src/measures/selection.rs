//! Helpers to pick, test, and sum measures out of a collection.

use super::Measure;

/// Find the plain measure of a metric, skipping rule, characteristic, and person scoped ones.
#[must_use]
pub fn find_plain<'a, I>(measures: I, metric_key: &str) -> Option<&'a Measure>
where
    I: IntoIterator<Item = &'a Measure>,
{
    measures.into_iter().find(|m| m.metric_key() == metric_key && m.is_plain())
}

/// Find the measure occupying the same slot as `wanted`.
#[must_use]
pub fn find_same_slot<'a, I>(measures: I, wanted: &Measure) -> Option<&'a Measure>
where
    I: IntoIterator<Item = &'a Measure>,
{
    measures.into_iter().find(|m| m.same_slot(wanted))
}

#[must_use]
pub fn has_value(measure: Option<&Measure>) -> bool {
    measure.is_some_and(|m| m.value().is_some())
}

#[must_use]
pub fn has_data(measure: Option<&Measure>) -> bool {
    measure.is_some_and(|m| m.data().is_some())
}

/// The measure's value, or `default` when the measure or its value is missing.
#[must_use]
pub fn value_or(measure: Option<&Measure>, default: f64) -> f64 {
    measure.and_then(Measure::value).unwrap_or(default)
}

/// Sum the values of the measures that have one.
///
/// Returns `Some(0.0)` when no measure has a value and `zero_if_none` is set, `None` otherwise.
#[must_use]
pub fn sum<'a, I>(zero_if_none: bool, measures: I) -> Option<f64>
where
    I: IntoIterator<Item = &'a Measure>,
{
    let total = measures
        .into_iter()
        .filter_map(Measure::value)
        .fold(None, |acc: Option<f64>, v| Some(acc.unwrap_or(0.0) + v));

    total.or_else(|| zero_if_none.then_some(0.0))
}

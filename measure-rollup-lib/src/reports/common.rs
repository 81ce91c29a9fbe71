//! Formatting shared by the report generators.

use super::ReportedMeasure;
use crate::measures::round_half_up;
use crate::metrics::ValueType;

/// Format a measure's value, or its payload when it has no value.
#[must_use]
pub fn format_measure(measure: &ReportedMeasure, precision: u8) -> String {
    let decimals = usize::from(precision);

    match (measure.value, measure.data.as_deref()) {
        (Some(value), _) => match measure.value_type {
            ValueType::Int | ValueType::Millisec | ValueType::WorkDur => format!("{:.0}", round_half_up(value, 0)),
            ValueType::Percent => format!("{:.decimals$}%", round_half_up(value, precision)),
            ValueType::Bool => (value != 0.0).to_string(),
            _ => format!("{:.decimals$}", round_half_up(value, precision)),
        },
        (None, Some(data)) => data.to_string(),
        (None, None) => "n/a".to_string(),
    }
}

/// Whether the value type is counted in whole units.
#[must_use]
pub const fn is_whole(value_type: ValueType) -> bool {
    matches!(value_type, ValueType::Int | ValueType::Millisec | ValueType::WorkDur)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measure(value_type: ValueType, value: Option<f64>, data: Option<&str>) -> ReportedMeasure {
        ReportedMeasure {
            metric_key: "m".into(),
            metric_name: "M".into(),
            value_type,
            value,
            data: data.map(str::to_string),
            memory_only: false,
        }
    }

    #[test]
    fn test_format_by_value_type() {
        assert_eq!(format_measure(&measure(ValueType::Int, Some(150.0), None), 1), "150");
        assert_eq!(format_measure(&measure(ValueType::Float, Some(6.666), None), 1), "6.7");
        assert_eq!(format_measure(&measure(ValueType::Float, Some(6.666), None), 3), "6.666");
        assert_eq!(format_measure(&measure(ValueType::Percent, Some(82.34), None), 1), "82.3%");
        assert_eq!(format_measure(&measure(ValueType::Bool, Some(1.0), None), 1), "true");
        assert_eq!(format_measure(&measure(ValueType::Bool, Some(0.0), None), 1), "false");
    }

    #[test]
    fn test_format_rounds_half_up() {
        assert_eq!(format_measure(&measure(ValueType::Float, Some(1.005), None), 2), "1.01");
        assert_eq!(format_measure(&measure(ValueType::Percent, Some(12.25), None), 1), "12.3%");
        assert_eq!(format_measure(&measure(ValueType::Int, Some(2.5), None), 1), "3");
    }

    #[test]
    fn test_format_payload_and_missing() {
        assert_eq!(format_measure(&measure(ValueType::Distrib, None, Some("1=3;2=1")), 1), "1=3;2=1");
        assert_eq!(format_measure(&measure(ValueType::Float, None, None), 1), "n/a");
    }

    #[test]
    fn test_whole_types() {
        assert!(is_whole(ValueType::Int));
        assert!(!is_whole(ValueType::Float));
        assert!(!is_whole(ValueType::Percent));
    }
}

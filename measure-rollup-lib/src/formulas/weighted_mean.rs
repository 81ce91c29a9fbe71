use super::{FormulaContext, FormulaData};
use crate::measures::Measure;

pub(super) fn calculate(data: &FormulaData<'_>, ctx: &FormulaContext<'_>, weight_key: &str, zero_if_none: bool) -> Option<Measure> {
    if data.is_leaf() {
        return None;
    }

    let key = ctx.target_key();
    let weighted: Vec<(f64, f64)> = data
        .children()
        .filter_map(|child| Some((child.value(key)?, child.value(weight_key)?)))
        .collect();

    if weighted.is_empty() {
        return zero_if_none.then(|| Measure::with_count(key, 0));
    }

    let total_weight: f64 = weighted.iter().map(|(_, weight)| weight).sum();
    if total_weight == 0.0 {
        return Some(Measure::with_count(key, 0));
    }

    let total: f64 = weighted.iter().map(|(value, weight)| value * weight).sum();
    Measure::with_value(key, total / total_weight).ok()
}

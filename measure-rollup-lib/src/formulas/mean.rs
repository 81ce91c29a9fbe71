use super::{FormulaContext, FormulaData};
use crate::measures::Measure;

pub(super) fn calculate(data: &FormulaData<'_>, ctx: &FormulaContext<'_>, force_zero: bool) -> Option<Measure> {
    if data.is_leaf() {
        return None;
    }

    let key = ctx.target_key();
    let values: Vec<f64> = data.children_measures(key).into_iter().filter_map(Measure::value).collect();
    if values.is_empty() {
        return force_zero.then(|| Measure::with_count(key, 0));
    }

    #[expect(clippy::cast_precision_loss, reason = "child counts are far below 2^52")]
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    Measure::with_value(key, mean).ok()
}

use super::{FormulaContext, FormulaData};
use crate::measures::Measure;

pub(super) fn calculate(
    data: &FormulaData<'_>,
    ctx: &FormulaContext<'_>,
    main: &str,
    by: &str,
    fallback: Option<&str>,
) -> Option<Measure> {
    let (numerator, divisor) = if data.is_leaf() {
        operands(data, main, by, fallback)?
    } else {
        data.children()
            .filter_map(|child| operands(&child, main, by, fallback))
            .reduce(|(n1, d1), (n2, d2)| (n1 + n2, d1 + d2))?
    };

    if divisor <= 0.0 {
        return None;
    }

    Measure::with_value(ctx.target_key(), numerator / divisor).ok()
}

/// The node's `main` (or `fallback`) and `by` values, when both exist and `by` is positive.
fn operands(data: &FormulaData<'_>, main: &str, by: &str, fallback: Option<&str>) -> Option<(f64, f64)> {
    let divisor = data.value(by).filter(|&v| v > 0.0)?;
    let numerator = data.value(main).or_else(|| fallback.and_then(|key| data.value(key)))?;
    Some((numerator, divisor))
}

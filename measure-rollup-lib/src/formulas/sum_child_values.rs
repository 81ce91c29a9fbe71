use super::{FormulaContext, FormulaData};
use crate::measures::{Measure, selection};

pub(super) fn calculate(data: &FormulaData<'_>, ctx: &FormulaContext<'_>, zero_if_none: bool) -> Option<Measure> {
    if data.is_leaf() {
        return None;
    }

    let key = ctx.target_key();
    let total = selection::sum(zero_if_none, data.children_measures(key))?;
    Measure::with_value(key, total).ok()
}

#[cfg(test)]
mod tests {
    use super::super::test_support::{Harness, metric};
    use crate::formulas::Formula;

    #[test]
    fn test_sums_children() {
        let mut harness = Harness::directory_with_files(3);
        harness.set_file_value(0, "ncloc", 10.0);
        harness.set_file_value(2, "ncloc", 5.5);

        let formula = Formula::sum_child_values(false);
        let result = harness.calculate_on_directory(&formula, &metric("ncloc")).unwrap();
        assert_eq!(result.value(), Some(15.5));
    }

    #[test]
    fn test_no_child_value() {
        let harness = Harness::directory_with_files(2);

        assert!(harness.calculate_on_directory(&Formula::sum_child_values(false), &metric("ncloc")).is_none());

        let zero = harness.calculate_on_directory(&Formula::sum_child_values(true), &metric("ncloc")).unwrap();
        assert_eq!(zero.value(), Some(0.0));
    }

    #[test]
    fn test_leaf_yields_nothing() {
        let mut harness = Harness::directory_with_files(1);
        harness.set_file_value(0, "ncloc", 10.0);
        assert!(harness.calculate_on_file(0, &Formula::sum_child_values(true), &metric("ncloc")).is_none());
    }
}

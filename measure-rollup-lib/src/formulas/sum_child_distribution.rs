use super::{FormulaContext, FormulaData};
use crate::distribution::RangeDistributionBuilder;
use crate::engine::Scope;
use crate::measures::{Measure, PersistenceMode};

const LOG_TARGET: &str = "  formulas";

pub(super) fn calculate(
    data: &FormulaData<'_>,
    ctx: &FormulaContext<'_>,
    minimum_scope_to_persist: Scope,
    bottom_limits: Option<&[f64]>,
) -> Option<Measure> {
    if data.is_leaf() {
        return None;
    }

    let key = ctx.target_key();
    let children: Vec<&Measure> = data.children_measures(key).into_iter().filter(|m| m.data().is_some()).collect();
    if children.is_empty() {
        return None;
    }

    let builder = match bottom_limits {
        Some(limits) => RangeDistributionBuilder::new(ctx.metric(), limits),
        None => RangeDistributionBuilder::unbounded(ctx.metric()),
    };

    let mut builder = builder
        .inspect_err(|e| log::debug!(target: LOG_TARGET, "Cannot merge '{key}' distributions on node {}: {e:#}", data.node()))
        .ok()?;

    for child in children {
        let _ = builder.add_measure(child);
    }

    let Some(mut measure) = builder.build() else {
        log::debug!(target: LOG_TARGET, "Skipping '{key}' on node {}, children have incompatible distributions", data.node());
        return None;
    };

    if data.scope() < minimum_scope_to_persist {
        measure.set_persistence_mode(PersistenceMode::MemoryOnly);
    }

    Some(measure)
}

use super::Metric;
use super::metric_def::METRIC_DEFINITIONS;
use crate::Result;
use crate::formulas::Formula;
use ohno::bail;
use rustc_hash::FxHashMap;
use std::collections::BTreeSet;

const LOG_TARGET: &str = " catalogue";

/// The registry of metrics used by one aggregation run.
///
/// A catalogue is always consistent: keys are unique, every formula dependency names a
/// registered metric, and the dependency graph is acyclic. The evaluation order is computed
/// once at construction.
#[derive(Debug, Clone)]
pub struct MetricCatalogue {
    metrics: Vec<Metric>,
    index: FxHashMap<String, usize>,
    evaluation_order: Vec<usize>,
}

impl MetricCatalogue {
    /// Build a catalogue from metrics in registration order.
    ///
    /// # Errors
    ///
    /// Returns an error if a key is registered twice, if a formula depends on an unknown metric,
    /// if a distribution formula targets a non-distribution metric, or if the dependencies form a cycle.
    pub fn new(metrics: Vec<Metric>) -> Result<Self> {
        let mut index = FxHashMap::default();
        for (position, metric) in metrics.iter().enumerate() {
            if index.insert(metric.key().to_string(), position).is_some() {
                bail!("metric '{}' is registered more than once", metric.key());
            }
        }

        for metric in &metrics {
            let Some(formula) = metric.formula() else {
                continue;
            };

            for dependency in formula.depends_upon() {
                if !index.contains_key(dependency) {
                    bail!("metric '{}' depends on unknown metric '{dependency}'", metric.key());
                }
            }

            if matches!(formula, Formula::SumChildDistribution { .. }) && !metric.is_distribution() {
                bail!(
                    "metric '{}' uses a distribution formula but has value type {}",
                    metric.key(),
                    metric.value_type()
                );
            }
        }

        let evaluation_order = topological_order(&metrics, &index)?;

        log::debug!(target: LOG_TARGET, "Built catalogue with {} metrics, {} computed", metrics.len(), evaluation_order.len());

        Ok(Self {
            metrics,
            index,
            evaluation_order,
        })
    }

    /// Build a catalogue holding the built-in core metrics followed by `extra`.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`MetricCatalogue::new`].
    pub fn with_metrics(extra: impl IntoIterator<Item = Metric>) -> Result<Self> {
        let mut metrics = core_metrics()?;
        metrics.extend(extra);
        Self::new(metrics)
    }

    /// Remove the formulas of the given metrics so they are never computed.
    ///
    /// The metrics stay registered so their leaf measures can still be recorded.
    ///
    /// # Errors
    ///
    /// Returns an error if a key is not registered.
    pub fn disable_formulas<'a>(self, keys: impl IntoIterator<Item = &'a str>) -> Result<Self> {
        let mut metrics = self.metrics;
        for key in keys {
            let Some(&position) = self.index.get(key) else {
                bail!("cannot disable unknown metric '{key}'");
            };

            metrics[position].clear_formula();
            log::debug!(target: LOG_TARGET, "Disabled formula of metric '{key}'");
        }

        Self::new(metrics)
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Metric> {
        self.index.get(key).map(|&position| &self.metrics[position])
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// All metrics in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Metric> {
        self.metrics.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    /// The metrics carrying a formula, dependencies first.
    pub fn evaluation_order(&self) -> impl Iterator<Item = &Metric> {
        self.evaluation_order.iter().map(|&position| &self.metrics[position])
    }
}

impl Default for MetricCatalogue {
    fn default() -> Self {
        Self::with_metrics([]).expect("built-in metric definitions should form a valid catalogue")
    }
}

fn core_metrics() -> Result<Vec<Metric>> {
    METRIC_DEFINITIONS.iter().map(super::MetricDef::to_metric).collect()
}

/// Kahn's algorithm over the metrics that carry a formula.
///
/// Ties are broken by registration order so the result is deterministic. Dependencies on
/// metrics without a formula impose no ordering since those values are never computed.
fn topological_order(metrics: &[Metric], index: &FxHashMap<String, usize>) -> Result<Vec<usize>> {
    let computed = |position: usize| metrics[position].formula().is_some();

    let mut pending_dependencies = vec![0_usize; metrics.len()];
    let mut dependents: Vec<Vec<usize>> = vec![Vec::new(); metrics.len()];

    for (position, metric) in metrics.iter().enumerate() {
        let Some(formula) = metric.formula() else {
            continue;
        };

        let mut seen = BTreeSet::new();
        for dependency in formula.depends_upon() {
            let Some(&dependency_position) = index.get(dependency) else {
                continue;
            };

            if computed(dependency_position) && seen.insert(dependency_position) {
                pending_dependencies[position] += 1;
                dependents[dependency_position].push(position);
            }
        }
    }

    let mut ready: BTreeSet<usize> = (0..metrics.len())
        .filter(|&position| computed(position) && pending_dependencies[position] == 0)
        .collect();

    let mut order = Vec::new();
    while let Some(position) = ready.pop_first() {
        order.push(position);
        for &dependent in &dependents[position] {
            pending_dependencies[dependent] -= 1;
            if pending_dependencies[dependent] == 0 {
                let _ = ready.insert(dependent);
            }
        }
    }

    let total_computed = (0..metrics.len()).filter(|&position| computed(position)).count();
    if order.len() != total_computed {
        let cyclic: Vec<&str> = (0..metrics.len())
            .filter(|&position| computed(position) && pending_dependencies[position] > 0)
            .map(|position| metrics[position].key())
            .collect();
        bail!("metric dependencies form a cycle involving: {}", cyclic.join(", "));
    }

    Ok(order)
}

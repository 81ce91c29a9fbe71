use crate::engine::{ComponentTree, InMemoryMeasureStore, NodeId, ProjectTree, Scope};
use crate::measures::Measure;
use crate::metrics::{Metric, MetricCatalogue, ValueType};
use compact_str::CompactString;

/// A measure ready to be shown, with what reports need to know about its metric.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportedMeasure {
    pub metric_key: CompactString,
    pub metric_name: CompactString,
    pub value_type: ValueType,
    pub value: Option<f64>,
    pub data: Option<String>,
    pub memory_only: bool,
}

impl ReportedMeasure {
    #[must_use]
    pub fn new(metric: &Metric, measure: &Measure) -> Self {
        Self {
            metric_key: metric.key().into(),
            metric_name: metric.name().into(),
            value_type: metric.value_type(),
            value: measure.value(),
            data: measure.data().map(str::to_string),
            memory_only: !measure.persistence_mode().is_durable(),
        }
    }
}

/// One component of the tree and the measures to report for it.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportableNode {
    pub key: CompactString,
    pub scope: Scope,
    pub depth: usize,
    pub measures: Vec<ReportedMeasure>,
}

/// Gather the reportable measures of every component, parents before their children.
///
/// Measures of hidden metrics and measures that only restate an elidable best value are left
/// out. Memory-only measures are left out unless `include_memory_only` is set.
#[must_use]
pub fn collect(catalogue: &MetricCatalogue, tree: &ProjectTree, store: &InMemoryMeasureStore, include_memory_only: bool) -> Vec<ReportableNode> {
    let mut nodes = Vec::with_capacity(tree.node_count());
    let mut pending: Vec<NodeId> = vec![tree.root()];

    while let Some(node) = pending.pop() {
        let measures = store
            .measures(node)
            .filter_map(|measure| {
                let metric = catalogue.get(measure.metric_key())?;
                let reported = !metric.is_hidden()
                    && !measure.is_best_value(metric)
                    && (include_memory_only || measure.persistence_mode().is_durable());
                reported.then(|| ReportedMeasure::new(metric, measure))
            })
            .collect();

        nodes.push(ReportableNode {
            key: tree.key(node).into(),
            scope: tree.scope(node),
            depth: tree.depth(node),
            measures,
        });

        pending.extend(tree.children(node).iter().rev());
    }

    nodes
}

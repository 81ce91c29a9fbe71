use super::NodeId;
use crate::measures::Measure;
use compact_str::CompactString;
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;

/// Where measures of each component are read from and written to.
pub trait MeasureStore {
    /// The plain measure of a metric recorded on a node.
    fn get(&self, node: NodeId, metric_key: &str) -> Option<&Measure>;

    /// Record a measure on a node, replacing any measure of the same metric.
    fn set(&mut self, node: NodeId, measure: Measure);
}

/// A [`MeasureStore`] that keeps everything in memory, measures of a node sorted by metric key.
#[derive(Debug, Default, Clone)]
pub struct InMemoryMeasureStore {
    measures: FxHashMap<NodeId, BTreeMap<CompactString, Measure>>,
}

impl InMemoryMeasureStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Measures of a node in metric key order.
    pub fn measures(&self, node: NodeId) -> impl Iterator<Item = &Measure> {
        self.measures.get(&node).into_iter().flat_map(BTreeMap::values)
    }

    /// Total number of measures across all nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.measures.values().map(BTreeMap::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl MeasureStore for InMemoryMeasureStore {
    fn get(&self, node: NodeId, metric_key: &str) -> Option<&Measure> {
        self.measures.get(&node)?.get(metric_key)
    }

    fn set(&mut self, node: NodeId, measure: Measure) {
        let _ = self
            .measures
            .entry(node)
            .or_default()
            .insert(CompactString::from(measure.metric_key()), measure);
    }
}

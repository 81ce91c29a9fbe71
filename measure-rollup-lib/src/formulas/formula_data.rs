use crate::engine::{ComponentTree, MeasureStore, NodeId, Scope};
use crate::measures::Measure;
use core::fmt;

/// Read-only view of one node, its measures, and its children, as seen by a formula.
#[derive(Clone, Copy)]
pub struct FormulaData<'a> {
    tree: &'a dyn ComponentTree,
    store: &'a dyn MeasureStore,
    node: NodeId,
}

impl<'a> FormulaData<'a> {
    #[must_use]
    pub fn new(tree: &'a dyn ComponentTree, store: &'a dyn MeasureStore, node: NodeId) -> Self {
        Self { tree, store, node }
    }

    #[must_use]
    pub const fn node(&self) -> NodeId {
        self.node
    }

    /// The node's own measure of a metric.
    #[must_use]
    pub fn measure(&self, metric_key: &str) -> Option<&'a Measure> {
        self.store.get(self.node, metric_key)
    }

    /// The node's own value of a metric.
    #[must_use]
    pub fn value(&self, metric_key: &str) -> Option<f64> {
        self.measure(metric_key).and_then(Measure::value)
    }

    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.tree.is_leaf(self.node)
    }

    #[must_use]
    pub fn scope(&self) -> Scope {
        self.tree.scope(self.node)
    }

    /// Views of the node's direct children.
    pub fn children(&self) -> impl Iterator<Item = FormulaData<'a>> + use<'a> {
        let parent = *self;
        self.tree.children(self.node).iter().map(move |&node| Self { node, ..parent })
    }

    /// The measures of a metric recorded on the direct children, skipping children without one.
    #[must_use]
    pub fn children_measures(&self, metric_key: &str) -> Vec<&'a Measure> {
        self.children().filter_map(|child| child.measure(metric_key)).collect()
    }
}

impl fmt::Debug for FormulaData<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormulaData")
            .field("node", &self.node)
            .field("scope", &self.scope())
            .finish_non_exhaustive()
    }
}

use super::{NodeId, Scope};

/// Read-only view of the component hierarchy being aggregated.
pub trait ComponentTree {
    fn root(&self) -> NodeId;

    fn children(&self, node: NodeId) -> &[NodeId];

    fn scope(&self, node: NodeId) -> Scope;

    /// Whether formulas treat the node as a leaf: it is a file (or finer), or it has no children.
    fn is_leaf(&self, node: NodeId) -> bool {
        self.scope(node) <= Scope::File || self.children(node).is_empty()
    }

    /// Every node reachable from the root, children before their parent.
    fn post_order(&self) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack = vec![(self.root(), false)];

        while let Some((node, expanded)) = stack.pop() {
            if expanded {
                order.push(node);
            } else {
                stack.push((node, true));
                stack.extend(self.children(node).iter().rev().map(|&child| (child, false)));
            }
        }

        order
    }
}

use super::{ComponentTree, NodeId, Scope};
use crate::Result;
use compact_str::CompactString;
use ohno::bail;

#[derive(Debug, Clone)]
struct Node {
    key: CompactString,
    scope: Scope,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// An arena-backed [`ComponentTree`] built top-down from a root component.
#[derive(Debug, Clone)]
pub struct ProjectTree {
    nodes: Vec<Node>,
}

impl ProjectTree {
    /// Create a tree holding only its root.
    #[must_use]
    pub fn new(root_key: impl Into<CompactString>, scope: Scope) -> Self {
        Self {
            nodes: vec![Node {
                key: root_key.into(),
                scope,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// Attach a new component under `parent`.
    ///
    /// # Errors
    ///
    /// Returns an error if `parent` does not belong to this tree or if the child's scope is
    /// coarser than its parent's.
    pub fn add_child(&mut self, parent: NodeId, key: impl Into<CompactString>, scope: Scope) -> Result<NodeId> {
        let key = key.into();
        let Some(parent_node) = self.nodes.get(parent.index()) else {
            bail!("cannot add '{key}' under unknown node {parent}");
        };

        if scope > parent_node.scope {
            bail!(
                "component '{key}' has scope {scope} and cannot be placed under '{}' with scope {}",
                parent_node.key,
                parent_node.scope
            );
        }

        let id = NodeId::new(self.nodes.len());
        self.nodes.push(Node {
            key,
            scope,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.index()].children.push(id);

        Ok(id)
    }

    /// The component key of a node, such as a path.
    #[must_use]
    pub fn key(&self, node: NodeId) -> &str {
        &self.nodes[node.index()].key
    }

    #[must_use]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.index()].parent
    }

    /// Look a node up by its component key.
    #[must_use]
    pub fn find(&self, key: &str) -> Option<NodeId> {
        self.nodes.iter().position(|node| node.key == key).map(NodeId::new)
    }

    /// Number of components, root included.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Distance from the root.
    #[must_use]
    pub fn depth(&self, node: NodeId) -> usize {
        let mut depth = 0;
        let mut current = self.parent(node);
        while let Some(parent) = current {
            depth += 1;
            current = self.parent(parent);
        }
        depth
    }
}

impl ComponentTree for ProjectTree {
    fn root(&self) -> NodeId {
        NodeId::new(0)
    }

    fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.index()].children
    }

    fn scope(&self, node: NodeId) -> Scope {
        self.nodes[node.index()].scope
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (ProjectTree, NodeId, NodeId, NodeId) {
        let mut tree = ProjectTree::new("project", Scope::Project);
        let root = tree.root();
        let dir = tree.add_child(root, "src", Scope::Directory).unwrap();
        let lib = tree.add_child(dir, "src/lib.rs", Scope::File).unwrap();
        let main = tree.add_child(dir, "src/main.rs", Scope::File).unwrap();
        (tree, dir, lib, main)
    }

    #[test]
    fn test_structure() {
        let (tree, dir, lib, main) = sample();

        assert_eq!(tree.node_count(), 4);
        assert_eq!(tree.children(tree.root()), [dir]);
        assert_eq!(tree.children(dir), [lib, main]);
        assert_eq!(tree.parent(lib), Some(dir));
        assert_eq!(tree.parent(tree.root()), None);
        assert_eq!(tree.key(main), "src/main.rs");
        assert_eq!(tree.find("src/lib.rs"), Some(lib));
        assert_eq!(tree.find("nope"), None);
        assert_eq!(tree.depth(lib), 2);
    }

    #[test]
    fn test_leaves() {
        let (mut tree, dir, lib, _) = sample();
        let empty_dir = tree.add_child(dir, "src/empty", Scope::Directory).unwrap();
        let block = tree.add_child(lib, "src/lib.rs#parse", Scope::BlockUnit).unwrap();

        assert!(!tree.is_leaf(tree.root()));
        assert!(!tree.is_leaf(dir));
        assert!(tree.is_leaf(lib), "files are leaves even with blocks below them");
        assert!(tree.is_leaf(empty_dir));
        assert!(tree.is_leaf(block));
    }

    #[test]
    fn test_post_order_visits_children_first() {
        let (tree, dir, lib, main) = sample();
        assert_eq!(tree.post_order(), [lib, main, dir, tree.root()]);
    }

    #[test]
    fn test_scope_cannot_grow_downwards() {
        let (mut tree, _, lib, _) = sample();
        assert!(tree.add_child(lib, "src/nested", Scope::Directory).is_err());
        assert!(tree.add_child(NodeId::new(42), "x", Scope::File).is_err());
    }
}

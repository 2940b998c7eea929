//! Depth-first traversal and visit-once bookkeeping

use fxhash::FxHashSet;

use super::arena::{Node, NodeId};

/// What to do after visiting a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Walk {
    /// Descend into the node's children
    Continue,
    /// Leave the node's subtree unvisited
    SkipChildren,
}

/// Pre-order iterator over a subtree, root included
#[derive(Debug, Clone)]
pub struct Descendants<'a> {
    stack: Vec<Node<'a>>,
}

impl<'a> Descendants<'a> {
    pub(super) fn new(root: Node<'a>) -> Self {
        Descendants { stack: vec![root] }
    }
}

impl<'a> Iterator for Descendants<'a> {
    type Item = Node<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().rev());
        Some(node)
    }
}

/// Visit every node of a subtree exactly once in depth-first pre-order
///
/// The callback decides per node whether its children are visited.
pub fn walk<'a, F>(root: Node<'a>, mut visit: F)
where
    F: FnMut(Node<'a>) -> Walk,
{
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        if visit(node) == Walk::Continue {
            stack.extend(node.children().rev());
        }
    }
}

/// Set of nodes already processed during one conversion
#[derive(Debug, Default, Clone)]
pub struct VisitedSet {
    seen: FxHashSet<NodeId>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a node as visited; returns `false` if it already was
    pub fn mark(&mut self, id: NodeId) -> bool {
        self.seen.insert(id)
    }
}

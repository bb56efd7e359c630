//! Read-only access to the tree structure for external walkers.

use crate::kdtree::index::{KdTree, Node};

/// A read-only handle onto one node of a [`KdTree`].
///
/// Presentation code (pretty-printers, plotters, debug dumps) can walk the
/// tree through these handles without the tree knowing anything about the
/// output format.
#[derive(Debug)]
pub struct NodeRef<'a, P> {
    nodes: &'a [Node<P>],
    index: usize,
}

// Manual impls: the derives would add an unwanted implicit `P: Clone`/
// `P: Copy` bound, but a `NodeRef` is just a reference plus an index and is
// always copyable.
impl<P> Clone for NodeRef<'_, P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P> Copy for NodeRef<'_, P> {}

impl<'a, P> NodeRef<'a, P> {
    /// The point stored at this node.
    pub fn point(&self) -> &'a P {
        &self.nodes[self.index].point
    }

    /// The left child, if present.
    pub fn left(&self) -> Option<NodeRef<'a, P>> {
        self.nodes[self.index].left.map(|index| NodeRef {
            nodes: self.nodes,
            index,
        })
    }

    /// The right child, if present.
    pub fn right(&self) -> Option<NodeRef<'a, P>> {
        self.nodes[self.index].right.map(|index| NodeRef {
            nodes: self.nodes,
            index,
        })
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        let node = &self.nodes[self.index];
        node.left.is_none() && node.right.is_none()
    }
}

impl<P, M> KdTree<P, M> {
    /// Access the root node for manual traversal, or `None` if the tree is
    /// empty.
    pub fn root(&self) -> Option<NodeRef<'_, P>> {
        self.root.map(|index| NodeRef {
            nodes: &self.nodes,
            index,
        })
    }
}

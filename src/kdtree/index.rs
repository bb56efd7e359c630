use crate::kdtree::builder::KdTreeBuilder;
use crate::kdtree::metric::AxisDelta;
use crate::point::Point;

/// One slot in the node arena.
///
/// Children are arena indices; `None` is the first-class "no child" state. A
/// node with neither child is a leaf.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Node<P> {
    pub(crate) point: P,
    pub(crate) left: Option<usize>,
    pub(crate) right: Option<usize>,
}

impl<P> Node<P> {
    pub(crate) fn leaf(point: P) -> Self {
        Self {
            point,
            left: None,
            right: None,
        }
    }
}

/// A KD-tree over points of type `P`, ordered by the axis deltas of `M`.
///
/// Usually created via [`KdTree::new`], or through a
/// [`KdTreeBuilder`][crate::kdtree::KdTreeBuilder] when construction should
/// be staged. Nodes are stored in an index-based arena rather than as a chain
/// of boxed children, so teardown never recurses however unbalanced the tree
/// has become.
#[derive(Debug, Clone)]
pub struct KdTree<P, M> {
    pub(crate) nodes: Vec<Node<P>>,
    pub(crate) root: Option<usize>,
    pub(crate) dims: usize,
    pub(crate) metric: M,
}

impl<P: Point, M: AxisDelta<P>> KdTree<P, M> {
    /// Build a balanced tree from a point set.
    ///
    /// At each recursion level the remaining points are ordered by the
    /// metric's sign on the axis `depth % dimensions`, the median element
    /// becomes the node and the halves on either side become its subtrees.
    /// Points sharing a coordinate on the splitting axis may land on either
    /// side of the split; the resulting shape is valid but not canonical.
    ///
    /// An empty point set builds an empty tree.
    pub fn new(points: impl IntoIterator<Item = P>, metric: M) -> Self {
        let mut builder = KdTreeBuilder::new();
        builder.extend(points);
        builder.metric(metric);
        // The metric is present by construction, so finish cannot fail.
        builder.finish().unwrap()
    }
}

impl<P, M> KdTree<P, M> {
    /// The number of points stored in the tree.
    pub fn size(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree holds no points.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The dimensionality this tree indexes, taken from the first point it
    /// saw. Zero while the tree is empty.
    pub fn dimensions(&self) -> usize {
        self.dims
    }
}

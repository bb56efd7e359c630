use std::cmp::Ordering;

use crate::error::{KdIndexError, Result};
use crate::kdtree::index::{KdTree, Node};
use crate::kdtree::metric::AxisDelta;
use crate::point::Point;

/// A builder to create a [`KdTree`].
///
/// Points can be staged incrementally; the k-d structure is produced in one
/// pass by [`finish`][KdTreeBuilder::finish]. Finishing without a metric is a
/// configuration error: the builder refuses to produce a tree it could not
/// order.
pub struct KdTreeBuilder<P, M> {
    points: Vec<P>,
    metric: Option<M>,
}

impl<P: Point, M: AxisDelta<P>> KdTreeBuilder<P, M> {
    /// Create an empty builder with no metric configured.
    pub fn new() -> Self {
        Self {
            points: Vec::new(),
            metric: None,
        }
    }

    /// Stage a single point.
    pub fn add(&mut self, point: P) {
        self.points.push(point);
    }

    /// Stage every point from an iterator.
    pub fn extend(&mut self, points: impl IntoIterator<Item = P>) {
        self.points.extend(points);
    }

    /// Set the axis delta metric the tree will order and search with.
    pub fn metric(&mut self, metric: M) -> &mut Self {
        self.metric = Some(metric);
        self
    }

    /// Consume this builder, performing the recursive median split and
    /// producing a tree ready for queries.
    ///
    /// Errors with [`KdIndexError::MissingMetric`] if no metric was set.
    pub fn finish(self) -> Result<KdTree<P, M>> {
        let metric = self.metric.ok_or(KdIndexError::MissingMetric)?;
        let dims = self.points.first().map_or(0, |p| p.dimensions());

        let mut nodes = Vec::with_capacity(self.points.len());
        let root = build(&mut nodes, &metric, self.points, 0);

        Ok(KdTree {
            nodes,
            root,
            dims,
            metric,
        })
    }
}

impl<P: Point, M: AxisDelta<P>> Default for KdTreeBuilder<P, M> {
    fn default() -> Self {
        Self::new()
    }
}

/// Recursively median-split `points` into `nodes`, returning the arena index
/// of the subtree root, or `None` for an empty slice.
fn build<P: Point, M: AxisDelta<P>>(
    nodes: &mut Vec<Node<P>>,
    metric: &M,
    mut points: Vec<P>,
    depth: usize,
) -> Option<usize> {
    if points.is_empty() {
        return None;
    }

    // Select the axis based on depth.
    let axis = depth % points[0].dimensions();

    // Order by the sign of the axis delta. Ties land wherever the sort
    // leaves them.
    points.sort_by(|a, b| {
        metric
            .delta(a, b, axis)
            .partial_cmp(&0.0)
            .unwrap_or(Ordering::Equal)
    });

    let median = points.len() / 2;
    let upper = points.split_off(median + 1);
    let point = points.pop().unwrap(); // the median element; never empty here

    let left = build(nodes, metric, points, depth + 1);
    let right = build(nodes, metric, upper, depth + 1);

    nodes.push(Node { point, left, right });
    Some(nodes.len() - 1)
}

use crate::error::{KdIndexError, Result};
use crate::kdtree::index::{KdTree, Node};
use crate::kdtree::metric::{sq_dist, AxisDelta};
use crate::point::Point;

impl<P: Point, M: AxisDelta<P>> KdTree<P, M> {
    /// Find the stored point with the smallest squared distance to `target`.
    ///
    /// When several points are exactly tied for the minimum, any one of them
    /// may be returned.
    ///
    /// Errors with [`KdIndexError::EmptyTree`] if the tree holds no points,
    /// and [`KdIndexError::DimensionMismatch`] if `target` does not span the
    /// tree's dimensionality.
    pub fn nearest(&self, target: &P) -> Result<&P> {
        let Some(root) = self.root else {
            return Err(KdIndexError::EmptyTree);
        };
        if target.dimensions() != self.dims {
            return Err(KdIndexError::DimensionMismatch {
                expected: self.dims,
                actual: target.dimensions(),
            });
        }

        let (best, _) = self.search_nearest(Some(root), target, 0, None, f64::INFINITY);
        // Only NaN deltas can leave no candidate; fall back to the root.
        let best = best.unwrap_or(root);
        Ok(&self.nodes[best].point)
    }

    /// Branch-and-bound descent. Threads the best candidate and its squared
    /// distance through the recursion so the pruning bound tightens as soon
    /// as a closer point is found.
    fn search_nearest(
        &self,
        node: Option<usize>,
        target: &P,
        depth: usize,
        best: Option<usize>,
        best_dist: f64,
    ) -> (Option<usize>, f64) {
        let Some(index) = node else {
            return (best, best_dist);
        };
        let current = &self.nodes[index];

        let axis = depth % self.dims;
        let dist = sq_dist(&self.metric, target, &current.point);
        let plane = self.metric.delta(target, &current.point, axis);

        let (same_side, opposite) = if plane < 0.0 {
            (current.left, current.right)
        } else {
            (current.right, current.left)
        };

        // Descend into the half the target lies in first, so a tight bound
        // is usually in place before the plane test below.
        let (mut best, mut best_dist) =
            self.search_nearest(same_side, target, depth + 1, best, best_dist);
        if dist < best_dist {
            best_dist = dist;
            best = Some(index);
        }

        // The far half can only hold a closer point if the splitting plane
        // itself lies within the best squared distance.
        if plane * plane < best_dist {
            (best, best_dist) = self.search_nearest(opposite, target, depth + 1, best, best_dist);
        }

        (best, best_dist)
    }

    /// Insert a single point as a new leaf.
    ///
    /// The walk from the root follows the same decision rule construction
    /// used: on the axis for the current depth, a negative delta against the
    /// node goes left, anything else goes right, until a free child slot is
    /// found. The tree is not rebalanced, so long runs of sorted or
    /// adversarial inserts will skew it and slow later queries.
    ///
    /// Inserting into an empty tree establishes its root and dimensionality.
    /// Errors with [`KdIndexError::DimensionMismatch`] (leaving the tree
    /// untouched) if `point` does not span the tree's dimensionality.
    pub fn insert(&mut self, point: P) -> Result<()> {
        let Some(mut current) = self.root else {
            self.dims = point.dimensions();
            self.nodes.push(Node::leaf(point));
            self.root = Some(self.nodes.len() - 1);
            return Ok(());
        };
        if point.dimensions() != self.dims {
            return Err(KdIndexError::DimensionMismatch {
                expected: self.dims,
                actual: point.dimensions(),
            });
        }

        let leaf = self.nodes.len();
        let mut depth = 0;
        loop {
            let axis = depth % self.dims;
            let go_left = self.metric.delta(&point, &self.nodes[current].point, axis) < 0.0;
            let child = if go_left {
                self.nodes[current].left
            } else {
                self.nodes[current].right
            };
            match child {
                Some(next) => {
                    current = next;
                    depth += 1;
                }
                None => {
                    self.nodes.push(Node::leaf(point));
                    if go_left {
                        self.nodes[current].left = Some(leaf);
                    } else {
                        self.nodes[current].right = Some(leaf);
                    }
                    return Ok(());
                }
            }
        }
    }
}

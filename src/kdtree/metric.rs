//! Signed per-axis delta metrics.

use num_traits::ToPrimitive;

use crate::point::Point;

/// A strategy for computing a signed per-axis delta between two points.
///
/// The one function serves two purposes. During construction its sign is the
/// ordering comparator on the splitting axis (negative means `a` precedes
/// `b`). During search its square, summed over all axes, is the squared
/// distance between two points, and the squared delta on a single axis is the
/// distance to a splitting plane. Both uses must agree, which is why they are
/// one function.
pub trait AxisDelta<P: Point> {
    /// The signed delta between `a` and `b` along `axis`.
    fn delta(&self, a: &P, b: &P, axis: usize) -> f64;
}

/// Plain coordinate difference per axis, summing to squared Euclidean
/// distance.
///
/// Works for any point whose scalar converts to `f64`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Euclidean;

impl<P> AxisDelta<P> for Euclidean
where
    P: Point,
    P::Scalar: ToPrimitive,
{
    #[inline]
    fn delta(&self, a: &P, b: &P, axis: usize) -> f64 {
        a.value(axis).to_f64().unwrap_or(0.0) - b.value(axis).to_f64().unwrap_or(0.0)
    }
}

/// Adapter implementing [`AxisDelta`] for a plain function or closure.
///
/// ```
/// use kd_index::kdtree::metric::FnDelta;
/// use kd_index::kdtree::KdTree;
///
/// let metric = FnDelta(|a: &[f64; 2], b: &[f64; 2], axis: usize| a[axis] - b[axis]);
/// let tree = KdTree::new(vec![[0., 0.], [3., 4.]], metric);
/// assert_eq!(tree.nearest(&[3., 3.]).unwrap(), &[3., 4.]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnDelta<F>(
    /// The wrapped delta function.
    pub F,
);

impl<P, F> AxisDelta<P> for FnDelta<F>
where
    P: Point,
    F: Fn(&P, &P, usize) -> f64,
{
    #[inline]
    fn delta(&self, a: &P, b: &P, axis: usize) -> f64 {
        (self.0)(a, b, axis)
    }
}

/// Squared distance between two points: the axis deltas squared and summed
/// over every axis.
#[inline]
pub(crate) fn sq_dist<P: Point, M: AxisDelta<P>>(metric: &M, a: &P, b: &P) -> f64 {
    let mut acc = 0.0;
    for axis in 0..a.dimensions() {
        let d = metric.delta(a, b, axis);
        acc += d * d;
    }
    acc
}

/// A trait for types that can be stored in a [`KdTree`][crate::kdtree::KdTree].
///
/// A point only has to report how many axes it spans and its coordinate along
/// each one. Every point handled by one tree must report the same
/// `dimensions()`; the tree checks queried and inserted points against the
/// dimensionality it was built with, but cross-point consistency inside the
/// initial point set is the caller's responsibility.
pub trait Point {
    /// The coordinate type reported along each axis.
    type Scalar: Copy;

    /// The number of axes this point spans. Must be at least 1.
    fn dimensions(&self) -> usize;

    /// The coordinate along `axis`, for `0 <= axis < self.dimensions()`.
    fn value(&self, axis: usize) -> Self::Scalar;
}

impl<T: Copy, const D: usize> Point for [T; D] {
    type Scalar = T;

    fn dimensions(&self) -> usize {
        D
    }

    fn value(&self, axis: usize) -> T {
        self[axis]
    }
}

/// Dimensionality is the vector length, so every `Vec` indexed by one tree
/// must have the same length.
impl<T: Copy> Point for Vec<T> {
    type Scalar = T;

    fn dimensions(&self) -> usize {
        self.len()
    }

    fn value(&self, axis: usize) -> T {
        self[axis]
    }
}

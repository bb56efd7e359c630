use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum KdIndexError {
    /// The builder was finished without an axis delta metric. A tree cannot
    /// order or compare points without one.
    #[error("No axis delta metric provided before finishing the builder.")]
    MissingMetric,

    /// A nearest-neighbor query was issued against a tree with no points.
    #[error("Nearest-neighbor query on an empty tree.")]
    EmptyTree,

    /// A queried or inserted point disagrees with the dimensionality
    /// established by the points already in the tree.
    #[error("Point has {actual} dimensions when the tree indexes {expected}.")]
    DimensionMismatch {
        /// The dimensionality the tree was built with.
        expected: usize,
        /// The dimensionality of the offending point.
        actual: usize,
    },
}

pub type Result<T> = std::result::Result<T, KdIndexError>;

//! A generic, mutable K-D tree with exact nearest-neighbor search.
//!
//! The tree is built once from a point set via recursive median splits on a
//! rotating axis, queried with a branch-and-bound search that prunes subtrees
//! on the far side of a splitting plane, and optionally grown one leaf at a
//! time with [`KdTree::insert`]. There is no rebalancing and no deletion.

#![warn(missing_docs)]

mod builder;
mod index;
pub mod metric;
mod search;
mod traversal;

pub use builder::KdTreeBuilder;
pub use index::KdTree;
pub use traversal::NodeRef;

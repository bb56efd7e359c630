#![doc = include_str!("../README.md")]

mod error;
pub mod kdtree;
mod point;

pub use error::KdIndexError;
pub use point::Point;

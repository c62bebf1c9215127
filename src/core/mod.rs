//! Core scoring modules
//!
//! Edit distance and the similarity ratio built on top of it.

pub mod distance;
pub mod similarity;

pub use distance::{levenshtein, levenshtein as distance, DistanceMatrix};
pub use similarity::{compare, similarity, similarity_opt, similarity_value};

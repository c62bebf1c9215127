//! Utility modules

pub mod fuzzy;

pub use fuzzy::{best_by, find_best_match, find_matches, FuzzyMatch, Matcher};

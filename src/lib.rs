//! Simscore Library
//!
//! Case-insensitive fuzzy string similarity based on Levenshtein distance,
//! plus helpers for picking the best candidate out of a list.

pub mod config;
pub mod core;
pub mod error;
pub mod utils;

pub use config::MatchConfig;
pub use self::core::{
    compare, distance, levenshtein, similarity, similarity_opt, similarity_value, DistanceMatrix,
};
pub use error::{SimError, SimResult};
pub use utils::{best_by, find_best_match, find_matches, FuzzyMatch, Matcher};

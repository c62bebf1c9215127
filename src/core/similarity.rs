//! Similarity Scoring
//!
//! Converts Levenshtein distance into a case-insensitive ratio in `[0, 1]`.
//! `1.0` means identical after lowercasing, `0.0` means every char of the
//! longer string had to be edited.

use super::distance::levenshtein;
use serde_json::Value;

/// Case-insensitive similarity ratio between two strings.
///
/// The score is `(len(longer) - distance) / len(longer)`, with lengths
/// counted in chars after lowercasing. Two strings that are equal after
/// lowercasing (including two empty strings) score `1.0`.
pub fn similarity(s1: &str, s2: &str) -> f64 {
    let a = s1.to_lowercase();
    let b = s2.to_lowercase();

    if a == b {
        return 1.0;
    }

    let a_len = a.chars().count();
    let b_len = b.chars().count();
    let (longer, shorter, longer_len) = if a_len >= b_len {
        (&a, &b, a_len)
    } else {
        (&b, &a, b_len)
    };

    if longer_len == 0 {
        return 1.0;
    }

    let distance = levenshtein(longer, shorter);
    longer_len.saturating_sub(distance) as f64 / longer_len as f64
}

/// Like [`similarity`], but a missing value on either side scores `0.0`
pub fn similarity_opt(s1: Option<&str>, s2: Option<&str>) -> f64 {
    compare(s1, s2).unwrap_or(0.0)
}

/// Score two JSON values.
///
/// Anything that is not a JSON string (null, numbers, bools, arrays,
/// objects) is not comparable and scores `0.0`.
pub fn similarity_value(v1: &Value, v2: &Value) -> f64 {
    similarity_opt(v1.as_str(), v2.as_str())
}

/// Strict variant that keeps "nothing to compare" apart from a real zero.
///
/// Returns `None` if either side is missing, otherwise `Some(score)`.
pub fn compare(s1: Option<&str>, s2: Option<&str>) -> Option<f64> {
    match (s1, s2) {
        (Some(a), Some(b)) => Some(similarity(a, b)),
        _ => None,
    }
}

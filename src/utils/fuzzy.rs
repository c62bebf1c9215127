//! Fuzzy matching over candidate lists
//!
//! Scores one query against many candidates (app names, device names, ...)
//! and ranks them. Each comparison is independent; callers that want to
//! fan out across threads can do so around these functions.

use crate::config::MatchConfig;
use crate::core::similarity;
use crate::error::{SimError, SimResult};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use tracing::debug;

/// Result of a fuzzy match with the matched value and score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FuzzyMatch {
    pub value: String,
    /// Position of the candidate in the input slice
    pub index: usize,
    pub score: f64,
}

/// Find matches in a list of candidates
///
/// Returns up to `n` matches with scores at or above `cutoff`, best first.
/// Candidates with equal scores keep their input order.
pub fn find_matches<S: AsRef<str>>(
    search_term: &str,
    candidates: &[S],
    n: usize,
    cutoff: f64,
) -> Vec<FuzzyMatch> {
    let mut matches: Vec<FuzzyMatch> = candidates
        .iter()
        .enumerate()
        .filter_map(|(index, candidate)| {
            let candidate = candidate.as_ref();
            let score = similarity(search_term, candidate);
            (score >= cutoff).then(|| FuzzyMatch {
                value: candidate.to_string(),
                index,
                score,
            })
        })
        .collect();

    // Stable sort, so ties stay in input order
    matches.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    matches.truncate(n);

    matches
}

/// Find the best match above a minimum score
///
/// Returns None if no match meets the cutoff
pub fn find_best_match<S: AsRef<str>>(
    search_term: &str,
    candidates: &[S],
    cutoff: f64,
) -> Option<FuzzyMatch> {
    find_matches(search_term, candidates, 1, cutoff)
        .into_iter()
        .next()
}

/// Pick the record whose key best matches `search_term`.
///
/// The first record wins when several share the top score.
pub fn best_by<'a, T, F>(
    search_term: &str,
    items: &'a [T],
    key: F,
    cutoff: f64,
) -> Option<(&'a T, f64)>
where
    F: Fn(&T) -> &str,
{
    let mut best: Option<(&'a T, f64)> = None;

    for item in items {
        let score = similarity(search_term, key(item));
        if score < cutoff {
            continue;
        }
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((item, score)),
        }
    }

    best
}

/// Configured matcher that enforces the input length bound
#[derive(Debug, Clone)]
pub struct Matcher {
    config: MatchConfig,
}

impl Matcher {
    /// Create a matcher, rejecting out-of-range settings
    pub fn new(config: MatchConfig) -> SimResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Rank candidates for `query` using the configured cutoff and limit.
    ///
    /// Fails if the query exceeds `max_input_chars`. Oversized candidates
    /// are skipped; reported indices still refer to `candidates`.
    pub fn matches<S: AsRef<str>>(
        &self,
        query: &str,
        candidates: &[S],
    ) -> SimResult<Vec<FuzzyMatch>> {
        let max = self.config.max_input_chars;
        let len = query.chars().count();
        if len > max {
            return Err(SimError::InputTooLong { len, max });
        }

        let (kept, skipped): (Vec<(usize, &str)>, Vec<(usize, &str)>) = candidates
            .iter()
            .map(|c| c.as_ref())
            .enumerate()
            .partition(|(_, c)| c.chars().count() <= max);

        for (index, _) in &skipped {
            debug!("Skipping candidate #{} longer than {} chars", index, max);
        }

        let values: Vec<&str> = kept.iter().map(|(_, c)| *c).collect();
        let mut matches = find_matches(query, &values, self.config.limit, self.config.cutoff);
        for m in &mut matches {
            m.index = kept[m.index].0;
        }

        debug!(
            "🔍 '{}': {} of {} candidates matched (cutoff {})",
            query,
            matches.len(),
            candidates.len(),
            self.config.cutoff
        );

        Ok(matches)
    }

    /// Best candidate for `query`, if any reaches the cutoff
    pub fn best<S: AsRef<str>>(
        &self,
        query: &str,
        candidates: &[S],
    ) -> SimResult<Option<FuzzyMatch>> {
        Ok(self.matches(query, candidates)?.into_iter().next())
    }
}

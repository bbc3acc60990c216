//! Tiered name matching: exact → substring → fuzzy nearest-neighbor.

use strsim::{jaro_winkler, normalized_levenshtein};

use crate::models::{CandidatePool, NameMatch};

/// Queries at or below this length never reach the fuzzy tier.
pub const SHORT_QUERY_LIMIT: usize = 3;

/// Similarity cutoff for identity-sensitive batch/clinical lookups, where a
/// false positive is costly.
pub const BATCH_FUZZY_CUTOFF: f64 = 0.6;

/// Looser cutoff for the reimbursement-table fallback.
pub const SCHEME_FUZZY_CUTOFF: f64 = 0.5;

/// Matcher for resolving one query string to a canonical catalog name.
///
/// Tiers run in strict priority order and short-circuit on the first hit.
/// Given the same query and pool, the same candidate is always selected;
/// ties break toward the first occurrence in the pool.
pub struct NameMatcher {
    fuzzy_cutoff: f64,
    substring_tier: bool,
}

impl NameMatcher {
    /// Matcher for clinical/batch lookups: all three tiers, tight cutoff.
    pub fn clinical() -> Self {
        Self {
            fuzzy_cutoff: BATCH_FUZZY_CUTOFF,
            substring_tier: true,
        }
    }

    /// Matcher for the reimbursement fallback: fuzzy only (the exact lookup
    /// already ran as a SQL query), looser cutoff, no substring tier.
    pub fn scheme_fallback() -> Self {
        Self {
            fuzzy_cutoff: SCHEME_FUZZY_CUTOFF,
            substring_tier: false,
        }
    }

    /// Resolve `query` against the pool.
    pub fn resolve(&self, query: &str, pool: &CandidatePool) -> NameMatch {
        let query = query.trim();
        if query.is_empty() {
            return NameMatch::NoMatch;
        }

        // Tier 1: case-insensitive exact match
        if let Some(name) = pool
            .names()
            .iter()
            .find(|name| name.eq_ignore_ascii_case(query))
        {
            return NameMatch::Exact(name.clone());
        }

        // Tier 2: case-insensitive substring match (candidate contains query)
        if self.substring_tier {
            let needle = query.to_lowercase();
            if let Some(name) = pool
                .names()
                .iter()
                .find(|name| name.to_lowercase().contains(&needle))
            {
                return NameMatch::Exact(name.clone());
            }
        }

        // Tier 3: fuzzy nearest-neighbor, guarded against spurious matches
        // on very short queries
        if query.chars().count() <= SHORT_QUERY_LIMIT {
            return NameMatch::NoMatch;
        }
        if !pool.is_complete() {
            tracing::warn!(
                pool_size = pool.len(),
                "candidate pool truncated; skipping fuzzy tier"
            );
            return NameMatch::NoMatch;
        }

        let needle = query.to_lowercase();
        let mut best: Option<(f64, &String)> = None;
        for name in pool.names() {
            let score = similarity(&needle, &name.to_lowercase());
            // Strict > keeps the first occurrence on ties
            if best.map_or(true, |(top, _)| score > top) {
                best = Some((score, name));
            }
        }

        match best {
            Some((score, name)) if score >= self.fuzzy_cutoff => {
                tracing::debug!(query, matched = %name, score, "fuzzy name correction");
                NameMatch::Fuzzy {
                    name: name.clone(),
                    query: query.to_string(),
                }
            }
            _ => NameMatch::NoMatch,
        }
    }
}

/// Compute fuzzy string similarity using combined metrics.
fn similarity(a: &str, b: &str) -> f64 {
    // Jaro-Winkler favors shared prefixes (common in misspelled drug
    // names); Levenshtein tracks overall edit distance
    let jw = jaro_winkler(a, b);
    let lev = normalized_levenshtein(a, b);

    jw * 0.6 + lev * 0.4
}

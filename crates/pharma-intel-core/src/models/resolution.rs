//! Name resolution models.

use serde::{Deserialize, Serialize};

use super::Medicine;

/// Outcome of matching one query string against the candidate pool.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum NameMatch {
    /// Grounded hit from the exact or substring tier.
    Exact(String),
    /// Nearest-neighbor hit; callers disclose the correction.
    Fuzzy {
        /// Matched canonical name
        name: String,
        /// The query as the user spelled it
        query: String,
    },
    /// No tier produced a candidate above its cutoff.
    NoMatch,
}

impl NameMatch {
    /// The matched canonical name, if any.
    pub fn matched_name(&self) -> Option<&str> {
        match self {
            Self::Exact(name) | Self::Fuzzy { name, .. } => Some(name),
            Self::NoMatch => None,
        }
    }

    pub fn is_no_match(&self) -> bool {
        matches!(self, Self::NoMatch)
    }
}

/// Bounded snapshot of candidate names for one resolution request.
///
/// Names keep store insertion order with exact-string duplicates removed, so
/// ties always break toward the first occurrence. When the source table is
/// larger than the cap the pool is marked incomplete and the fuzzy tier must
/// not scan it.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidatePool {
    names: Vec<String>,
    complete: bool,
}

impl CandidatePool {
    /// Build a pool from raw rows in store order, capped at `cap` names.
    ///
    /// `raw` is expected to carry at most `cap + 1` rows; any row beyond the
    /// cap marks the pool incomplete.
    pub fn collect(mut raw: Vec<String>, cap: usize) -> Self {
        let complete = raw.len() <= cap;
        raw.truncate(cap);

        let mut seen = std::collections::HashSet::with_capacity(raw.len());
        let names = raw.into_iter().filter(|n| seen.insert(n.clone())).collect();

        Self { names, complete }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Per-term outcome within a batch resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum ItemOutcome {
    /// Grounded match with its full monograph.
    Found(Medicine),
    /// Fuzzy-corrected match; rendering discloses the original spelling.
    Corrected(Medicine),
    /// The term matched nothing; rendered as a neutral not-found line.
    NotFound,
    /// Store failure scoped to this term only.
    Failed(String),
}

/// One term's report within a batch, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemReport {
    /// The trimmed input term as the user wrote it
    pub term: String,
    pub outcome: ItemOutcome,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matched_name() {
        assert_eq!(
            NameMatch::Exact("Cetirizine".into()).matched_name(),
            Some("Cetirizine")
        );
        let fuzzy = NameMatch::Fuzzy {
            name: "Cetirizine".into(),
            query: "Citrizine".into(),
        };
        assert_eq!(fuzzy.matched_name(), Some("Cetirizine"));
        assert_eq!(NameMatch::NoMatch.matched_name(), None);
        assert!(NameMatch::NoMatch.is_no_match());
    }

    #[test]
    fn test_pool_dedupes_preserving_first_occurrence() {
        let pool = CandidatePool::collect(
            vec![
                "Paracetamol".into(),
                "Ibuprofen".into(),
                "Paracetamol".into(),
                "Cetirizine".into(),
            ],
            10,
        );
        assert!(pool.is_complete());
        assert_eq!(pool.names(), ["Paracetamol", "Ibuprofen", "Cetirizine"]);
    }

    #[test]
    fn test_pool_cap_marks_incomplete() {
        let rows: Vec<String> = (0..5).map(|i| format!("Drug{i}")).collect();
        let pool = CandidatePool::collect(rows.clone(), 4);
        assert!(!pool.is_complete());
        assert_eq!(pool.len(), 4);

        let pool = CandidatePool::collect(rows, 5);
        assert!(pool.is_complete());
        assert_eq!(pool.len(), 5);
    }

    #[test]
    fn test_empty_pool() {
        let pool = CandidatePool::collect(Vec::new(), 10);
        assert!(pool.is_empty());
        assert!(pool.is_complete());
    }
}

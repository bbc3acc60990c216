//! Drug identity resolution.
//!
//! Pipeline: Batch split → Name Matcher (per term) → monograph fetch

mod batch;
mod matcher;

pub use batch::*;
pub use matcher::*;

use thiserror::Error;

use crate::db::Database;
use crate::models::{CandidatePool, ItemOutcome, NameMatch};

/// Resolver errors.
#[derive(Error, Debug)]
pub enum ResolverError {
    #[error("Database error: {0}")]
    Database(#[from] crate::db::DbError),

    #[error("Matched name no longer present in catalog: {0}")]
    MissingRecord(String),
}

pub type ResolverResult<T> = Result<T, ResolverError>;

/// Resolves query terms against the clinical catalog.
pub struct Resolver<'a> {
    db: &'a Database,
    matcher: NameMatcher,
}

impl<'a> Resolver<'a> {
    /// Create a resolver using the identity-sensitive batch matcher.
    pub fn new(db: &'a Database) -> Self {
        Self {
            db,
            matcher: NameMatcher::clinical(),
        }
    }

    /// Resolve a single trimmed term against the candidate pool and fetch
    /// its monograph.
    pub fn resolve_term(&self, term: &str, pool: &CandidatePool) -> ResolverResult<ItemOutcome> {
        match self.matcher.resolve(term, pool) {
            NameMatch::Exact(name) => {
                let medicine = self
                    .db
                    .find_medicine(&name)?
                    .ok_or(ResolverError::MissingRecord(name))?;
                Ok(ItemOutcome::Found(medicine))
            }
            NameMatch::Fuzzy { name, .. } => {
                let medicine = self
                    .db
                    .find_medicine(&name)?
                    .ok_or(ResolverError::MissingRecord(name))?;
                Ok(ItemOutcome::Corrected(medicine))
            }
            NameMatch::NoMatch => Ok(ItemOutcome::NotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Medicine;

    fn setup_db() -> Database {
        let db = Database::open_in_memory().unwrap();
        for name in ["Cetirizine", "Paracetamol", "Ibuprofen"] {
            let mut med = Medicine::new(name.into());
            med.uses = Some("test indication".into());
            db.insert_medicine(&med).unwrap();
        }
        db
    }

    #[test]
    fn test_resolve_exact_term() {
        let db = setup_db();
        let resolver = Resolver::new(&db);
        let pool = db.medicine_name_pool().unwrap();

        let outcome = resolver.resolve_term("Cetirizine", &pool).unwrap();
        match outcome {
            ItemOutcome::Found(med) => assert_eq!(med.drug_name, "Cetirizine"),
            other => panic!("expected Found, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_misspelled_term() {
        let db = setup_db();
        let resolver = Resolver::new(&db);
        let pool = db.medicine_name_pool().unwrap();

        let outcome = resolver.resolve_term("Citrizine", &pool).unwrap();
        match outcome {
            ItemOutcome::Corrected(med) => assert_eq!(med.drug_name, "Cetirizine"),
            other => panic!("expected Corrected, got {other:?}"),
        }
    }

    #[test]
    fn test_resolve_unknown_term() {
        let db = setup_db();
        let resolver = Resolver::new(&db);
        let pool = db.medicine_name_pool().unwrap();

        let outcome = resolver.resolve_term("Xyzzyx", &pool).unwrap();
        assert_eq!(outcome, ItemOutcome::NotFound);
    }
}

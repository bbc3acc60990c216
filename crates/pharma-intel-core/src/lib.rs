//! Pharma-Intel Core Library
//!
//! Drug identity resolution and cross-table aggregation for pharmaceutical
//! question answering.
//!
//! # Architecture
//!
//! ```text
//! "Paracetamol, Citrizine, NotADrug"
//!         │
//!         ▼
//!   Batch Resolver ──► Name Matcher (per term) ──► Catalog Store
//!         │                exact → substring → fuzzy
//!         ▼
//!   resolved canonical names
//!         │
//!    ┌────┴─────────────────┐
//!    ▼                      ▼
//! Clinical Formatter   Commercial Aggregator
//! (monograph block)    (GOVT/PRIVATE buckets, co-pay %)
//! ```
//!
//! # Core Principle
//!
//! Lookups never fail loudly. Every code path returns text (possibly a
//! scoped error line) or an explicit empty marker, and one bad term in a
//! batch never suppresses its siblings.
//!
//! # Modules
//!
//! - [`db`]: SQLite store with case-insensitive name lookups
//! - [`models`]: Domain types (Medicine, ReimbursementScheme, NameMatch, ...)
//! - [`resolver`]: Tiered name matcher and batch resolver
//! - [`report`]: Clinical and reimbursement text rendering

pub mod db;
pub mod models;
pub mod report;
pub mod resolver;

// Re-export commonly used types
pub use db::Database;
pub use models::{
    CandidatePool, HabitForming, ItemOutcome, ItemReport, Medicine, NameMatch,
    ReimbursementScheme, SchemeType,
};
pub use report::{SchemeAggregator, SchemeReport};
pub use resolver::{NameMatcher, Resolver};

use std::path::Path;
use std::sync::{Arc, Mutex};

// =========================================================================
// Crate Error Type
// =========================================================================

#[derive(Debug, thiserror::Error)]
pub enum PharmaIntelError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<db::DbError> for PharmaIntelError {
    fn from(e: db::DbError) -> Self {
        PharmaIntelError::Database(e.to_string())
    }
}

impl<T> From<std::sync::PoisonError<T>> for PharmaIntelError {
    fn from(e: std::sync::PoisonError<T>) -> Self {
        PharmaIntelError::Database(format!("Lock poisoned: {}", e))
    }
}

// =========================================================================
// Factory Functions
// =========================================================================

/// Open or create a database at the given path.
pub fn open_database<P: AsRef<Path>>(path: P) -> Result<PharmaCore, PharmaIntelError> {
    let db = Database::open(path)?;
    Ok(PharmaCore {
        db: Arc::new(Mutex::new(db)),
    })
}

/// Create an in-memory database (for testing).
pub fn open_database_in_memory() -> Result<PharmaCore, PharmaIntelError> {
    let db = Database::open_in_memory()?;
    Ok(PharmaCore {
        db: Arc::new(Mutex::new(db)),
    })
}

// =========================================================================
// Main API Object
// =========================================================================

/// Thread-safe handle consumed by the orchestration layer.
///
/// Each lookup is a stateless, independent unit of work; the handle holds no
/// per-request state and the resolution paths never write to the store.
#[derive(Clone)]
pub struct PharmaCore {
    db: Arc<Mutex<Database>>,
}

impl PharmaCore {
    // =========================================================================
    // Lookup Operations (read-only, infallible)
    // =========================================================================

    /// Resolve a drug name or comma-separated list and render the clinical
    /// monograph for each term.
    ///
    /// Always returns text: matched terms render full monographs, fuzzy
    /// matches disclose the corrected spelling, unmatched terms render a
    /// neutral not-found line, and store failures render as error lines
    /// scoped to the term they hit.
    pub fn clinical_lookup(&self, query: &str) -> String {
        let db = match self.db.lock() {
            Ok(db) => db,
            Err(e) => return format!("Error retrieving drug details: lock poisoned: {}", e),
        };
        let reports = Resolver::new(&db).resolve_many(query);
        report::render_batch(&reports)
    }

    /// Compare reimbursement schemes for a drug.
    ///
    /// Returns the rendered report, or the empty string when no schemes
    /// exist (callers omit the section entirely rather than stating
    /// absence). Store failures render as a single error line.
    pub fn commercial_lookup(&self, drug_name: &str) -> String {
        let db = match self.db.lock() {
            Ok(db) => db,
            Err(e) => return format!("Error comparing schemes: lock poisoned: {}", e),
        };
        match SchemeAggregator::new(&db).aggregate(drug_name) {
            Ok(Some(report)) => report.render(),
            Ok(None) => String::new(),
            Err(e) => format!("Error comparing schemes: {}", e),
        }
    }

    // =========================================================================
    // Write Surface (ingestion collaborator)
    // =========================================================================

    /// Append a clinical monograph row.
    pub fn add_medicine(&self, medicine: Medicine) -> Result<(), PharmaIntelError> {
        if medicine.drug_name.trim().is_empty() {
            return Err(PharmaIntelError::InvalidInput(
                "medicine drug_name must not be blank".into(),
            ));
        }
        let db = self.db.lock()?;
        db.insert_medicine(&medicine)?;
        Ok(())
    }

    /// Append a reimbursement scheme row.
    pub fn add_scheme(&self, scheme: ReimbursementScheme) -> Result<(), PharmaIntelError> {
        if scheme.drug_name.trim().is_empty() {
            return Err(PharmaIntelError::InvalidInput(
                "scheme drug_name must not be blank".into(),
            ));
        }
        if scheme.plan_name.trim().is_empty() {
            return Err(PharmaIntelError::InvalidInput(
                "scheme plan_name must not be blank".into(),
            ));
        }
        let db = self.db.lock()?;
        db.insert_scheme(&scheme)?;
        Ok(())
    }
}

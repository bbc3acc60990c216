//! Batch resolution of compound, comma-separated inputs.

use crate::models::{ItemOutcome, ItemReport};

use super::Resolver;

impl<'a> Resolver<'a> {
    /// Resolve a compound input into independent per-term reports.
    ///
    /// Splits on commas, trims each segment, and skips empty segments
    /// without emitting a report. Terms are independent: a store failure on
    /// one term is contained as its own `Failed` outcome and never
    /// suppresses sibling terms. Reports come back in input order.
    pub fn resolve_many(&self, input: &str) -> Vec<ItemReport> {
        let terms: Vec<&str> = input
            .split(',')
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .collect();
        if terms.is_empty() {
            return Vec::new();
        }

        tracing::debug!(term_count = terms.len(), "resolving batch");

        // One snapshot shared by every term in the batch. If the snapshot
        // itself cannot load, every term reports that failure.
        let pool = match self.db.medicine_name_pool() {
            Ok(pool) => pool,
            Err(e) => {
                let message = e.to_string();
                return terms
                    .into_iter()
                    .map(|term| ItemReport {
                        term: term.to_string(),
                        outcome: ItemOutcome::Failed(message.clone()),
                    })
                    .collect();
            }
        };

        terms
            .into_iter()
            .map(|term| {
                let outcome = self
                    .resolve_term(term, &pool)
                    .unwrap_or_else(|e| ItemOutcome::Failed(e.to_string()));
                ItemReport {
                    term: term.to_string(),
                    outcome,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
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
    fn test_batch_reports_in_input_order() {
        let db = setup_db();
        let resolver = Resolver::new(&db);

        let reports = resolver.resolve_many("Paracetamol, NotARealDrug123, Ibuprofen");
        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].term, "Paracetamol");
        assert!(matches!(reports[0].outcome, ItemOutcome::Found(_)));
        assert_eq!(reports[1].term, "NotARealDrug123");
        assert_eq!(reports[1].outcome, ItemOutcome::NotFound);
        assert_eq!(reports[2].term, "Ibuprofen");
        assert!(matches!(reports[2].outcome, ItemOutcome::Found(_)));
    }

    #[test]
    fn test_empty_segments_are_skipped() {
        let db = setup_db();
        let resolver = Resolver::new(&db);

        let reports = resolver.resolve_many("Paracetamol,, ,Ibuprofen,");
        let terms: Vec<&str> = reports.iter().map(|r| r.term.as_str()).collect();
        assert_eq!(terms, ["Paracetamol", "Ibuprofen"]);
    }

    #[test]
    fn test_blank_input_yields_no_reports() {
        let db = setup_db();
        let resolver = Resolver::new(&db);

        assert!(resolver.resolve_many("").is_empty());
        assert!(resolver.resolve_many("  , ,, ").is_empty());
    }

    #[test]
    fn test_single_term_with_typo() {
        let db = setup_db();
        let resolver = Resolver::new(&db);

        let reports = resolver.resolve_many("Citrizine");
        assert_eq!(reports.len(), 1);
        match &reports[0].outcome {
            ItemOutcome::Corrected(med) => assert_eq!(med.drug_name, "Cetirizine"),
            other => panic!("expected Corrected, got {other:?}"),
        }
    }
}

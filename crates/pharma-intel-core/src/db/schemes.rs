//! Reimbursement scheme queries.

use rusqlite::params;

use super::{Database, DbError, DbResult, NAME_POOL_LIMIT};
use crate::models::{CandidatePool, ReimbursementScheme, SchemeType};

impl Database {
    /// Append a scheme row.
    pub fn insert_scheme(&self, scheme: &ReimbursementScheme) -> DbResult<()> {
        self.conn.execute(
            r#"
            INSERT INTO reimbursement_schemes (
                drug_name, scheme_type, plan_name,
                coverage_percent, copay_amount, prior_authorization
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            "#,
            params![
                scheme.drug_name,
                scheme.scheme_type.as_str(),
                scheme.plan_name,
                scheme.coverage_percent,
                scheme.copay_amount,
                scheme.prior_authorization,
            ],
        )?;
        Ok(())
    }

    /// All scheme rows for a drug, case-insensitive, in insertion order.
    pub fn schemes_for_drug(&self, drug_name: &str) -> DbResult<Vec<ReimbursementScheme>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT drug_name, scheme_type, plan_name,
                   coverage_percent, copay_amount, prior_authorization
            FROM reimbursement_schemes
            WHERE drug_name = ?1 COLLATE NOCASE
            ORDER BY id
            "#,
        )?;

        let rows = stmt.query_map([drug_name], |row| {
            Ok(SchemeRow {
                drug_name: row.get(0)?,
                scheme_type: row.get(1)?,
                plan_name: row.get(2)?,
                coverage_percent: row.get(3)?,
                copay_amount: row.get(4)?,
                prior_authorization: row.get(5)?,
            })
        })?;

        let mut schemes = Vec::new();
        for row in rows {
            schemes.push(row?.try_into()?);
        }
        Ok(schemes)
    }

    /// Materialize the scheme-table candidate-name snapshot, size-boxed by
    /// [`NAME_POOL_LIMIT`]. Duplicates collapse to their first occurrence.
    pub fn scheme_name_pool(&self) -> DbResult<CandidatePool> {
        let mut stmt = self
            .conn
            .prepare("SELECT drug_name FROM reimbursement_schemes ORDER BY id LIMIT ?1")?;
        let rows = stmt.query_map([(NAME_POOL_LIMIT + 1) as i64], |row| row.get(0))?;

        let mut names = Vec::new();
        for row in rows {
            names.push(row?);
        }
        Ok(CandidatePool::collect(names, NAME_POOL_LIMIT))
    }
}

/// Intermediate row struct for database mapping.
struct SchemeRow {
    drug_name: String,
    scheme_type: String,
    plan_name: String,
    coverage_percent: f64,
    copay_amount: f64,
    prior_authorization: bool,
}

impl TryFrom<SchemeRow> for ReimbursementScheme {
    type Error = DbError;

    fn try_from(row: SchemeRow) -> Result<Self, Self::Error> {
        let scheme_type = SchemeType::parse_label(&row.scheme_type)
            .ok_or_else(|| DbError::Constraint(format!("unknown scheme type: {}", row.scheme_type)))?;

        Ok(ReimbursementScheme {
            drug_name: row.drug_name,
            scheme_type,
            plan_name: row.plan_name,
            coverage_percent: row.coverage_percent,
            copay_amount: row.copay_amount,
            prior_authorization: row.prior_authorization,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_db() -> Database {
        Database::open_in_memory().unwrap()
    }

    fn scheme(drug: &str, scheme_type: SchemeType, plan: &str, coverage: f64) -> ReimbursementScheme {
        let mut s = ReimbursementScheme::new(drug.into(), scheme_type, plan.into());
        s.coverage_percent = coverage;
        s
    }

    #[test]
    fn test_insert_and_fetch() {
        let db = setup_db();
        db.insert_scheme(&scheme("Cetirizine", SchemeType::Government, "PM-JAY", 100.0))
            .unwrap();
        db.insert_scheme(&scheme("Cetirizine", SchemeType::Private, "Star Health", 80.0))
            .unwrap();

        let schemes = db.schemes_for_drug("Cetirizine").unwrap();
        assert_eq!(schemes.len(), 2);
        assert_eq!(schemes[0].plan_name, "PM-JAY");
        assert_eq!(schemes[0].scheme_type, SchemeType::Government);
        assert_eq!(schemes[1].plan_name, "Star Health");
        assert_eq!(schemes[1].coverage_percent, 80.0);
    }

    #[test]
    fn test_fetch_is_case_insensitive() {
        let db = setup_db();
        db.insert_scheme(&scheme("Cetirizine", SchemeType::Government, "PM-JAY", 100.0))
            .unwrap();

        assert_eq!(db.schemes_for_drug("cetirizine").unwrap().len(), 1);
        assert_eq!(db.schemes_for_drug("CETIRIZINE").unwrap().len(), 1);
        assert!(db.schemes_for_drug("Metformin").unwrap().is_empty());
    }

    #[test]
    fn test_fetch_preserves_insertion_order() {
        let db = setup_db();
        for plan in ["Plan A", "Plan B", "Plan C"] {
            db.insert_scheme(&scheme("Metformin", SchemeType::Private, plan, 70.0))
                .unwrap();
        }

        let plans: Vec<String> = db
            .schemes_for_drug("Metformin")
            .unwrap()
            .into_iter()
            .map(|s| s.plan_name)
            .collect();
        assert_eq!(plans, ["Plan A", "Plan B", "Plan C"]);
    }

    #[test]
    fn test_scheme_name_pool_distinct() {
        let db = setup_db();
        db.insert_scheme(&scheme("Cetirizine", SchemeType::Government, "PM-JAY", 100.0))
            .unwrap();
        db.insert_scheme(&scheme("Cetirizine", SchemeType::Private, "Star Health", 80.0))
            .unwrap();
        db.insert_scheme(&scheme("Metformin", SchemeType::Private, "Care Plus", 75.0))
            .unwrap();

        let pool = db.scheme_name_pool().unwrap();
        assert_eq!(pool.names(), ["Cetirizine", "Metformin"]);
    }

    #[test]
    fn test_prior_authorization_round_trip() {
        let db = setup_db();
        let mut s = scheme("Insulin Glargine", SchemeType::Private, "Apex Care", 90.0);
        s.prior_authorization = true;
        db.insert_scheme(&s).unwrap();

        let fetched = db.schemes_for_drug("Insulin Glargine").unwrap();
        assert!(fetched[0].prior_authorization);
    }
}

//! Reimbursement aggregation and rendering.

use crate::db::{Database, DbResult};
use crate::models::{NameMatch, ReimbursementScheme, SchemeType};
use crate::resolver::NameMatcher;

const DISCLAIMER: &str = "\n*Please note that reimbursement schemes and co-pays may vary depending on the specific policy, provider, and location. It is essential to verify the information with the relevant insurance company or healthcare provider for accurate details.*";

/// Scheme rows for one drug, partitioned by category and ready to render.
///
/// Buckets preserve store insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct SchemeReport {
    /// Display name; the corrected spelling when the fuzzy fallback fired
    pub drug_name: String,
    /// Display category resolved from the monograph table
    pub category: String,
    pub government: Vec<ReimbursementScheme>,
    pub private: Vec<ReimbursementScheme>,
}

impl SchemeReport {
    /// Render the grouped report. Empty buckets omit their subsection
    /// entirely.
    pub fn render(&self) -> String {
        let mut lines = vec![format!("### Reimbursement Schemes for {}:", self.drug_name)];

        if !self.government.is_empty() {
            lines.push("\n**Government Schemes:**".to_string());
            for scheme in &self.government {
                lines.push(format!("- {}", self.scheme_line(scheme)));
            }
        }

        if !self.private.is_empty() {
            lines.push("\n**Private Insurance Companies:**".to_string());
            for scheme in &self.private {
                lines.push(format!("- {}", self.scheme_line(scheme)));
            }
        }

        lines.push(DISCLAIMER.to_string());
        lines.join("\n")
    }

    /// One scheme as a single sentence. Government rows carry no financial
    /// detail; private rows append the derived co-pay percentage.
    fn scheme_line(&self, scheme: &ReimbursementScheme) -> String {
        match scheme.scheme_type {
            SchemeType::Government => format!(
                "**{}**: Reimburses {} under the \"{}\" category.",
                scheme.plan_name, self.drug_name, self.category
            ),
            SchemeType::Private => format!(
                "**{}**: Covers {} under the \"{}\" category with a co-pay of {}%.",
                scheme.plan_name,
                self.drug_name,
                self.category,
                scheme.copay_percent()
            ),
        }
    }
}

/// Aggregates reimbursement rows for a resolved drug name.
pub struct SchemeAggregator<'a> {
    db: &'a Database,
}

impl<'a> SchemeAggregator<'a> {
    /// Create a new aggregator.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Fetch, partition, and categorize schemes for `drug_name`.
    ///
    /// Returns `Ok(None)` when no rows exist even after the fuzzy fallback;
    /// callers render nothing rather than claiming absence of data.
    pub fn aggregate(&self, drug_name: &str) -> DbResult<Option<SchemeReport>> {
        let drug_name = drug_name.trim();
        let mut display_name = drug_name.to_string();
        let mut schemes = self.db.schemes_for_drug(drug_name)?;

        if schemes.is_empty() {
            let pool = self.db.scheme_name_pool()?;
            if let NameMatch::Exact(name) | NameMatch::Fuzzy { name, .. } =
                NameMatcher::scheme_fallback().resolve(drug_name, &pool)
            {
                tracing::debug!(query = drug_name, corrected = %name, "reimbursement fuzzy fallback");
                schemes = self.db.schemes_for_drug(&name)?;
                display_name = name;
            }
        }

        if schemes.is_empty() {
            return Ok(None);
        }

        let category = match self.db.find_medicine(&display_name)? {
            Some(medicine) => medicine.display_category().to_string(),
            None => "General Medicine".to_string(),
        };

        let (government, private): (Vec<_>, Vec<_>) = schemes
            .into_iter()
            .partition(|s| s.scheme_type == SchemeType::Government);

        Ok(Some(SchemeReport {
            drug_name: display_name,
            category,
            government,
            private,
        }))
    }
}

//! Reimbursement scheme models.

use serde::{Deserialize, Serialize};

/// Scheme category, stored as "GOVT" / "PRIVATE".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum SchemeType {
    #[serde(rename = "GOVT")]
    Government,
    #[serde(rename = "PRIVATE")]
    Private,
}

impl SchemeType {
    /// Storage label.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Government => "GOVT",
            Self::Private => "PRIVATE",
        }
    }

    /// Parse a storage label. Unknown labels are a malformed row.
    pub fn parse_label(label: &str) -> Option<Self> {
        match label {
            "GOVT" => Some(Self::Government),
            "PRIVATE" => Some(Self::Private),
            _ => None,
        }
    }
}

/// A single reimbursement/coverage record tied to a drug name.
///
/// `drug_name` is a soft reference to `Medicine::drug_name`; nothing enforces
/// it, and many rows may reference the same drug.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReimbursementScheme {
    /// Drug this scheme applies to
    pub drug_name: String,
    /// Government or private scheme
    pub scheme_type: SchemeType,
    /// Plan/insurer name
    pub plan_name: String,
    /// Covered share, expressed 0-100
    pub coverage_percent: f64,
    /// Flat co-pay amount; never rendered (the derived percentage supersedes it)
    pub copay_amount: f64,
    /// Whether prior authorization is required
    pub prior_authorization: bool,
}

impl ReimbursementScheme {
    /// Create a scheme row with the required fields.
    pub fn new(drug_name: String, scheme_type: SchemeType, plan_name: String) -> Self {
        Self {
            drug_name,
            scheme_type,
            plan_name,
            coverage_percent: 0.0,
            copay_amount: 0.0,
            prior_authorization: false,
        }
    }

    /// Patient's out-of-pocket share, derived as `100 - coverage_percent`
    /// with the coverage truncated to an integer.
    pub fn copay_percent(&self) -> i64 {
        100 - self.coverage_percent as i64
    }
}

//! SQLite schema definition.

/// Complete database schema for pharma-intel.
pub const SCHEMA: &str = r#"
-- ============================================================================
-- Clinical Monographs
-- ============================================================================

-- drug_name is the join key for every other table. It is NOT unique:
-- duplicate rows are tolerated and lookups order by id so the first
-- inserted row wins.
CREATE TABLE IF NOT EXISTS medicines (
    id INTEGER PRIMARY KEY,
    drug_name TEXT NOT NULL,
    substitutes TEXT,
    side_effects TEXT,
    uses TEXT,
    chemical_class TEXT,
    habit_forming TEXT,
    therapeutic_class TEXT,
    action_class TEXT,
    dosage TEXT,
    contraindications TEXT,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_medicines_name
    ON medicines(drug_name COLLATE NOCASE);

-- ============================================================================
-- Reimbursement Schemes
-- ============================================================================

-- drug_name is a soft reference to medicines.drug_name; unreferenced rows
-- are allowed.
CREATE TABLE IF NOT EXISTS reimbursement_schemes (
    id INTEGER PRIMARY KEY,
    drug_name TEXT NOT NULL,
    scheme_type TEXT NOT NULL CHECK (scheme_type IN ('GOVT', 'PRIVATE')),
    plan_name TEXT NOT NULL,
    coverage_percent REAL NOT NULL DEFAULT 0,
    copay_amount REAL NOT NULL DEFAULT 0,
    prior_authorization INTEGER NOT NULL DEFAULT 0,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_schemes_name
    ON reimbursement_schemes(drug_name COLLATE NOCASE);
"#;

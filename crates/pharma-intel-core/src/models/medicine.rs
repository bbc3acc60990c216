//! Clinical monograph models.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::non_blank;

/// A single clinical monograph row.
///
/// `drug_name` is the natural join key for every other record in the store.
/// Comparison is always case-insensitive, and uniqueness is NOT guaranteed:
/// the catalog may hold duplicate names, and lookups resolve to the first
/// row in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Medicine {
    /// Canonical drug name
    pub drug_name: String,
    /// Known substitutes, opaque free text
    pub substitutes: Option<String>,
    /// Side effects, opaque free text
    pub side_effects: Option<String>,
    /// Indications, opaque free text
    pub uses: Option<String>,
    /// Chemical class (e.g., "Biguanide")
    pub chemical_class: Option<String>,
    /// Whether the drug is habit forming
    pub habit_forming: HabitForming,
    /// Therapeutic class (e.g., "Antihistamines")
    pub therapeutic_class: Option<String>,
    /// Mechanism-of-action class (e.g., "H1 receptor antagonist")
    pub action_class: Option<String>,
    /// Dosage guidance, may be a placeholder
    pub dosage: Option<String>,
    /// Contraindications, may be a placeholder
    pub contraindications: Option<String>,
}

impl Medicine {
    /// Create a monograph with only the required name field.
    pub fn new(drug_name: String) -> Self {
        Self {
            drug_name,
            substitutes: None,
            side_effects: None,
            uses: None,
            chemical_class: None,
            habit_forming: HabitForming::Unknown,
            therapeutic_class: None,
            action_class: None,
            dosage: None,
            contraindications: None,
        }
    }

    /// Display category for reimbursement reports.
    ///
    /// Prefers the therapeutic class, falls back to the chemical class, then
    /// to "General Medicine". Blank fields count as missing.
    pub fn display_category(&self) -> &str {
        non_blank(self.therapeutic_class.as_deref())
            .or_else(|| non_blank(self.chemical_class.as_deref()))
            .unwrap_or("General Medicine")
    }
}

/// Tri-state habit-forming flag.
///
/// Source data stores this as free text; anything that is not a recognizable
/// yes/no parses as `Unknown`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum HabitForming {
    Yes,
    No,
    #[default]
    Unknown,
}

impl HabitForming {
    /// Parse a stored label leniently.
    pub fn from_label(label: Option<&str>) -> Self {
        match non_blank(label) {
            Some(s) if s.eq_ignore_ascii_case("yes") => Self::Yes,
            Some(s) if s.eq_ignore_ascii_case("no") => Self::No,
            _ => Self::Unknown,
        }
    }

    /// Canonical label for storage and display.
    pub fn as_label(self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for HabitForming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_category_prefers_therapeutic_class() {
        let mut med = Medicine::new("Cetirizine".into());
        med.therapeutic_class = Some("Antihistamines".into());
        med.chemical_class = Some("Piperazine derivative".into());
        assert_eq!(med.display_category(), "Antihistamines");
    }

    #[test]
    fn test_display_category_falls_back_to_chemical_class() {
        let mut med = Medicine::new("Metformin".into());
        med.chemical_class = Some("Biguanide".into());
        assert_eq!(med.display_category(), "Biguanide");

        // Blank therapeutic class is treated as missing
        med.therapeutic_class = Some("   ".into());
        assert_eq!(med.display_category(), "Biguanide");
    }

    #[test]
    fn test_display_category_default() {
        let med = Medicine::new("Obscurol".into());
        assert_eq!(med.display_category(), "General Medicine");
    }

    #[test]
    fn test_habit_forming_lenient_parse() {
        assert_eq!(HabitForming::from_label(Some("Yes")), HabitForming::Yes);
        assert_eq!(HabitForming::from_label(Some("YES")), HabitForming::Yes);
        assert_eq!(HabitForming::from_label(Some("no")), HabitForming::No);
        assert_eq!(HabitForming::from_label(Some("")), HabitForming::Unknown);
        assert_eq!(HabitForming::from_label(Some("maybe")), HabitForming::Unknown);
        assert_eq!(HabitForming::from_label(None), HabitForming::Unknown);
    }
}

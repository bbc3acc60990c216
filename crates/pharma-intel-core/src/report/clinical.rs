//! Clinical monograph rendering.
//!
//! Pure formatting: a fixed ordered block per drug, with literal fallbacks
//! for missing fields. No control flow beyond null-coalescing.

use crate::models::{non_blank, ItemOutcome, ItemReport, Medicine};

/// Side-effects text longer than this is clipped with an ellipsis marker.
pub const SIDE_EFFECTS_DISPLAY_LIMIT: usize = 200;

/// Render one monograph as its fixed labeled block.
pub fn render_medicine(medicine: &Medicine) -> String {
    let side_effects = non_blank(medicine.side_effects.as_deref())
        .map(|s| clip(s, SIDE_EFFECTS_DISPLAY_LIMIT));

    let lines = [
        format!("### Clinical Info: {}", medicine.drug_name),
        format!(
            "- **Therapeutic Class**: {}",
            field_or(medicine.therapeutic_class.as_deref(), "N/A")
        ),
        format!(
            "- **Chemical Class**: {}",
            field_or(medicine.chemical_class.as_deref(), "N/A")
        ),
        format!(
            "- **Mechanism of Action**: {}",
            field_or(medicine.action_class.as_deref(), "N/A")
        ),
        format!("- **Uses**: {}", field_or(medicine.uses.as_deref(), "N/A")),
        format!("- **Side Effects**: {}", side_effects.as_deref().unwrap_or("N/A")),
        format!(
            "- **Dosage**: {}",
            field_or(medicine.dosage.as_deref(), "Consult Physician")
        ),
        format!(
            "- **Contraindications**: {}",
            field_or(medicine.contraindications.as_deref(), "N/A")
        ),
        format!("- **Habit Forming**: {}", medicine.habit_forming),
        format!(
            "- **Substitutes**: {}",
            field_or(medicine.substitutes.as_deref(), "None listed")
        ),
    ];

    lines.join("\n")
}

/// Render one per-term report segment.
pub fn render_item(report: &ItemReport) -> String {
    match &report.outcome {
        ItemOutcome::Found(medicine) => render_medicine(medicine),
        ItemOutcome::Corrected(medicine) => format!(
            "Showing results for {} (closest match to \"{}\"):\n{}",
            medicine.drug_name,
            report.term,
            render_medicine(medicine)
        ),
        ItemOutcome::NotFound => format!("No details found for {}.", report.term),
        ItemOutcome::Failed(message) => {
            format!("Error retrieving details for {}: {}", report.term, message)
        }
    }
}

/// Concatenate per-term segments in input order, blank-line separated.
pub fn render_batch(reports: &[ItemReport]) -> String {
    reports
        .iter()
        .map(render_item)
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn field_or<'a>(value: Option<&'a str>, fallback: &'a str) -> &'a str {
    non_blank(value).unwrap_or(fallback)
}

/// Clip on a char boundary, appending the marker only when over the limit.
fn clip(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        text.to_string()
    } else {
        let clipped: String = text.chars().take(limit).collect();
        format!("{clipped}...")
    }
}

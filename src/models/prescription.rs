use serde::{Deserialize, Serialize};

use super::enums::ActionKind;

/// Structured record extracted from a free-text prescription note.
///
/// Every `Option` field degrades independently to `None` when the input
/// carries no recognizable span for it; `raw_text` keeps the trimmed
/// original utterance verbatim for audit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedPrescription {
    pub medication_name: Option<String>,
    pub concentration: Option<String>,
    pub dosage: Option<String>,
    pub duration: Option<String>,
    pub quantity: Option<String>,
    pub action: ActionKind,
    pub note: Option<String>,
    pub raw_text: String,
}

impl ParsedPrescription {
    /// All-null record with the default action, for inputs where nothing matched.
    pub fn empty(raw_text: &str) -> Self {
        Self {
            medication_name: None,
            concentration: None,
            dosage: None,
            duration: None,
            quantity: None,
            action: ActionKind::Prescribe,
            note: None,
            raw_text: raw_text.to_string(),
        }
    }

    /// Whether any extractor produced a value (action alone does not count,
    /// since it is always populated).
    pub fn has_any_field(&self) -> bool {
        self.medication_name.is_some()
            || self.concentration.is_some()
            || self.dosage.is_some()
            || self.duration.is_some()
            || self.quantity.is_some()
            || self.note.is_some()
    }
}

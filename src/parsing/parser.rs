use tracing::debug;

use super::action::{action_spans, classify_action};
use super::fields::{
    extract_concentration, extract_dosage, extract_duration, extract_note, extract_quantity,
};
use super::name::resolve_medication_name;
use crate::intake::sanitize_note;
use crate::models::prescription::ParsedPrescription;

/// Parse a free-text prescription note into a structured record.
///
/// Total: every input, including empty strings, control characters, or text
/// with no recognizable pattern, returns a fully-formed record with `None`
/// where nothing was found. Each extractor runs against the same original
/// trimmed text; only spans that actually fired are subtracted when
/// inferring the medication name.
pub fn parse_prescription_input(text: &str) -> ParsedPrescription {
    let trimmed = text.trim();
    debug!(input_len = trimmed.len(), "parsing prescription input");
    if trimmed.is_empty() {
        return ParsedPrescription::empty(trimmed);
    }

    let action = classify_action(trimmed);
    let concentration = extract_concentration(trimmed);
    let dosage = extract_dosage(trimmed);
    let duration = extract_duration(trimmed);
    let quantity = extract_quantity(trimmed);
    let note = extract_note(trimmed);

    let mut spans = action_spans(trimmed);
    spans.extend(
        [&concentration, &duration, &quantity, &note]
            .into_iter()
            .flatten()
            .cloned(),
    );
    if let Some((hit, _form)) = &dosage {
        spans.push(hit.clone());
    }

    let medication_name = resolve_medication_name(trimmed, &spans);

    let parsed = ParsedPrescription {
        medication_name,
        concentration: concentration.map(|hit| hit.value),
        dosage: dosage.map(|(hit, _)| hit.value),
        duration: duration.map(|hit| hit.value),
        quantity: quantity.map(|hit| hit.value),
        action,
        note: note.map(|hit| hit.value),
        raw_text: trimmed.to_string(),
    };

    debug!(
        action = parsed.action.as_str(),
        has_name = parsed.medication_name.is_some(),
        has_fields = parsed.has_any_field(),
        "prescription input parsed"
    );

    parsed
}

/// Parse a multi-line dictation transcript: sanitize the raw capture, then
/// parse each non-blank line as an independent note. A line that yields
/// nothing degrades to an all-null record rather than aborting the batch.
pub fn parse_dictation(text: &str) -> Vec<ParsedPrescription> {
    let sanitized = sanitize_note(text);
    sanitized
        .text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(parse_prescription_input)
        .collect()
}

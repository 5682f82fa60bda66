use regex::Regex;

use super::patterns::{
    CONCENTRATION, DOSAGE_FREQUENCY, DOSAGE_INTERVAL, DOSAGE_UNIT_FREQUENCY, DURATION, NOTE,
    QUANTITY,
};

/// A matched field span against the original trimmed text.
///
/// `value` is the reported text (possibly a capture subgroup, e.g. the
/// duration "30 dias" out of a "por 30 dias" span) while `offset`/`length`
/// always cover the full match, so the name resolver removes the whole span.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternHit {
    pub value: String,
    pub offset: usize,
    pub length: usize,
}

/// Which dosage variant actually fired. Name resolution removes exactly the
/// fired span and never an unfired fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DosageForm {
    UnitWithFrequency,
    Interval,
    FrequencyOnly,
}

/// Dose-per-unit strength, e.g. "500mg", "0,25 mg/ml", "8/90 mg".
pub fn extract_concentration(text: &str) -> Option<PatternHit> {
    first_match(&CONCENTRATION, text)
}

/// Administration instruction, tried in precedence order:
/// unit-with-frequency, then bare interval, then bare frequency.
/// First non-null wins; the fired variant is tagged.
pub fn extract_dosage(text: &str) -> Option<(PatternHit, DosageForm)> {
    if let Some(hit) = first_match(&DOSAGE_UNIT_FREQUENCY, text) {
        return Some((hit, DosageForm::UnitWithFrequency));
    }
    if let Some(hit) = first_match(&DOSAGE_INTERVAL, text) {
        return Some((hit, DosageForm::Interval));
    }
    first_match(&DOSAGE_FREQUENCY, text).map(|hit| (hit, DosageForm::FrequencyOnly))
}

/// Treatment length, e.g. "30 dias", or the literal "uso contínuo".
/// The reported value excludes a leading "por"; the span covers it.
pub fn extract_duration(text: &str) -> Option<PatternHit> {
    let caps = DURATION.captures(text)?;
    let whole = caps.get(0)?;
    let value = caps.get(1).or_else(|| caps.get(2))?;
    Some(PatternHit {
        value: value.as_str().to_string(),
        offset: whole.start(),
        length: whole.len(),
    })
}

/// Dispensed unit count, e.g. "30 comprimidos".
pub fn extract_quantity(text: &str) -> Option<PatternHit> {
    first_match(&QUANTITY, text)
}

/// Trailing justification after a reason marker; the reported value is the
/// trimmed clause, the span includes the marker itself.
pub fn extract_note(text: &str) -> Option<PatternHit> {
    let caps = NOTE.captures(text)?;
    let whole = caps.get(0)?;
    let reason = caps.get(1)?.as_str().trim();
    if reason.is_empty() {
        return None;
    }
    Some(PatternHit {
        value: reason.to_string(),
        offset: whole.start(),
        length: whole.len(),
    })
}

fn first_match(regex: &Regex, text: &str) -> Option<PatternHit> {
    regex.find(text).map(|mat| PatternHit {
        value: mat.as_str().to_string(),
        offset: mat.start(),
        length: mat.len(),
    })
}

use super::fields::PatternHit;
use super::patterns::STOP_WORDS;
use crate::config::MIN_NAME_LENGTH;

/// Punctuation stripped from residual tokens after span removal.
const RESIDUAL_PUNCTUATION: &[char] = &[',', ';', '.', '!', '?', '(', ')'];

/// Infer the medication name from whatever text remains after removing
/// every matched field span and the stop-word set.
///
/// Medication names are an open vocabulary (brands, compounded formulas,
/// informal abbreviations), so subtraction is the only robust strategy
/// without an external drug database. All spans were computed against the
/// same original text; marking them in one index-range pass means removal
/// order cannot corrupt later spans, and a second occurrence of the same
/// substring elsewhere in the sentence is never touched.
pub fn resolve_medication_name(text: &str, spans: &[PatternHit]) -> Option<String> {
    if text.is_empty() {
        return None;
    }

    let mut removed = vec![false; text.len()];
    for span in spans {
        let start = span.offset.min(text.len());
        let end = (span.offset + span.length).min(text.len());
        for flag in &mut removed[start..end] {
            *flag = true;
        }
    }

    // Removed bytes become spaces so adjacent surviving words stay separate.
    let mut residual = String::with_capacity(text.len());
    for (i, ch) in text.char_indices() {
        if removed[i] {
            residual.push(' ');
        } else {
            residual.push(ch);
        }
    }

    let mut words: Vec<String> = Vec::new();
    for token in residual.split_whitespace() {
        let cleaned: String = token
            .chars()
            .filter(|c| !RESIDUAL_PUNCTUATION.contains(c))
            .collect();
        if cleaned.is_empty() {
            continue;
        }
        if STOP_WORDS.contains(&cleaned.to_lowercase().as_str()) {
            continue;
        }
        words.push(cleaned);
    }

    let name = words.join(" ");
    if name.chars().count() >= MIN_NAME_LENGTH {
        Some(name)
    } else {
        None
    }
}

use crate::config::MAX_NOTE_LENGTH;

/// Result of dictation note sanitization (pre-parse).
#[derive(Debug, Clone)]
pub struct SanitizedNote {
    /// The cleaned note text.
    pub text: String,
    /// Whether any modifications were made.
    pub was_modified: bool,
    /// What was stripped (for audit, no patient data).
    pub modifications: Vec<NoteModification>,
}

/// A modification made during note sanitization.
#[derive(Debug, Clone)]
pub struct NoteModification {
    pub kind: NoteModificationKind,
    pub description: String,
}

/// Types of note sanitization applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteModificationKind {
    InvisibleUnicodeRemoved,
    ControlCharacterRemoved,
    ExcessiveLengthTruncated,
}

/// Sanitize a dictated or pasted note before parsing.
///
/// Speech-to-text transcripts and clipboard text carry zero-width unicode
/// and stray control characters; both would survive into the residual text
/// and corrupt the inferred medication name. Total function: every input,
/// including empty, yields a well-formed result.
pub fn sanitize_note(raw: &str) -> SanitizedNote {
    sanitize_note_with_limit(raw, MAX_NOTE_LENGTH)
}

/// Sanitize with an explicit length limit (in characters).
pub fn sanitize_note_with_limit(raw: &str, max_length: usize) -> SanitizedNote {
    let mut text = raw.to_string();
    let mut modifications = Vec::new();

    // Step 1: Remove non-visible Unicode characters
    let before = text.clone();
    text = remove_invisible_unicode(&text);
    if text != before {
        modifications.push(NoteModification {
            kind: NoteModificationKind::InvisibleUnicodeRemoved,
            description: "Stripped non-visible Unicode characters".to_string(),
        });
    }

    // Step 2: Remove control characters (except newline, tab)
    let before = text.clone();
    text = remove_control_characters(&text);
    if text != before {
        modifications.push(NoteModification {
            kind: NoteModificationKind::ControlCharacterRemoved,
            description: "Stripped control characters".to_string(),
        });
    }

    // Step 3: Truncate to maximum length
    if text.chars().count() > max_length {
        let original_len = text.chars().count();
        text = truncate_at_word_boundary(&text, max_length);
        modifications.push(NoteModification {
            kind: NoteModificationKind::ExcessiveLengthTruncated,
            description: format!(
                "Truncated from {} to {} characters",
                original_len,
                text.chars().count()
            ),
        });
    }

    let was_modified = !modifications.is_empty();

    SanitizedNote {
        text,
        was_modified,
        modifications,
    }
}

/// Remove zero-width and invisible Unicode characters.
fn remove_invisible_unicode(text: &str) -> String {
    text.chars()
        .filter(|c| {
            !matches!(
                *c,
                '\u{200B}'..='\u{200F}'  // Zero-width chars
                | '\u{202A}'..='\u{202E}' // Directional formatting
                | '\u{2060}'..='\u{2064}' // Invisible operators
                | '\u{2066}'..='\u{2069}' // Directional isolates
                | '\u{FEFF}'              // BOM
                | '\u{00AD}'              // Soft hyphen
                | '\u{034F}'              // Combining grapheme joiner
                | '\u{061C}'              // Arabic letter mark
                | '\u{180E}'              // Mongolian vowel separator
            )
        })
        .collect()
}

/// Remove control characters except newline and tab.
fn remove_control_characters(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect()
}

/// Truncate text at a word boundary, never inside a multi-byte character.
fn truncate_at_word_boundary(text: &str, max_chars: usize) -> String {
    let cut = match text.char_indices().nth(max_chars) {
        Some((byte_pos, _)) => byte_pos,
        None => return text.to_string(),
    };
    let truncated = &text[..cut];
    match truncated.rfind(char::is_whitespace) {
        Some(pos) => truncated[..pos].to_string(),
        None => truncated.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // =================================================================
    // CLEAN INPUT
    // =================================================================

    #[test]
    fn sanitize_clean_input_unchanged() {
        let result = sanitize_note("renovar Losartana 50mg 1x ao dia");
        assert!(!result.was_modified);
        assert_eq!(result.text, "renovar Losartana 50mg 1x ao dia");
    }

    #[test]
    fn sanitize_empty_input() {
        let result = sanitize_note("");
        assert!(!result.was_modified);
        assert!(result.text.is_empty());
    }

    // =================================================================
    // INVISIBLE UNICODE
    // =================================================================

    #[test]
    fn sanitize_invisible_unicode_removed() {
        let input = "renovar\u{200B}Losartana\u{FEFF} 50mg";
        let result = sanitize_note(input);
        assert!(result.was_modified);
        assert!(!result.text.contains('\u{200B}'));
        assert!(!result.text.contains('\u{FEFF}'));
        assert!(result
            .modifications
            .iter()
            .any(|m| m.kind == NoteModificationKind::InvisibleUnicodeRemoved));
    }

    // =================================================================
    // CONTROL CHARACTERS
    // =================================================================

    #[test]
    fn sanitize_control_characters_removed() {
        let input = "suspender\x07Omeprazol\x08 20mg";
        let result = sanitize_note(input);
        assert!(result.was_modified);
        assert!(!result.text.contains('\x07'));
        assert!(!result.text.contains('\x08'));
        assert!(result
            .modifications
            .iter()
            .any(|m| m.kind == NoteModificationKind::ControlCharacterRemoved));
    }

    #[test]
    fn sanitize_preserves_newlines_and_tabs() {
        let input = "renovar Losartana 50mg\n\tsuspender Omeprazol";
        let result = sanitize_note(input);
        assert!(result.text.contains('\n'));
        assert!(result.text.contains('\t'));
    }

    // =================================================================
    // TRUNCATION
    // =================================================================

    #[test]
    fn sanitize_truncation_at_word_boundary() {
        let input = "a ".repeat(1500); // 3000 chars
        let result = sanitize_note(&input);
        assert!(result.was_modified);
        assert!(result.text.chars().count() <= MAX_NOTE_LENGTH);
        assert!(result
            .modifications
            .iter()
            .any(|m| m.kind == NoteModificationKind::ExcessiveLengthTruncated));
    }

    #[test]
    fn sanitize_truncation_respects_multibyte_chars() {
        let input = "ã".repeat(10);
        let result = sanitize_note_with_limit(&input, 4);
        assert_eq!(result.text, "ãããã");
        assert!(result.was_modified);
    }

    // =================================================================
    // EDGE CASES
    // =================================================================

    #[test]
    fn sanitize_preserves_portuguese_characters() {
        let result = sanitize_note("prescrever Amoxicilina 500mg, 2 cápsulas ao dia, uso contínuo");
        assert!(result.text.contains("cápsulas"));
        assert!(result.text.contains("contínuo"));
    }

    #[test]
    fn sanitize_preserves_clinical_punctuation() {
        let result = sanitize_note("Dipirona 500mg de 6/6 horas, 0,25 mg/ml");
        assert!(result.text.contains("6/6"));
        assert!(result.text.contains("0,25 mg/ml"));
    }
}

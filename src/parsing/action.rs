use super::fields::PatternHit;
use super::patterns::ACTION_GROUPS;
use crate::models::enums::ActionKind;

/// Classify the clinical action expressed by the utterance.
///
/// Groups are evaluated in their fixed priority order and the first match
/// wins, so "suspender e depois prescrever outro" classifies as suspend.
/// No keyword at all means the default prescribing action.
pub fn classify_action(text: &str) -> ActionKind {
    for group in ACTION_GROUPS.iter() {
        if group.regex.is_match(text) {
            return group.action.clone();
        }
    }
    ActionKind::Prescribe
}

/// Collect every action-keyword match across all groups, for removal from
/// the residual text during name resolution.
pub fn action_spans(text: &str) -> Vec<PatternHit> {
    let mut hits = Vec::new();
    for group in ACTION_GROUPS.iter() {
        for mat in group.regex.find_iter(text) {
            hits.push(PatternHit {
                value: mat.as_str().to_string(),
                offset: mat.start(),
                length: mat.len(),
            });
        }
    }
    hits
}

use std::sync::LazyLock;

use regex::Regex;

use crate::models::enums::ActionKind;

/// A compiled action keyword group with the action it classifies.
pub(crate) struct ActionGroup {
    pub action: ActionKind,
    pub regex: Regex,
}

/// Ordered action keyword groups, evaluated top to bottom; the first group
/// whose pattern matches anywhere in the text wins. Suspension and renewal
/// come first: their keywords are the most specific and the highest-stakes,
/// so a generic "continuar" embedded in a longer prescribing sentence cannot
/// shadow them. Unaccented variants are accepted alongside the accented
/// forms because speech-to-text transcripts frequently drop diacritics.
pub(crate) static ACTION_GROUPS: LazyLock<Vec<ActionGroup>> = LazyLock::new(|| {
    vec![
        group(
            ActionKind::Suspend,
            r"(?i)\b(?:suspender|suspenda|suspendo|parar|retirar)\b",
        ),
        group(
            ActionKind::Renew,
            r"(?i)\b(?:renovar|renovo|renova[çc][ãa]o|repetir)\b",
        ),
        group(
            ActionKind::Continue,
            r"(?i)\b(?:continuar|manter|mantenha)\b",
        ),
        group(
            ActionKind::Prescribe,
            r"(?i)\b(?:prescrever|prescrevo|prescreva|prescri[çc][ãa]o|receitar|receito|receite|iniciar)\b",
        ),
    ]
});

/// Dose-per-unit strength: "500mg", "0,25 mg/ml", "8/90 mg", "5%".
/// Accepts "." and "," decimal separators and a "/number" ratio component;
/// longest unit first so "mg/ml" wins over "mg".
pub(crate) static CONCENTRATION: LazyLock<Regex> = LazyLock::new(|| {
    pattern(r"(?i)\b\d+(?:[.,]\d+)?(?:\s*/\s*\d+(?:[.,]\d+)?)?\s*(?:(?:mg/ml|mcg|mg|ml|ui|g)\b|%)")
});

/// Dosage, primary form: "<number> <administration-unit> [Nx] <frequency>",
/// e.g. "1 cp 2x ao dia", "2 gotas por dia", "1 comprimido a cada 8 horas",
/// "20 ml/dia".
pub(crate) static DOSAGE_UNIT_FREQUENCY: LazyLock<Regex> = LazyLock::new(|| {
    pattern(
        r"(?i)\b\d+(?:[.,]\d+)?\s*(?:comprimidos?|c[áa]psulas?|gotas?|aplica[çc][õo]es|aplica[çc][ãa]o|cp|ml)(?:\s+(?:\d+\s*x\s+)?(?:ao\s+dia|por\s+dia|por\s+semana|(?:(?:em|a)\s+)?cada\s+\d+\s*(?:horas?|h))|\s*/\s*(?:dia|semana))\b",
    )
});

/// Dosage, interval fallback: bare "N/N horas|h", e.g. "de 8/8 horas".
pub(crate) static DOSAGE_INTERVAL: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?i)\b(?:de\s+)?\d+\s*/\s*\d+\s*(?:horas?|h)\b"));

/// Dosage, frequency fallback: bare "Nx <period>", e.g. "1x ao dia".
pub(crate) static DOSAGE_FREQUENCY: LazyLock<Regex> = LazyLock::new(|| {
    pattern(r"(?i)\b\d+\s*x\s*(?:ao\s+dia|por\s+dia|por\s+semana|di[áa]ri[oa]|semanal)\b")
});

/// Treatment length: "(por) N dias|semanas|meses" or the fixed phrase
/// "uso contínuo". Capture 1 is the numeric duration without the leading
/// "por"; capture 2 is the continuous-use literal, reported verbatim.
pub(crate) static DURATION: LazyLock<Regex> = LazyLock::new(|| {
    pattern(r"(?i)\b(?:(?:por\s+)?(\d+\s*(?:dias?|semanas?|m[êe]s(?:es)?))|(uso\s+cont[íi]nuo))\b")
});

/// Dispensed unit count: "N <dispense-unit>", e.g. "30 comprimidos".
pub(crate) static QUANTITY: LazyLock<Regex> = LazyLock::new(|| {
    pattern(r"(?i)\b\d+\s*(?:comprimidos?|c[áa]psulas?|canetas?|frascos?|ampolas?|caixas?)\b")
});

/// Trailing justification clause: everything after a reason marker
/// ("porque", "pois", "motivo[:]") to the end of the input.
pub(crate) static NOTE: LazyLock<Regex> =
    LazyLock::new(|| pattern(r"(?is)\b(?:porque|pois|motivo)\b\s*:?\s*(.+)$"));

/// Markers for the boolean intent gate. Covers the prescription-intent
/// vocabulary plus every non-default action keyword the classifier knows,
/// so no action-bearing text can slip past the gate. False positives are
/// acceptable here.
pub(crate) static INTENT_MARKERS: LazyLock<Regex> = LazyLock::new(|| {
    pattern(
        r"(?i)\b(?:prescrever|prescrevo|prescreva|prescri[çc][ãa]o|receitar?|receito|receite|renovar|renovo|renova[çc][ãa]o|repetir|suspender|suspenda|suspendo|parar|retirar|continuar|manter|mantenha)\b",
    )
});

/// Portuguese prepositions, articles and conjunctions stripped as whole
/// words from the residual text before it is accepted as a medication name.
pub(crate) const STOP_WORDS: &[&str] = &[
    "de", "por", "ao", "para", "com", "em", "se", "do", "da", "na", "no", "um", "uma", "o", "a",
    "e", "ou",
];

fn pattern(regex_str: &str) -> Regex {
    Regex::new(regex_str).expect("Invalid prescription pattern")
}

fn group(action: ActionKind, regex_str: &str) -> ActionGroup {
    ActionGroup {
        action,
        regex: pattern(regex_str),
    }
}

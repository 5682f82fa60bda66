use super::patterns::INTENT_MARKERS;

/// Coarse boolean gate: does this text express prescription intent?
///
/// Callers use it to decide cheaply whether the full extraction pipeline is
/// worth invoking. It may produce false positives; it never produces a
/// false negative for text the parser classifies with a non-default action.
pub fn has_prescription_intent(text: &str) -> bool {
    INTENT_MARKERS.is_match(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::enums::ActionKind;
    use crate::parsing::action::classify_action;

    #[test]
    fn listed_markers_gate_open() {
        for text in [
            "prescrever Amoxicilina",
            "prescrição de antibiótico",
            "renovar a receita",
            "receita de Losartana",
            "receitar Dipirona",
            "suspender Omeprazol",
            "continuar com Metformina",
            "continuar uso de Losartana",
        ] {
            assert!(has_prescription_intent(text), "gate closed for: {text}");
        }
    }

    #[test]
    fn non_default_action_keywords_gate_open() {
        // every keyword that classifies to a non-default action must pass
        for text in [
            "parar AAS",
            "retirar a medicação",
            "suspenda o anti-inflamatório",
            "renovo Losartana",
            "repetir a dose",
            "manter dose atual",
            "mantenha o esquema",
            "continuar Metformina",
        ] {
            assert!(has_prescription_intent(text), "gate closed for: {text}");
        }
    }

    #[test]
    fn neutral_text_gate_closed() {
        assert!(!has_prescription_intent("paciente com dor de cabeça há 3 dias"));
        assert!(!has_prescription_intent("agendar retorno em duas semanas"));
        assert!(!has_prescription_intent(""));
    }

    #[test]
    fn no_false_negative_on_action_bearing_text() {
        let fixtures = [
            "suspender Omeprazol porque paciente relatou dor abdominal",
            "renovar Losartana 50mg 1x ao dia por 30 dias, 30 comprimidos",
            "parar AAS 100mg",
            "manter Metformina 850mg",
            "repetir receita de Sinvastatina",
        ];
        for text in fixtures {
            assert_ne!(classify_action(text), ActionKind::Prescribe);
            assert!(
                has_prescription_intent(text),
                "intent gate missed action-bearing text: {text}"
            );
        }
    }
}

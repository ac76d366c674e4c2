//! Keyword intent detection for free text typed while no flow is active.

use crate::flow::FlowType;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    Start(FlowType),
    Greeting,
    Unknown,
}

/// Checked in order; substring match on the lowercased text.
const FLOW_KEYWORDS: &[(FlowType, &[&str])] = &[
    (FlowType::Complaint, &["denúncia", "denuncia"]),
    (
        FlowType::TheftReport,
        &["roubo", "furto", "roubaram", "roubado", "roubada", "furtado", "furtada"],
    ),
    (FlowType::AccountCancellation, &["cancelar", "conta"]),
    (FlowType::ProtectionInfo, &["proteção", "protecao"]),
    (FlowType::SupportChannel, &["atendimento"]),
];

/// Whole-word (or whole-phrase) match, so "foi" is not a greeting.
const GREETINGS: &[&str] = &["oi", "olá", "ola", "bom dia", "boa tarde", "boa noite"];

pub fn detect_intent(text: &str) -> Intent {
    let lower = text.to_lowercase();

    for (flow, keywords) in FLOW_KEYWORDS {
        if keywords.iter().any(|k| lower.contains(k)) {
            return Intent::Start(*flow);
        }
    }

    let words = padded_words(&lower);
    if GREETINGS
        .iter()
        .any(|g| words.contains(&format!(" {} ", g)))
    {
        return Intent::Greeting;
    }

    Intent::Unknown
}

/// " w1 w2 ... " with punctuation collapsed to single spaces.
fn padded_words(text: &str) -> String {
    let words: Vec<&str> = text
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();
    format!(" {} ", words.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flow_keywords() {
        assert_eq!(detect_intent("denúncia"), Intent::Start(FlowType::Complaint));
        assert_eq!(detect_intent("Quero fazer uma DENUNCIA"), Intent::Start(FlowType::Complaint));
        assert_eq!(detect_intent("fui roubado ontem"), Intent::Start(FlowType::TheftReport));
        assert_eq!(detect_intent("houve um furto"), Intent::Start(FlowType::TheftReport));
        assert_eq!(
            detect_intent("quero cancelar"),
            Intent::Start(FlowType::AccountCancellation)
        );
        assert_eq!(
            detect_intent("central de proteção"),
            Intent::Start(FlowType::ProtectionInfo)
        );
        assert_eq!(
            detect_intent("falar com atendimento"),
            Intent::Start(FlowType::SupportChannel)
        );
    }

    #[test]
    fn test_flow_keyword_beats_greeting() {
        assert_eq!(detect_intent("oi, quero denunciar uma denúncia"), Intent::Start(FlowType::Complaint));
    }

    #[test]
    fn test_greetings_match_whole_words() {
        assert_eq!(detect_intent("oi"), Intent::Greeting);
        assert_eq!(detect_intent("Olá!"), Intent::Greeting);
        assert_eq!(detect_intent("bom dia, tudo bem?"), Intent::Greeting);
        assert_eq!(detect_intent("isso foi estranho"), Intent::Unknown);
    }

    #[test]
    fn test_unknown() {
        assert_eq!(detect_intent("qual a cotação do dólar"), Intent::Unknown);
        assert_eq!(detect_intent(""), Intent::Unknown);
    }
}

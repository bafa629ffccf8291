//! Persona inference from a free-form use case.

/// Persona used when neither a persona nor a use case is supplied.
pub const DEFAULT_PERSONA: &str = "helpful assistant";

/// Persona returned when no inference rule matches.
pub const FALLBACK_PERSONA: &str = "knowledgeable assistant";

/// Ordered keyword rules. The first rule with any matching keyword wins.
const RULES: &[(&[&str], &str)] = &[
    (&["content", "writing", "blog"], "experienced content strategist and copywriter"),
    (&["analysis", "data"], "senior data analyst with expertise in insights extraction"),
    (&["teach", "explain", "learn"], "patient educator with clear communication skills"),
    (&["market", "business"], "strategic business consultant"),
    (&["research"], "thorough research specialist"),
    (&["creative", "design"], "creative professional with design thinking expertise"),
];

/// Infer a persona phrase from a use case by case-insensitive substring match.
pub fn infer_persona_from_use_case(use_case: &str) -> &'static str {
    let lowered = use_case.to_lowercase();
    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|keyword| lowered.contains(keyword)))
        .map(|(_, persona)| *persona)
        .unwrap_or(FALLBACK_PERSONA)
}

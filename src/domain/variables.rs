//! `{variable}` placeholder extraction, substitution and validation.
//!
//! Missing variables are reported as data through [`VariableReport`]; callers
//! decide whether to block on them.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use regex::Regex;
use serde::Serialize;

/// Values supplied for template variables, keyed by variable name.
pub type VariableValues = HashMap<String, String>;

static PLACEHOLDER: OnceLock<Regex> = OnceLock::new();

fn placeholder() -> &'static Regex {
    PLACEHOLDER.get_or_init(|| {
        Regex::new(r"\{([a-zA-Z_][a-zA-Z0-9_]*)\}").expect("placeholder pattern is valid")
    })
}

/// Result of checking supplied values against declared variables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableReport {
    pub is_valid: bool,
    /// Declared variables with no usable value, in declaration order.
    pub missing: Vec<String>,
}

/// Extract unique variable names in order of first appearance.
pub fn extract_variables(text: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    placeholder()
        .captures_iter(text)
        .filter_map(|captures| captures.get(1).map(|m| m.as_str()))
        .filter(|name| seen.insert(*name))
        .map(str::to_string)
        .collect()
}

/// Placeholder written when a variable has no value.
pub fn missing_placeholder(name: &str) -> String {
    format!("[{}]", name.to_uppercase())
}

/// Replace every placeholder of each declared variable.
///
/// Absent or empty values are replaced by the uppercased bracket token, e.g.
/// `{topic}` becomes `[TOPIC]`. Placeholders of undeclared names are left as-is.
pub fn substitute_declared(text: &str, declared: &[String], values: &VariableValues) -> String {
    declared.iter().fold(text.to_string(), |acc, name| {
        let replacement = values
            .get(name)
            .filter(|value| !value.is_empty())
            .cloned()
            .unwrap_or_else(|| missing_placeholder(name));
        acc.replace(&format!("{{{}}}", name), &replacement)
    })
}

/// Substitute every variable found in `text`.
pub fn substitute(text: &str, values: &VariableValues) -> String {
    substitute_declared(text, &extract_variables(text), values)
}

/// Check that every declared variable has a non-blank value.
pub fn validate_variables(declared: &[String], values: &VariableValues) -> VariableReport {
    let missing: Vec<String> = declared
        .iter()
        .filter(|name| values.get(*name).is_none_or(|value| value.trim().is_empty()))
        .cloned()
        .collect();
    VariableReport { is_valid: missing.is_empty(), missing }
}

/// Append a numbered examples block when any examples are given.
pub fn append_examples(text: &str, examples: &[String]) -> String {
    if examples.is_empty() {
        return text.to_string();
    }
    let mut out = format!("{}\n\n**Examples:**\n", text);
    for (index, example) in examples.iter().enumerate() {
        out.push_str(&format!("\n{}. {}", index + 1, example));
    }
    out
}

/// Truncate to `max_chars` characters, marking truncation with `...`.
pub fn preview(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        None => text.to_string(),
        Some((byte_index, _)) => format!("{}...", &text[..byte_index]),
    }
}

/// Display block for a filled template.
pub fn format_output(name: &str, prompt: &str) -> String {
    format!(
        "**Template Name:** {}\n\n**Final Prompt:**\n--------------------\n{}\n--------------------",
        name, prompt
    )
}

//! `{variable}` template filling outside the prompt form.

use crate::domain::variables::{append_examples, format_output, preview};
use crate::domain::{
    AppError, VariableReport, VariableValues, extract_variables, substitute_declared,
    validate_variables,
};

/// Inputs for filling a variable template.
#[derive(Debug, Clone, Default)]
pub struct FillRequest {
    pub text: String,
    pub values: VariableValues,
    pub examples: Vec<String>,
    /// Truncate the result to this many characters.
    pub preview: Option<usize>,
    /// Wrap the result in a named display block.
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillOutcome {
    pub text: String,
    pub report: VariableReport,
}

/// Parse `name=value` pairs. Later pairs overwrite earlier ones.
pub fn parse_assignments(pairs: &[String]) -> Result<VariableValues, AppError> {
    let mut values = VariableValues::new();
    for pair in pairs {
        let (name, value) = pair
            .split_once('=')
            .filter(|(name, _)| !name.trim().is_empty())
            .ok_or_else(|| AppError::InvalidVariableAssignment(pair.clone()))?;
        values.insert(name.trim().to_string(), value.to_string());
    }
    Ok(values)
}

pub fn extract(text: &str) -> Vec<String> {
    extract_variables(text)
}

/// Substitute variables, append examples, then apply preview and naming.
///
/// Missing variables are substituted with placeholders and listed in the report.
pub fn fill(request: FillRequest) -> FillOutcome {
    let declared = extract_variables(&request.text);
    let report = validate_variables(&declared, &request.values);

    let mut text = substitute_declared(&request.text, &declared, &request.values);
    text = append_examples(&text, &request.examples);
    if let Some(limit) = request.preview {
        text = preview(&text, limit);
    }
    if let Some(name) = request.name.as_deref() {
        text = format_output(name, &text);
    }

    tracing::debug!(declared = declared.len(), missing = report.missing.len(), "filled template");
    FillOutcome { text, report }
}

pub fn check(text: &str, values: &VariableValues) -> VariableReport {
    validate_variables(&extract_variables(text), values)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assignments(pairs: &[&str]) -> Vec<String> {
        pairs.iter().map(|p| p.to_string()).collect()
    }

    #[test]
    fn parses_pairs_keeping_equals_in_values() {
        let values = parse_assignments(&assignments(&["topic=tides", "eq=a=b", "empty="])).unwrap();
        assert_eq!(values["topic"], "tides");
        assert_eq!(values["eq"], "a=b");
        assert_eq!(values["empty"], "");
    }

    #[test]
    fn rejects_malformed_pairs() {
        for bad in ["novalue", "=value"] {
            let err = parse_assignments(&assignments(&[bad])).unwrap_err();
            assert!(matches!(err, AppError::InvalidVariableAssignment(_)), "{}", bad);
        }
    }

    #[test]
    fn fill_reports_missing_and_uses_placeholders() {
        let values = parse_assignments(&assignments(&["topic=tides"])).unwrap();
        let outcome = fill(FillRequest {
            text: "Explain {topic} to a {audience}.".into(),
            values,
            ..Default::default()
        });
        assert_eq!(outcome.text, "Explain tides to a [AUDIENCE].");
        assert_eq!(outcome.report.missing, vec!["audience"]);
        assert!(!outcome.report.is_valid);
    }

    #[test]
    fn fill_appends_examples_then_previews() {
        let outcome = fill(FillRequest {
            text: "Write".into(),
            examples: vec!["one".into(), "two".into()],
            preview: Some(8),
            ..Default::default()
        });
        assert_eq!(outcome.text, "Write\n\n*...");
        assert!(outcome.report.is_valid);
    }

    #[test]
    fn fill_wraps_named_output() {
        let outcome =
            fill(FillRequest { text: "Hi".into(), name: Some("Greeting".into()), ..Default::default() });
        assert!(outcome.text.starts_with("**Template Name:** Greeting"));
        assert!(outcome.text.contains("\nHi\n"));
    }

    #[test]
    fn check_treats_blank_values_as_missing() {
        let values = parse_assignments(&assignments(&["a=x", "b=  "])).unwrap();
        let report = check("{a} {b} {c}", &values);
        assert_eq!(report.missing, vec!["b", "c"]);
    }
}

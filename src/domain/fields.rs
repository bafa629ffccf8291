use serde::{Deserialize, Serialize};

/// Structured form input for prompt assembly.
///
/// Every field is optional. `None` and `Some("")` are treated identically:
/// an empty value is absent from the assembled prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PromptFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persona: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_case: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_snippet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl PromptFields {
    pub fn persona(&self) -> Option<&str> {
        present(&self.persona)
    }

    pub fn use_case(&self) -> Option<&str> {
        present(&self.use_case)
    }

    pub fn tone(&self) -> Option<&str> {
        present(&self.tone)
    }

    pub fn output_format(&self) -> Option<&str> {
        present(&self.output_format)
    }

    pub fn topic(&self) -> Option<&str> {
        present(&self.topic)
    }

    pub fn constraints(&self) -> Option<&str> {
        present(&self.constraints)
    }

    pub fn language(&self) -> Option<&str> {
        present(&self.language)
    }

    /// Code snippet with surrounding whitespace removed; blank snippets are absent.
    pub fn code_snippet(&self) -> Option<&str> {
        self.code_snippet.as_deref().map(str::trim).filter(|v| !v.is_empty())
    }

    /// Error text with surrounding whitespace removed; blank text is absent.
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref().map(str::trim).filter(|v| !v.is_empty())
    }

    /// Whether there is enough input to produce a prompt worth previewing or recording.
    pub fn has_subject(&self) -> bool {
        self.topic().is_some() || self.persona().is_some() || self.use_case().is_some()
    }

    /// Whether a change between two field sets should refresh a live preview.
    ///
    /// Only persona, use case, tone, output format and topic count.
    pub fn differs_meaningfully(&self, other: &PromptFields) -> bool {
        self.persona() != other.persona()
            || self.use_case() != other.use_case()
            || self.tone() != other.tone()
            || self.output_format() != other.output_format()
            || self.topic() != other.topic()
    }

    /// Overlay every non-empty field of `other` onto `self`.
    pub fn merge(&mut self, other: PromptFields) {
        fn take(slot: &mut Option<String>, value: Option<String>) {
            if let Some(v) = value.filter(|v| !v.is_empty()) {
                *slot = Some(v);
            }
        }
        take(&mut self.persona, other.persona);
        take(&mut self.use_case, other.use_case);
        take(&mut self.tone, other.tone);
        take(&mut self.output_format, other.output_format);
        take(&mut self.topic, other.topic);
        take(&mut self.constraints, other.constraints);
        take(&mut self.language, other.language);
        take(&mut self.code_snippet, other.code_snippet);
        take(&mut self.error_message, other.error_message);
    }
}

use std::fmt;

/// Requested shape of the model's answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Paragraph,
    BulletPoints,
    NumberedList,
    Table,
    Code,
    Json,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 6] = [
        OutputFormat::Paragraph,
        OutputFormat::BulletPoints,
        OutputFormat::NumberedList,
        OutputFormat::Table,
        OutputFormat::Code,
        OutputFormat::Json,
    ];

    /// Formats offered by the coding form.
    pub const CODING: [OutputFormat; 4] = [
        OutputFormat::Code,
        OutputFormat::NumberedList,
        OutputFormat::BulletPoints,
        OutputFormat::Paragraph,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Paragraph => "paragraph",
            OutputFormat::BulletPoints => "bullet-points",
            OutputFormat::NumberedList => "numbered-list",
            OutputFormat::Table => "table",
            OutputFormat::Code => "code",
            OutputFormat::Json => "json",
        }
    }

    /// Resolve a format from its exact key. Empty or unknown keys resolve to `None`.
    pub fn from_name(name: &str) -> Option<OutputFormat> {
        OutputFormat::ALL.into_iter().find(|format| format.as_str() == name)
    }

    /// Instruction sentence used in general-mode "Format Requirements".
    pub fn instruction(&self) -> &'static str {
        match self {
            OutputFormat::Paragraph => {
                "Present the information in well-structured paragraphs with clear topic sentences."
            }
            OutputFormat::BulletPoints => {
                "Organize the response using bullet points for easy scanning and comprehension."
            }
            OutputFormat::NumberedList => {
                "Provide a numbered, sequential list with each step or point clearly defined."
            }
            OutputFormat::Table => {
                "Structure the information in a tabular format with appropriate columns and rows."
            }
            OutputFormat::Code => {
                "Present the solution as properly formatted, executable code with inline comments."
            }
            OutputFormat::Json => {
                "Return the response in valid JSON format with appropriate structure and keys."
            }
        }
    }

    /// Guidance block used in coding mode. Only code and list formats carry one.
    pub fn coding_guidance(&self) -> Option<&'static str> {
        match self {
            OutputFormat::Code => Some(
                "Provide the solution as clean, well-documented code with:\n\
                 - Inline comments explaining key logic\n\
                 - Proper formatting and indentation\n\
                 - Error handling where appropriate",
            ),
            OutputFormat::NumberedList => {
                Some("Provide step-by-step instructions in a numbered list format.")
            }
            OutputFormat::BulletPoints => {
                Some("Organize your response using bullet points for clarity.")
            }
            OutputFormat::Paragraph | OutputFormat::Table | OutputFormat::Json => None,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

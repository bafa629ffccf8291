use clap::Args;

use crate::domain::{AppError, PromptFields};

use super::read_input;

/// Prompt form fields shared by `generate` and template editing.
#[derive(Args, Debug, Default)]
pub struct FieldArgs {
    /// Role the AI should adopt
    #[arg(long)]
    pub persona: Option<String>,
    /// What the prompt is for (also drives persona inference)
    #[arg(long)]
    pub use_case: Option<String>,
    /// professional, casual, technical, friendly, formal or creative
    #[arg(long)]
    pub tone: Option<String>,
    /// paragraph, bullet-points, numbered-list, table, code or json
    #[arg(long = "format")]
    pub output_format: Option<String>,
    /// Main question or subject
    #[arg(long)]
    pub topic: Option<String>,
    /// Extra requirements appended to the prompt
    #[arg(long)]
    pub constraints: Option<String>,
    /// Programming language (coding mode)
    #[arg(long)]
    pub language: Option<String>,
    /// Code snippet (coding mode)
    #[arg(long, conflicts_with = "code_file")]
    pub code: Option<String>,
    /// Read the code snippet from a file, or `-` for stdin
    #[arg(long)]
    pub code_file: Option<String>,
    /// Error message (coding mode)
    #[arg(long, conflicts_with = "error_file")]
    pub error: Option<String>,
    /// Read the error message from a file, or `-` for stdin
    #[arg(long)]
    pub error_file: Option<String>,
}

impl FieldArgs {
    pub fn into_fields(self) -> Result<PromptFields, AppError> {
        let code_snippet = match self.code_file {
            Some(path) => Some(read_input(&path)?),
            None => self.code,
        };
        let error_message = match self.error_file {
            Some(path) => Some(read_input(&path)?),
            None => self.error,
        };
        Ok(PromptFields {
            persona: self.persona,
            use_case: self.use_case,
            tone: self.tone,
            output_format: self.output_format,
            topic: self.topic,
            constraints: self.constraints,
            language: self.language,
            code_snippet,
            error_message,
        })
    }
}

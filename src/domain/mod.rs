pub mod error;
pub mod fields;
pub mod history;
pub mod identifiers;
pub mod mode;
pub mod output_format;
pub mod persona;
pub mod prompt;
pub mod template;
pub mod tone;
pub mod variables;

pub use error::AppError;
pub use fields::PromptFields;
pub use history::{HistoryFilter, HistoryItem, HistoryMetadata, HistoryStats, MAX_HISTORY_ITEMS};
pub use mode::Mode;
pub use output_format::OutputFormat;
pub use persona::infer_persona_from_use_case;
pub use prompt::{
    Section, SectionKind, assemble_coding_prompt, assemble_general_prompt, assemble_prompt,
    prompt_sections,
};
pub use template::{
    NewTemplate, Template, TemplateCategory, TemplatePatch, TemplateSort, builtin_templates,
};
pub use tone::{Tone, TonePattern};
pub use variables::{
    VariableReport, VariableValues, extract_variables, substitute, substitute_declared,
    validate_variables,
};

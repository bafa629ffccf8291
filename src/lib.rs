//! promptforge: assemble structured AI prompts from form fields, with local
//! history, a template library and `{variable}` template filling.
//!
//! The assembly and variable functions are pure and total. Everything that
//! touches disk goes through [`app::api`].

pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    FillOutcome, FillRequest, GenerateOutcome, GenerateRequest, HistoryQuery, TemplateQuery,
    data_dir, generate, generate_at, history_clear, history_clear_at, history_delete,
    history_delete_at, history_list, history_list_at, history_show, history_show_at,
    history_stats, history_stats_at, template_delete, template_delete_at, template_duplicate,
    template_duplicate_at, template_export, template_export_at, template_import,
    template_import_at, template_list, template_list_at, template_save, template_save_at,
    template_show, template_show_at, template_update, template_update_at,
};
pub use app::commands::vars::{check, extract, fill, parse_assignments};
pub use app::config::AppConfig;
pub use domain::variables::{append_examples, format_output, preview};
pub use domain::{
    AppError, HistoryFilter, HistoryItem, HistoryMetadata, HistoryStats, Mode, NewTemplate,
    OutputFormat, PromptFields, Template, TemplateCategory, TemplatePatch, TemplateSort, Tone,
    VariableReport, VariableValues, assemble_coding_prompt, assemble_general_prompt,
    assemble_prompt, builtin_templates, extract_variables, infer_persona_from_use_case,
    substitute, validate_variables,
};

//! API Facade for the application.
//!
//! Each operation resolves the data directory, loads configuration and runs the
//! matching command against the filesystem store. The `*_at` variants take an
//! explicit data directory.

use std::path::{Path, PathBuf};

use crate::app::config::{self, AppConfig};
use crate::app::{AppContext, commands::generate, commands::history, commands::template};
use crate::ports::{ClipboardWriter, NoopClipboard};
use crate::services::{FilesystemKeyValueStore, SystemClipboard};

pub use crate::app::commands::generate::{GenerateOutcome, GenerateRequest};
pub use crate::app::commands::history::HistoryQuery;
pub use crate::app::commands::template::TemplateQuery;
pub use crate::app::commands::vars::{FillOutcome, FillRequest};
pub use crate::domain::{
    AppError, HistoryItem, HistoryStats, NewTemplate, Template, TemplatePatch, VariableReport,
};

fn create_context<C: ClipboardWriter>(
    data_dir: &Path,
    clipboard: C,
    config: AppConfig,
) -> AppContext<FilesystemKeyValueStore, C> {
    AppContext::new(FilesystemKeyValueStore::new(data_dir), clipboard, config)
}

fn read_context(
    data_dir: &Path,
) -> Result<AppContext<FilesystemKeyValueStore, NoopClipboard>, AppError> {
    let config = config::load_config(data_dir)?;
    Ok(create_context(data_dir, NoopClipboard, config))
}

/// Data directory used by the facade functions without an explicit path.
pub fn data_dir() -> PathBuf {
    config::data_dir()
}

// =============================================================================
// Generate
// =============================================================================

/// Assemble a prompt, record it and optionally copy it.
pub fn generate(request: GenerateRequest) -> Result<GenerateOutcome, AppError> {
    generate_at(data_dir(), request)
}

pub fn generate_at(
    data_dir: impl AsRef<Path>,
    request: GenerateRequest,
) -> Result<GenerateOutcome, AppError> {
    let data_dir = data_dir.as_ref();
    let config = config::load_config(data_dir)?;
    let mut ctx = create_context(data_dir, SystemClipboard::new(), config);
    generate::execute(&mut ctx, request)
}

// =============================================================================
// History
// =============================================================================

pub fn history_list(query: &HistoryQuery) -> Result<Vec<HistoryItem>, AppError> {
    history_list_at(data_dir(), query)
}

pub fn history_list_at(
    data_dir: impl AsRef<Path>,
    query: &HistoryQuery,
) -> Result<Vec<HistoryItem>, AppError> {
    history::list(&read_context(data_dir.as_ref())?, query)
}

pub fn history_show(id: &str) -> Result<HistoryItem, AppError> {
    history_show_at(data_dir(), id)
}

pub fn history_show_at(data_dir: impl AsRef<Path>, id: &str) -> Result<HistoryItem, AppError> {
    history::show(&read_context(data_dir.as_ref())?, id)
}

pub fn history_delete(id: &str) -> Result<(), AppError> {
    history_delete_at(data_dir(), id)
}

pub fn history_delete_at(data_dir: impl AsRef<Path>, id: &str) -> Result<(), AppError> {
    history::delete(&read_context(data_dir.as_ref())?, id)
}

pub fn history_clear() -> Result<usize, AppError> {
    history_clear_at(data_dir())
}

pub fn history_clear_at(data_dir: impl AsRef<Path>) -> Result<usize, AppError> {
    history::clear(&read_context(data_dir.as_ref())?)
}

pub fn history_stats() -> Result<HistoryStats, AppError> {
    history_stats_at(data_dir())
}

pub fn history_stats_at(data_dir: impl AsRef<Path>) -> Result<HistoryStats, AppError> {
    history::stats(&read_context(data_dir.as_ref())?)
}

// =============================================================================
// Templates
// =============================================================================

pub fn template_list(query: &TemplateQuery) -> Result<Vec<Template>, AppError> {
    template_list_at(data_dir(), query)
}

pub fn template_list_at(
    data_dir: impl AsRef<Path>,
    query: &TemplateQuery,
) -> Result<Vec<Template>, AppError> {
    template::list(&read_context(data_dir.as_ref())?, query)
}

pub fn template_show(id: &str) -> Result<Template, AppError> {
    template_show_at(data_dir(), id)
}

pub fn template_show_at(data_dir: impl AsRef<Path>, id: &str) -> Result<Template, AppError> {
    template::show(&read_context(data_dir.as_ref())?, id)
}

pub fn template_save(new: NewTemplate) -> Result<Template, AppError> {
    template_save_at(data_dir(), new)
}

pub fn template_save_at(data_dir: impl AsRef<Path>, new: NewTemplate) -> Result<Template, AppError> {
    template::save(&read_context(data_dir.as_ref())?, new)
}

pub fn template_update(id: &str, patch: TemplatePatch) -> Result<Template, AppError> {
    template_update_at(data_dir(), id, patch)
}

pub fn template_update_at(
    data_dir: impl AsRef<Path>,
    id: &str,
    patch: TemplatePatch,
) -> Result<Template, AppError> {
    template::update(&read_context(data_dir.as_ref())?, id, patch)
}

pub fn template_delete(id: &str) -> Result<(), AppError> {
    template_delete_at(data_dir(), id)
}

pub fn template_delete_at(data_dir: impl AsRef<Path>, id: &str) -> Result<(), AppError> {
    template::delete(&read_context(data_dir.as_ref())?, id)
}

pub fn template_duplicate(id: &str) -> Result<Template, AppError> {
    template_duplicate_at(data_dir(), id)
}

pub fn template_duplicate_at(data_dir: impl AsRef<Path>, id: &str) -> Result<Template, AppError> {
    template::duplicate(&read_context(data_dir.as_ref())?, id)
}

pub fn template_export(id: &str) -> Result<String, AppError> {
    template_export_at(data_dir(), id)
}

pub fn template_export_at(data_dir: impl AsRef<Path>, id: &str) -> Result<String, AppError> {
    template::export(&read_context(data_dir.as_ref())?, id)
}

pub fn template_import(json: &str) -> Result<Template, AppError> {
    template_import_at(data_dir(), json)
}

pub fn template_import_at(data_dir: impl AsRef<Path>, json: &str) -> Result<Template, AppError> {
    template::import(&read_context(data_dir.as_ref())?, json)
}

// =============================================================================
// Variables
// =============================================================================

/// Configured preview length for `vars fill --preview`.
pub fn preview_length() -> Result<usize, AppError> {
    Ok(config::load_config(&data_dir())?.preview_length)
}

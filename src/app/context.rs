use crate::app::config::AppConfig;
use crate::ports::{ClipboardWriter, KeyValueStore};
use crate::services::{HistoryLog, TemplateLibrary};

/// Application context holding dependencies for command execution.
pub struct AppContext<S: KeyValueStore, C: ClipboardWriter> {
    store: S,
    clipboard: C,
    config: AppConfig,
}

impl<S: KeyValueStore, C: ClipboardWriter> AppContext<S, C> {
    pub fn new(store: S, clipboard: C, config: AppConfig) -> Self {
        Self { store, clipboard, config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn clipboard_mut(&mut self) -> &mut C {
        &mut self.clipboard
    }

    /// History log capped at the configured limit.
    pub fn history(&self) -> HistoryLog<&S> {
        HistoryLog::with_limit(&self.store, self.config.history_limit)
    }

    pub fn templates(&self) -> TemplateLibrary<&S> {
        TemplateLibrary::new(&self.store)
    }
}

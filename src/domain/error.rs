use std::io;

use thiserror::Error;

/// Library-wide error type for promptforge operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// JSON serialization or parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Storage key is not a safe identifier.
    #[error("Invalid storage key '{0}': must be alphanumeric with hyphens or underscores")]
    InvalidStorageKey(String),

    /// Mode name is not recognized.
    #[error("Invalid mode '{0}': must be one of general, coding")]
    InvalidMode(String),

    /// Template category name is not recognized.
    #[error("Invalid category '{0}': must be one of study, viva, coding, writing, custom")]
    InvalidCategory(String),

    /// Template sort order is not recognized.
    #[error("Invalid sort order '{0}': must be one of alphabetical, popular, recent")]
    InvalidSortOrder(String),

    /// History mode filter is not recognized.
    #[error("Invalid history filter '{0}': must be one of all, general, coding")]
    InvalidHistoryFilter(String),

    /// Template not found by id.
    #[error("Template '{0}' not found")]
    TemplateNotFound(String),

    /// Built-in templates cannot be modified or deleted.
    #[error("Template '{0}' is built-in and cannot be modified")]
    BuiltInTemplateReadOnly(String),

    /// Template payload failed validation.
    #[error("Invalid template: {0}")]
    InvalidTemplate(String),

    /// History item not found by id.
    #[error("History item '{0}' not found")]
    HistoryItemNotFound(String),

    /// Variable assignment is not of the form `name=value`.
    #[error("Invalid variable assignment '{0}': expected name=value")]
    InvalidVariableAssignment(String),

    /// Clipboard access failed.
    #[error("Clipboard error: {0}")]
    ClipboardError(String),
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers mapping failures to exit paths.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::TomlParseError(_)
            | AppError::Json(_)
            | AppError::InvalidStorageKey(_)
            | AppError::InvalidMode(_)
            | AppError::InvalidCategory(_)
            | AppError::InvalidSortOrder(_)
            | AppError::InvalidHistoryFilter(_)
            | AppError::InvalidTemplate(_)
            | AppError::InvalidVariableAssignment(_) => io::ErrorKind::InvalidInput,
            AppError::TemplateNotFound(_) | AppError::HistoryItemNotFound(_) => {
                io::ErrorKind::NotFound
            }
            AppError::BuiltInTemplateReadOnly(_) => io::ErrorKind::PermissionDenied,
            AppError::ClipboardError(_) => io::ErrorKind::Other,
        }
    }
}

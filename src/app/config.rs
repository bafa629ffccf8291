//! Data directory resolution and `config.toml` loading.

use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::{AppError, MAX_HISTORY_ITEMS};

/// Environment variable overriding the data directory.
pub const HOME_ENV: &str = "PROMPTFORGE_HOME";

/// File name of the optional configuration inside the data directory.
pub const CONFIG_FILE: &str = "config.toml";

const DEFAULT_PREVIEW_LENGTH: usize = 500;

/// User configuration. Every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Cap on stored history items.
    pub history_limit: usize,
    /// Whether `generate` records history.
    pub record_history: bool,
    /// Copy generated prompts without `--copy`.
    pub copy_to_clipboard: bool,
    /// Characters shown by variable previews.
    pub preview_length: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            history_limit: MAX_HISTORY_ITEMS,
            record_history: true,
            copy_to_clipboard: false,
            preview_length: DEFAULT_PREVIEW_LENGTH,
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.history_limit == 0 {
            return Err(AppError::config_error("history_limit must be at least 1"));
        }
        if self.preview_length == 0 {
            return Err(AppError::config_error("preview_length must be at least 1"));
        }
        Ok(())
    }
}

/// Resolve the data directory: `$PROMPTFORGE_HOME`, the platform data dir, or `./.promptforge`.
pub fn data_dir() -> PathBuf {
    if let Some(home) = env::var_os(HOME_ENV).filter(|v| !v.is_empty()) {
        return PathBuf::from(home);
    }
    match dirs::data_dir() {
        Some(dir) => dir.join("promptforge"),
        None => PathBuf::from(".promptforge"),
    }
}

/// Parse configuration text.
pub fn parse_config(content: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}

/// Load `config.toml` from `data_dir`. A missing file yields the defaults.
pub fn load_config(data_dir: &Path) -> Result<AppConfig, AppError> {
    let path = data_dir.join(CONFIG_FILE);
    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(AppConfig::default()),
        Err(err) => return Err(err.into()),
    };
    let config = parse_config(&content)?;
    tracing::debug!(path = %path.display(), ?config, "loaded configuration");
    Ok(config)
}

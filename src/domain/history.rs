//! Records of previously generated prompts.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use super::{AppError, Mode, PromptFields};

/// Default cap on stored history items.
pub const MAX_HISTORY_ITEMS: usize = 50;

const MINUTE_MS: i64 = 60_000;
const HOUR_MS: i64 = 3_600_000;
const DAY_MS: i64 = 86_400_000;
const WEEK_MS: i64 = 604_800_000;

/// Subset of the fields that produced a history item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HistoryMetadata {
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
    pub language: Option<String>,
}

impl From<&PromptFields> for HistoryMetadata {
    fn from(fields: &PromptFields) -> Self {
        let owned = |value: Option<&str>| value.map(str::to_string);
        Self {
            persona: owned(fields.persona()),
            use_case: owned(fields.use_case()),
            tone: owned(fields.tone()),
            output_format: owned(fields.output_format()),
            topic: owned(fields.topic()),
            language: owned(fields.language()),
        }
    }
}

/// A previously generated prompt. Never mutated once stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryItem {
    pub id: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    pub mode: Mode,
    pub prompt: String,
    #[serde(default)]
    pub metadata: HistoryMetadata,
}

impl HistoryItem {
    /// Case-insensitive match against prompt text, topic, persona and use case.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        let contains = |value: Option<&String>| {
            value.is_some_and(|v| v.to_lowercase().contains(&query))
        };
        self.prompt.to_lowercase().contains(&query)
            || contains(self.metadata.topic.as_ref())
            || contains(self.metadata.persona.as_ref())
            || contains(self.metadata.use_case.as_ref())
    }
}

/// Mode filter for history listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HistoryFilter {
    #[default]
    All,
    Only(Mode),
}

impl HistoryFilter {
    pub fn accepts(&self, item: &HistoryItem) -> bool {
        match self {
            HistoryFilter::All => true,
            HistoryFilter::Only(mode) => item.mode == *mode,
        }
    }
}

impl FromStr for HistoryFilter {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(HistoryFilter::All);
        }
        Mode::from_name(s)
            .map(HistoryFilter::Only)
            .ok_or_else(|| AppError::InvalidHistoryFilter(s.to_string()))
    }
}

impl fmt::Display for HistoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryFilter::All => f.write_str("all"),
            HistoryFilter::Only(mode) => write!(f, "{}", mode),
        }
    }
}

/// Aggregate counts over stored history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryStats {
    pub total: usize,
    pub general: usize,
    pub coding: usize,
    pub today: usize,
    pub this_week: usize,
}

impl HistoryStats {
    /// Compute counts relative to `now`. "Today" and "this week" are rolling windows.
    pub fn compute(items: &[HistoryItem], now: DateTime<Utc>) -> Self {
        let now_ms = now.timestamp_millis();
        let count = |pred: &dyn Fn(&HistoryItem) -> bool| items.iter().filter(|i| pred(i)).count();
        Self {
            total: items.len(),
            general: count(&|i| i.mode == Mode::General),
            coding: count(&|i| i.mode == Mode::Coding),
            today: count(&|i| i.timestamp > now_ms - DAY_MS),
            this_week: count(&|i| i.timestamp > now_ms - WEEK_MS),
        }
    }
}

fn plural(n: i64, unit: &str) -> String {
    format!("{} {}{} ago", n, unit, if n > 1 { "s" } else { "" })
}

/// Human-readable age of a timestamp.
pub fn format_relative(timestamp: i64, now: DateTime<Utc>) -> String {
    let diff = now.timestamp_millis() - timestamp;
    let minutes = diff.div_euclid(MINUTE_MS);
    let hours = diff.div_euclid(HOUR_MS);
    let days = diff.div_euclid(DAY_MS);

    if minutes < 1 {
        return "Just now".to_string();
    }
    if minutes < 60 {
        return plural(minutes, "min");
    }
    if hours < 24 {
        return plural(hours, "hour");
    }
    if days < 7 {
        return plural(days, "day");
    }

    match DateTime::from_timestamp_millis(timestamp) {
        Some(date) if date.year() != now.year() => date.format("%b %-d, %Y").to_string(),
        Some(date) => date.format("%b %-d").to_string(),
        None => timestamp.to_string(),
    }
}

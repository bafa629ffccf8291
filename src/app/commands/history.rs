use chrono::Utc;

use crate::app::AppContext;
use crate::domain::{AppError, HistoryFilter, HistoryItem, HistoryStats};
use crate::ports::{ClipboardWriter, KeyValueStore};

/// Listing options for stored history.
#[derive(Debug, Clone, Default)]
pub struct HistoryQuery {
    pub filter: HistoryFilter,
    pub search: Option<String>,
}

/// Items matching both the mode filter and the search text, newest first.
pub fn list<S, C>(ctx: &AppContext<S, C>, query: &HistoryQuery) -> Result<Vec<HistoryItem>, AppError>
where
    S: KeyValueStore,
    C: ClipboardWriter,
{
    let history = ctx.history();
    match query.search.as_deref() {
        Some(text) => {
            Ok(history.search(text)?.into_iter().filter(|item| query.filter.accepts(item)).collect())
        }
        None => history.filter(query.filter),
    }
}

pub fn show<S, C>(ctx: &AppContext<S, C>, id: &str) -> Result<HistoryItem, AppError>
where
    S: KeyValueStore,
    C: ClipboardWriter,
{
    ctx.history().get(id)
}

pub fn delete<S, C>(ctx: &AppContext<S, C>, id: &str) -> Result<(), AppError>
where
    S: KeyValueStore,
    C: ClipboardWriter,
{
    ctx.history().delete(id)
}

/// Remove all history. Returns how many items were removed.
pub fn clear<S, C>(ctx: &AppContext<S, C>) -> Result<usize, AppError>
where
    S: KeyValueStore,
    C: ClipboardWriter,
{
    let history = ctx.history();
    let count = history.all()?.len();
    history.clear()?;
    Ok(count)
}

pub fn stats<S, C>(ctx: &AppContext<S, C>) -> Result<HistoryStats, AppError>
where
    S: KeyValueStore,
    C: ClipboardWriter,
{
    ctx.history().stats(Utc::now())
}

use chrono::{DateTime, Utc};

use crate::domain::identifiers::history_id;
use crate::domain::{
    AppError, HistoryFilter, HistoryItem, HistoryMetadata, HistoryStats, MAX_HISTORY_ITEMS, Mode,
};
use crate::ports::KeyValueStore;

use super::collection;

/// Storage key holding the serialized history collection.
pub const HISTORY_KEY: &str = "promptforge_history";

/// Capped, newest-first log of generated prompts.
#[derive(Debug, Clone)]
pub struct HistoryLog<S> {
    store: S,
    limit: usize,
}

impl<S: KeyValueStore> HistoryLog<S> {
    pub fn new(store: S) -> Self {
        Self::with_limit(store, MAX_HISTORY_ITEMS)
    }

    /// Create a log that keeps at most `limit` items (at least one).
    pub fn with_limit(store: S, limit: usize) -> Self {
        Self { store, limit: limit.max(1) }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// All items, newest first.
    pub fn all(&self) -> Result<Vec<HistoryItem>, AppError> {
        let mut items: Vec<HistoryItem> = collection::load(&self.store, HISTORY_KEY)?;
        items.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(items)
    }

    /// Record a generated prompt now.
    pub fn record(
        &self,
        mode: Mode,
        prompt: &str,
        metadata: HistoryMetadata,
    ) -> Result<HistoryItem, AppError> {
        self.record_at(mode, prompt, metadata, Utc::now())
    }

    /// Record a generated prompt at `now`, evicting the oldest items beyond the cap.
    pub fn record_at(
        &self,
        mode: Mode,
        prompt: &str,
        metadata: HistoryMetadata,
        now: DateTime<Utc>,
    ) -> Result<HistoryItem, AppError> {
        let item = HistoryItem {
            id: history_id(now),
            timestamp: now.timestamp_millis(),
            mode,
            prompt: prompt.to_string(),
            metadata,
        };

        let mut items = self.all()?;
        items.insert(0, item.clone());
        items.truncate(self.limit);
        collection::save(&self.store, HISTORY_KEY, &items)?;

        tracing::debug!(id = %item.id, mode = %mode, kept = items.len(), "recorded history item");
        Ok(item)
    }

    pub fn get(&self, id: &str) -> Result<HistoryItem, AppError> {
        self.all()?
            .into_iter()
            .find(|item| item.id == id)
            .ok_or_else(|| AppError::HistoryItemNotFound(id.to_string()))
    }

    pub fn delete(&self, id: &str) -> Result<(), AppError> {
        let mut items = self.all()?;
        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() == before {
            return Err(AppError::HistoryItemNotFound(id.to_string()));
        }
        collection::save(&self.store, HISTORY_KEY, &items)
    }

    pub fn clear(&self) -> Result<(), AppError> {
        self.store.remove(HISTORY_KEY)
    }

    /// Items matching `query`; a blank query returns everything.
    pub fn search(&self, query: &str) -> Result<Vec<HistoryItem>, AppError> {
        let items = self.all()?;
        if query.trim().is_empty() {
            return Ok(items);
        }
        Ok(items.into_iter().filter(|item| item.matches(query)).collect())
    }

    pub fn filter(&self, filter: HistoryFilter) -> Result<Vec<HistoryItem>, AppError> {
        Ok(self.all()?.into_iter().filter(|item| filter.accepts(item)).collect())
    }

    pub fn stats(&self, now: DateTime<Utc>) -> Result<HistoryStats, AppError> {
        Ok(HistoryStats::compute(&self.all()?, now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::MemoryKeyValueStore;

    fn at(ms: i64) -> DateTime<Utc> {
        DateTime::from_timestamp_millis(ms).unwrap()
    }

    fn topic(text: &str) -> HistoryMetadata {
        HistoryMetadata { topic: Some(text.to_string()), ..Default::default() }
    }

    #[test]
    fn records_newest_first() {
        let log = HistoryLog::new(MemoryKeyValueStore::new());
        log.record_at(Mode::General, "first", topic("a"), at(1_000)).unwrap();
        log.record_at(Mode::Coding, "second", topic("b"), at(2_000)).unwrap();

        let prompts: Vec<_> = log.all().unwrap().into_iter().map(|i| i.prompt).collect();
        assert_eq!(prompts, vec!["second", "first"]);
    }

    #[test]
    fn evicts_oldest_beyond_limit() {
        let log = HistoryLog::with_limit(MemoryKeyValueStore::new(), 3);
        for n in 0..5 {
            log.record_at(Mode::General, &format!("p{}", n), topic("t"), at(n * 1_000)).unwrap();
        }
        let prompts: Vec<_> = log.all().unwrap().into_iter().map(|i| i.prompt).collect();
        assert_eq!(prompts, vec!["p4", "p3", "p2"]);
    }

    #[test]
    fn default_cap_is_fifty() {
        let log = HistoryLog::new(MemoryKeyValueStore::new());
        for n in 0..55 {
            log.record_at(Mode::General, "p", topic("t"), at(n)).unwrap();
        }
        assert_eq!(log.all().unwrap().len(), MAX_HISTORY_ITEMS);
    }

    #[test]
    fn zero_limit_still_keeps_one() {
        let log = HistoryLog::with_limit(MemoryKeyValueStore::new(), 0);
        assert_eq!(log.limit(), 1);
    }

    #[test]
    fn get_and_delete_by_id() {
        let log = HistoryLog::new(MemoryKeyValueStore::new());
        let item = log.record_at(Mode::General, "keep", topic("a"), at(1)).unwrap();
        let gone = log.record_at(Mode::General, "drop", topic("b"), at(2)).unwrap();

        log.delete(&gone.id).unwrap();
        assert_eq!(log.get(&item.id).unwrap().prompt, "keep");
        assert!(matches!(log.get(&gone.id), Err(AppError::HistoryItemNotFound(_))));
        assert!(matches!(log.delete(&gone.id), Err(AppError::HistoryItemNotFound(_))));
    }

    #[test]
    fn clear_removes_everything() {
        let store = MemoryKeyValueStore::new();
        let log = HistoryLog::new(store.clone());
        log.record_at(Mode::General, "x", topic("a"), at(1)).unwrap();
        log.clear().unwrap();
        assert!(log.all().unwrap().is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn search_and_filter() {
        let log = HistoryLog::new(MemoryKeyValueStore::new());
        log.record_at(Mode::General, "Write a poem", topic("Autumn"), at(1)).unwrap();
        log.record_at(Mode::Coding, "Fix the bug", topic("Parser"), at(2)).unwrap();

        assert_eq!(log.search("autumn").unwrap().len(), 1);
        assert_eq!(log.search("  ").unwrap().len(), 2);
        let coding = log.filter(HistoryFilter::Only(Mode::Coding)).unwrap();
        assert_eq!(coding.len(), 1);
        assert_eq!(coding[0].prompt, "Fix the bug");
    }

    #[test]
    fn corrupt_history_is_replaced_on_next_record() {
        let store = MemoryKeyValueStore::new();
        store.set(HISTORY_KEY, "not json").unwrap();
        let log = HistoryLog::new(store);
        assert!(log.all().unwrap().is_empty());
        log.record_at(Mode::General, "fresh", topic("a"), at(1)).unwrap();
        assert_eq!(log.all().unwrap().len(), 1);
    }

    #[test]
    fn stats_count_modes() {
        let log = HistoryLog::new(MemoryKeyValueStore::new());
        log.record_at(Mode::General, "a", topic("a"), at(1_000)).unwrap();
        log.record_at(Mode::Coding, "b", topic("b"), at(2_000)).unwrap();
        let stats = log.stats(at(3_000)).unwrap();
        assert_eq!((stats.total, stats.general, stats.coding, stats.today), (2, 1, 1, 2));
    }
}

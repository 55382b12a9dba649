//! # Query history
//!
//! The dashboard remembers what the user asked. [`QueryHistory`] keeps a JSON
//! array under [`HISTORY_KEY`], newest entry first, truncated to
//! [`HISTORY_LIMIT`] entries on every write. There is no deduplication: asking
//! the same question twice yields two entries.

use crate::export;
use crate::kv::{get_json, set_json, KeyValueStore};
use crate::models::HistoryEntry;

pub const HISTORY_KEY: &str = "queryHistory";
pub const HISTORY_LIMIT: usize = 50;

/// Capped query history over any [`KeyValueStore`].
#[derive(Clone, Debug)]
pub struct QueryHistory<S> {
    store: S,
}

impl<S: KeyValueStore> QueryHistory<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// All entries, newest first. Malformed storage reads as empty.
    pub fn entries(&self) -> Vec<HistoryEntry> {
        get_json(&self.store, HISTORY_KEY).unwrap_or_default()
    }

    /// Prepend an entry and drop everything past the limit.
    pub fn record(&self, entry: HistoryEntry) -> Vec<HistoryEntry> {
        let mut entries = self.entries();
        entries.insert(0, entry);
        entries.truncate(HISTORY_LIMIT);
        set_json(&self.store, HISTORY_KEY, &entries);
        entries
    }

    /// Entries whose query text contains `term`, ignoring case.
    pub fn search(&self, term: &str) -> Vec<HistoryEntry> {
        filter_entries(&self.entries(), term)
    }

    pub fn clear(&self) {
        set_json(&self.store, HISTORY_KEY, &Vec::<HistoryEntry>::new());
    }

    pub fn to_csv(&self) -> Result<String, csv::Error> {
        export::history_to_csv(&self.entries())
    }
}

/// Case-insensitive substring filter on the query text.
pub fn filter_entries(entries: &[HistoryEntry], term: &str) -> Vec<HistoryEntry> {
    let needle = term.trim().to_lowercase();
    entries
        .iter()
        .filter(|e| needle.is_empty() || e.query.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_record_prepends() {
        let history = QueryHistory::new(MemoryStore::new());
        history.record(HistoryEntry::now("first", "SELECT 1", 1));
        history.record(HistoryEntry::now("second", "SELECT 2", 2));

        let entries = history.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].query, "second");
        assert_eq!(entries[1].query, "first");
    }

    #[test]
    fn test_history_never_exceeds_limit() {
        let history = QueryHistory::new(MemoryStore::new());
        for i in 0..(HISTORY_LIMIT + 7) {
            let entries = history.record(HistoryEntry::now(format!("q{i}"), "SELECT 1", i));
            assert!(entries.len() <= HISTORY_LIMIT);
        }

        let entries = history.entries();
        assert_eq!(entries.len(), HISTORY_LIMIT);
        // Newest kept, oldest dropped
        assert_eq!(entries[0].query, format!("q{}", HISTORY_LIMIT + 6));
        assert_eq!(entries[HISTORY_LIMIT - 1].query, "q7");
    }

    #[test]
    fn test_duplicates_are_kept() {
        let history = QueryHistory::new(MemoryStore::new());
        history.record(HistoryEntry::now("same", "SELECT 1", 1));
        history.record(HistoryEntry::now("same", "SELECT 1", 1));
        assert_eq!(history.entries().len(), 2);
    }

    #[test]
    fn test_search_ignores_case() {
        let history = QueryHistory::new(MemoryStore::new());
        history.record(HistoryEntry::now("Airports in USA", "SELECT 1", 2));
        history.record(HistoryEntry::now("evening flights", "SELECT 2", 1));

        let hits = history.search("usa");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].query, "Airports in USA");

        assert_eq!(history.search("").len(), 2);
        assert!(history.search("trains").is_empty());
    }

    #[test]
    fn test_clear_and_malformed_storage() {
        let store = MemoryStore::new();
        let history = QueryHistory::new(store.clone());
        history.record(HistoryEntry::now("q", "SELECT 1", 0));
        history.clear();
        assert!(history.entries().is_empty());
        assert_eq!(store.get(HISTORY_KEY).as_deref(), Some("[]"));

        store.set(HISTORY_KEY, "oops");
        assert!(history.entries().is_empty());
        // Recording over garbage starts a fresh list
        history.record(HistoryEntry::now("q", "SELECT 1", 0));
        assert_eq!(history.entries().len(), 1);
    }
}

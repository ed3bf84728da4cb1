//! Search history - bounded, deduplicated, most-recent-first list of terms
//!
//! The list lives in a per-browser key/value store under [`HISTORY_KEY`] as a
//! JSON array of strings. The store is abstracted so the same logic runs over
//! the cookie jar in handlers and over a plain map in tests.

use std::fmt;

/// Storage key of the persisted list
pub const HISTORY_KEY: &str = "searchHistory";

/// Maximum number of remembered terms
pub const MAX_ENTRIES: usize = 5;

/// Longest term kept, in characters
pub const MAX_TERM_CHARS: usize = 200;

/// Budget for the percent-encoded value; browsers drop cookies over 4096
/// bytes, name and attributes included
pub const MAX_STORED_BYTES: usize = 3800;

/// Synchronous string key/value storage scoped to one browser
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: String);
    fn remove(&mut self, key: &str);
}

/// In-memory store for unit tests
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: std::collections::HashMap<String, String>,
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.values.insert(key.to_string(), value);
    }

    fn remove(&mut self, key: &str) {
        self.values.remove(key);
    }
}

/// The persisted value could not be read back as a list of terms
#[derive(Debug)]
pub struct CorruptHistory(pub String);

impl fmt::Display for CorruptHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Corrupt search history: {}", self.0)
    }
}

impl std::error::Error for CorruptHistory {}

/// Read the persisted list without repairing it
pub fn read_entries<S: KeyValueStore>(store: &S) -> Result<Vec<String>, CorruptHistory> {
    match store.get(HISTORY_KEY) {
        None => Ok(Vec::new()),
        Some(raw) => {
            serde_json::from_str::<Vec<String>>(&raw).map_err(|e| CorruptHistory(e.to_string()))
        }
    }
}

pub struct SearchHistory<S> {
    store: S,
    entries: Vec<String>,
}

impl<S: KeyValueStore> SearchHistory<S> {
    /// Load the list from `store`.
    ///
    /// A corrupt value is treated as an empty history; it stays in the store
    /// until the next `record` or `clear` overwrites it.
    pub fn load(store: S) -> Self {
        let entries = match read_entries(&store) {
            Ok(entries) => normalize(entries),
            Err(e) => {
                tracing::warn!("{}, treating as empty", e);
                Vec::new()
            }
        };
        Self { store, entries }
    }

    /// Terms, most recent first
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Move `term` to the front, dropping any earlier occurrence, and persist.
    /// Blank terms are ignored; long ones are cut to [`MAX_TERM_CHARS`].
    pub fn record(&mut self, term: &str) {
        if term.trim().is_empty() {
            return;
        }
        let term: String = term.chars().take(MAX_TERM_CHARS).collect();
        self.entries.retain(|existing| *existing != term);
        self.entries.insert(0, term);
        self.entries.truncate(MAX_ENTRIES);
        self.persist();
    }

    /// Forget everything and remove the persisted value
    pub fn clear(&mut self) {
        self.entries.clear();
        self.store.remove(HISTORY_KEY);
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Write the list, dropping the oldest entries until it fits the budget
    fn persist(&mut self) {
        loop {
            let json = match serde_json::to_string(&self.entries) {
                Ok(json) => json,
                Err(e) => {
                    tracing::error!("Failed to encode search history: {}", e);
                    return;
                }
            };
            if self.entries.len() <= 1 || encoded_len(&json) <= MAX_STORED_BYTES {
                self.store.set(HISTORY_KEY, json);
                return;
            }
            tracing::debug!("Search history over {} bytes, dropping oldest", MAX_STORED_BYTES);
            self.entries.pop();
        }
    }
}

/// Upper bound of the value's size once percent-encoded into a header
fn encoded_len(json: &str) -> usize {
    urlencoding::encode(json).len()
}

/// Drop blanks and repeats, keep the first occurrence, cap the length
fn normalize(entries: Vec<String>) -> Vec<String> {
    let mut kept: Vec<String> = Vec::with_capacity(MAX_ENTRIES);
    for entry in entries {
        if kept.len() == MAX_ENTRIES {
            break;
        }
        if !entry.trim().is_empty() && !kept.contains(&entry) {
            kept.push(entry);
        }
    }
    kept
}

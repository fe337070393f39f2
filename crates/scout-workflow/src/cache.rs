//! Explicit response cache owned by the workflow layer.
//!
//! Entries are keyed by `(endpoint, params)` and age out after a TTL.
//! Invalidation is explicit: the save operation drops the items listing, and
//! a new poll snapshot overwrites the previous one for its key. Presentation
//! code only reads; nothing outside this crate mutates entries.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use serde_json::Value;

/// Cache endpoint for poll snapshots, keyed by `(interaction id, cursor)`.
pub const POLL_ENDPOINT: &str = "gemini-poll";
/// Cache endpoint for the items listing.
pub const ITEMS_ENDPOINT: &str = "items";

/// Result of a cache lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    /// No entry for the key.
    Miss,
    /// An entry within its TTL.
    Fresh(Value),
    /// An entry past its TTL; usable as a fallback while refetching.
    Stale(Value),
}

#[derive(Debug)]
struct Entry {
    value: Value,
    stored_at: Instant,
}

/// In-memory response cache with per-entry TTL.
#[derive(Debug)]
pub struct ResponseCache {
    ttl: Duration,
    entries: HashMap<(String, String), Entry>,
}

impl ResponseCache {
    /// A cache whose entries stay fresh for `ttl`.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: HashMap::new(),
        }
    }

    /// Look up the entry for `(endpoint, params)`.
    #[must_use]
    pub fn get(&self, endpoint: &str, params: &str) -> Lookup {
        match self
            .entries
            .get(&(endpoint.to_string(), params.to_string()))
        {
            None => Lookup::Miss,
            Some(entry) if entry.stored_at.elapsed() < self.ttl => {
                Lookup::Fresh(entry.value.clone())
            }
            Some(entry) => Lookup::Stale(entry.value.clone()),
        }
    }

    /// Store (or overwrite) the entry for `(endpoint, params)`.
    pub fn put(&mut self, endpoint: &str, params: &str, value: Value) {
        self.entries.insert(
            (endpoint.to_string(), params.to_string()),
            Entry {
                value,
                stored_at: Instant::now(),
            },
        );
    }

    /// Drop every entry for `endpoint`. Returns how many were removed.
    pub fn invalidate(&mut self, endpoint: &str) -> usize {
        let before = self.entries.len();
        self.entries.retain(|(key, _), _| key != endpoint);
        before - self.entries.len()
    }

    /// Drop the single entry for `(endpoint, params)`.
    pub fn invalidate_entry(&mut self, endpoint: &str, params: &str) -> bool {
        self.entries
            .remove(&(endpoint.to_string(), params.to_string()))
            .is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::{ITEMS_ENDPOINT, Lookup, POLL_ENDPOINT, ResponseCache};
    use std::time::Duration;

    #[test]
    fn miss_then_fresh_after_put() {
        let mut cache = ResponseCache::new(Duration::from_secs(300));
        assert_eq!(cache.get(POLL_ENDPOINT, "int-1:"), Lookup::Miss);

        cache.put(POLL_ENDPOINT, "int-1:", json!({"status": "running"}));
        assert_eq!(
            cache.get(POLL_ENDPOINT, "int-1:"),
            Lookup::Fresh(json!({"status": "running"}))
        );
    }

    #[test]
    fn zero_ttl_entries_are_stale() {
        let mut cache = ResponseCache::new(Duration::ZERO);
        cache.put(POLL_ENDPOINT, "int-1:", json!(1));
        assert_eq!(cache.get(POLL_ENDPOINT, "int-1:"), Lookup::Stale(json!(1)));
    }

    #[test]
    fn put_overwrites_previous_snapshot_for_same_key() {
        let mut cache = ResponseCache::new(Duration::from_secs(300));
        cache.put(POLL_ENDPOINT, "int-1:ev-1", json!({"status": "pending"}));
        cache.put(POLL_ENDPOINT, "int-1:ev-1", json!({"status": "running"}));

        assert_eq!(cache.len(), 1);
        assert_eq!(
            cache.get(POLL_ENDPOINT, "int-1:ev-1"),
            Lookup::Fresh(json!({"status": "running"}))
        );
    }

    #[test]
    fn invalidate_drops_only_matching_endpoint() {
        let mut cache = ResponseCache::new(Duration::from_secs(300));
        cache.put(ITEMS_ENDPOINT, "skip=0", json!([1, 2]));
        cache.put(ITEMS_ENDPOINT, "skip=20", json!([3]));
        cache.put(POLL_ENDPOINT, "int-1:", json!({"status": "running"}));

        assert_eq!(cache.invalidate(ITEMS_ENDPOINT), 2);
        assert_eq!(cache.len(), 1);
        assert!(matches!(cache.get(POLL_ENDPOINT, "int-1:"), Lookup::Fresh(_)));
    }

    #[test]
    fn invalidate_entry_is_precise() {
        let mut cache = ResponseCache::new(Duration::from_secs(300));
        cache.put(POLL_ENDPOINT, "int-1:", json!(1));
        cache.put(POLL_ENDPOINT, "int-2:", json!(2));

        assert!(cache.invalidate_entry(POLL_ENDPOINT, "int-1:"));
        assert!(!cache.invalidate_entry(POLL_ENDPOINT, "int-1:"));
        assert_eq!(cache.len(), 1);
    }
}

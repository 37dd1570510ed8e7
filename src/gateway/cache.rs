//! Time-bounded response cache fronting the upstream API.
//!
//! This module provides [`ResponseCache`], a memoization layer keyed by logical
//! request identity ("all jobs", "page 3", ...). Repeated queries within the TTL
//! window reuse previously fetched payloads instead of re-fetching.
//!
//! The cache is an explicitly constructed, explicitly owned value composed into
//! the gateway, not a process-wide singleton. It has no size bound and no LRU
//! eviction: the keyspace is small and bounded by the number of distinct logical
//! queries. It is also not thread-safe, matching the single-threaded cooperative
//! execution model of the crate.

use chrono::{DateTime, Duration, Utc};
use serde_json::Value;
use std::collections::HashMap;

/// Cache time-to-live in milliseconds (5 minutes).
pub const CACHE_TTL_MS: i64 = 300_000;

/// One stored payload with its storage instant.
///
/// Expiry is measured from `stored_at` and is never refreshed on read (no
/// sliding expiration).
#[derive(Debug, Clone)]
struct CacheEntry {
    /// Raw fetched payload, kept as parsed JSON.
    payload: Value,

    /// Instant the payload was stored.
    stored_at: DateTime<Utc>,
}

/// In-memory TTL cache keyed by logical request key.
///
/// # Examples
///
/// ```
/// use jobflow::gateway::ResponseCache;
/// use serde_json::json;
///
/// let mut cache = ResponseCache::new();
/// cache.put("all_jobs", json!([]));
/// assert!(cache.get("all_jobs").is_some());
/// assert!(cache.get("paginated_jobs_2").is_none());
/// ```
#[derive(Debug)]
pub struct ResponseCache {
    /// Time-to-live applied to every entry.
    ttl: Duration,

    /// Stored entries, indexed by logical request key.
    entries: HashMap<String, CacheEntry>,
}

impl ResponseCache {
    /// Creates a cache with the default 5-minute TTL.
    #[must_use]
    pub fn new() -> Self {
        Self::with_ttl_ms(CACHE_TTL_MS)
    }

    /// Creates a cache with a custom TTL in milliseconds.
    ///
    /// Non-positive TTLs are permitted and make every `get` a miss, which is
    /// the supported way to disable caching.
    #[must_use]
    pub fn with_ttl_ms(ttl_ms: i64) -> Self {
        Self {
            ttl: Duration::milliseconds(ttl_ms),
            entries: HashMap::new(),
        }
    }

    /// Returns the stored payload for `key` if it is still fresh.
    ///
    /// An entry is fresh while `now - stored_at < TTL`. A stale entry is
    /// evicted on read and reported absent, so the caller re-fetches and
    /// re-stores it.
    pub fn get(&mut self, key: &str) -> Option<Value> {
        self.get_at(key, Utc::now())
    }

    /// [`ResponseCache::get`] with an explicit observation instant.
    pub fn get_at(&mut self, key: &str, now: DateTime<Utc>) -> Option<Value> {
        match self.entries.get(key) {
            Some(entry) if now - entry.stored_at < self.ttl => {
                tracing::debug!(key = %key, "cache hit");
                Some(entry.payload.clone())
            }
            Some(_) => {
                tracing::debug!(key = %key, "cache entry expired, evicting");
                self.entries.remove(key);
                None
            }
            None => {
                tracing::trace!(key = %key, "cache miss");
                None
            }
        }
    }

    /// Stores `payload` under `key`, stamped with the current instant.
    ///
    /// Unconditionally overwrites any existing entry for that key.
    pub fn put(&mut self, key: &str, payload: Value) {
        self.put_at(key, payload, Utc::now());
    }

    /// [`ResponseCache::put`] with an explicit storage instant.
    pub fn put_at(&mut self, key: &str, payload: Value, now: DateTime<Utc>) {
        tracing::debug!(key = %key, "caching payload");
        self.entries.insert(
            key.to_string(),
            CacheEntry {
                payload,
                stored_at: now,
            },
        );
    }

    /// Number of entries currently held, fresh or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn instant(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    #[test]
    fn get_within_ttl_returns_payload() {
        let mut cache = ResponseCache::new();
        let stored_at = instant(1_000_000);
        cache.put_at("all_jobs", json!({"n": 1}), stored_at);

        // One millisecond before expiry the entry is still fresh.
        let just_before = instant(1_000_000 + CACHE_TTL_MS - 1);
        assert_eq!(cache.get_at("all_jobs", just_before), Some(json!({"n": 1})));
    }

    #[test]
    fn get_at_exact_ttl_is_absent() {
        let mut cache = ResponseCache::new();
        cache.put_at("all_jobs", json!(1), instant(0));
        assert_eq!(cache.get_at("all_jobs", instant(CACHE_TTL_MS)), None);
    }

    #[test]
    fn get_after_ttl_evicts_and_reports_absent() {
        let mut cache = ResponseCache::new();
        cache.put_at("all_jobs", json!(1), instant(0));

        let just_after = instant(CACHE_TTL_MS + 1);
        assert_eq!(cache.get_at("all_jobs", just_after), None);
        // The stale entry was evicted, not merely hidden.
        assert!(cache.is_empty());
    }

    #[test]
    fn put_overwrites_existing_entry_and_timestamp() {
        let mut cache = ResponseCache::new();
        cache.put_at("paginated_jobs_1", json!("old"), instant(0));

        // Overwrite after the original entry went stale.
        let later = instant(CACHE_TTL_MS + 1);
        cache.put_at("paginated_jobs_1", json!("new"), later);

        assert_eq!(
            cache.get_at("paginated_jobs_1", instant(CACHE_TTL_MS + 2)),
            Some(json!("new"))
        );
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn keys_are_independent() {
        let mut cache = ResponseCache::new();
        cache.put_at("all_jobs", json!(1), instant(0));
        cache.put_at("paginated_jobs_2", json!(2), instant(0));

        let now = instant(10);
        assert_eq!(cache.get_at("all_jobs", now), Some(json!(1)));
        assert_eq!(cache.get_at("paginated_jobs_2", now), Some(json!(2)));
        assert_eq!(cache.get_at("random_job", now), None);
    }

    #[test]
    fn zero_ttl_disables_caching() {
        let mut cache = ResponseCache::with_ttl_ms(0);
        cache.put_at("all_jobs", json!(1), instant(0));
        assert_eq!(cache.get_at("all_jobs", instant(0)), None);
    }
}

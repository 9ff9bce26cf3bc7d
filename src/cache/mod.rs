//! Cache seam for feed snapshots.
//!
//! The service stores the normalized feed text under a fixed key with a
//! configured time-to-live, so repeated conversions within the TTL window
//! reuse one download. Every cache failure is swallowed by the service and
//! treated as a miss; a broken cache only costs extra fetches.
//!
//! [`MemoryCache`] is the bundled in-process implementation. Anything that can
//! store a string by key (redis, a file, a database row) can stand in by
//! implementing [`FeedCache`].

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use log::warn;

use crate::errors::CacheError;

/// Key-value store for feed snapshots with per-entry expiration.
pub trait FeedCache: Send + Sync {
    /// Return the stored value, or `None` on miss or after expiry.
    fn load(&self, key: &str) -> Result<Option<String>, CacheError>;

    /// Store a value that expires after `ttl`.
    /// Overwrites any previous value and restarts its clock.
    fn save(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError>;

    /// Drop the value, if present.
    fn remove(&self, key: &str) -> Result<(), CacheError>;
}

/// A single cached value with its expiration bookkeeping.
#[derive(Debug)]
struct Entry {
    value: String,
    stored_at: Instant,
    ttl: Duration,
}

/// In-process [`FeedCache`] backed by a mutex-guarded map.
///
/// Expired entries are dropped lazily on `load`. The cache is in-memory and
/// resets on application restart.
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, Entry>>,
}

impl MemoryCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock the entries mutex, recovering from poison if necessary.
    ///
    /// The worst case after recovery is a stale or missing snapshot, which the
    /// service already treats as a miss.
    fn lock_entries(&self) -> MutexGuard<'_, HashMap<String, Entry>> {
        self.entries.lock().unwrap_or_else(|poisoned| {
            warn!("Memory cache mutex was poisoned, recovering");
            poisoned.into_inner()
        })
    }
}

impl FeedCache for MemoryCache {
    fn load(&self, key: &str) -> Result<Option<String>, CacheError> {
        let mut entries = self.lock_entries();

        let expired = match entries.get(key) {
            Some(entry) => entry.stored_at.elapsed() >= entry.ttl,
            None => return Ok(None),
        };
        if expired {
            entries.remove(key);
            return Ok(None);
        }

        Ok(entries.get(key).map(|entry| entry.value.clone()))
    }

    fn save(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError> {
        self.lock_entries().insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                stored_at: Instant::now(),
                ttl,
            },
        );
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), CacheError> {
        self.lock_entries().remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_and_load() {
        let cache = MemoryCache::new();
        cache.save("feed", "EMU|euro|1|EUR|24,755", Duration::from_secs(60)).unwrap();

        assert_eq!(
            cache.load("feed").unwrap(),
            Some("EMU|euro|1|EUR|24,755".to_string())
        );
    }

    #[test]
    fn test_missing_key_is_none() {
        let cache = MemoryCache::new();
        assert_eq!(cache.load("feed").unwrap(), None);
    }

    #[test]
    fn test_entry_expires_after_ttl() {
        let cache = MemoryCache::new();
        cache.save("feed", "snapshot", Duration::from_millis(10)).unwrap();

        assert!(cache.load("feed").unwrap().is_some());

        std::thread::sleep(Duration::from_millis(20));
        assert_eq!(cache.load("feed").unwrap(), None);
    }

    #[test]
    fn test_save_overwrites_and_restarts_clock() {
        let cache = MemoryCache::new();
        cache.save("feed", "old", Duration::from_millis(10)).unwrap();

        std::thread::sleep(Duration::from_millis(20));
        cache.save("feed", "new", Duration::from_secs(60)).unwrap();

        assert_eq!(cache.load("feed").unwrap(), Some("new".to_string()));
    }

    #[test]
    fn test_remove_drops_entry() {
        let cache = MemoryCache::new();
        cache.save("feed", "snapshot", Duration::from_secs(60)).unwrap();

        cache.remove("feed").unwrap();
        assert_eq!(cache.load("feed").unwrap(), None);
    }

    #[test]
    fn test_remove_missing_key_is_ok() {
        let cache = MemoryCache::new();
        assert!(cache.remove("feed").is_ok());
    }

    #[test]
    fn test_keys_are_independent() {
        let cache = MemoryCache::new();
        cache.save("a", "first", Duration::from_secs(60)).unwrap();
        cache.save("b", "second", Duration::from_secs(60)).unwrap();

        cache.remove("a").unwrap();
        assert_eq!(cache.load("a").unwrap(), None);
        assert_eq!(cache.load("b").unwrap(), Some("second".to_string()));
    }
}

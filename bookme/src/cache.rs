//! In-process cache for computed availability.
//!
//! Entries expire lazily: nothing is evicted until the expired key is read
//! again. The cache is owned by the caller and passed into the operations
//! that need it, so tests and concurrent components can each hold their own
//! instance instead of sharing process-global state.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

use chrono::NaiveDate;

use crate::availability::Availability;

/// Default entry lifetime: one hour.
pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);

#[derive(Debug, Clone)]
struct Entry {
    value: Availability,
    expires_at: Instant,
}

/// A TTL cache keyed by room and date.
///
/// All methods take `&self`; the interior mutex makes the cache shareable
/// across threads behind an `Arc`.
///
/// # Examples
///
/// ```
/// use bookme::{Availability, AvailabilityCache};
/// use chrono::NaiveDate;
///
/// let cache = AvailabilityCache::new();
/// let date = NaiveDate::from_ymd_opt(2025, 12, 15).unwrap();
/// let key = AvailabilityCache::availability_key(3, date);
/// assert_eq!(key, "availability:3:2025-12-15");
///
/// cache.set(key.clone(), Availability::compute(3, date, &[]));
/// assert!(cache.get(&key).is_some());
/// assert!(cache.delete(&key));
/// assert!(!cache.delete(&key));
/// ```
#[derive(Debug)]
pub struct AvailabilityCache {
    entries: Mutex<HashMap<String, Entry>>,
    ttl: Duration,
}

impl Default for AvailabilityCache {
    fn default() -> Self {
        Self::new()
    }
}

impl AvailabilityCache {
    /// Creates an empty cache with the default one-hour TTL.
    #[must_use]
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }

    /// Creates an empty cache whose entries expire after `ttl`.
    #[must_use]
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// Builds the canonical cache key for a room's availability on a date.
    #[must_use]
    pub fn availability_key(room_id: i64, date: NaiveDate) -> String {
        cache_key(&["availability", &room_id.to_string(), &date.to_string()])
    }

    /// Looks up a live entry, evicting it first if it has expired.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Availability> {
        let mut entries = self.lock();
        match entries.get(key) {
            Some(entry) if entry.expires_at > Instant::now() => Some(entry.value.clone()),
            Some(_) => {
                entries.remove(key);
                None
            }
            None => None,
        }
    }

    /// Stores a value under `key` with the cache's configured TTL.
    pub fn set(&self, key: String, value: Availability) {
        self.set_with_ttl(key, value, self.ttl);
    }

    /// Stores a value under `key` with an explicit TTL.
    pub fn set_with_ttl(&self, key: String, value: Availability, ttl: Duration) {
        let entry = Entry {
            value,
            expires_at: Instant::now() + ttl,
        };
        self.lock().insert(key, entry);
    }

    /// Removes an entry, reporting whether it was present.
    ///
    /// Deleting a missing key is a no-op, so invalidation after a write
    /// never fails even when nothing was cached.
    pub fn delete(&self, key: &str) -> bool {
        self.lock().remove(key).is_some()
    }

    /// Drops every entry, live or expired.
    pub fn clear(&self) {
        self.lock().clear();
    }

    /// Returns the number of stored entries, including not-yet-evicted
    /// expired ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Checks whether the cache holds no entries at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, Entry>> {
        // A poisoned mutex only means another thread panicked mid-insert;
        // the map itself is still a valid cache.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Joins key parts with `:` into a cache key.
#[must_use]
pub fn cache_key(parts: &[&str]) -> String {
    parts.join(":")
}

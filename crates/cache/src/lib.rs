// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! TTL memoization cache for computed quote responses.
//!
//! Stores typed `Arc<V>` values, so a cache hit never re-serializes or
//! re-computes anything. Entries expire a fixed duration after they were
//! written, regardless of access. Expiry is checked on read; a stale entry
//! is dropped at the moment it is observed.
//!
//! ## Invariants
//!
//! - A cold or flushed cache changes latency only, never correctness
//! - Concurrent get/insert on distinct keys never interfere
//! - Concurrent insert on the same key is a benign race: values are
//!   deterministic for a given key, so last writer wins with an identical
//!   value
//!
//! There is no single-flight de-duplication: two requests racing on a cold
//! key may both compute and both write.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

use dashmap::DashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use stayquote_domain::{HotelId, StayRange, format_ymd_compact};
use tracing::debug;

/// Default time-to-live for quote cache entries.
pub const DEFAULT_QUOTE_TTL: Duration = Duration::from_secs(600);

/// Derives the deterministic cache key for a quote query.
///
/// The key is built from every field that influences the quote: hotel id,
/// the stay dates (compact `YYYYMMDD`), and the guest count. Two requests
/// with identical fields collide to the same key regardless of arrival
/// order; requests differing in any field (including guest count) never
/// collide.
#[must_use]
pub fn quote_cache_key(hotel_id: &HotelId, range: &StayRange, guests: u32) -> String {
    format!(
        "avail:{}:{}-{}:{guests}",
        hotel_id.value(),
        format_ymd_compact(range.check_in()),
        format_ymd_compact(range.check_out()),
    )
}

/// A cached value with its write timestamp.
struct CachedEntry<V> {
    /// When the value was written.
    stored_at: Instant,
    /// The cached value.
    value: Arc<V>,
}

/// In-process TTL cache mapping string keys to typed `Arc<V>` values.
///
/// Cheap to clone: clones share the same underlying map.
pub struct TtlCache<V> {
    /// key → (written-at, value)
    entries: Arc<DashMap<String, CachedEntry<V>>>,
    /// Fixed time-to-live applied to every entry.
    ttl: Duration,
}

impl<V> Clone for TtlCache<V> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
            ttl: self.ttl,
        }
    }
}

impl<V> TtlCache<V> {
    /// Creates a cache whose entries expire `ttl` after being written.
    #[must_use]
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
            ttl,
        }
    }

    /// Returns the configured time-to-live.
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns the cached value for `key` if present and fresh.
    ///
    /// An expired entry is removed the moment it is observed and reported
    /// as a miss.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Arc<V>> {
        // The read guard must be dropped before the remove below, or the
        // two would contend on the same shard.
        match self.entries.get(key) {
            None => return None,
            Some(entry) => {
                if entry.stored_at.elapsed() < self.ttl {
                    return Some(Arc::clone(&entry.value));
                }
            }
        }

        self.entries.remove(key);
        debug!(key, "dropped expired cache entry");
        None
    }

    /// Stores `value` under `key`, replacing any previous entry, and
    /// returns the shared handle to the stored value.
    pub fn insert(&self, key: String, value: V) -> Arc<V> {
        let value = Arc::new(value);
        self.entries.insert(
            key,
            CachedEntry {
                stored_at: Instant::now(),
                value: Arc::clone(&value),
            },
        );
        value
    }

    /// Removes every expired entry.
    ///
    /// Expired entries are already dropped lazily on read; this exists for
    /// callers that want to bound memory between reads.
    pub fn purge_expired(&self) {
        self.entries
            .retain(|_, entry| entry.stored_at.elapsed() < self.ttl);
    }

    /// Returns the number of entries currently stored, including any that
    /// have expired but not yet been observed.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether the cache holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Process-lifetime memoization for the feed transformation.
//!
//! The cache provides single-flight semantics: under concurrent first access
//! to the same key, at most one caller runs the computation while the others
//! block until the value is available, and every reader observes either a
//! fully-computed value or none. Keys are derived from a content hash of the
//! actual feed inputs, so distinct feed sets rendered within one process
//! never collide with each other.

use std::{
    hash::{DefaultHasher, Hash, Hasher},
    sync::{Arc, OnceLock}
};

use dashmap::DashMap;

use crate::feed::{Feed, FeedRecord};

/// Shared single-flight cache for transformed feed records.
///
/// Cloning the cache is cheap and yields a handle to the same underlying
/// storage, so one instance can serve concurrent page renders. Entries are
/// retained for the lifetime of the process unless explicitly invalidated.
///
/// # Examples
///
/// ```
/// use sbtn::{Feed, TransformCache, feed_cache_key, transform_feeds};
///
/// let cache = TransformCache::new();
/// let feeds = vec![Feed {
///     media_type:    "audio/mpeg".to_owned(),
///     extension:     "mp3".to_owned(),
///     subscribe_url: "https://example.org/feed.rss".to_owned(),
///     directory_id:  None
/// }];
///
/// let key = feed_cache_key(&feeds);
/// let records = cache.cache_for(&key, || transform_feeds(&feeds));
/// assert_eq!(records.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TransformCache {
    entries: Arc<DashMap<String, Arc<OnceLock<Arc<[FeedRecord]>>>>>
}

impl TransformCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached value for `key`, computing it at most once.
    ///
    /// Concurrent callers racing on the same key block until the winning
    /// computation finishes and then share its result. The computation runs
    /// outside the map shard lock, so unrelated keys are never blocked by an
    /// in-flight computation.
    pub fn cache_for(
        &self,
        key: &str,
        compute: impl FnOnce() -> Vec<FeedRecord>
    ) -> Arc<[FeedRecord]> {
        let cell = self
            .entries
            .entry(key.to_owned())
            .or_insert_with(|| Arc::new(OnceLock::new()))
            .clone();

        cell.get_or_init(|| Arc::from(compute())).clone()
    }

    /// Drops the entry stored under `key`, returning `true` when one existed.
    ///
    /// The next `cache_for` call for the key starts a fresh cache generation
    /// and recomputes lazily.
    pub fn invalidate(&self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Drops every cached entry.
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Number of cached keys, counting entries still being computed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when no key has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Derives the cache key for a feed collection.
///
/// The key covers every field that influences the transformation, so two
/// collections share a key only when they would produce identical records.
/// The hash is stable within a process, which matches the process-lifetime
/// retention of [`TransformCache`].
pub fn feed_cache_key(feeds: &[Feed]) -> String {
    let mut hasher = DefaultHasher::new();
    feeds.hash(&mut hasher);
    format!("feeds-{:016x}", hasher.finish())
}

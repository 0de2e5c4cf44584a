// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Optional TTL cache for loaded corpora.
//!
//! The loader recomputes the corpus from disk on every call unless it was
//! constructed with a cache. A cache is keyed by posts directory, so one
//! instance can be shared between loaders (wrap it in an `Arc`). Entries older
//! than the TTL are treated as absent; a zero TTL never hits.
//!
//! Only successful enumerations are stored. A failed directory read is never
//! cached, so the next call retries the disk.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::types::PostMetadata;

struct CacheEntry {
    loaded_at: Instant,
    posts: Arc<Vec<PostMetadata>>,
}

pub struct CorpusCache {
    ttl: Duration,
    entries: RwLock<HashMap<PathBuf, CacheEntry>>,
}

impl CorpusCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Fresh entry for `dir`, if any.
    pub fn get(&self, dir: &Path) -> Option<Arc<Vec<PostMetadata>>> {
        let entries = self.entries.read();
        let entry = entries.get(dir)?;
        if entry.loaded_at.elapsed() < self.ttl {
            Some(Arc::clone(&entry.posts))
        } else {
            None
        }
    }

    pub fn put(&self, dir: &Path, posts: Arc<Vec<PostMetadata>>) {
        if self.ttl.is_zero() {
            return;
        }
        self.entries.write().insert(
            dir.to_path_buf(),
            CacheEntry {
                loaded_at: Instant::now(),
                posts,
            },
        );
    }

    pub fn invalidate(&self, dir: &Path) {
        self.entries.write().remove(dir);
    }

    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

impl std::fmt::Debug for CorpusCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CorpusCache")
            .field("ttl", &self.ttl)
            .field("entries", &self.entries.read().len())
            .finish()
    }
}

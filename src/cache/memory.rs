// MemoryCache — in-process ClassificationCache backed by a HashMap.
//
// Used by tests and by callers that want per-process memoization only.

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio::sync::Mutex;

use super::models::{CacheKey, CachedClassification};
use super::traits::ClassificationCache;
use crate::models::ClassificationResult;

#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, CachedClassification>>,
    ttl: Option<Duration>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entries older than `ttl` are ignored by `get`.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            ttl: Some(ttl),
        }
    }

    /// Insert an entry with an explicit timestamp.
    pub async fn insert(&self, entry: CachedClassification) {
        self.entries.lock().await.insert(entry.key.clone(), entry);
    }
}

#[async_trait]
impl ClassificationCache for MemoryCache {
    async fn get(&self, key: &CacheKey) -> Result<Option<ClassificationResult>> {
        let entries = self.entries.lock().await;
        let Some(entry) = entries.get(&key.storage_key()) else {
            return Ok(None);
        };
        if let Some(ttl) = self.ttl {
            if Utc::now() - entry.stored_at > ttl {
                return Ok(None);
            }
        }
        Ok(Some(entry.result.clone()))
    }

    async fn put(&self, key: &CacheKey, result: &ClassificationResult) -> Result<()> {
        let storage_key = key.storage_key();
        let entry = CachedClassification {
            key: storage_key.clone(),
            result: result.clone(),
            stored_at: Utc::now(),
        };
        self.entries.lock().await.insert(storage_key, entry);
        Ok(())
    }

    async fn len(&self) -> Result<usize> {
        Ok(self.entries.lock().await.len())
    }

    async fn recent(&self, limit: usize) -> Result<Vec<CachedClassification>> {
        let entries = self.entries.lock().await;
        let mut all: Vec<CachedClassification> = entries.values().cloned().collect();
        all.sort_by(|a, b| b.stored_at.cmp(&a.stored_at).then_with(|| a.key.cmp(&b.key)));
        all.truncate(limit);
        Ok(all)
    }

    async fn clear(&self) -> Result<usize> {
        let mut entries = self.entries.lock().await;
        let removed = entries.len();
        entries.clear();
        Ok(removed)
    }
}

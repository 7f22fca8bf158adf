// ClassificationCache — backend-agnostic async interface for stored results.
//
// Implementors: MemoryCache (in-process map), SqliteCache (wraps rusqlite),
// NoCache (never stores anything). Entries older than the backend's TTL are
// treated as absent by `get`.

use anyhow::Result;
use async_trait::async_trait;

use super::models::{CacheKey, CachedClassification};
use crate::models::ClassificationResult;

#[async_trait]
pub trait ClassificationCache: Send + Sync {
    /// Look up a fresh entry.
    async fn get(&self, key: &CacheKey) -> Result<Option<ClassificationResult>>;

    /// Store (or replace) an entry, stamping it with the current time.
    async fn put(&self, key: &CacheKey, result: &ClassificationResult) -> Result<()>;

    /// Number of stored entries, stale ones included.
    async fn len(&self) -> Result<usize>;

    /// Most recently stored entries, newest first.
    async fn recent(&self, limit: usize) -> Result<Vec<CachedClassification>>;

    /// Delete every entry and return how many were removed.
    async fn clear(&self) -> Result<usize>;
}

/// A cache that never hits and silently drops writes.
pub struct NoCache;

#[async_trait]
impl ClassificationCache for NoCache {
    async fn get(&self, _key: &CacheKey) -> Result<Option<ClassificationResult>> {
        Ok(None)
    }

    async fn put(&self, _key: &CacheKey, _result: &ClassificationResult) -> Result<()> {
        Ok(())
    }

    async fn len(&self) -> Result<usize> {
        Ok(0)
    }

    async fn recent(&self, _limit: usize) -> Result<Vec<CachedClassification>> {
        Ok(Vec::new())
    }

    async fn clear(&self) -> Result<usize> {
        Ok(0)
    }
}

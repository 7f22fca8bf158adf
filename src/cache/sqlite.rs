// SqliteCache — rusqlite backend implementing ClassificationCache.
//
// Connection is !Sync, so it sits behind tokio::sync::Mutex. Each method
// locks, runs the synchronous query from queries.rs, and returns; the guard
// is never held across an .await.

use anyhow::Result;
use async_trait::async_trait;
use rusqlite::Connection;
use tokio::sync::Mutex;

use super::models::{CacheKey, CachedClassification};
use super::traits::ClassificationCache;
use crate::models::ClassificationResult;

pub struct SqliteCache {
    conn: Mutex<Connection>,
    ttl_days: Option<i64>,
}

impl SqliteCache {
    /// Wrap an already-opened connection whose tables exist.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
            ttl_days: None,
        }
    }

    /// Entries older than `days` are treated as misses.
    pub fn with_ttl_days(mut self, days: i64) -> Self {
        self.ttl_days = Some(days);
        self
    }

    pub async fn table_count(&self) -> Result<i64> {
        let conn = self.conn.lock().await;
        super::schema::table_count(&conn)
    }
}

#[async_trait]
impl ClassificationCache for SqliteCache {
    async fn get(&self, key: &CacheKey) -> Result<Option<ClassificationResult>> {
        let conn = self.conn.lock().await;
        super::queries::get_entry(&conn, &key.storage_key(), self.ttl_days)
    }

    async fn put(&self, key: &CacheKey, result: &ClassificationResult) -> Result<()> {
        let conn = self.conn.lock().await;
        super::queries::put_entry(&conn, &key.storage_key(), result)
    }

    async fn len(&self) -> Result<usize> {
        let conn = self.conn.lock().await;
        super::queries::count_entries(&conn)
    }

    async fn recent(&self, limit: usize) -> Result<Vec<CachedClassification>> {
        let conn = self.conn.lock().await;
        super::queries::recent_entries(&conn, limit)
    }

    async fn clear(&self) -> Result<usize> {
        let conn = self.conn.lock().await;
        super::queries::clear_entries(&conn)
    }
}

// Cache layer — stored classification results keyed by page.
//
// The SQLite backend uses rusqlite with the "bundled" feature so there's no
// system SQLite dependency. The database file lives wherever IABTAG_DB_PATH
// points (defaults to the platform cache directory).

pub mod memory;
pub mod models;
pub mod traits;

#[cfg(feature = "sqlite")]
pub mod queries;
#[cfg(feature = "sqlite")]
pub mod schema;
#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use memory::MemoryCache;
pub use models::{CacheKey, CachedClassification};
pub use traits::{ClassificationCache, NoCache};

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteCache;

#[cfg(feature = "sqlite")]
use anyhow::{Context, Result};
#[cfg(feature = "sqlite")]
use rusqlite::Connection;
#[cfg(feature = "sqlite")]
use std::path::Path;

/// Open (or create) the cache database and create its tables.
///
/// Called by `iabtag init` and by `classify`, which creates the cache on
/// first use.
#[cfg(feature = "sqlite")]
pub fn initialize(db_path: &str) -> Result<Connection> {
    if let Some(parent) = Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory for cache: {}", db_path))?;
        }
    }

    let conn = Connection::open(db_path)
        .with_context(|| format!("Failed to open cache database at {}", db_path))?;

    conn.pragma_update(None, "journal_mode", "WAL")?;
    schema::create_tables(&conn)?;

    Ok(conn)
}

/// Open an existing cache database (fails if it doesn't exist yet).
#[cfg(feature = "sqlite")]
pub fn open(db_path: &str) -> Result<Connection> {
    if !Path::new(db_path).exists() {
        anyhow::bail!(
            "Cache database not found at {}. Run `iabtag init` first.",
            db_path
        );
    }

    let conn = Connection::open(db_path)
        .with_context(|| format!("Failed to open cache database at {}", db_path))?;

    conn.pragma_update(None, "journal_mode", "WAL")?;

    Ok(conn)
}

/// Create the cache database if needed and wrap it in a SqliteCache.
#[cfg(feature = "sqlite")]
pub fn initialize_sqlite(db_path: &str, ttl_days: Option<i64>) -> Result<SqliteCache> {
    let conn = initialize(db_path)?;
    Ok(with_ttl(SqliteCache::new(conn), ttl_days))
}

/// Open an existing cache database as a SqliteCache.
#[cfg(feature = "sqlite")]
pub fn open_sqlite(db_path: &str, ttl_days: Option<i64>) -> Result<SqliteCache> {
    let conn = open(db_path)?;
    Ok(with_ttl(SqliteCache::new(conn), ttl_days))
}

#[cfg(feature = "sqlite")]
fn with_ttl(cache: SqliteCache, ttl_days: Option<i64>) -> SqliteCache {
    match ttl_days {
        Some(days) => cache.with_ttl_days(days),
        None => cache,
    }
}

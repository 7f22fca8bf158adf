// Cache schema — table creation.
//
// Results are stored as JSON text so the output shape can evolve without a
// migration. `schema_version` is kept for future migrations.

use anyhow::{Context, Result};
use rusqlite::Connection;

/// Create all tables if they don't exist yet. Idempotent.
pub fn create_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        "
        CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        -- One row per page: url:<url> or sha256:<hex of page text>
        CREATE TABLE IF NOT EXISTS classification_cache (
            cache_key TEXT PRIMARY KEY,
            result_json TEXT NOT NULL,
            stored_at TEXT NOT NULL DEFAULT (datetime('now'))
        );

        CREATE INDEX IF NOT EXISTS idx_classification_cache_stored_at
            ON classification_cache (stored_at);

        INSERT OR IGNORE INTO schema_version (version) VALUES (1);
        ",
    )
    .context("Failed to create cache tables")?;

    Ok(())
}

/// Count user-created tables.
pub fn table_count(conn: &Connection) -> Result<i64> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name NOT LIKE 'sqlite_%'",
        [],
        |row| row.get(0),
    )?;
    Ok(count)
}

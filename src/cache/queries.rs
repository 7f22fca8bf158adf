// Cache queries — every SQL statement the SQLite cache runs.
//
// Free functions over a borrowed Connection so they can be tested directly
// against an in-memory database.

use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};

use super::models::{parse_sqlite_timestamp, CachedClassification};
use crate::models::ClassificationResult;

/// Fetch an entry's result, ignoring entries older than `max_age_days`.
pub fn get_entry(
    conn: &Connection,
    key: &str,
    max_age_days: Option<i64>,
) -> Result<Option<ClassificationResult>> {
    let json: Option<String> = match max_age_days {
        Some(days) => conn
            .query_row(
                "SELECT result_json FROM classification_cache
                 WHERE cache_key = ?1 AND datetime(stored_at) >= datetime('now', ?2)",
                params![key, format!("-{days} days")],
                |row| row.get(0),
            )
            .optional()?,
        None => conn
            .query_row(
                "SELECT result_json FROM classification_cache WHERE cache_key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?,
    };

    json.map(|j| {
        serde_json::from_str(&j).with_context(|| format!("Corrupt cache entry for {key}"))
    })
    .transpose()
}

/// Insert or replace an entry, stamping it with the current time.
pub fn put_entry(conn: &Connection, key: &str, result: &ClassificationResult) -> Result<()> {
    let json = serde_json::to_string(result)?;
    conn.execute(
        "INSERT INTO classification_cache (cache_key, result_json, stored_at)
         VALUES (?1, ?2, datetime('now'))
         ON CONFLICT(cache_key) DO UPDATE SET result_json = ?2, stored_at = datetime('now')",
        params![key, json],
    )?;
    Ok(())
}

/// Insert an entry with an explicit `stored_at` (SQLite datetime format).
pub fn put_entry_at(
    conn: &Connection,
    key: &str,
    result: &ClassificationResult,
    stored_at: &str,
) -> Result<()> {
    let json = serde_json::to_string(result)?;
    conn.execute(
        "INSERT INTO classification_cache (cache_key, result_json, stored_at)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(cache_key) DO UPDATE SET result_json = ?2, stored_at = ?3",
        params![key, json, stored_at],
    )?;
    Ok(())
}

pub fn count_entries(conn: &Connection) -> Result<usize> {
    let count: i64 =
        conn.query_row("SELECT COUNT(*) FROM classification_cache", [], |row| row.get(0))?;
    Ok(usize::try_from(count).unwrap_or(0))
}

/// Most recently stored entries, newest first.
pub fn recent_entries(conn: &Connection, limit: usize) -> Result<Vec<CachedClassification>> {
    let mut stmt = conn.prepare(
        "SELECT cache_key, result_json, stored_at FROM classification_cache
         ORDER BY stored_at DESC, cache_key ASC
         LIMIT ?1",
    )?;
    let rows = stmt
        .query_map(params![limit as i64], |row| {
            Ok((
                row.get::<_, String>(0)?,
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
            ))
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    rows.into_iter()
        .map(|(key, json, stored_at)| {
            let result = serde_json::from_str(&json)
                .with_context(|| format!("Corrupt cache entry for {key}"))?;
            let stored_at = parse_sqlite_timestamp(&stored_at)
                .with_context(|| format!("Bad timestamp {stored_at:?} for {key}"))?;
            Ok(CachedClassification {
                key,
                result,
                stored_at,
            })
        })
        .collect()
}

/// Delete every entry, returning the number removed.
pub fn clear_entries(conn: &Connection) -> Result<usize> {
    let removed = conn.execute("DELETE FROM classification_cache", [])?;
    Ok(removed)
}

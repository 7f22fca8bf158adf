// Cache models — keys and stored entries.
//
// A page is keyed by its URL when one is known, otherwise by a sha256
// fingerprint of its text. Storage keys carry a prefix so the two kinds can
// never collide.

use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::models::ClassificationResult;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    Url(String),
    /// Lowercase hex sha256 of the page text
    Content(String),
}

impl CacheKey {
    pub fn for_url(url: &str) -> Self {
        CacheKey::Url(url.trim().to_string())
    }

    pub fn for_content(text: &str) -> Self {
        let digest = Sha256::digest(text.as_bytes());
        CacheKey::Content(hex::encode(digest))
    }

    /// URL key when a non-blank URL is given, content fingerprint otherwise.
    pub fn for_page(url: Option<&str>, text: &str) -> Self {
        match url.map(str::trim).filter(|u| !u.is_empty()) {
            Some(url) => Self::for_url(url),
            None => Self::for_content(text),
        }
    }

    /// The string stored in the cache table.
    pub fn storage_key(&self) -> String {
        match self {
            CacheKey::Url(url) => format!("url:{url}"),
            CacheKey::Content(hash) => format!("sha256:{hash}"),
        }
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.storage_key())
    }
}

/// A stored classification with the time it was written.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CachedClassification {
    pub key: String,
    pub result: ClassificationResult,
    pub stored_at: DateTime<Utc>,
}

/// Parse SQLite's `datetime('now')` format ("YYYY-MM-DD HH:MM:SS", UTC).
pub fn parse_sqlite_timestamp(value: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}

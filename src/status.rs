// Cache status display — database location, size, entry count, recent pages.

use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

use crate::cache::ClassificationCache;
use crate::output::terminal;

/// Display cache status to the terminal.
pub async fn show(cache: &Arc<dyn ClassificationCache>, db_display_path: &str) -> Result<()> {
    if !Path::new(db_display_path).exists() {
        println!("Cache: not initialized");
        println!("\nRun `iabtag init` to set up the cache database.");
        return Ok(());
    }

    let file_size = std::fs::metadata(db_display_path)
        .map(|m| format_bytes(m.len()))
        .unwrap_or_else(|_| "unknown".to_string());
    println!("Cache: {} ({})", db_display_path, file_size);

    let count = cache.len().await?;
    println!("Cached classifications: {}", count);

    let recent = cache.recent(5).await?;
    if !recent.is_empty() {
        println!("Most recent:");
    }
    terminal::display_recent(&recent);

    Ok(())
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{} B", bytes)
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}

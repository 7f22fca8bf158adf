use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::capabilities::passthrough::DEFAULT_MAX_CHARS;
use crate::classifier::ClassifierSettings;
use crate::signals::StopWords;
use crate::taxonomy::Taxonomy;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy. Every
/// variable is optional; unset ones fall back to the classifier defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite cache file
    pub db_path: String,
    /// JSON taxonomy asset replacing the built-in table
    pub taxonomy_path: Option<PathBuf>,
    pub min_score: Option<f64>,
    pub significance_threshold: Option<f64>,
    pub stop_words: StopWords,
    /// Characters of raw page text handed to the classifier
    pub max_input_chars: usize,
    /// Cached results older than this are reclassified
    pub cache_ttl_days: Option<i64>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup (the environment, or a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let stop_words = match get("IABTAG_STOP_WORDS") {
            Some(value) => value.parse::<StopWords>()?,
            None => StopWords::default(),
        };

        let max_input_chars = parse_var(&get, "IABTAG_MAX_INPUT_CHARS")?.unwrap_or(DEFAULT_MAX_CHARS);
        if max_input_chars == 0 {
            anyhow::bail!("IABTAG_MAX_INPUT_CHARS must be greater than zero");
        }

        let cache_ttl_days: Option<i64> = parse_var(&get, "IABTAG_CACHE_TTL_DAYS")?;
        if cache_ttl_days.is_some_and(|d| d <= 0) {
            anyhow::bail!("IABTAG_CACHE_TTL_DAYS must be a positive number of days");
        }

        Ok(Self {
            db_path: get("IABTAG_DB_PATH").unwrap_or_else(default_db_path),
            taxonomy_path: get("IABTAG_TAXONOMY_PATH").map(PathBuf::from),
            min_score: parse_var(&get, "IABTAG_MIN_SCORE")?,
            significance_threshold: parse_var(&get, "IABTAG_SIGNIFICANCE_THRESHOLD")?,
            stop_words,
            max_input_chars,
            cache_ttl_days,
        })
    }

    /// Classifier settings with any configured overrides applied.
    pub fn classifier_settings(&self) -> Result<ClassifierSettings> {
        let mut settings = ClassifierSettings {
            stop_words: self.stop_words,
            ..Default::default()
        };
        if let Some(min_score) = self.min_score {
            settings.min_score = min_score;
        }
        if let Some(threshold) = self.significance_threshold {
            settings.significance_threshold = threshold;
        }
        settings
            .validate()
            .context("Invalid classifier settings in environment")?;
        Ok(settings)
    }

    /// The configured taxonomy asset, or the built-in table.
    pub fn taxonomy(&self) -> Result<Taxonomy> {
        match &self.taxonomy_path {
            Some(path) => Taxonomy::load(path),
            None => Ok(Taxonomy::builtin()),
        }
    }
}

/// Platform cache directory, or the working directory when there is none.
pub fn default_db_path() -> String {
    dirs::cache_dir()
        .map(|dir| dir.join("iabtag").join("cache.db"))
        .unwrap_or_else(|| PathBuf::from("./iabtag.db"))
        .to_string_lossy()
        .into_owned()
}

fn parse_var<T>(get: &impl Fn(&str) -> Option<String>, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    get(key)
        .map(|value| {
            value
                .trim()
                .parse::<T>()
                .map_err(|e| anyhow::anyhow!("Invalid {key} value {value:?}: {e}"))
        })
        .transpose()
}

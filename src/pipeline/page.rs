// Page pipeline: cached result or summary -> language -> classify -> store.
//
// For each page this pipeline:
// 1. Returns the cached classification if one is fresh
// 2. Summarizes the page text (no summary means the page is skipped)
// 3. Detects the summary's language and translates it to English if needed
// 4. Optionally asks a prompt model for the page's sentiment
// 5. Classifies the (translated) summary and stores the result
//
// Only the summary is required. Every later stage degrades to the text it
// was given, and cache failures never lose a fresh result.

use std::sync::Arc;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::cache::{CacheKey, ClassificationCache};
use crate::capabilities::{
    LanguageDetector, LanguageModel, LanguagePair, Summarizer, SummarizerOptions, Translator,
    Unavailable,
};
use crate::classifier::Classifier;
use crate::models::ClassificationResult;
use crate::sentiment::{analyze_sentiment, Sentiment};

/// Language the classifier's keyword tables are written in.
pub const TARGET_LANGUAGE: &str = "en";

/// A page to classify.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageInput {
    #[serde(default)]
    pub url: Option<String>,
    pub content: String,
}

impl PageInput {
    pub fn new(url: Option<&str>, content: impl Into<String>) -> Self {
        Self {
            url: url.map(str::to_string),
            content: content.into(),
        }
    }

    pub fn cache_key(&self) -> CacheKey {
        CacheKey::for_page(self.url.as_deref(), &self.content)
    }
}

/// Text after the language stage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessedText {
    pub text: String,
    /// Detected language, when detection succeeded
    pub language: Option<String>,
    pub translated: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PageOutcome {
    /// A fresh cache entry was returned; no capability ran
    Cached {
        key: String,
        result: ClassificationResult,
    },
    Classified {
        key: String,
        result: ClassificationResult,
        /// The text that was classified
        text: String,
        language: Option<String>,
        translated: bool,
        sentiment: Option<Sentiment>,
    },
    /// The summarizer was unavailable or produced nothing
    NoSummary { key: String },
}

impl PageOutcome {
    pub fn result(&self) -> Option<&ClassificationResult> {
        match self {
            PageOutcome::Cached { result, .. } | PageOutcome::Classified { result, .. } => {
                Some(result)
            }
            PageOutcome::NoSummary { .. } => None,
        }
    }

    pub fn key(&self) -> &str {
        match self {
            PageOutcome::Cached { key, .. }
            | PageOutcome::Classified { key, .. }
            | PageOutcome::NoSummary { key } => key,
        }
    }

    pub fn is_cached(&self) -> bool {
        matches!(self, PageOutcome::Cached { .. })
    }
}

pub struct PagePipeline {
    classifier: Arc<Classifier>,
    summarizer: Arc<dyn Summarizer>,
    detector: Arc<dyn LanguageDetector>,
    translator: Arc<dyn Translator>,
    language_model: Option<Arc<dyn LanguageModel>>,
    cache: Arc<dyn ClassificationCache>,
    summarizer_options: SummarizerOptions,
}

impl PagePipeline {
    /// A pipeline with no language support and no sentiment stage.
    pub fn new(
        classifier: Arc<Classifier>,
        summarizer: Arc<dyn Summarizer>,
        cache: Arc<dyn ClassificationCache>,
    ) -> Self {
        Self {
            classifier,
            summarizer,
            detector: Arc::new(Unavailable),
            translator: Arc::new(Unavailable),
            language_model: None,
            cache,
            summarizer_options: SummarizerOptions::default(),
        }
    }

    pub fn with_language_support(
        mut self,
        detector: Arc<dyn LanguageDetector>,
        translator: Arc<dyn Translator>,
    ) -> Self {
        self.detector = detector;
        self.translator = translator;
        self
    }

    pub fn with_sentiment(mut self, model: Arc<dyn LanguageModel>) -> Self {
        self.language_model = Some(model);
        self
    }

    pub fn with_summarizer_options(mut self, options: SummarizerOptions) -> Self {
        self.summarizer_options = options;
        self
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    /// Run one page through every stage.
    ///
    /// Errors only come from the summarizer; everything after it degrades.
    pub async fn run(&self, page: &PageInput) -> Result<PageOutcome> {
        let key = page.cache_key();
        let storage_key = key.storage_key();

        match self.cache.get(&key).await {
            Ok(Some(result)) => {
                info!(key = %storage_key, "Using cached classification");
                return Ok(PageOutcome::Cached {
                    key: storage_key,
                    result,
                });
            }
            Ok(None) => debug!(key = %storage_key, "Cache miss"),
            Err(e) => warn!(key = %storage_key, error = %e, "Cache read failed, classifying fresh"),
        }

        let Some(summary) = self.summarize(&page.content).await? else {
            info!(key = %storage_key, "No summary produced, skipping page");
            return Ok(PageOutcome::NoSummary { key: storage_key });
        };

        let processed = self.process_language(&summary).await;

        let sentiment = match &self.language_model {
            Some(model) => match analyze_sentiment(model.as_ref(), &processed.text).await {
                Ok(sentiment) => sentiment,
                Err(e) => {
                    warn!(error = %e, "Sentiment analysis failed, continuing without it");
                    None
                }
            },
            None => None,
        };

        let result = self.classifier.classify(&processed.text);
        info!(key = %storage_key, categories = ?result.ids(), "Page classified");

        if let Err(e) = self.cache.put(&key, &result).await {
            warn!(key = %storage_key, error = %e, "Failed to store classification");
        }

        Ok(PageOutcome::Classified {
            key: storage_key,
            result,
            text: processed.text,
            language: processed.language,
            translated: processed.translated,
            sentiment,
        })
    }

    /// Summarize page text. `Ok(None)` when the summarizer is unavailable or
    /// returns only whitespace.
    pub async fn summarize(&self, text: &str) -> Result<Option<String>> {
        let availability = self.summarizer.availability().await?;
        if !availability.is_usable() {
            info!("Summarizer unavailable");
            return Ok(None);
        }
        debug!(?availability, "Creating summarizer session");

        let session = self
            .summarizer
            .create_session(&self.summarizer_options)
            .await?;
        let summary = session
            .summarize(text, self.summarizer_options.context.as_deref())
            .await;
        session.destroy().await;

        let summary = summary?;
        if summary.trim().is_empty() {
            return Ok(None);
        }
        debug!(chars = summary.chars().count(), "Summary produced");
        Ok(Some(summary))
    }

    /// Detect the language and translate to English when needed. Any failure
    /// leaves the text as it was.
    pub async fn process_language(&self, text: &str) -> ProcessedText {
        let language = match self.detect_language(text).await {
            Ok(language) => language,
            Err(e) => {
                warn!(error = %e, "Language detection failed, using original text");
                None
            }
        };

        let untouched = |language: Option<String>| ProcessedText {
            text: text.to_string(),
            language,
            translated: false,
        };

        let Some(source) = language.clone() else {
            return untouched(None);
        };
        if source == TARGET_LANGUAGE {
            return untouched(language);
        }

        match self.translate(text, &source).await {
            Ok(Some(translated)) => {
                info!(source = %source, "Translated summary to English");
                ProcessedText {
                    text: translated,
                    language,
                    translated: true,
                }
            }
            Ok(None) => untouched(language),
            Err(e) => {
                warn!(source = %source, error = %e, "Translation failed, using original text");
                untouched(language)
            }
        }
    }

    async fn detect_language(&self, text: &str) -> Result<Option<String>> {
        if !self.detector.availability().await?.is_usable() {
            debug!("Language detector unavailable");
            return Ok(None);
        }
        let session = self.detector.create_session().await?;
        let candidates = session.detect(text).await;
        session.destroy().await;

        let top = candidates?.into_iter().next();
        if let Some(candidate) = &top {
            debug!(language = %candidate.language, confidence = candidate.confidence, "Language detected");
        }
        Ok(top.map(|c| c.language))
    }

    async fn translate(&self, text: &str, source: &str) -> Result<Option<String>> {
        let pair = LanguagePair {
            source: source.to_string(),
            target: TARGET_LANGUAGE.to_string(),
        };
        if !self.translator.availability(&pair).await?.is_usable() {
            info!(source = %source, "No translator for this language");
            return Ok(None);
        }
        let session = self.translator.create_session(&pair).await?;
        let translated = session.translate(text).await;
        session.destroy().await;

        let translated = translated?;
        Ok((!translated.trim().is_empty()).then_some(translated))
    }
}

// Capability traits — the swap-ready abstraction over text-producing services.
//
// Every capability follows the same lifecycle: ask whether it is available,
// create a session (which resolves once any model download has finished),
// call it, and optionally tear the session down. The classifier never sees
// these; only the page pipeline does.

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Availability as reported by a capability before a session is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Availability {
    /// Cannot be used at all
    Unavailable,
    /// Usable after a model download (session creation waits for it)
    Downloadable,
    /// A download is already in progress
    Downloading,
    /// Ready immediately
    Available,
}

impl Availability {
    pub fn is_usable(self) -> bool {
        self != Availability::Unavailable
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SummaryKind {
    Teaser,
    KeyPoints,
    Tldr,
    Headline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SummaryFormat {
    Markdown,
    PlainText,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryLength {
    Short,
    Medium,
    Long,
}

/// Options for creating a summarizer session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummarizerOptions {
    pub kind: SummaryKind,
    pub format: SummaryFormat,
    pub length: SummaryLength,
    /// Extra instructions passed with each summarize call
    pub context: Option<String>,
}

impl Default for SummarizerOptions {
    fn default() -> Self {
        Self {
            kind: SummaryKind::Teaser,
            format: SummaryFormat::Markdown,
            length: SummaryLength::Long,
            context: Some(
                "This is the text of a long web page; ignore markup and summarize the content"
                    .to_string(),
            ),
        }
    }
}

/// A language guess with its confidence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageCandidate {
    /// BCP 47 code, e.g. "en" or "fr"
    pub language: String,
    pub confidence: f64,
}

/// Source and target language for translation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguagePair {
    pub source: String,
    pub target: String,
}

/// Options for creating a prompt (language model) session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptOptions {
    pub system_prompt: String,
}

#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn availability(&self) -> Result<Availability>;
    async fn create_session(&self, options: &SummarizerOptions)
        -> Result<Box<dyn SummarizerSession>>;
}

#[async_trait]
pub trait SummarizerSession: Send + Sync {
    async fn summarize(&self, text: &str, context: Option<&str>) -> Result<String>;

    /// Release the session. Default is a no-op.
    async fn destroy(&self) {}
}

#[async_trait]
pub trait LanguageDetector: Send + Sync {
    async fn availability(&self) -> Result<Availability>;
    async fn create_session(&self) -> Result<Box<dyn DetectorSession>>;
}

#[async_trait]
pub trait DetectorSession: Send + Sync {
    /// Candidates ordered by descending confidence.
    async fn detect(&self, text: &str) -> Result<Vec<LanguageCandidate>>;

    async fn destroy(&self) {}
}

#[async_trait]
pub trait Translator: Send + Sync {
    async fn availability(&self, pair: &LanguagePair) -> Result<Availability>;
    async fn create_session(&self, pair: &LanguagePair) -> Result<Box<dyn TranslatorSession>>;
}

#[async_trait]
pub trait TranslatorSession: Send + Sync {
    async fn translate(&self, text: &str) -> Result<String>;

    async fn destroy(&self) {}
}

#[async_trait]
pub trait LanguageModel: Send + Sync {
    async fn availability(&self) -> Result<Availability>;
    async fn create_session(&self, options: &PromptOptions) -> Result<Box<dyn PromptSession>>;
}

#[async_trait]
pub trait PromptSession: Send + Sync {
    async fn prompt(&self, input: &str) -> Result<String>;

    async fn destroy(&self) {}
}

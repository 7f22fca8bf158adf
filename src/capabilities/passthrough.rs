// Local stand-ins used when no real text service is wired up.
//
// PassthroughSummarizer hands the raw page text through (cut to a character
// budget), which is what the CLI classifies. Unavailable reports every
// capability as unusable so the pipeline takes its degraded paths.

use anyhow::Result;
use async_trait::async_trait;

use super::traits::{
    Availability, DetectorSession, LanguageDetector, LanguageModel, LanguagePair, PromptOptions,
    PromptSession, Summarizer, SummarizerOptions, SummarizerSession, Translator,
    TranslatorSession,
};

/// Default character budget for raw text handed to the classifier.
pub const DEFAULT_MAX_CHARS: usize = 5000;

/// "Summarizes" by returning the first `max_chars` characters of the input.
pub struct PassthroughSummarizer {
    pub max_chars: usize,
}

impl Default for PassthroughSummarizer {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
        }
    }
}

struct PassthroughSession {
    max_chars: usize,
}

#[async_trait]
impl Summarizer for PassthroughSummarizer {
    async fn availability(&self) -> Result<Availability> {
        Ok(Availability::Available)
    }

    async fn create_session(
        &self,
        _options: &SummarizerOptions,
    ) -> Result<Box<dyn SummarizerSession>> {
        Ok(Box::new(PassthroughSession {
            max_chars: self.max_chars,
        }))
    }
}

#[async_trait]
impl SummarizerSession for PassthroughSession {
    async fn summarize(&self, text: &str, _context: Option<&str>) -> Result<String> {
        Ok(text.chars().take(self.max_chars).collect())
    }
}

/// A capability that is never available.
pub struct Unavailable;

#[async_trait]
impl Summarizer for Unavailable {
    async fn availability(&self) -> Result<Availability> {
        Ok(Availability::Unavailable)
    }

    async fn create_session(
        &self,
        _options: &SummarizerOptions,
    ) -> Result<Box<dyn SummarizerSession>> {
        anyhow::bail!("Summarizer is not available")
    }
}

#[async_trait]
impl LanguageDetector for Unavailable {
    async fn availability(&self) -> Result<Availability> {
        Ok(Availability::Unavailable)
    }

    async fn create_session(&self) -> Result<Box<dyn DetectorSession>> {
        anyhow::bail!("Language detector is not available")
    }
}

#[async_trait]
impl Translator for Unavailable {
    async fn availability(&self, _pair: &LanguagePair) -> Result<Availability> {
        Ok(Availability::Unavailable)
    }

    async fn create_session(&self, pair: &LanguagePair) -> Result<Box<dyn TranslatorSession>> {
        anyhow::bail!(
            "Translator is not available for {} -> {}",
            pair.source,
            pair.target
        )
    }
}

#[async_trait]
impl LanguageModel for Unavailable {
    async fn availability(&self) -> Result<Availability> {
        Ok(Availability::Unavailable)
    }

    async fn create_session(&self, _options: &PromptOptions) -> Result<Box<dyn PromptSession>> {
        anyhow::bail!("Language model is not available")
    }
}

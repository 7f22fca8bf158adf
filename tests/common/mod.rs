// Shared test fixtures — scripted capabilities with canned replies for
// exercising the page pipeline without a real text service. Each one counts
// its calls so tests can check which stages actually ran.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use iabtag::capabilities::{
    Availability, DetectorSession, LanguageCandidate, LanguageDetector, LanguageModel,
    LanguagePair, PromptOptions, PromptSession, Summarizer, SummarizerOptions, SummarizerSession,
    Translator, TranslatorSession,
};

/// Returns a fixed summary, or fails when `summary` is None.
pub struct ScriptedSummarizer {
    pub availability: Availability,
    pub summary: Option<String>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedSummarizer {
    pub fn new(summary: impl Into<String>) -> Self {
        Self {
            availability: Availability::Available,
            summary: Some(summary.into()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing() -> Self {
        Self {
            availability: Availability::Available,
            summary: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn with_availability(mut self, availability: Availability) -> Self {
        self.availability = availability;
        self
    }

    /// Number of summarize calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

struct ScriptedSummary {
    summary: Option<String>,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl Summarizer for ScriptedSummarizer {
    async fn availability(&self) -> Result<Availability> {
        Ok(self.availability)
    }

    async fn create_session(
        &self,
        _options: &SummarizerOptions,
    ) -> Result<Box<dyn SummarizerSession>> {
        Ok(Box::new(ScriptedSummary {
            summary: self.summary.clone(),
            calls: Arc::clone(&self.calls),
        }))
    }
}

#[async_trait]
impl SummarizerSession for ScriptedSummary {
    async fn summarize(&self, _text: &str, _context: Option<&str>) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.summary {
            Some(summary) => Ok(summary.clone()),
            None => anyhow::bail!("Scripted summarizer failure"),
        }
    }
}

/// Reports a fixed language for every input.
pub struct ScriptedDetector {
    pub availability: Availability,
    pub candidates: Vec<LanguageCandidate>,
}

impl ScriptedDetector {
    pub fn new(language: &str, confidence: f64) -> Self {
        Self {
            availability: Availability::Available,
            candidates: vec![LanguageCandidate {
                language: language.to_string(),
                confidence,
            }],
        }
    }
}

struct ScriptedDetection {
    candidates: Vec<LanguageCandidate>,
}

#[async_trait]
impl LanguageDetector for ScriptedDetector {
    async fn availability(&self) -> Result<Availability> {
        Ok(self.availability)
    }

    async fn create_session(&self) -> Result<Box<dyn DetectorSession>> {
        Ok(Box::new(ScriptedDetection {
            candidates: self.candidates.clone(),
        }))
    }
}

#[async_trait]
impl DetectorSession for ScriptedDetection {
    async fn detect(&self, _text: &str) -> Result<Vec<LanguageCandidate>> {
        Ok(self.candidates.clone())
    }
}

/// Returns a fixed translation, or fails when `translation` is None.
pub struct ScriptedTranslator {
    pub availability: Availability,
    pub translation: Option<String>,
    calls: Arc<AtomicUsize>,
}

impl ScriptedTranslator {
    pub fn new(translation: impl Into<String>) -> Self {
        Self {
            availability: Availability::Available,
            translation: Some(translation.into()),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn failing() -> Self {
        Self {
            availability: Availability::Available,
            translation: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

struct ScriptedTranslation {
    translation: Option<String>,
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl Translator for ScriptedTranslator {
    async fn availability(&self, _pair: &LanguagePair) -> Result<Availability> {
        Ok(self.availability)
    }

    async fn create_session(&self, _pair: &LanguagePair) -> Result<Box<dyn TranslatorSession>> {
        Ok(Box::new(ScriptedTranslation {
            translation: self.translation.clone(),
            calls: Arc::clone(&self.calls),
        }))
    }
}

#[async_trait]
impl TranslatorSession for ScriptedTranslation {
    async fn translate(&self, _text: &str) -> Result<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.translation {
            Some(text) => Ok(text.clone()),
            None => anyhow::bail!("Scripted translator failure"),
        }
    }
}

/// Answers every prompt with the same reply.
pub struct ScriptedLanguageModel {
    pub availability: Availability,
    pub reply: String,
}

impl ScriptedLanguageModel {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            availability: Availability::Available,
            reply: reply.into(),
        }
    }
}

struct ScriptedPrompt {
    reply: String,
}

#[async_trait]
impl LanguageModel for ScriptedLanguageModel {
    async fn availability(&self) -> Result<Availability> {
        Ok(self.availability)
    }

    async fn create_session(&self, _options: &PromptOptions) -> Result<Box<dyn PromptSession>> {
        Ok(Box::new(ScriptedPrompt {
            reply: self.reply.clone(),
        }))
    }
}

#[async_trait]
impl PromptSession for ScriptedPrompt {
    async fn prompt(&self, _input: &str) -> Result<String> {
        Ok(self.reply.clone())
    }
}

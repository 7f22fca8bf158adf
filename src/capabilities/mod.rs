// Capabilities module — text services the page pipeline calls before
// classification (summarize, detect language, translate, prompt).

pub mod passthrough;
pub mod traits;

pub use passthrough::{PassthroughSummarizer, Unavailable};
pub use traits::{
    Availability, DetectorSession, LanguageCandidate, LanguageDetector, LanguageModel,
    LanguagePair, PromptOptions, PromptSession, Summarizer, SummarizerOptions, SummarizerSession,
    SummaryFormat, SummaryKind, SummaryLength, Translator, TranslatorSession,
};

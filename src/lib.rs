// iabtag: keyword-based IAB content category classification
//
// This is the library root. The classifier (taxonomy, signals, scoring) is
// pure and synchronous; the pipeline wraps it with summarization, language
// handling and caching.

pub mod cache;
pub mod capabilities;
pub mod classifier;
pub mod config;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod scoring;
pub mod sentiment;
pub mod signals;
pub mod status;
pub mod taxonomy;

pub use classifier::{Analysis, Classifier, ClassifierSettings, FallbackCategory};
pub use models::{CategoryAssignment, ClassificationResult, Confidence, SubcategoryAssignment};
pub use taxonomy::{Category, Subcategory, Taxonomy};

// Pipelines that wrap the classifier with summarization, language handling
// and caching.

pub mod batch;
pub mod page;

pub use batch::{run_batch, BatchSummary};
pub use page::{PageInput, PageOutcome, PagePipeline, ProcessedText, TARGET_LANGUAGE};

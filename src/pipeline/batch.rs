// Batch classification — many pages through one PagePipeline with bounded
// concurrency. Results come back in input order; one page failing does not
// stop the others.

use anyhow::Result;
use futures::stream::{self, StreamExt};
use tracing::{info, warn};

use super::page::{PageInput, PageOutcome, PagePipeline};

/// Counts for a finished batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub cached: usize,
    pub classified: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn from_outcomes(outcomes: &[Result<PageOutcome>]) -> Self {
        let mut summary = Self::default();
        for outcome in outcomes {
            match outcome {
                Ok(PageOutcome::Cached { .. }) => summary.cached += 1,
                Ok(PageOutcome::Classified { .. }) => summary.classified += 1,
                Ok(PageOutcome::NoSummary { .. }) => summary.skipped += 1,
                Err(_) => summary.failed += 1,
            }
        }
        summary
    }
}

/// Classify every page, running at most `concurrency` at a time.
pub async fn run_batch(
    pipeline: &PagePipeline,
    pages: &[PageInput],
    concurrency: usize,
) -> Vec<Result<PageOutcome>> {
    let concurrency = concurrency.max(1);
    info!(pages = pages.len(), concurrency, "Classifying batch");

    let mut indexed: Vec<(usize, Result<PageOutcome>)> = stream::iter(
        pages
            .iter()
            .enumerate()
            .map(|(i, page)| async move { (i, pipeline.run(page).await) }),
    )
    .buffer_unordered(concurrency)
    .collect()
    .await;

    indexed.sort_by_key(|(i, _)| *i);

    let outcomes: Vec<Result<PageOutcome>> = indexed
        .into_iter()
        .map(|(i, outcome)| {
            if let Err(e) = &outcome {
                warn!(page = i, error = %e, "Page failed");
            }
            outcome
        })
        .collect();

    let summary = BatchSummary::from_outcomes(&outcomes);
    info!(
        cached = summary.cached,
        classified = summary.classified,
        skipped = summary.skipped,
        failed = summary.failed,
        "Batch complete"
    );

    outcomes
}

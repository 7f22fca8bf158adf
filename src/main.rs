use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::info;

use iabtag::cache::{ClassificationCache, NoCache};
use iabtag::capabilities::PassthroughSummarizer;
use iabtag::classifier::Classifier;
use iabtag::config::Config;
use iabtag::output::terminal;
use iabtag::pipeline::{run_batch, BatchSummary, PageInput, PagePipeline};

/// iabtag: keyword-based IAB content category classification.
///
/// Tags page text with two or three ranked IAB categories for ad targeting,
/// caching results per URL or per content fingerprint.
#[derive(Parser)]
#[command(name = "iabtag", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the cache database
    Init,

    /// Classify page text (argument, --file, or stdin)
    Classify {
        /// The text to classify
        text: Option<String>,

        /// Read the text from a file
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Page URL, used as the cache key instead of a content fingerprint
        #[arg(long)]
        url: Option<String>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Show signals and per-category scores (bypasses the cache)
        #[arg(long)]
        explain: bool,

        /// Neither read nor write the cache
        #[arg(long)]
        no_cache: bool,
    },

    /// Classify many pages from a JSON file of [{"url": ..., "content": ...}]
    Batch {
        /// Path to the JSON file
        path: PathBuf,

        /// Number of pages to classify in parallel (default: 4)
        #[arg(long, default_value = "4")]
        concurrency: usize,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Neither read nor write the cache
        #[arg(long)]
        no_cache: bool,
    },

    /// Print the active taxonomy
    Taxonomy {
        /// Print the taxonomy as a JSON asset
        #[arg(long)]
        json: bool,
    },

    /// Show cache status (entries, recent classifications)
    Status,

    /// Delete every cached classification
    ClearCache,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("iabtag=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Init => {
            info!("Initializing iabtag cache...");
            let config = Config::load()?;
            let table_count = init_cache(&config).await?;
            println!("Cache initialized at: {}", config.db_path);
            println!("Tables created: {table_count}");
            println!("\niabtag is ready. Try: iabtag classify \"some page text\"");
        }

        Commands::Classify {
            text,
            file,
            url,
            json,
            explain,
            no_cache,
        } => {
            let config = Config::load()?;
            let content = read_input(text, file.as_deref())?;
            let classifier = Arc::new(build_classifier(&config)?);

            if explain {
                let input: String = content.chars().take(config.max_input_chars).collect();
                let analysis = classifier.analyze(&input);
                if json {
                    println!("{}", serde_json::to_string_pretty(&analysis)?);
                } else {
                    terminal::display_analysis(&analysis);
                }
                return Ok(());
            }

            let cache = cache_for(&config, no_cache)?;
            let pipeline = build_pipeline(&config, classifier, cache);
            let page = PageInput::new(url.as_deref(), content);
            let outcome = pipeline.run(&page).await?;

            if json {
                match outcome.result() {
                    Some(result) => println!("{}", result.to_json()?),
                    None => println!("[]"),
                }
            } else {
                terminal::display_outcome(&outcome);
            }
        }

        Commands::Batch {
            path,
            concurrency,
            json,
            no_cache,
        } => {
            let config = Config::load()?;
            let raw = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let pages: Vec<PageInput> = serde_json::from_str(&raw)
                .with_context(|| format!("Expected a JSON array of pages in {}", path.display()))?;

            let classifier = Arc::new(build_classifier(&config)?);
            let cache = cache_for(&config, no_cache)?;
            let pipeline = build_pipeline(&config, classifier, cache);
            let outcomes = run_batch(&pipeline, &pages, concurrency).await;

            if json {
                let rows: Vec<serde_json::Value> = outcomes
                    .iter()
                    .map(|outcome| match outcome {
                        Ok(outcome) => serde_json::to_value(outcome),
                        Err(e) => Ok(serde_json::json!({
                            "status": "error",
                            "error": e.to_string(),
                        })),
                    })
                    .collect::<serde_json::Result<_>>()?;
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for (page, outcome) in pages.iter().zip(&outcomes) {
                    let label = page.url.as_deref().unwrap_or("(no url)");
                    println!("\n{}", label.bold());
                    match outcome {
                        Ok(outcome) => terminal::display_outcome(outcome),
                        Err(e) => println!("  {} {}", "error:".red(), e),
                    }
                }
                let summary = BatchSummary::from_outcomes(&outcomes);
                println!(
                    "{} classified, {} cached, {} skipped, {} failed",
                    summary.classified, summary.cached, summary.skipped, summary.failed
                );
            }
        }

        Commands::Taxonomy { json } => {
            let config = Config::load()?;
            let taxonomy = config.taxonomy()?;
            if json {
                println!("{}", taxonomy.to_json()?);
            } else {
                terminal::display_taxonomy(&taxonomy);
            }
        }

        Commands::Status => {
            let config = Config::load()?;
            let cache: Arc<dyn ClassificationCache> = if Path::new(&config.db_path).exists() {
                open_cache(&config)?
            } else {
                Arc::new(NoCache)
            };
            iabtag::status::show(&cache, &config.db_path).await?;
        }

        Commands::ClearCache => {
            let config = Config::load()?;
            let cache = open_cache(&config)?;
            let removed = cache.clear().await?;
            println!("Removed {removed} cached classifications.");
        }
    }

    Ok(())
}

/// Read classification input from the argument, a file, or stdin.
fn read_input(text: Option<String>, file: Option<&Path>) -> Result<String> {
    if let Some(text) = text {
        return Ok(text);
    }
    if let Some(path) = file {
        return std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()));
    }
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read text from stdin")?;
    Ok(buffer)
}

fn build_classifier(config: &Config) -> Result<Classifier> {
    let taxonomy = config.taxonomy()?;
    let settings = config.classifier_settings()?;
    Classifier::new(taxonomy, settings)
}

fn build_pipeline(
    config: &Config,
    classifier: Arc<Classifier>,
    cache: Arc<dyn ClassificationCache>,
) -> PagePipeline {
    let summarizer = Arc::new(PassthroughSummarizer {
        max_chars: config.max_input_chars,
    });
    PagePipeline::new(classifier, summarizer, cache)
}

/// The cache `classify` and `batch` use, created on first use.
fn cache_for(config: &Config, no_cache: bool) -> Result<Arc<dyn ClassificationCache>> {
    if no_cache {
        return Ok(Arc::new(NoCache));
    }
    create_cache(config)
}

#[cfg(feature = "sqlite")]
async fn init_cache(config: &Config) -> Result<i64> {
    let cache = iabtag::cache::initialize_sqlite(&config.db_path, config.cache_ttl_days)?;
    cache.table_count().await
}

#[cfg(feature = "sqlite")]
fn create_cache(config: &Config) -> Result<Arc<dyn ClassificationCache>> {
    let cache = iabtag::cache::initialize_sqlite(&config.db_path, config.cache_ttl_days)?;
    Ok(Arc::new(cache))
}

#[cfg(feature = "sqlite")]
fn open_cache(config: &Config) -> Result<Arc<dyn ClassificationCache>> {
    let cache = iabtag::cache::open_sqlite(&config.db_path, config.cache_ttl_days)?;
    Ok(Arc::new(cache))
}

#[cfg(not(feature = "sqlite"))]
async fn init_cache(_config: &Config) -> Result<i64> {
    anyhow::bail!(
        "The cache database needs the 'sqlite' feature.\n\
         Rebuild with: cargo build --features sqlite"
    )
}

#[cfg(not(feature = "sqlite"))]
fn create_cache(_config: &Config) -> Result<Arc<dyn ClassificationCache>> {
    Ok(Arc::new(iabtag::cache::MemoryCache::new()))
}

#[cfg(not(feature = "sqlite"))]
fn open_cache(_config: &Config) -> Result<Arc<dyn ClassificationCache>> {
    Ok(Arc::new(NoCache))
}

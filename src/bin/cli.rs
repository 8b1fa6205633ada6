//! Article search CLI
//!
//! Builds the search index from the help-center API and searches it locally.

use std::path::PathBuf;
use std::sync::Arc;

use article_search::{
    error::Result,
    models::{Config, ExclusionRules, SortStrategy},
    pipeline,
    search::{PageControl, ResultsPage, SearchRequest},
    storage::{ArticleStorage, LocalStorage},
};
use clap::{Parser, Subcommand};

/// Shown when the index cannot be loaded; no retry is attempted.
const INDEX_LOAD_FAILED: &str = "Error loading articles. Please try again later.";

/// article-search - Help-center article search
#[derive(Parser, Debug)]
#[command(name = "article-search", version, about = "Help-center article search")]
struct Cli {
    /// Directory holding config.toml and the index artifacts
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch every article and write the archive and search index
    Fetch,

    /// Search the local index
    Search {
        /// Free-text query; empty matches everything
        #[arg(default_value = "")]
        query: String,

        /// newest, oldest, recentlyUpdated, recentlyEdited or relevance
        #[arg(short, long, default_value = "relevance")]
        sort: SortStrategy,

        /// Hide preview and beta articles
        #[arg(long)]
        exclude_preview: bool,

        /// Hide Java articles
        #[arg(long)]
        exclude_java: bool,

        /// Hide Bedrock, preview and beta articles
        #[arg(long)]
        exclude_bedrock: bool,

        /// Result page to show
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Print the page as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Validate configuration
    Validate,

    /// Show index info
    Info,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Print a results page as plain text.
fn print_page(page: &ResultsPage) {
    println!("{}", page.result_count_text);
    if let Some(message) = page.empty_message {
        println!("{message}");
        return;
    }

    for article in &page.articles {
        println!();
        println!("## {}", article.title_markup);
        println!("{}", article.excerpt_markup);
        println!("Read more: {}", article.url);
    }

    if page.pagination.has_controls() {
        let controls: Vec<String> = page
            .pagination
            .controls
            .iter()
            .map(|control| match control {
                PageControl::Previous { disabled: true, .. } => "(Previous)".to_string(),
                PageControl::Previous { .. } => "Previous".to_string(),
                PageControl::Page { number, active: true } => format!("[{number}]"),
                PageControl::Page { number, .. } => number.to_string(),
                PageControl::Ellipsis => "...".to_string(),
                PageControl::Next { disabled: true, .. } => "(Next)".to_string(),
                PageControl::Next { .. } => "Next".to_string(),
            })
            .collect();
        println!();
        println!("{}", controls.join(" "));
    }
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.data_dir.join("config.toml");
    let config = Config::load_or_default(&config_path);
    log::debug!("Loaded configuration from {}", cli.data_dir.display());

    let storage = LocalStorage::with_paths(&cli.data_dir, config.paths.clone());

    match cli.command {
        Command::Fetch => {
            config.validate()?;
            let stats = pipeline::run_fetch(Arc::new(config), &storage).await?;
            log::info!(
                "Index build complete: {} articles from {} pages",
                stats.article_count,
                stats.page_count
            );
        }

        Command::Search {
            query,
            sort,
            exclude_preview,
            exclude_java,
            exclude_bedrock,
            page,
            json,
        } => {
            let request = SearchRequest::new(query)
                .with_sort(sort)
                .with_rules(ExclusionRules {
                    exclude_preview,
                    exclude_java,
                    exclude_bedrock,
                });

            let results = match pipeline::run_search(&config, &storage, &request, page).await {
                Ok(results) => results,
                Err(e) => {
                    log::error!("Error loading search index: {}", e);
                    eprintln!("{INDEX_LOAD_FAILED}");
                    return Err(e);
                }
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                print_page(&results);
            }
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK");
        }

        Command::Info => {
            log::info!("Data directory: {}", storage.root_dir().display());
            log::info!(
                "Archive: {}",
                if storage.archive_path().exists() {
                    "exists"
                } else {
                    "not found"
                }
            );

            match storage.load_index().await {
                Ok((index, report)) => {
                    log::info!("Index: {} articles", index.len());
                    if report.skipped > 0 {
                        log::info!("Skipped records: {}", report.skipped);
                    }
                }
                Err(e) => log::info!("No usable index yet: {}", e),
            }
        }
    }

    Ok(())
}

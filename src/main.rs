// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Set up logging
// 3. Dispatch to the appropriate subcommand handler
// 4. Exit with proper code (0 = finished, 2 = error)
//
// A crawl that finishes always exits 0, even when some pages failed to
// download: those failures are reported in the log and the summary.
// =============================================================================

mod cli;
mod config;
mod crawl;
mod document;
mod error;
mod extract;
mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, CrawlArgs};
use config::{parse_http_url, CrawlConfig, FetchConfig};
use crawl::{CrawlReport, Crawler, PageFetcher};
use document::FileDocument;
use serde::Serialize;
use std::time::Duration;
use tracing::{info, warn};

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // {:#} prints the whole context chain on one line
            eprintln!("Error: {:#}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();

    logging::init_logging(cli.verbose, cli.log_file.as_deref())?;

    match cli.command {
        Commands::Crawl(args) => handle_crawl(args).await,
        Commands::Extract { url, timeout_secs } => handle_extract(&url, timeout_secs).await,
    }
}

// What `crawl --json` prints
#[derive(Debug, Serialize)]
struct CrawlSummary {
    #[serde(flatten)]
    report: CrawlReport,
    output: String,
}

// Handles the 'crawl' subcommand
async fn handle_crawl(args: CrawlArgs) -> Result<i32> {
    let fetch = FetchConfig::new(args.timeout_secs, args.user_agent)?;
    let config = CrawlConfig::new(
        args.base_url,
        args.seed_url,
        args.max_depth,
        Duration::from_millis(args.delay_ms),
        fetch,
        args.output,
        args.title,
    )?;

    if !config.seed_url.as_str().starts_with(&config.base_url) {
        warn!(
            "Seed {} is outside the scope prefix {}; only its in-scope links will be followed",
            config.seed_url, config.base_url
        );
    }

    info!("Starting crawl of {}", config.base_url);
    info!("Max crawl depth: {}", config.max_depth);

    let mut document = FileDocument::new(&config.output, &config.title);
    let mut crawler = Crawler::new(config)?;

    let report = crawler
        .run(&mut document)
        .await
        .context("crawl aborted while writing the document")?;

    let output = std::fs::canonicalize(document.path())
        .unwrap_or_else(|_| document.path().to_path_buf())
        .display()
        .to_string();

    print_summary(CrawlSummary { report, output }, args.json)?;
    Ok(0)
}

// Handles the 'extract' subcommand
async fn handle_extract(url: &str, timeout_secs: u64) -> Result<i32> {
    let url = parse_http_url(url)?;
    let fetcher = PageFetcher::new(&FetchConfig::new(timeout_secs, None)?)?;

    let html = fetcher
        .fetch(url.as_str())
        .await
        .with_context(|| format!("fetching {}", url))?;

    let section = crawl::read_page(url.as_str(), &html).into_section(1);

    println!("# {}", section.title);
    println!("URL: {}", section.url);
    println!();
    println!("{}", section.content);

    Ok(0)
}

fn print_summary(summary: CrawlSummary, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!();
        println!("Crawl finished");
        println!("   Pages visited: {}", summary.report.visited);
        println!("   Sections written: {}", summary.report.recorded);
        println!("   Failed pages: {}", summary.report.failed);
        println!("   Output: {}", summary.output);
    }
    Ok(())
}

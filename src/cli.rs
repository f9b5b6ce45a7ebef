// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Two subcommands:
// - crawl: walk a site section and write the merged document
// - extract: fetch one page and print what the crawler would record for it
//
// Every crawl setting has a default, so `section-crawler crawl` with no
// flags reproduces the standard run over vaas.org.vn's rice section.
// =============================================================================

use crate::config::{
    DEFAULT_BASE_URL, DEFAULT_DELAY_MS, DEFAULT_MAX_DEPTH, DEFAULT_OUTPUT, DEFAULT_TIMEOUT_SECS,
    DEFAULT_TITLE,
};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "section-crawler",
    version,
    about = "Crawl one website section and merge its pages into a single text document",
    long_about = "section-crawler follows the relative links of a website section depth-first, \
                  extracts the readable text of every page, and appends it to one document \
                  in the order the pages were visited."
)]
pub struct Cli {
    /// Show debug messages (skipped links, duplicate visits, ...)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write log messages to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Crawl a website section into one document
    ///
    /// Example: section-crawler crawl --base-url https://example.org/docs/ --max-depth 2
    Crawl(CrawlArgs),

    /// Fetch a single page and print its title and normalized text
    ///
    /// Example: section-crawler extract https://example.org/docs/index.htm
    Extract {
        /// Page URL to fetch
        url: String,

        /// Request timeout in seconds
        #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
        timeout_secs: u64,
    },
}

#[derive(Args, Debug)]
pub struct CrawlArgs {
    /// Scope prefix: only links whose absolute URL starts with this are followed
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// First page to fetch (default: <base-url>index.htm)
    #[arg(long)]
    pub seed_url: Option<String>,

    /// Maximum link depth; pages at this depth are recorded but not expanded
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub max_depth: usize,

    /// Pause before each request after the first, in milliseconds
    #[arg(long, default_value_t = DEFAULT_DELAY_MS)]
    pub delay_ms: u64,

    /// Request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Output document path (parent directories are created)
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Banner line at the top of the document
    #[arg(long, default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Print the crawl summary as JSON on stdout
    #[arg(long)]
    pub json: bool,
}

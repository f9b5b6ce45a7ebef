// src/crawl/traversal.rs
// =============================================================================
// The crawl itself: a depth-first walk over the pages of one site section.
//
// How it works:
// 1. Start with the seed URL on a stack (depth 0, level 1)
// 2. Pop a task; skip it if its URL was already visited
// 3. Mark the URL visited BEFORE fetching, so it is fetched at most once
// 4. Fetch, extract, normalize, append a section to the document
// 5. If depth < max_depth, push the page's eligible links (depth + 1)
// 6. Repeat until the stack is empty
//
// Ordering:
// - Links are pushed in REVERSE document order, so the first link on a page
//   is popped first and its whole subtree is finished before the second link
//   is even fetched
// - The result is a pre-order document: for a seed linking A then B, where A
//   links C, sections come out as seed, A, C, B
// - A URL can be pushed more than once (two pages link to it, or a page
//   links to it twice). Checking `visited` again at pop time drops the later
//   copies, which gives exactly the same order as plain recursion would
//
// Failures:
// - A page that fails to fetch (timeout, DNS, non-200, ...) is logged and
//   counted; the crawl continues with the next task. Nothing is retried
// - Only document write errors stop the crawl
//
// Politeness:
// - Every page after the seed waits `config.delay` before its request.
//   Requests are strictly sequential
//
// Rust concepts:
// - Vec as a stack: push() / pop() work on the end of the vector
// - HashSet: visited URLs, O(1) lookup
// - Generic over the DocumentWriter trait so tests can capture sections
// =============================================================================

use crate::config::CrawlConfig;
use crate::crawl::fetch::PageFetcher;
use crate::document::{DocumentSection, DocumentWriter};
use crate::error::{ConfigError, DocumentError};
use crate::extract::{self, DiscoveredLink};
use chrono::Local;
use scraper::Html;
use serde::Serialize;
use std::collections::HashSet;
use tracing::{debug, info, warn};
use url::Url;

// One unit of work on the crawl stack
#[derive(Debug, Clone)]
struct CrawlTask {
    url: String,
    depth: usize, // Link hops from the seed; bounds the crawl
    level: usize, // Heading weight in the document
}

/// Title, URL and raw text of a fetched page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedPage {
    pub title: String,
    pub url: String,
    /// Text as extracted, before normalization
    pub raw_content: String,
}

impl ExtractedPage {
    /// Normalizes the content and attaches the heading level.
    pub fn into_section(self, level: usize) -> DocumentSection {
        DocumentSection {
            content: extract::normalize(&self.raw_content),
            title: self.title,
            url: self.url,
            level,
        }
    }
}

/// Parses a page body and extracts its title and text.
pub fn read_page(url: &str, html: &str) -> ExtractedPage {
    page_from_document(url, &Html::parse_document(html))
}

fn page_from_document(url: &str, document: &Html) -> ExtractedPage {
    let text = extract::extract(document);
    debug!("Took {} chars of text from {:?} on {}", text.content.len(), text.source, url);
    ExtractedPage {
        title: text.title,
        url: url.to_string(),
        raw_content: text.content,
    }
}

/// Totals for one crawl run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CrawlReport {
    /// Distinct URLs visited, including the ones that failed to fetch
    pub visited: usize,
    /// Sections appended to the document
    pub recorded: usize,
    /// Pages that could not be fetched
    pub failed: usize,
}

/// Crawls one site section into a document.
pub struct Crawler {
    config: CrawlConfig,
    fetcher: PageFetcher,
    visited: HashSet<String>,
}

impl Crawler {
    pub fn new(config: CrawlConfig) -> Result<Self, ConfigError> {
        let fetcher = PageFetcher::new(&config.fetch)?;
        Ok(Self {
            config,
            fetcher,
            visited: HashSet::new(),
        })
    }

    /// Runs a full crawl: writes the preamble, every page, then the
    /// closing banner with the visited count.
    ///
    /// Fetch failures never make this return an error; only a failure to
    /// write the document does. Each call starts with an empty visited set.
    pub async fn run<W: DocumentWriter>(&mut self, writer: &mut W) -> Result<CrawlReport, DocumentError> {
        self.visited.clear();
        writer.initialize(&self.config.base_url, Local::now().naive_local())?;

        let report = self.crawl(writer).await?;

        writer.finish(report.visited)?;
        Ok(report)
    }

    async fn crawl<W: DocumentWriter>(&mut self, writer: &mut W) -> Result<CrawlReport, DocumentError> {
        let max_depth = self.config.max_depth;
        let mut report = CrawlReport::default();

        let mut stack = vec![CrawlTask {
            url: self.config.seed_url.to_string(),
            depth: 0,
            level: 1,
        }];

        while let Some(task) = stack.pop() {
            if self.visited.contains(&task.url) {
                debug!("Already crawled: {}", task.url);
                continue;
            }

            if task.depth > 0 && !self.config.delay.is_zero() {
                tokio::time::sleep(self.config.delay).await;
            }

            // Mark as visited before the request goes out
            self.visited.insert(task.url.clone());

            info!("Crawling [{}/{}]: {}", task.depth, max_depth, task.url);

            let html = match self.fetcher.fetch(&task.url).await {
                Ok(html) => html,
                Err(e) => {
                    warn!("Failed to crawl {}: {}", task.url, e);
                    report.failed += 1;
                    continue;
                }
            };

            let (page, links) = self.process_page(&task, &html);
            info!("Title: {}", page.title);

            writer.append(&page.into_section(task.level))?;
            report.recorded += 1;

            // Reverse so the first link on the page is popped next
            for link in links.into_iter().rev() {
                stack.push(CrawlTask {
                    url: link.url,
                    depth: task.depth + 1,
                    level: task.level + 1,
                });
            }
        }

        report.visited = self.visited.len();
        Ok(report)
    }

    // Parses the page once for both the text and the outgoing links.
    // Kept synchronous: scraper's Html must not live across an .await.
    fn process_page(&self, task: &CrawlTask, html: &str) -> (ExtractedPage, Vec<DiscoveredLink>) {
        let document = Html::parse_document(html);
        let page = page_from_document(&task.url, &document);

        if task.depth >= self.config.max_depth {
            return (page, Vec::new());
        }

        let links = match Url::parse(&task.url) {
            Ok(page_url) => {
                extract::discover_links(&document, &page_url, &self.config.base_url, &self.visited)
            }
            Err(e) => {
                warn!("Cannot resolve links on {}: {}", task.url, e);
                Vec::new()
            }
        };

        for link in &links {
            debug!("Found link '{}' -> {}", link.text, link.url);
        }

        (page, links)
    }
}

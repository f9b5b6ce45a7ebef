// src/crawl/mod.rs
// =============================================================================
// This module handles fetching pages and walking the site section.
//
// Submodules:
// - fetch: one HTTP GET per page, with timeout and status checks
// - traversal: the depth-first crawl that drives fetch -> extract -> write
// =============================================================================

mod fetch;
mod traversal;

pub use fetch::PageFetcher;
pub use traversal::{read_page, CrawlReport, Crawler};

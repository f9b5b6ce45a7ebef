// src/extract/links.rs
// =============================================================================
// Finds the links on a page that the crawler is allowed to follow.
//
// A link is followed only when ALL of these hold:
// 1. The raw href is present and not empty
// 2. The raw href does NOT start with http://, https://, mailto:, # or
//    javascript:   (checked before resolving, see the note below)
// 3. The href resolves against the page URL to an absolute URL
// 4. That absolute URL starts with the scope prefix (plain string test)
// 5. That absolute URL has not been visited yet
//
// Note on rule 2: absolute links are rejected even when they point inside
// the scope prefix. An <a href="https://example.org/sec/page.htm"> on a page
// under https://example.org/sec/ is never followed; only relative links are.
// This looks like a latent defect, but existing documents depend on it.
// Fixing it changes which pages are crawled and must ship as a behavior change.
//
// Rust concepts:
// - &HashSet<String>: the filter only borrows the visited set, it never
//   modifies it
// - Option chaining with ? inside a function returning Option
// =============================================================================

use scraper::{Html, Selector};
use std::collections::HashSet;
use std::sync::LazyLock;
use url::Url;

static ANCHOR: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("a").expect("anchor selector is valid"));

// Raw href prefixes that are never followed
const REJECTED_PREFIXES: &[&str] = &["http://", "https://", "mailto:", "#", "javascript:"];

/// A link that passed the scope filter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredLink {
    /// Anchor text, trimmed (useful for debugging which menu entry led where)
    pub text: String,
    /// Absolute URL the href resolved to
    pub url: String,
}

/// Decides whether one raw href should be followed.
///
/// Returns the resolved absolute URL when it should, None otherwise.
/// The check is pure: `visited` is only read.
///
/// Parameters:
///   href: the raw href attribute (None when the anchor has no href)
///   page_url: URL of the page the anchor was found on
///   base_url: the scope prefix
///   visited: URLs already fetched in this crawl
pub fn eligible_url(
    href: Option<&str>,
    page_url: &Url,
    base_url: &str,
    visited: &HashSet<String>,
) -> Option<String> {
    let href = href.filter(|href| !href.is_empty())?;

    if REJECTED_PREFIXES.iter().any(|prefix| href.starts_with(prefix)) {
        return None;
    }

    let absolute = page_url.join(href).ok()?.to_string();

    if !absolute.starts_with(base_url) || visited.contains(&absolute) {
        return None;
    }

    Some(absolute)
}

/// Collects the followable links of a page, in document order.
///
/// Duplicates are kept: if a page links to the same URL twice, both entries
/// come back, and the traversal skips the second one once the first has been
/// visited.
pub fn discover_links(
    document: &Html,
    page_url: &Url,
    base_url: &str,
    visited: &HashSet<String>,
) -> Vec<DiscoveredLink> {
    document
        .select(&ANCHOR)
        .filter_map(|anchor| {
            let href = anchor.value().attr("href");
            let url = eligible_url(href, page_url, base_url, visited)?;
            let text = anchor.text().map(str::trim).collect::<String>();
            Some(DiscoveredLink { text, url })
        })
        .collect()
}

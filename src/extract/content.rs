// src/extract/content.rs
// =============================================================================
// Picks the readable text out of a parsed HTML page.
//
// Content selection is a fallback chain, first match wins:
// 1. <div class="content">   (a div whose class list contains "content")
// 2. <div id="content">
// 3. <body>, ignoring everything inside <script> and <style>
//
// Text extraction works the same way in every tier: each text node is
// trimmed, empty nodes are skipped, and the rest are joined with nothing in
// between. "<p>Cây</p><p>lúa</p>" therefore becomes "Câylúa". The normalizer
// runs afterwards; this module returns raw text.
//
// Rust concepts:
// - LazyLock<Selector>: CSS selectors parsed once and shared
// - Iterator adapters: filter_map / filter over the DOM tree
// =============================================================================

use scraper::{ElementRef, Html, Node, Selector};
use std::sync::LazyLock;

/// Title used when a page has no <title> element.
pub const MISSING_TITLE: &str = "Không có tiêu đề";

static TITLE: LazyLock<Selector> = LazyLock::new(|| selector("title"));
static CONTENT_CLASS: LazyLock<Selector> = LazyLock::new(|| selector("div.content"));
static CONTENT_ID: LazyLock<Selector> = LazyLock::new(|| selector("div#content"));
static BODY: LazyLock<Selector> = LazyLock::new(|| selector("body"));

// Elements whose text never belongs in the body fallback
const SKIPPED_IN_BODY: &[&str] = &["script", "style"];

// The selectors above are string constants, so a parse failure is a
// programmer error rather than something to recover from.
fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static CSS selector is valid")
}

/// Which tier of the fallback chain produced the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentSource {
    ContentClass,
    ContentId,
    Body,
    /// No body content at all; the page is recorded with empty text
    Empty,
}

/// Title and raw (not yet normalized) text of one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageText {
    pub title: String,
    pub content: String,
    pub source: ContentSource,
}

/// Extracts the title and main text from a parsed page.
///
/// Never fails: a missing title falls back to [`MISSING_TITLE`] and a
/// missing body produces empty content.
pub fn extract(document: &Html) -> PageText {
    let title = extract_title(document);

    let (content, source) = if let Some(div) = document.select(&CONTENT_CLASS).next() {
        (joined_text(div, &[]), ContentSource::ContentClass)
    } else if let Some(div) = document.select(&CONTENT_ID).next() {
        (joined_text(div, &[]), ContentSource::ContentId)
    } else if let Some(body) = document.select(&BODY).next() {
        (joined_text(body, SKIPPED_IN_BODY), ContentSource::Body)
    } else {
        (String::new(), ContentSource::Empty)
    };

    PageText {
        title,
        content,
        source,
    }
}

fn extract_title(document: &Html) -> String {
    match document.select(&TITLE).next() {
        Some(title) => title.text().collect::<String>().trim().to_string(),
        None => MISSING_TITLE.to_string(),
    }
}

// Joins the trimmed, non-empty text nodes under `root`, skipping any text
// that sits inside one of the `skipped` elements.
fn joined_text(root: ElementRef<'_>, skipped: &[&str]) -> String {
    root.descendants()
        .filter_map(|node| match node.value() {
            Node::Text(text) => Some((node, text)),
            _ => None,
        })
        .filter(|(node, _)| {
            !node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|element| skipped.contains(&element.name()))
            })
        })
        .map(|(_, text)| text.trim())
        .filter(|text| !text.is_empty())
        .collect()
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why not use ElementRef::text() for the body?
//    - text() walks every text node, including the source of <script> and
//      <style> elements
//    - We walk descendants() ourselves so we can look at each node's
//      ancestors and skip the ones living inside script/style
//
// 2. What is is_some_and?
//    - Option::is_some_and(f) is true when the option is Some(x) and f(x)
//      is true; shorthand for matches!(opt, Some(x) if f(x))
//
// 3. Does a page without <body> really produce empty content?
//    - html5ever (the parser behind scraper) always creates a <body>, even
//      when the markup omits the tag. Loose text ends up inside it, so the
//      Empty tier is only reached for documents with nothing in the body.
// -----------------------------------------------------------------------------

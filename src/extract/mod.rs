// src/extract/mod.rs
// =============================================================================
// Everything the crawler does with a downloaded page, without any I/O.
//
// Submodules:
// - content: picks the title and main text out of the HTML
// - text: normalizes that text for the output document
// - links: finds the in-scope links to follow next
//
// All three are pure functions over already-parsed HTML, so they can be
// tested without a network.
// =============================================================================

mod content;
mod links;
mod text;

pub use content::extract;
pub use links::{discover_links, DiscoveredLink};
pub use text::normalize;

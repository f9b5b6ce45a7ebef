// src/document/mod.rs
// =============================================================================
// The output side of the crawler: a single text document that grows by one
// section per crawled page.
//
// The crawler only talks to the DocumentWriter trait, so tests can collect
// sections in memory instead of touching the disk.
// =============================================================================

mod writer;

pub use writer::{DocumentSection, DocumentWriter, FileDocument};

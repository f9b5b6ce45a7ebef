// src/document/writer.rs
// =============================================================================
// Writes the consolidated text document, one section per crawled page.
//
// Document layout:
//
//   ================================================================ (80 '=')
//   <banner title>
//   ================================================================
//
//   Source: <scope prefix>
//   Crawled at: <YYYY-MM-DD HH:MM:SS>
//
//   ================================================================
//
//   (for every page, in crawl order)
//
//   ---------------------------------------- ('-' at level 1, '.' deeper)
//   ## <page title>                          ('#' repeated `level` times)
//   URL: <page url>
//   ----------------------------------------
//
//   <normalized content>
//
//   (after the crawl)
//   ================================================================
//   END OF DOCUMENT
//   Total pages crawled: <n>
//   ================================================================
//
// Every append is flushed to the file right away, so it can be inspected
// while a long crawl is still running.
// =============================================================================

use crate::error::DocumentError;
use chrono::NaiveDateTime;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

const RULE_WIDTH: usize = 80;

/// One crawled page as it appears in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentSection {
    pub title: String,
    pub url: String,
    pub content: String,
    /// Heading weight; 1 for the seed page, +1 per link followed
    pub level: usize,
}

/// Destination for crawl output.
///
/// Calls arrive in this order: `initialize` once, `append` once per
/// fetched page in crawl order, `finish` once. Implementations must keep
/// sections in the order they were appended.
pub trait DocumentWriter {
    fn initialize(&mut self, source_url: &str, timestamp: NaiveDateTime) -> Result<(), DocumentError>;

    fn append(&mut self, section: &DocumentSection) -> Result<(), DocumentError>;

    /// Writes the closing banner with the number of distinct URLs visited.
    fn finish(&mut self, total_visited: usize) -> Result<(), DocumentError>;
}

/// [`DocumentWriter`] backed by a text file.
#[derive(Debug)]
pub struct FileDocument {
    path: PathBuf,
    title: String,
    file: Option<BufWriter<File>>,
}

impl FileDocument {
    /// Nothing is touched on disk until `initialize` is called.
    pub fn new(path: impl Into<PathBuf>, title: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            title: title.into(),
            file: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn error(&self, source: std::io::Error) -> DocumentError {
        DocumentError {
            path: self.path.clone(),
            source,
        }
    }

    // Writes `text` and flushes it to the OS before returning
    fn write_flushed(&mut self, text: &str) -> Result<(), DocumentError> {
        let result = match self.file.as_mut() {
            Some(file) => file.write_all(text.as_bytes()).and_then(|_| file.flush()),
            None => Err(std::io::Error::new(
                std::io::ErrorKind::NotConnected,
                "document was not initialized",
            )),
        };

        result.map_err(|e| self.error(e))
    }
}

impl DocumentWriter for FileDocument {
    fn initialize(&mut self, source_url: &str, timestamp: NaiveDateTime) -> Result<(), DocumentError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.error(e))?;
        }

        // File::create truncates any document left over from an earlier run
        let file = File::create(&self.path).map_err(|e| self.error(e))?;
        self.file = Some(BufWriter::new(file));

        let preamble = render_preamble(&self.title, source_url, timestamp);
        self.write_flushed(&preamble)
    }

    fn append(&mut self, section: &DocumentSection) -> Result<(), DocumentError> {
        self.write_flushed(&render_section(section))
    }

    fn finish(&mut self, total_visited: usize) -> Result<(), DocumentError> {
        self.write_flushed(&render_closing(total_visited))
    }
}

pub fn render_preamble(title: &str, source_url: &str, timestamp: NaiveDateTime) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!(
        "{rule}\n{title}\n{rule}\n\nSource: {source_url}\nCrawled at: {}\n\n{rule}\n\n",
        timestamp.format("%Y-%m-%d %H:%M:%S")
    )
}

pub fn render_section(section: &DocumentSection) -> String {
    let separator = (if section.level <= 1 { "-" } else { "." }).repeat(RULE_WIDTH);
    let marker = "#".repeat(section.level);
    format!(
        "\n{separator}\n{marker} {}\nURL: {}\n{separator}\n\n{}\n\n",
        section.title, section.url, section.content
    )
}

pub fn render_closing(total_visited: usize) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    format!("\n{rule}\nEND OF DOCUMENT\nTotal pages crawled: {total_visited}\n{rule}\n")
}

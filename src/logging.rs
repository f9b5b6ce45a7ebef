// src/logging.rs
// =============================================================================
// Sets up tracing output.
//
// - Logs go to stderr, so `crawl --json` can print clean JSON on stdout
// - RUST_LOG overrides the defaults (e.g. RUST_LOG=section_crawler=trace)
// - --verbose turns on debug messages for this crate (skipped links,
//   duplicate visits, which extraction tier was used)
// - --log-file writes a second, colorless copy of every message to a file
// =============================================================================

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Initializes the global tracing subscriber. Call once, at startup.
pub fn init_logging(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let level = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::from_default_env()
        .add_directive(format!("section_crawler={}", level).parse()?)
        .add_directive("warn".parse()?);

    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let file_layer = match log_file {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)
                    .with_context(|| format!("creating log directory {}", parent.display()))?;
            }
            let file = File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            Some(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        }
        None => None,
    };

    // Option<Layer> is itself a layer; None simply does nothing
    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(())
}

// src/config.rs
// =============================================================================
// Crawl settings, loaded once at startup from the command line.
//
// The CLI hands over plain strings and numbers; CrawlConfig::new() checks
// them and turns them into the types the crawler works with (Url, Duration,
// PathBuf). After that the config never changes.
// =============================================================================

use crate::error::ConfigError;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://vaas.org.vn/kienthuc/Caylua/";
pub const DEFAULT_SEED_PAGE: &str = "index.htm";
pub const DEFAULT_MAX_DEPTH: usize = 3;
pub const DEFAULT_DELAY_MS: u64 = 500;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_OUTPUT: &str = "vaas_crawled_data/cay_lua_full_content.txt";
pub const DEFAULT_TITLE: &str = "TỔNG HỢP NỘI DUNG VỀ CÂY LÚA TỪ VAAS.ORG.VN";
pub const DEFAULT_USER_AGENT: &str = concat!("section-crawler/", env!("CARGO_PKG_VERSION"));

/// Settings for one crawl run.
#[derive(Debug, Clone)]
pub struct CrawlConfig {
    /// Scope prefix: a link is followed only if its absolute URL starts
    /// with this string
    pub base_url: String,
    /// First page to fetch
    pub seed_url: Url,
    /// Pages at this depth are recorded but their links are not followed
    pub max_depth: usize,
    /// Pause before every page after the seed
    pub delay: Duration,
    pub fetch: FetchConfig,
    pub output: PathBuf,
    /// Banner line at the top of the document
    pub title: String,
}

/// Settings for the HTTP client.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl FetchConfig {
    pub fn new(timeout_secs: u64, user_agent: Option<String>) -> Result<Self, ConfigError> {
        if timeout_secs == 0 {
            return Err(ConfigError::ZeroTimeout);
        }

        Ok(Self {
            timeout: Duration::from_secs(timeout_secs),
            user_agent: user_agent.unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
        })
    }
}

impl CrawlConfig {
    /// Validates raw settings.
    ///
    /// `seed_url` defaults to `<base_url>index.htm`. The base URL is stored
    /// in the serialized form of `url::Url` (lowercase host, no default port,
    /// percent-encoded path) because discovered links are compared against it
    /// in that form. The scope test itself stays a plain string prefix test.
    pub fn new(
        base_url: String,
        seed_url: Option<String>,
        max_depth: usize,
        delay: Duration,
        fetch: FetchConfig,
        output: PathBuf,
        title: String,
    ) -> Result<Self, ConfigError> {
        let base_url = parse_http_url(&base_url)?.to_string();

        let seed = seed_url.unwrap_or_else(|| format!("{}{}", base_url, DEFAULT_SEED_PAGE));
        let seed_url = parse_http_url(&seed)?;

        Ok(Self {
            base_url,
            seed_url,
            max_depth,
            delay,
            fetch,
            output,
            title,
        })
    }
}

/// Parses a URL and insists on http or https.
pub fn parse_http_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw).map_err(|e| ConfigError::InvalidUrl {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        _ => Err(ConfigError::UnsupportedScheme(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build(base: &str, seed: Option<&str>) -> Result<CrawlConfig, ConfigError> {
        CrawlConfig::new(
            base.to_string(),
            seed.map(str::to_string),
            DEFAULT_MAX_DEPTH,
            Duration::from_millis(DEFAULT_DELAY_MS),
            FetchConfig::default(),
            PathBuf::from(DEFAULT_OUTPUT),
            DEFAULT_TITLE.to_string(),
        )
    }

    #[test]
    fn test_seed_defaults_to_index_page() {
        let config = build(DEFAULT_BASE_URL, None).unwrap();
        assert_eq!(
            config.seed_url.as_str(),
            "https://vaas.org.vn/kienthuc/Caylua/index.htm"
        );
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_explicit_seed() {
        let config = build("https://example.org/sec/", Some("https://example.org/sec/start.htm")).unwrap();
        assert_eq!(config.seed_url.as_str(), "https://example.org/sec/start.htm");
    }

    #[test]
    fn test_base_url_stored_in_serialized_form() {
        let config = build("https://Example.org:443/Lúa/", None).unwrap();
        assert_eq!(config.base_url, "https://example.org/L%C3%BAa/");
        assert_eq!(
            config.seed_url.as_str(),
            "https://example.org/L%C3%BAa/index.htm"
        );
    }

    #[test]
    fn test_rejects_invalid_url() {
        assert!(matches!(
            build("not a url", None),
            Err(ConfigError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        assert!(matches!(
            build("ftp://example.org/sec/", None),
            Err(ConfigError::UnsupportedScheme(_))
        ));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        assert!(matches!(FetchConfig::new(0, None), Err(ConfigError::ZeroTimeout)));
        assert_eq!(FetchConfig::new(5, None).unwrap().timeout, Duration::from_secs(5));
    }
}

// src/crawl/fetch.rs
// =============================================================================
// Downloads single pages over HTTP(S).
//
// Key behavior:
// - One GET per call, no retries
// - Only 200 OK counts as success; every other status is a FetchError
// - Bodies are decoded as UTF-8 no matter what charset the server declares
//   (invalid bytes become U+FFFD instead of failing the page)
// - Redirects are followed by reqwest (up to its default limit of 10)
//
// Rust concepts:
// - reqwest::Client is cheap to clone and pools connections internally,
//   so we build it once and reuse it for the whole crawl
// =============================================================================

use crate::config::FetchConfig;
use crate::error::{ConfigError, FetchError};
use reqwest::{Client, StatusCode};

/// HTTP client configured for crawling.
#[derive(Debug, Clone)]
pub struct PageFetcher {
    client: Client,
}

impl PageFetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client })
    }

    /// Fetches a page and returns its body as text.
    ///
    /// Returns:
    ///   Ok(html) for a 200 response
    ///   Err(FetchError::Status) for any other status code
    ///   Err(FetchError::Timeout / Connect / Transport) when no response came back
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await.map_err(FetchError::Body)?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    fn fetcher() -> PageFetcher {
        PageFetcher::new(&FetchConfig::default()).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_ok() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/sec/index.htm")
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_body("<title>Cây lúa</title>")
            .expect(1)
            .create_async()
            .await;

        let body = fetcher()
            .fetch(&format!("{}/sec/index.htm", server.url()))
            .await
            .unwrap();
        assert_eq!(body, "<title>Cây lúa</title>");

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_body_decoded_as_utf8_despite_charset() {
        let mut server = Server::new_async().await;
        let _page = server
            .mock("GET", "/page.htm")
            .with_status(200)
            .with_header("content-type", "text/html; charset=iso-8859-1")
            .with_body("Việt Nam")
            .create_async()
            .await;

        let body = fetcher()
            .fetch(&format!("{}/page.htm", server.url()))
            .await
            .unwrap();
        assert_eq!(body, "Việt Nam");
    }

    #[tokio::test]
    async fn test_non_200_is_error() {
        let mut server = Server::new_async().await;
        let _missing = server
            .mock("GET", "/missing.htm")
            .with_status(404)
            .create_async()
            .await;
        let _empty = server
            .mock("GET", "/empty.htm")
            .with_status(204)
            .create_async()
            .await;

        let result = fetcher().fetch(&format!("{}/missing.htm", server.url())).await;
        assert!(matches!(result, Err(FetchError::Status(404))));

        let result = fetcher().fetch(&format!("{}/empty.htm", server.url())).await;
        assert!(matches!(result, Err(FetchError::Status(204))));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        // Port 9 (discard) on localhost is almost never listening
        let result = fetcher().fetch("http://127.0.0.1:9/index.htm").await;
        assert!(matches!(
            result,
            Err(FetchError::Connect(_)) | Err(FetchError::Transport(_))
        ));
    }
}

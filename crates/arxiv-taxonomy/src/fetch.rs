//! Single-shot HTML fetcher wrapping reqwest.
//!
//! One GET per call. No retries and no redirect policy beyond reqwest's
//! default. A response only counts if it is 2xx, declares `text/html`,
//! and decodes as UTF-8.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;
use url::Url;

use crate::config::TaxonomyConfig;
use crate::error::{Result, TaxonomyError};

/// Source of raw page HTML.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch `url` and return the decoded HTML document.
    async fn fetch(&self, url: &Url) -> Result<String>;
}

/// HTTP fetcher used in production.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a fetcher from the timeout and user agent in `config`.
    pub fn new(config: &TaxonomyConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.as_str());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| TaxonomyError::Client(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<String> {
        check_scheme(url)?;
        debug!(%url, "fetching taxonomy page");

        let resp = self.client.get(url.clone()).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(TaxonomyError::Status(status.as_u16()));
        }

        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|s| s.to_string());
        if !content_type.as_deref().is_some_and(is_html) {
            return Err(TaxonomyError::ContentType(content_type));
        }

        let bytes = resp.bytes().await?;
        debug!(status = status.as_u16(), bytes = bytes.len(), "received taxonomy page");
        Ok(String::from_utf8(bytes.to_vec())?)
    }
}

/// Only absolute http(s) URLs are fetched.
fn check_scheme(url: &Url) -> Result<()> {
    match url.scheme() {
        "https" | "http" => Ok(()),
        other => Err(TaxonomyError::InvalidUrl(format!(
            "unsupported scheme {other:?} in {url}"
        ))),
    }
}

/// True when the MIME essence of a Content-Type value is `text/html`.
fn is_html(content_type: &str) -> bool {
    content_type
        .split(';')
        .next()
        .map(str::trim)
        .is_some_and(|essence| essence.eq_ignore_ascii_case("text/html"))
}

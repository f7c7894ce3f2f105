//! Configuration loading and resolution.

use std::time::Duration;

use tracing::warn;
use url::Url;

use crate::error::Result;

/// The arXiv page listing every subject and category.
pub const TAXONOMY_URL: &str = "https://arxiv.org/category_taxonomy";

/// Environment variable overriding the taxonomy URL.
pub const URL_ENV: &str = "ARXIV_TAXONOMY_URL";

/// Environment variable setting a request timeout in milliseconds.
pub const TIMEOUT_ENV: &str = "ARXIV_TAXONOMY_TIMEOUT_MS";

/// Settings for a [`TaxonomyClient`](crate::TaxonomyClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxonomyConfig {
    /// Page to fetch.
    pub url: Url,
    /// Request timeout. `None` leaves the transport default in place.
    pub timeout: Option<Duration>,
    /// User-Agent header sent with the request.
    pub user_agent: String,
}

impl Default for TaxonomyConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout: None,
            user_agent: format!("arxiv-taxonomy/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl TaxonomyConfig {
    /// Fetch `url` instead of the arXiv page.
    pub fn with_url(mut self, url: Url) -> Self {
        self.url = url;
        self
    }

    /// Abort the request after `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Send `user_agent` as the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Resolve settings: explicit values first, then the environment, then defaults.
    ///
    /// Bad explicit values are errors. Bad environment values are logged and ignored.
    pub fn resolve(explicit_url: Option<&str>, explicit_timeout_ms: Option<u64>) -> Result<Self> {
        let url = match explicit_url {
            Some(raw) => Url::parse(raw)?,
            None => url_from_env().unwrap_or_else(default_url),
        };

        let timeout = explicit_timeout_ms
            .or_else(timeout_from_env)
            .map(Duration::from_millis);

        Ok(Self {
            url,
            timeout,
            ..Self::default()
        })
    }
}

fn default_url() -> Url {
    // Constant, known-good URL.
    Url::parse(TAXONOMY_URL).unwrap_or_else(|_| unreachable!("TAXONOMY_URL is a valid URL"))
}

fn url_from_env() -> Option<Url> {
    let raw = std::env::var(URL_ENV).ok()?;
    match Url::parse(&raw) {
        Ok(url) => Some(url),
        Err(e) => {
            warn!("ignoring {URL_ENV}={raw:?}: {e}");
            None
        }
    }
}

fn timeout_from_env() -> Option<u64> {
    let raw = std::env::var(TIMEOUT_ENV).ok()?;
    match raw.trim().parse::<u64>() {
        Ok(ms) => Some(ms),
        Err(e) => {
            warn!("ignoring {TIMEOUT_ENV}={raw:?}: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_arxiv() {
        let config = TaxonomyConfig::default();
        assert_eq!(config.url.as_str(), TAXONOMY_URL);
        assert!(config.timeout.is_none());
        assert!(config.user_agent.starts_with("arxiv-taxonomy/"));
    }

    #[test]
    fn test_explicit_values_win() {
        let config =
            TaxonomyConfig::resolve(Some("http://127.0.0.1:8080/taxonomy"), Some(1500)).unwrap();
        assert_eq!(config.url.as_str(), "http://127.0.0.1:8080/taxonomy");
        assert_eq!(config.timeout, Some(Duration::from_millis(1500)));
    }

    #[test]
    fn test_bad_explicit_url_is_an_error() {
        assert!(TaxonomyConfig::resolve(Some("::nope::"), None).is_err());
    }

    #[test]
    fn test_builder_setters() {
        let config = TaxonomyConfig::default()
            .with_url(Url::parse("https://mirror.example/taxonomy").unwrap())
            .with_timeout(Duration::from_secs(3))
            .with_user_agent("tests");
        assert_eq!(config.url.host_str(), Some("mirror.example"));
        assert_eq!(config.timeout, Some(Duration::from_secs(3)));
        assert_eq!(config.user_agent, "tests");
    }

    // Environment is process-wide, so every env case lives in this one test.
    #[test]
    fn test_env_resolution() {
        std::env::set_var(URL_ENV, "http://mirror.test/tax");
        std::env::set_var(TIMEOUT_ENV, "2500");
        let config = TaxonomyConfig::resolve(None, None).unwrap();
        assert_eq!(config.url.as_str(), "http://mirror.test/tax");
        assert_eq!(config.timeout, Some(Duration::from_millis(2500)));

        let config =
            TaxonomyConfig::resolve(Some("https://explicit.test/page"), Some(10)).unwrap();
        assert_eq!(config.url.as_str(), "https://explicit.test/page");
        assert_eq!(config.timeout, Some(Duration::from_millis(10)));

        std::env::set_var(URL_ENV, "not a url");
        std::env::set_var(TIMEOUT_ENV, "abc");
        let config = TaxonomyConfig::resolve(None, None).unwrap();
        assert_eq!(config.url.as_str(), TAXONOMY_URL);
        assert_eq!(config.timeout, None);

        std::env::remove_var(URL_ENV);
        std::env::remove_var(TIMEOUT_ENV);
        let config = TaxonomyConfig::resolve(None, None).unwrap();
        assert_eq!(config, TaxonomyConfig::default());
    }
}

//! Fetch-then-extract entry point.

use std::sync::Arc;

use tracing::{info, warn};

use crate::config::TaxonomyConfig;
use crate::error::Result;
use crate::extract::extract_taxonomy;
use crate::fetch::{HttpFetcher, PageFetcher};
use crate::types::Taxonomy;

/// Fetches the taxonomy page and extracts the subject → category mapping.
///
/// Every call re-fetches and re-parses; nothing is cached. Dropping the
/// returned future aborts the request in flight.
#[derive(Clone)]
pub struct TaxonomyClient {
    config: TaxonomyConfig,
    fetcher: Arc<dyn PageFetcher>,
}

impl TaxonomyClient {
    /// Client backed by an HTTP fetcher built from `config`.
    pub fn new(config: TaxonomyConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(&config)?;
        Ok(Self::with_fetcher(config, Arc::new(fetcher)))
    }

    /// Client backed by any page source.
    pub fn with_fetcher(config: TaxonomyConfig, fetcher: Arc<dyn PageFetcher>) -> Self {
        Self { config, fetcher }
    }

    /// Settings this client was built with.
    pub fn config(&self) -> &TaxonomyConfig {
        &self.config
    }

    /// Fetch and extract, keeping the reason for any failure.
    pub async fn try_get_taxonomy(&self) -> Result<Taxonomy> {
        let html = self.fetcher.fetch(&self.config.url).await?;
        let taxonomy = extract_taxonomy(&html)?;
        info!(
            subjects = taxonomy.len(),
            categories = taxonomy.category_count(),
            "extracted arXiv taxonomy"
        );
        Ok(taxonomy)
    }

    /// Fetch and extract; any failure yields `None`.
    pub async fn get_taxonomy(&self) -> Option<Taxonomy> {
        match self.try_get_taxonomy().await {
            Ok(taxonomy) => Some(taxonomy),
            Err(e) => {
                warn!(url = %self.config.url, kind = ?e.kind(), "taxonomy unavailable: {e}");
                None
            }
        }
    }
}

/// Fetch arXiv's category taxonomy from the default page.
///
/// Returns `None` if the page cannot be fetched or does not have the
/// expected layout.
pub async fn get_taxonomy() -> Option<Taxonomy> {
    match TaxonomyClient::new(TaxonomyConfig::default()) {
        Ok(client) => client.get_taxonomy().await,
        Err(e) => {
            warn!("could not build HTTP client: {e}");
            None
        }
    }
}

//! arxiv-taxonomy — fetch arXiv's category taxonomy page and extract the
//! subject → category mapping.
//!
//! ```no_run
//! # async fn run() {
//! if let Some(taxonomy) = arxiv_taxonomy::get_taxonomy().await {
//!     for (subject, categories) in taxonomy.iter() {
//!         println!("{subject}: {} categories", categories.len());
//!     }
//! }
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod types;

pub use client::{get_taxonomy, TaxonomyClient};
pub use config::{TaxonomyConfig, TAXONOMY_URL};
pub use error::{ErrorKind, Result, TaxonomyError};
pub use extract::{extract_taxonomy, parse_category_text};
pub use fetch::{HttpFetcher, PageFetcher};
pub use types::*;

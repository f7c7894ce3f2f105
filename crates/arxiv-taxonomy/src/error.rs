//! Error types for fetching and extracting the taxonomy.

/// Coarse classification of a [`TaxonomyError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Transport failure, bad status, wrong content type, or undecodable body.
    NetworkFailure,
    /// The HTML could not be turned into a tree.
    MalformedDocument,
    /// The `category_taxonomy_list` container is missing.
    MissingAnchor,
}

/// All errors that can occur while producing a taxonomy.
#[derive(thiserror::Error, Debug)]
pub enum TaxonomyError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("HTTP client error: {0}")]
    Client(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    #[error("Unexpected content type: {}", .0.as_deref().unwrap_or("<none>"))]
    ContentType(Option<String>),

    #[error("Body is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    #[error("Anchor element #{0} not found")]
    MissingAnchor(String),
}

impl TaxonomyError {
    /// Which of the three failure kinds this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            TaxonomyError::InvalidUrl(_)
            | TaxonomyError::Client(_)
            | TaxonomyError::Transport(_)
            | TaxonomyError::Status(_)
            | TaxonomyError::ContentType(_)
            | TaxonomyError::Decode(_) => ErrorKind::NetworkFailure,
            TaxonomyError::MalformedDocument(_) => ErrorKind::MalformedDocument,
            TaxonomyError::MissingAnchor(_) => ErrorKind::MissingAnchor,
        }
    }
}

impl From<url::ParseError> for TaxonomyError {
    fn from(e: url::ParseError) -> Self {
        TaxonomyError::InvalidUrl(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TaxonomyError>;

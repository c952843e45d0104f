//! Error types for the composer, catalog, and preference layers

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Country directory returned status {status}")]
    DirectoryStatus { status: u16 },

    #[error("Country catalog is empty")]
    EmptyCatalog,

    #[error("Unknown country code: {code}")]
    UnknownCountry { code: String },

    #[error("Could not determine {kind} directory")]
    NoDirectory { kind: &'static str },

    #[error("Failed to open {url}: {source}")]
    Open {
        url: String,
        #[source]
        source: std::io::Error,
    },
}

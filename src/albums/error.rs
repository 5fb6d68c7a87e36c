use thiserror::Error;

pub type Result<T> = std::result::Result<T, AlbumError>;

/// Failures of the album store and request handling.
///
/// `NotFound` and `Decoding` never overlap: absence is decided before any
/// bytes are decoded.
#[derive(Debug, Error)]
pub enum AlbumError {
    #[error("album not found: {0}")]
    NotFound(String),

    #[error("failed to encode album {id}: {reason}")]
    Encoding { id: String, reason: String },

    #[error("failed to decode value stored under '{key}': {source}")]
    Decoding {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("storage error: {0:#}")]
    Storage(#[from] anyhow::Error),

    #[error("invalid request: {0}")]
    Validation(String),
}

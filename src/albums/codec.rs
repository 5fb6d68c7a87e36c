//! Album Record Codec
//!
//! Albums are stored as compact JSON objects with the fields `id`, `title`,
//! `artist` and `price`.

use super::error::{AlbumError, Result};
use super::types::Album;

pub fn encode(album: &Album) -> Result<Vec<u8>> {
    // serde_json writes non-finite floats as `null`, which would never decode back
    if !album.price.is_finite() {
        return Err(AlbumError::Encoding {
            id: album.id.clone(),
            reason: format!("price {} is not a finite number", album.price),
        });
    }

    serde_json::to_vec(album).map_err(|e| AlbumError::Encoding {
        id: album.id.clone(),
        reason: e.to_string(),
    })
}

/// `key` is only used to label the error.
pub fn decode(key: &str, bytes: &[u8]) -> Result<Album> {
    serde_json::from_slice(bytes).map_err(|source| AlbumError::Decoding {
        key: key.to_string(),
        source,
    })
}

//! Album Data Types
//!
//! The stored entity and the JSON bodies returned by the API.

use serde::{Deserialize, Serialize};

/// A single album record.
///
/// `id` doubles as the storage key. It is chosen by the caller; writing an
/// album whose id already exists replaces the stored record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub id: String,
    pub title: String,
    pub artist: String,
    pub price: f64,
}

/// Body accepted by `POST /albums`: either one album or a list of them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CreateAlbums {
    One(Album),
    Many(Vec<Album>),
}

/// Generic `{"message": ...}` body used for confirmations and errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomeResponse {
    pub title: String,
    pub version: String,
    pub author: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionResponse {
    #[serde(rename = "Version")]
    pub version: String,
    #[serde(rename = "Author")]
    pub author: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    #[serde(rename = "Status")]
    pub status: String,
}

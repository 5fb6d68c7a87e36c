//! Album API Protocol
//!
//! Endpoint paths and the static metadata reported by `/`, `/version` and `/healthz`.

// --- API Endpoints ---

/// Welcome payload.
pub const ENDPOINT_HOME: &str = "/";
/// Album collection: list, create, delete all.
pub const ENDPOINT_ALBUMS: &str = "/albums";
/// Single album by id: get, delete.
pub const ENDPOINT_ALBUM: &str = "/albums/:id";
/// Album item route with an empty id segment. Always answered with 400.
pub const ENDPOINT_ALBUM_EMPTY_ID: &str = "/albums/";
/// Service version and author.
pub const ENDPOINT_VERSION: &str = "/version";
/// Liveness probe.
pub const ENDPOINT_HEALTH: &str = "/healthz";

// --- Service Metadata ---

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHOR: &str = env!("CARGO_PKG_AUTHORS");
pub const TITLE: &str = "Axum server backed by redis";
pub const DESCRIPTION: &str = "Axum server to handle RESTful album requests with Redis as database";

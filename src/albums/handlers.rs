use super::error::AlbumError;
use super::protocol::{AUTHOR, DESCRIPTION, TITLE, VERSION};
use super::store::AlbumStore;
use super::types::{
    Album, CreateAlbums, HealthResponse, HomeResponse, MessageResponse, VersionResponse,
};
use crate::storage::KvClient;

use axum::{
    Json,
    extract::{Extension, Path, rejection::JsonRejection},
    http::StatusCode,
};
use std::sync::Arc;

/// Every failed request is answered with a status and a `{"message": ...}` body.
pub type ErrorReply = (StatusCode, Json<MessageResponse>);

/// Validation problems are the caller's fault (400). Everything else, including
/// storage and decoding failures, is reported as 404.
pub fn error_reply(err: &AlbumError) -> ErrorReply {
    let status = match err {
        AlbumError::Validation(_) => StatusCode::BAD_REQUEST,
        _ => StatusCode::NOT_FOUND,
    };
    (status, Json(MessageResponse::new(err.to_string())))
}

fn validate_id(id: &str) -> Result<(), AlbumError> {
    if id.is_empty() {
        return Err(AlbumError::Validation("invalid id".to_string()));
    }
    Ok(())
}

pub async fn handle_home() -> Json<HomeResponse> {
    Json(HomeResponse {
        title: TITLE.to_string(),
        version: VERSION.to_string(),
        author: AUTHOR.to_string(),
        description: DESCRIPTION.to_string(),
    })
}

pub async fn handle_version() -> Json<VersionResponse> {
    Json(VersionResponse {
        version: VERSION.to_string(),
        author: AUTHOR.to_string(),
    })
}

pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "Healthy".to_string(),
    })
}

pub async fn handle_list_albums<C: KvClient>(
    Extension(store): Extension<Arc<AlbumStore<C>>>,
) -> Result<Json<Vec<Album>>, ErrorReply> {
    match store.get_all().await {
        Ok(albums) => {
            tracing::debug!("Listed {} albums", albums.len());
            Ok(Json(albums))
        }
        Err(e) => {
            tracing::error!("Failed to list albums: {}", e);
            Err(error_reply(&e))
        }
    }
}

pub async fn handle_get_album<C: KvClient>(
    Extension(store): Extension<Arc<AlbumStore<C>>>,
    Path(id): Path<String>,
) -> Result<Json<Album>, ErrorReply> {
    validate_id(&id).map_err(|e| error_reply(&e))?;

    match store.get_one(&id).await {
        Ok(album) => Ok(Json(album)),
        Err(e @ AlbumError::NotFound(_)) => {
            tracing::debug!("Album {} not found", id);
            Err(error_reply(&e))
        }
        Err(e) => {
            tracing::error!("Failed to get album {}: {}", id, e);
            Err(error_reply(&e))
        }
    }
}

/// Accepts a single album or a JSON array of albums. Each album is written
/// directly under its own key; existing records with the same id are replaced.
pub async fn handle_create_albums<C: KvClient>(
    Extension(store): Extension<Arc<AlbumStore<C>>>,
    payload: Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateAlbums>), ErrorReply> {
    let body = match payload {
        Ok(Json(value)) => parse_create_body(value),
        Err(rejection) => Err(AlbumError::Validation(rejection.body_text())),
    };
    let body = body.map_err(|e| {
        tracing::warn!("Rejected create request: {}", e);
        error_reply(&e)
    })?;

    let result = match &body {
        CreateAlbums::One(album) => store.put_one(album).await,
        CreateAlbums::Many(albums) => store.put_many(albums).await,
    };

    match result {
        Ok(()) => {
            match &body {
                CreateAlbums::One(album) => tracing::info!("Stored album {}", album.id),
                CreateAlbums::Many(albums) => tracing::info!("Stored {} albums", albums.len()),
            }
            Ok((StatusCode::CREATED, Json(body)))
        }
        Err(e) => {
            tracing::error!("Failed to store albums: {}", e);
            Err(error_reply(&e))
        }
    }
}

fn parse_create_body(value: serde_json::Value) -> Result<CreateAlbums, AlbumError> {
    let body = if value.is_array() {
        CreateAlbums::Many(serde_json::from_value(value).map_err(invalid_body)?)
    } else {
        CreateAlbums::One(serde_json::from_value(value).map_err(invalid_body)?)
    };

    let albums: &[Album] = match &body {
        CreateAlbums::One(album) => std::slice::from_ref(album),
        CreateAlbums::Many(albums) => albums,
    };
    for album in albums {
        validate_id(&album.id)?;
    }

    Ok(body)
}

fn invalid_body(e: serde_json::Error) -> AlbumError {
    AlbumError::Validation(format!("malformed album: {}", e))
}

pub async fn handle_delete_album<C: KvClient>(
    Extension(store): Extension<Arc<AlbumStore<C>>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ErrorReply> {
    validate_id(&id).map_err(|e| error_reply(&e))?;

    match store.delete_one(&id).await {
        Ok(()) => {
            tracing::info!("Deleted album {}", id);
            Ok(Json(MessageResponse::new(format!("Deleted {}", id))))
        }
        Err(e) => {
            tracing::error!("Failed to delete album {}: {}", id, e);
            Err(error_reply(&e))
        }
    }
}

pub async fn handle_delete_albums<C: KvClient>(
    Extension(store): Extension<Arc<AlbumStore<C>>>,
) -> Result<Json<MessageResponse>, ErrorReply> {
    match store.delete_all().await {
        Ok(removed) => {
            tracing::info!("Deleted all albums ({} keys)", removed);
            Ok(Json(MessageResponse::new("Deleted all entries")))
        }
        Err(e) => {
            tracing::error!("Failed to delete all albums: {}", e);
            Err(error_reply(&e))
        }
    }
}

/// Answers `/albums/` (an item route with no id).
pub async fn handle_empty_id() -> ErrorReply {
    error_reply(&AlbumError::Validation("invalid id".to_string()))
}

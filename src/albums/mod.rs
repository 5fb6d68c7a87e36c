//! Album Service Module
//!
//! The REST surface for album records and the bridge between HTTP and the
//! key-value store.
//!
//! ## Overview
//! Each `Album` is encoded as a JSON document and stored under its `id`. Listing
//! and bulk deletion work by scanning every key in the store, so the store is
//! expected to hold nothing but albums.
//!
//! ## Submodules
//! - **`codec`**: Album <-> stored bytes.
//! - **`error`**: The error taxonomy shared by the store and the handlers.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`protocol`**: Endpoint paths and service metadata.
//! - **`store`**: `AlbumStore`, the storage adapter over a `KvClient`.
//! - **`types`**: The `Album` entity and the API's response bodies.

pub mod codec;
pub mod error;
pub mod handlers;
pub mod protocol;
pub mod store;
pub mod types;

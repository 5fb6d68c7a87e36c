//! Album Store Library
//!
//! This library crate defines the modules behind the album REST service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! - **`albums`**: The HTTP-facing part. Album entity, record codec, the
//!   `AlbumStore` storage adapter and the Axum request handlers.
//! - **`storage`**: The key-value seam. A small `KvClient` trait with a Redis
//!   backend for production and an in-memory backend for tests and local runs.
//! - **`config`**: Startup configuration from environment variables and flags.

pub mod albums;
pub mod config;
pub mod storage;

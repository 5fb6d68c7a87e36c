//! Key-Value Storage Module
//!
//! The thin seam between the album service and the key-value engine that
//! actually holds the bytes.
//!
//! ## Core Concepts
//! - **`KvClient`**: the four primitives the service needs (get, set, delete, key scan).
//!   Everything above this trait is backend-agnostic.
//! - **Redis**: `RedisClient` talks to a Redis server over a single long-lived,
//!   auto-reconnecting connection opened at startup.
//! - **Memory**: `MemoryClient` keeps everything in a process-local `DashMap`. Used by
//!   tests and for running the service without Redis.
//!
//! Key enumeration always scans the whole key space, so the backing store must be
//! dedicated to this service.

pub mod memory;
pub mod redis;

use anyhow::Result;
use std::future::Future;

/// Pattern used to enumerate every key owned by the service.
pub const MATCH_ALL: &str = "*";

/// Minimal key-value operations needed by the album store.
///
/// Implementations must be cheap to share across request handlers; the same
/// instance serves every request for the lifetime of the process.
pub trait KvClient: Send + Sync + 'static {
    /// Returns `None` when the key does not exist.
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<Vec<u8>>>> + Send;

    /// Unconditionally overwrites the value. No expiry is set.
    fn set(&self, key: &str, value: Vec<u8>) -> impl Future<Output = Result<()>> + Send;

    /// Deleting a missing key is not an error. Returns whether a key was removed.
    fn delete(&self, key: &str) -> impl Future<Output = Result<bool>> + Send;

    /// Lists every key matching a glob-style pattern.
    fn keys(&self, pattern: &str) -> impl Future<Output = Result<Vec<String>>> + Send;
}

#[cfg(test)]
mod tests;

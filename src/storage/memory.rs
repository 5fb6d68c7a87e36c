use super::KvClient;

use anyhow::Result;
use dashmap::DashMap;
use std::sync::Arc;

/// Process-local key-value backend.
///
/// Cloning shares the underlying map, so a clone handed to a test can observe
/// and tamper with what the service stored.
#[derive(Clone, Default)]
pub struct MemoryClient {
    data: Arc<DashMap<String, Vec<u8>>>,
}

impl MemoryClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Writes raw bytes, bypassing the album codec.
    pub fn insert_raw(&self, key: &str, value: impl Into<Vec<u8>>) {
        self.data.insert(key.to_string(), value.into());
    }
}

impl KvClient for MemoryClient {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.data.get(key).map(|entry| entry.value().clone()))
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<()> {
        self.data.insert(key.to_string(), value);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        Ok(self.data.remove(key).is_some())
    }

    async fn keys(&self, pattern: &str) -> Result<Vec<String>> {
        Ok(self
            .data
            .iter()
            .filter(|entry| glob_match(pattern, entry.key()))
            .map(|entry| entry.key().clone())
            .collect())
    }
}

/// Glob matching limited to `*` wildcards, which is all the service uses.
pub(super) fn glob_match(pattern: &str, key: &str) -> bool {
    let mut parts = pattern.split('*');
    let first = parts.next().unwrap_or("");
    let Some(mut rest) = key.strip_prefix(first) else {
        return false;
    };

    let parts: Vec<&str> = parts.collect();
    let Some((last, middle)) = parts.split_last() else {
        // no wildcard at all
        return rest.is_empty();
    };

    for part in middle {
        match rest.find(part) {
            Some(idx) => rest = &rest[idx + part.len()..],
            None => return false,
        }
    }

    rest.ends_with(last)
}

//! Storage Module Tests
//!
//! Validates the in-memory key-value backend and its key matching.
//!
//! ## Test Scopes
//! - **MemoryClient**: Get/Set/Delete semantics and key enumeration.
//! - **Glob**: The `*` wildcard matching used by key scans.
//!
//! *Note: `RedisClient` needs a running Redis server and is not covered here.*

#[cfg(test)]
mod tests {
    use crate::storage::memory::{MemoryClient, glob_match};
    use crate::storage::{KvClient, MATCH_ALL};

    // ============================================================
    // MEMORY CLIENT TESTS
    // ============================================================

    #[tokio::test]
    async fn test_memory_set_and_get() {
        let client = MemoryClient::new();

        client.set("1", b"blue train".to_vec()).await.unwrap();

        let value = client.get("1").await.unwrap();
        assert_eq!(value, Some(b"blue train".to_vec()));
    }

    #[tokio::test]
    async fn test_memory_get_missing_key() {
        let client = MemoryClient::new();

        let value = client.get("nothing-here").await.unwrap();
        assert!(value.is_none());
    }

    #[tokio::test]
    async fn test_memory_set_overwrites() {
        let client = MemoryClient::new();

        client.set("1", b"first".to_vec()).await.unwrap();
        client.set("1", b"second".to_vec()).await.unwrap();

        assert_eq!(client.get("1").await.unwrap(), Some(b"second".to_vec()));
        assert_eq!(client.len(), 1);
    }

    #[tokio::test]
    async fn test_memory_delete_is_idempotent() {
        let client = MemoryClient::new();
        client.set("1", b"x".to_vec()).await.unwrap();

        assert!(client.delete("1").await.unwrap(), "First delete removes the key");
        assert!(!client.delete("1").await.unwrap(), "Second delete finds nothing");
        assert!(client.is_empty());
    }

    #[tokio::test]
    async fn test_memory_keys_match_all() {
        let client = MemoryClient::new();
        for i in 0..10 {
            client.set(&format!("album-{}", i), vec![]).await.unwrap();
        }

        let mut keys = client.keys(MATCH_ALL).await.unwrap();
        keys.sort();

        assert_eq!(keys.len(), 10);
        assert_eq!(keys[0], "album-0");
        assert_eq!(keys[9], "album-9");
    }

    #[tokio::test]
    async fn test_memory_keys_with_prefix_pattern() {
        let client = MemoryClient::new();
        client.set("album:1", vec![]).await.unwrap();
        client.set("album:2", vec![]).await.unwrap();
        client.set("song:1", vec![]).await.unwrap();

        let keys = client.keys("album:*").await.unwrap();
        assert_eq!(keys.len(), 2);
        assert!(keys.iter().all(|k| k.starts_with("album:")));
    }

    #[tokio::test]
    async fn test_memory_clones_share_data() {
        let client = MemoryClient::new();
        let observer = client.clone();

        client.set("1", b"shared".to_vec()).await.unwrap();
        assert_eq!(observer.get("1").await.unwrap(), Some(b"shared".to_vec()));

        observer.insert_raw("2", "raw");
        assert_eq!(client.len(), 2);
    }

    // ============================================================
    // GLOB TESTS
    // ============================================================

    #[test]
    fn test_glob_match_all() {
        assert!(glob_match("*", ""));
        assert!(glob_match("*", "album-1"));
    }

    #[test]
    fn test_glob_literal() {
        assert!(glob_match("album", "album"));
        assert!(!glob_match("album", "albums"));
    }

    #[test]
    fn test_glob_prefix_suffix_and_middle() {
        assert!(glob_match("album:*", "album:42"));
        assert!(!glob_match("album:*", "song:42"));
        assert!(glob_match("*:42", "album:42"));
        assert!(glob_match("a*b*c", "axxbyyc"));
        assert!(!glob_match("a*b*c", "axxcyyb"));
        assert!(!glob_match("ab*ba", "aba"));
    }
}

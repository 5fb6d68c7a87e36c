use super::KvClient;
use crate::config::RedisConfig;

use ::redis::aio::ConnectionManager;
use ::redis::{AsyncCommands, ConnectionAddr, ConnectionInfo, RedisConnectionInfo};
use anyhow::{Context, Result};

/// Redis-backed key-value client.
///
/// Wraps a `ConnectionManager`: one multiplexed connection, opened once and
/// re-established automatically if it drops. Each call clones the handle,
/// which only bumps a reference count.
#[derive(Clone)]
pub struct RedisClient {
    conn: ConnectionManager,
}

impl RedisClient {
    pub async fn connect(config: &RedisConfig) -> Result<Self> {
        let info = ConnectionInfo {
            addr: ConnectionAddr::Tcp(config.host.clone(), config.port),
            redis: RedisConnectionInfo {
                db: config.db,
                password: config.password.clone(),
                ..Default::default()
            },
        };

        let client = ::redis::Client::open(info).context("invalid redis connection info")?;
        let conn = client
            .get_connection_manager()
            .await
            .with_context(|| format!("failed to connect to redis at {}", config.addr()))?;

        tracing::info!("Connected to redis at {} (db {})", config.addr(), config.db);
        Ok(Self { conn })
    }
}

impl KvClient for RedisClient {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut conn = self.conn.clone();
        let value: Option<Vec<u8>> = conn.get(key).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> Result<()> {
        let mut conn = self.conn.clone();
        let _: () = conn.set(key, value).await?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        let mut conn = self.conn.clone();
        let removed: i64 = conn.del(key).await?;
        Ok(removed > 0)
    }

    async fn keys(&self, pattern: &str) -> Result<Vec<String>> {
        let mut conn = self.conn.clone();
        let keys: Vec<String> = conn.keys(pattern).await?;
        Ok(keys)
    }
}

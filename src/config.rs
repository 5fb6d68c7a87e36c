//! Process Configuration
//!
//! Settings are read once at startup from the environment and may be
//! overridden by command-line flags (`--bind`, `--backend`).

use anyhow::{Context, Result, bail};
use std::net::SocketAddr;
use std::str::FromStr;

pub const DEFAULT_BIND: &str = "0.0.0.0:8080";
pub const DEFAULT_REDIS_HOST: &str = "127.0.0.1";
pub const DEFAULT_REDIS_PORT: u16 = 6379;

/// Which key-value engine backs the album store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    Redis,
    Memory,
}

impl FromStr for Backend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "redis" => Ok(Backend::Redis),
            "memory" => Ok(Backend::Memory),
            other => bail!("unknown backend '{}' (expected 'redis' or 'memory')", other),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RedisConfig {
    pub host: String,
    pub port: u16,
    /// `None` when no password is configured.
    pub password: Option<String>,
    pub db: i64,
}

impl RedisConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_REDIS_HOST.to_string(),
            port: DEFAULT_REDIS_PORT,
            password: None,
            db: 0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub backend: Backend,
    pub redis: RedisConfig,
}

impl AppConfig {
    /// Reads `REDIS_HOST`, `REDIS_PORT`, `REDIS_PASSWORD`, `REDIS_DB`,
    /// `ALBUMS_BIND` and `ALBUMS_BACKEND`.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as `from_env`, with the variable source injected.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let mut redis = RedisConfig::default();
        if let Some(host) = var("REDIS_HOST") {
            redis.host = host;
        }
        if let Some(port) = var("REDIS_PORT") {
            redis.port = port
                .trim()
                .parse()
                .with_context(|| format!("invalid REDIS_PORT '{}'", port))?;
        }
        redis.password = var("REDIS_PASSWORD");
        if let Some(db) = var("REDIS_DB") {
            redis.db = db
                .trim()
                .parse()
                .with_context(|| format!("invalid REDIS_DB '{}'", db))?;
        }

        let bind = var("ALBUMS_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind_addr = bind
            .trim()
            .parse()
            .with_context(|| format!("invalid ALBUMS_BIND '{}'", bind))?;

        let backend = match var("ALBUMS_BACKEND") {
            Some(name) => name.parse()?,
            None => Backend::Redis,
        };

        Ok(Self {
            bind_addr,
            backend,
            redis,
        })
    }

    /// Applies `--bind <addr:port>` and `--backend <redis|memory>` overrides.
    /// Unknown arguments are ignored.
    pub fn apply_args(&mut self, args: &[String]) -> Result<()> {
        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--bind" => {
                    let value = flag_value(args, i)?;
                    self.bind_addr = value
                        .parse()
                        .with_context(|| format!("invalid --bind '{}'", value))?;
                    i += 2;
                }
                "--backend" => {
                    self.backend = flag_value(args, i)?.parse()?;
                    i += 2;
                }
                _ => {
                    i += 1;
                }
            }
        }
        Ok(())
    }
}

fn flag_value(args: &[String], i: usize) -> Result<&str> {
    args.get(i + 1)
        .map(String::as_str)
        .with_context(|| format!("missing value for {}", args[i]))
}

#[cfg(test)]
mod tests;

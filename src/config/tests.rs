//! Configuration Tests
//!
//! Environment parsing and command-line overrides, driven through
//! `from_lookup` so the real process environment is never touched.

#[cfg(test)]
mod tests {
    use crate::config::{AppConfig, Backend, DEFAULT_REDIS_PORT};
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> anyhow::Result<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|name| vars.get(name).cloned())
    }

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("album-store")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.bind_addr.to_string(), "0.0.0.0:8080");
        assert_eq!(config.backend, Backend::Redis);
        assert_eq!(config.redis.host, "127.0.0.1");
        assert_eq!(config.redis.port, DEFAULT_REDIS_PORT);
        assert!(config.redis.password.is_none());
        assert_eq!(config.redis.db, 0);
    }

    #[test]
    fn test_redis_settings_from_env() {
        let config = config_from(&[
            ("REDIS_HOST", "redis.internal"),
            ("REDIS_PORT", "6380"),
            ("REDIS_PASSWORD", "hunter2"),
            ("REDIS_DB", "3"),
        ])
        .unwrap();

        assert_eq!(config.redis.addr(), "redis.internal:6380");
        assert_eq!(config.redis.password.as_deref(), Some("hunter2"));
        assert_eq!(config.redis.db, 3);
    }

    #[test]
    fn test_empty_password_means_none() {
        let config = config_from(&[("REDIS_PASSWORD", "")]).unwrap();
        assert!(config.redis.password.is_none());
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = config_from(&[("REDIS_PORT", "not-a-port")]).unwrap_err();
        assert!(err.to_string().contains("REDIS_PORT"));
    }

    #[test]
    fn test_unknown_backend_is_rejected() {
        assert!(config_from(&[("ALBUMS_BACKEND", "postgres")]).is_err());
    }

    #[test]
    fn test_backend_parse_is_case_insensitive() {
        let config = config_from(&[("ALBUMS_BACKEND", "Memory")]).unwrap();
        assert_eq!(config.backend, Backend::Memory);
    }

    #[test]
    fn test_args_override_env() {
        let mut config = config_from(&[("ALBUMS_BIND", "127.0.0.1:9000")]).unwrap();

        config
            .apply_args(&args(&["--bind", "127.0.0.1:5000", "--backend", "memory"]))
            .unwrap();

        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:5000");
        assert_eq!(config.backend, Backend::Memory);
    }

    #[test]
    fn test_args_missing_value() {
        let mut config = config_from(&[]).unwrap();
        assert!(config.apply_args(&args(&["--bind"])).is_err());
    }

    #[test]
    fn test_args_unknown_flags_ignored() {
        let mut config = config_from(&[]).unwrap();
        config.apply_args(&args(&["--verbose"])).unwrap();
        assert_eq!(config.backend, Backend::Redis);
    }
}

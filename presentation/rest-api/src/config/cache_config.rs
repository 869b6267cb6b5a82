use std::env;
use std::str::FromStr;
use std::time::Duration;

use super::app_config::{ConfigError, parse_var};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheBackend {
    Redis,
    Memory,
}

impl FromStr for CacheBackend {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "redis" => Ok(CacheBackend::Redis),
            "memory" => Ok(CacheBackend::Memory),
            _ => Err(ConfigError::Invalid {
                key: "CACHE_BACKEND",
                value: value.to_string(),
            }),
        }
    }
}

/// Cache settings
///
/// Environment variables:
/// - CACHE_BACKEND: "redis" (default) or "memory"
/// - REDIS_URL: full connection URL; when absent it is built from
///   REDIS_HOST (default "localhost"), REDIS_PORT (default 6379) and REDIS_PASSWORD
/// - CACHE_TTL_SECS: entry expiration in seconds (default: 3600)
#[derive(Debug, Clone)]
pub struct CacheConfig {
    pub backend: CacheBackend,
    pub redis_url: String,
    pub ttl: Duration,
}

impl CacheConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let backend = match env::var("CACHE_BACKEND") {
            Ok(value) => value.parse()?,
            Err(_) => CacheBackend::Redis,
        };

        let redis_url = match env::var("REDIS_URL") {
            Ok(url) => url,
            Err(_) => redis_url_from_parts(
                &env::var("REDIS_HOST").unwrap_or_else(|_| "localhost".to_string()),
                parse_var("REDIS_PORT", 6379)?,
                env::var("REDIS_PASSWORD").ok().as_deref(),
            ),
        };

        Ok(Self {
            backend,
            redis_url,
            ttl: Duration::from_secs(parse_var("CACHE_TTL_SECS", 3600)?),
        })
    }
}

fn redis_url_from_parts(host: &str, port: u16, password: Option<&str>) -> String {
    match password.filter(|p| !p.is_empty()) {
        Some(password) => format!("redis://:{}@{}:{}", password, host, port),
        None => format!("redis://{}:{}", host, port),
    }
}

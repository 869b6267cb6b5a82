use std::env;
use std::str::FromStr;

use poem::middleware::Cors;

use super::{
    cache_config::CacheConfig, cors_config, database_config::DatabaseSettings,
    server_config::ServerConfig,
};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config.missing: {0}")]
    Missing(&'static str),
    #[error("config.invalid: {key}={value}")]
    Invalid { key: &'static str, value: String },
}

/// Reads `key` and parses it, falling back to `default` when unset.
pub fn parse_var<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        Err(_) => Ok(default),
    }
}

pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: Cors,
    pub database: DatabaseSettings,
    pub cache: CacheConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env(),
            cors: cors_config::init_cors(),
            database: DatabaseSettings::from_env()?,
            cache: CacheConfig::from_env()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_fall_back_to_default_when_unset() {
        let value: u32 = parse_var("CATALOG_TEST_SURELY_UNSET_VAR", 42).unwrap();

        assert_eq!(value, 42);
    }

    #[test]
    fn should_render_error_codes() {
        let err = ConfigError::Invalid {
            key: "CACHE_TTL_SECS",
            value: "soon".to_string(),
        };

        assert_eq!(err.to_string(), "config.invalid: CACHE_TTL_SECS=soon");
        assert_eq!(
            ConfigError::Missing("DATABASE_URL").to_string(),
            "config.missing: DATABASE_URL"
        );
    }
}

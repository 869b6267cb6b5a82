use std::time::Duration;

use async_trait::async_trait;

/// Cache errors for domain layer.
#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    /// The cache store could not be reached.
    #[error("cache.unavailable")]
    Unavailable,
    /// The cache store was reached but rejected the command.
    #[error("cache.command_failed")]
    Command,
}

/// Port for a string key-value store with per-entry expiration.
///
/// Values are opaque strings; callers own the serialization format.
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError>;
    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError>;
    async fn delete(&self, key: &str) -> Result<(), CacheError>;
    /// Removes every entry whose key starts with `prefix`. Returns how many were removed.
    async fn delete_by_prefix(&self, prefix: &str) -> Result<u64, CacheError>;
}

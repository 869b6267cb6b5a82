use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::application::product::telemetry::record_cache_lookup;
use crate::domain::cache::{CacheError, CacheStore};
use crate::domain::logger::Logger;
use crate::domain::product::cache_keys::CatalogCacheKey;

/// Cache-aside helper shared by the catalog use cases.
///
/// Entries are JSON payloads stored under [`CatalogCacheKey`] keys with a
/// fixed expiration. Store failures propagate to the caller; a payload that
/// no longer decodes is treated as a miss.
pub struct CatalogCache {
    store: Arc<dyn CacheStore>,
    ttl: Duration,
    logger: Arc<dyn Logger>,
}

impl CatalogCache {
    pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);

    pub fn new(store: Arc<dyn CacheStore>, ttl: Duration, logger: Arc<dyn Logger>) -> Self {
        Self { store, ttl, logger }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub async fn read<T: DeserializeOwned>(
        &self,
        key: CatalogCacheKey,
    ) -> Result<Option<T>, CacheError> {
        let key = key.as_key();
        let Some(payload) = self.store.get(&key).await? else {
            record_cache_lookup(false);
            self.logger.debug(&format!("Cache miss: {}", key));
            return Ok(None);
        };

        match serde_json::from_str(&payload) {
            Ok(value) => {
                record_cache_lookup(true);
                self.logger.debug(&format!("Cache hit: {}", key));
                Ok(Some(value))
            }
            Err(e) => {
                record_cache_lookup(false);
                self.logger
                    .warn(&format!("Discarding undecodable cache entry {}: {}", key, e));
                Ok(None)
            }
        }
    }

    pub async fn write<T: Serialize>(
        &self,
        key: CatalogCacheKey,
        value: &T,
    ) -> Result<(), CacheError> {
        let key = key.as_key();
        let payload = match serde_json::to_string(value) {
            Ok(payload) => payload,
            Err(e) => {
                self.logger
                    .warn(&format!("Skipping cache write for {}: {}", key, e));
                return Ok(());
            }
        };
        self.store.set(&key, &payload, self.ttl).await
    }

    pub async fn evict(&self, key: CatalogCacheKey) -> Result<(), CacheError> {
        let key = key.as_key();
        self.store.delete(&key).await?;
        self.logger.debug(&format!("Cache evicted: {}", key));
        Ok(())
    }

    /// Drops the full list, the category list and every cached page.
    pub async fn evict_all(&self) -> Result<(), CacheError> {
        self.evict(CatalogCacheKey::AllProducts).await?;
        self.evict(CatalogCacheKey::Categories).await?;
        let removed = self
            .store
            .delete_by_prefix(CatalogCacheKey::PRODUCTS_PAGE_PREFIX)
            .await?;
        self.logger
            .debug(&format!("Cache evicted {} product pages", removed));
        Ok(())
    }
}

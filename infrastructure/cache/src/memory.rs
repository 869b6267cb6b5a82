use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tokio::time::Instant;

use business::domain::cache::{CacheError, CacheStore};

/// Map size that triggers a sweep regardless of the interval.
const MIN_SWEEP_LEN: usize = 256;
const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

struct Entry {
    value: String,
    expires_at: Instant,
}

struct Entries {
    map: HashMap<String, Entry>,
    sweep_at: usize,
    next_sweep: Option<Instant>,
}

impl Default for Entries {
    fn default() -> Self {
        Self {
            map: HashMap::new(),
            sweep_at: MIN_SWEEP_LEN,
            next_sweep: None,
        }
    }
}

impl Entries {
    /// Drops expired entries once the map doubles past its last swept size
    /// or the sweep interval has elapsed.
    fn sweep_if_due(&mut self, now: Instant) {
        let overdue = self.next_sweep.is_some_and(|at| now >= at);
        if self.map.len() >= self.sweep_at || overdue {
            self.map.retain(|_, entry| entry.expires_at > now);
            self.sweep_at = (self.map.len() * 2).max(MIN_SWEEP_LEN);
        } else if self.next_sweep.is_some() {
            return;
        }
        self.next_sweep = Some(now + SWEEP_INTERVAL);
    }
}

/// Process-local [`CacheStore`] with per-entry expiration.
///
/// Expiry follows `tokio::time`, so paused test clocks apply. Expired entries
/// are dropped when read and swept in bulk on writes.
#[derive(Default)]
pub struct InMemoryCacheStore {
    entries: RwLock<Entries>,
}

impl InMemoryCacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live entries.
    pub async fn len(&self) -> usize {
        let now = Instant::now();
        self.entries
            .read()
            .await
            .map
            .values()
            .filter(|entry| entry.expires_at > now)
            .count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    #[cfg(test)]
    async fn retained(&self) -> usize {
        self.entries.read().await.map.len()
    }
}

#[async_trait]
impl CacheStore for InMemoryCacheStore {
    async fn get(&self, key: &str) -> Result<Option<String>, CacheError> {
        let now = Instant::now();
        {
            let entries = self.entries.read().await;
            match entries.map.get(key) {
                Some(entry) if entry.expires_at > now => return Ok(Some(entry.value.clone())),
                Some(_) => {}
                None => return Ok(None),
            }
        }
        let mut entries = self.entries.write().await;
        if entries.map.get(key).is_some_and(|entry| entry.expires_at <= now) {
            entries.map.remove(key);
        }
        Ok(None)
    }

    async fn set(&self, key: &str, value: &str, ttl: Duration) -> Result<(), CacheError> {
        let now = Instant::now();
        let entry = Entry {
            value: value.to_string(),
            expires_at: now + ttl,
        };
        let mut entries = self.entries.write().await;
        entries.map.insert(key.to_string(), entry);
        entries.sweep_if_due(now);
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        self.entries.write().await.map.remove(key);
        Ok(())
    }

    async fn delete_by_prefix(&self, prefix: &str) -> Result<u64, CacheError> {
        let mut entries = self.entries.write().await;
        let before = entries.map.len();
        entries.map.retain(|key, _| !key.starts_with(prefix));
        Ok((before - entries.map.len()) as u64)
    }
}

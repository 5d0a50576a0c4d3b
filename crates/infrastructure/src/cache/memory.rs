use async_trait::async_trait;
use dashmap::DashMap;
use quartz_dns_application::ports::{CacheTtl, RecordCache};
use quartz_dns_domain::DomainError;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::debug;

struct CacheEntry {
    value: String,
    expires_at: Option<Instant>,
}

impl CacheEntry {
    fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(at) => Instant::now() >= at,
            None => false,
        }
    }
}

/// In-process record cache and invalidation bus.
///
/// Entries expire lazily on access. Channels fan out to every live
/// subscriber; a slow subscriber loses messages rather than blocking the
/// publisher.
pub struct MemoryRecordCache {
    entries: DashMap<String, CacheEntry>,
    channels: DashMap<String, Vec<mpsc::Sender<String>>>,
    channel_capacity: usize,
}

impl MemoryRecordCache {
    pub fn new(channel_capacity: usize) -> Self {
        Self {
            entries: DashMap::new(),
            channels: DashMap::new(),
            channel_capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl RecordCache for MemoryRecordCache {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        match self.entries.get(key) {
            Some(entry) if entry.is_expired() => {
                drop(entry);
                self.entries.remove(key);
                Ok(None)
            }
            Some(entry) => Ok(Some(entry.value.clone())),
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: String, ttl: CacheTtl) -> Result<(), DomainError> {
        let expires_at = match ttl {
            CacheTtl::Seconds(secs) => Some(Instant::now() + Duration::from_secs(secs)),
            CacheTtl::Forever => None,
        };

        self.entries
            .insert(key.to_string(), CacheEntry { value, expires_at });
        Ok(())
    }

    async fn delete(&self, keys: &[String]) -> Result<(), DomainError> {
        for key in keys {
            self.entries.remove(key);
        }
        Ok(())
    }

    async fn keys(&self, pattern: &str) -> Result<Vec<String>, DomainError> {
        let matches = match pattern.strip_suffix('*') {
            Some(prefix) => self
                .entries
                .iter()
                .filter(|entry| !entry.is_expired() && entry.key().starts_with(prefix))
                .map(|entry| entry.key().clone())
                .collect(),
            None => self
                .entries
                .iter()
                .filter(|entry| !entry.is_expired() && entry.key() == pattern)
                .map(|entry| entry.key().clone())
                .collect(),
        };

        Ok(matches)
    }

    async fn publish(&self, channel: &str, payload: String) -> Result<(), DomainError> {
        if let Some(mut senders) = self.channels.get_mut(channel) {
            senders.retain(|tx| !tx.is_closed());
            for tx in senders.iter() {
                if let Err(e) = tx.try_send(payload.clone()) {
                    debug!(error = %e, channel = %channel, "Dropping message for lagging subscriber");
                }
            }
        }
        Ok(())
    }

    async fn subscribe(&self, channel: &str) -> Result<mpsc::Receiver<String>, DomainError> {
        let (tx, rx) = mpsc::channel(self.channel_capacity);
        self.channels
            .entry(channel.to_string())
            .or_default()
            .push(tx);
        Ok(rx)
    }
}

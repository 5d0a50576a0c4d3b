use async_trait::async_trait;
use quartz_dns_domain::DomainError;
use tokio::sync::mpsc;

/// Retention for a cache entry: expire after a number of seconds or stay
/// until explicitly deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheTtl {
    Seconds(u64),
    Forever,
}

impl CacheTtl {
    /// Retention for a freshly read record set. Permanent deployments keep
    /// entries until an invalidation arrives, everything else expires with
    /// the record's own TTL.
    pub fn for_record(permanent: bool, record_ttl: u32) -> Self {
        if permanent {
            CacheTtl::Forever
        } else {
            CacheTtl::Seconds(u64::from(record_ttl))
        }
    }
}

/// Shared cache and invalidation bus. The cache is a disposable projection
/// of the record store, a failing call here must never fail a query.
#[async_trait]
pub trait RecordCache: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError>;

    async fn set(&self, key: &str, value: String, ttl: CacheTtl) -> Result<(), DomainError>;

    async fn delete(&self, keys: &[String]) -> Result<(), DomainError>;

    /// Keys currently present that match a glob-style pattern such as
    /// "dns:record:example.com:*".
    async fn keys(&self, pattern: &str) -> Result<Vec<String>, DomainError>;

    async fn publish(&self, channel: &str, payload: String) -> Result<(), DomainError>;

    /// Subscribes to a channel. The subscription lives as long as the
    /// returned receiver.
    async fn subscribe(&self, channel: &str) -> Result<mpsc::Receiver<String>, DomainError>;
}

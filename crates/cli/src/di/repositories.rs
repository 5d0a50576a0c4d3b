use quartz_dns_application::ports::{RecordCache, RecordRepository, ZoneRepository};
use quartz_dns_domain::config::CacheConfig;
use quartz_dns_domain::ServerStats;
use quartz_dns_infrastructure::cache::MemoryRecordCache;
use quartz_dns_infrastructure::repositories::{SqliteRecordRepository, SqliteZoneRepository};
use sqlx::SqlitePool;
use std::sync::Arc;

/// The adapters every use case is wired against: the SQLite store, the
/// in-process record cache and the shared query counters.
pub struct Repositories {
    pub zones: Arc<dyn ZoneRepository>,
    pub records: Arc<dyn RecordRepository>,
    pub cache: Arc<dyn RecordCache>,
    pub stats: Arc<ServerStats>,
}

impl Repositories {
    pub fn new(pool: SqlitePool, cache_config: &CacheConfig) -> Self {
        Self {
            zones: Arc::new(SqliteZoneRepository::new(pool.clone())),
            records: Arc::new(SqliteRecordRepository::new(pool)),
            cache: Arc::new(MemoryRecordCache::new(cache_config.channel_capacity)),
            stats: Arc::new(ServerStats::new()),
        }
    }
}

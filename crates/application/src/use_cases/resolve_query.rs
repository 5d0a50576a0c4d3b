use crate::cache_keys;
use crate::ports::{CacheTtl, RecordCache, RecordRepository, ZoneRepository};
use quartz_dns_domain::{DomainError, Record, RecordType, ServerStats};
use std::sync::Arc;

/// Cache-aside read path for authoritative lookups.
///
/// Reads go cache first, store second, and every store read warms the cache
/// for the next query. The store is the only authority: cache failures are
/// absorbed and the query proceeds against the store.
pub struct ResolveQueryUseCase {
    zones: Arc<dyn ZoneRepository>,
    records: Arc<dyn RecordRepository>,
    cache: Arc<dyn RecordCache>,
    stats: Arc<ServerStats>,
    permanent_cache: bool,
}

impl ResolveQueryUseCase {
    pub fn new(
        zones: Arc<dyn ZoneRepository>,
        records: Arc<dyn RecordRepository>,
        cache: Arc<dyn RecordCache>,
        stats: Arc<ServerStats>,
        permanent_cache: bool,
    ) -> Self {
        Self {
            zones,
            records,
            cache,
            stats,
            permanent_cache,
        }
    }

    /// Finds the zone owning `query_name` by longest-suffix match: the full
    /// name is tried first, then the leftmost label is dropped until a zone
    /// matches or no labels remain. None means we are not authoritative.
    pub async fn resolve_zone(&self, query_name: &str) -> Result<Option<String>, DomainError> {
        let labels: Vec<&str> = query_name.split('.').filter(|l| !l.is_empty()).collect();

        for start in 0..labels.len() {
            let candidate = labels[start..].join(".");
            if let Some(zone) = self.zones.get_by_name(&candidate).await? {
                return Ok(Some(zone.name));
            }
        }

        Ok(None)
    }

    /// Resolves (zone, name, type) to the full record set. An empty result
    /// means name-error at the caller, never a failure here.
    pub async fn execute(
        &self,
        zone: &str,
        name: &str,
        record_type: RecordType,
    ) -> Result<Vec<Record>, DomainError> {
        let set_key = cache_keys::record_set_key(zone, name, record_type);

        match self.cache.get(&set_key).await {
            Ok(Some(payload)) => match serde_json::from_str::<Vec<Record>>(&payload) {
                Ok(records) if !records.is_empty() => {
                    self.stats.record_cache_hit();
                    return Ok(records);
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::debug!(error = %e, key = %set_key, "Discarding undecodable cache entry");
                }
            },
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(error = %e, key = %set_key, "Cache read failed, falling back to store");
            }
        }

        // Older builds cached one record per key; honor those entries until
        // they age out.
        let single_key = cache_keys::single_record_key(zone, name, record_type);

        match self.cache.get(&single_key).await {
            Ok(Some(payload)) => match serde_json::from_str::<Record>(&payload) {
                Ok(record) => {
                    self.stats.record_cache_hit();
                    return Ok(vec![record]);
                }
                Err(e) => {
                    tracing::debug!(error = %e, key = %single_key, "Discarding undecodable cache entry");
                }
            },
            Ok(None) => {}
            Err(e) => {
                tracing::warn!(error = %e, key = %single_key, "Cache read failed, falling back to store");
            }
        }

        self.stats.record_cache_miss();

        let records = self
            .records
            .get_by_name_and_type(zone, name, record_type)
            .await?;

        if !records.is_empty() {
            let ttl = CacheTtl::for_record(self.permanent_cache, records[0].ttl);
            self.warm_cache(&set_key, &records, ttl).await;
            return Ok(records);
        }

        // Legacy schemas stored one row per (zone, name, type).
        if let Some(record) = self.records.get_one(zone, name, record_type).await? {
            let ttl = CacheTtl::for_record(self.permanent_cache, record.ttl);
            self.warm_cache(&single_key, &record, ttl).await;
            return Ok(vec![record]);
        }

        Ok(Vec::new())
    }

    async fn warm_cache<T: serde::Serialize>(&self, key: &str, value: &T, ttl: CacheTtl) {
        let payload = match serde_json::to_string(value) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(error = %e, key = %key, "Failed to serialize records for cache");
                return;
            }
        };

        if let Err(e) = self.cache.set(key, payload, ttl).await {
            tracing::warn!(error = %e, key = %key, "Failed to warm cache");
        }
    }
}

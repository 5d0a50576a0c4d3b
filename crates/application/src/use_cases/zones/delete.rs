use crate::cache_keys;
use crate::ports::{RecordCache, ZoneRepository};
use quartz_dns_domain::DomainError;
use std::sync::Arc;

pub struct DeleteZoneUseCase {
    zones: Arc<dyn ZoneRepository>,
    cache: Arc<dyn RecordCache>,
}

impl DeleteZoneUseCase {
    pub fn new(zones: Arc<dyn ZoneRepository>, cache: Arc<dyn RecordCache>) -> Self {
        Self { zones, cache }
    }

    /// Deletes a zone. The store cascades the deletion to every record the
    /// zone owns, then all cached entries for the zone are purged.
    pub async fn execute(&self, name: &str) -> Result<(), DomainError> {
        self.zones
            .get_by_name(name)
            .await?
            .ok_or_else(|| DomainError::ZoneNotFound(name.to_string()))?;

        self.zones.delete(name).await?;

        self.purge_zone_cache(name).await;

        Ok(())
    }

    async fn purge_zone_cache(&self, zone: &str) {
        let patterns = [
            cache_keys::zone_single_pattern(zone),
            cache_keys::zone_set_pattern(zone),
        ];

        for pattern in patterns {
            match self.cache.keys(&pattern).await {
                Ok(keys) if !keys.is_empty() => {
                    if let Err(e) = self.cache.delete(&keys).await {
                        tracing::warn!(error = %e, pattern = %pattern, "Failed to purge zone cache keys");
                    }
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!(error = %e, pattern = %pattern, "Failed to list zone cache keys");
                }
            }
        }
    }
}

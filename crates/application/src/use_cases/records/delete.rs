use crate::ports::{RecordCache, RecordRepository, ZoneRepository};
use crate::use_cases::soa::BumpSoaSerialUseCase;
use quartz_dns_domain::DomainError;
use std::sync::Arc;

use super::invalidation::{invalidate_record_keys, publish_update};

pub struct DeleteRecordUseCase {
    zones: Arc<dyn ZoneRepository>,
    records: Arc<dyn RecordRepository>,
    cache: Arc<dyn RecordCache>,
    bump_serial: Arc<BumpSoaSerialUseCase>,
}

impl DeleteRecordUseCase {
    pub fn new(
        zones: Arc<dyn ZoneRepository>,
        records: Arc<dyn RecordRepository>,
        cache: Arc<dyn RecordCache>,
        bump_serial: Arc<BumpSoaSerialUseCase>,
    ) -> Self {
        Self {
            zones,
            records,
            cache,
            bump_serial,
        }
    }

    pub async fn execute(&self, zone_name: &str, id: i64) -> Result<(), DomainError> {
        self.zones
            .get_by_name(zone_name)
            .await?
            .ok_or_else(|| DomainError::ZoneNotFound(zone_name.to_string()))?;

        // Fetched before deletion so name and type are still known for
        // invalidation once the row is gone.
        let record = self
            .records
            .get_by_id(id)
            .await?
            .ok_or(DomainError::RecordNotFound(id))?;

        if record.zone != zone_name {
            return Err(DomainError::InvalidRecord(
                "Record does not belong to the specified zone".to_string(),
            ));
        }

        self.records.delete(id).await?;

        if !record.is_soa() {
            if let Err(e) = self.bump_serial.execute(zone_name).await {
                tracing::warn!(error = %e, zone = %zone_name, "Failed to bump SOA serial");
            }
        }

        invalidate_record_keys(self.cache.as_ref(), &record).await;
        publish_update(self.cache.as_ref(), &record).await;

        Ok(())
    }
}

use crate::ports::{RecordCache, RecordRepository, ZoneRepository};
use crate::use_cases::soa::BumpSoaSerialUseCase;
use quartz_dns_domain::ttl::is_valid_ttl;
use quartz_dns_domain::{DomainError, Record};
use std::sync::Arc;

use super::invalidation::{invalidate_record_keys, publish_update};

pub struct UpdateRecordUseCase {
    zones: Arc<dyn ZoneRepository>,
    records: Arc<dyn RecordRepository>,
    cache: Arc<dyn RecordCache>,
    bump_serial: Arc<BumpSoaSerialUseCase>,
}

impl UpdateRecordUseCase {
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

    /// Updates content, TTL and priority in place. Name and type are fixed
    /// at creation; a rename is a delete plus a create.
    pub async fn execute(
        &self,
        zone_name: &str,
        id: i64,
        content: Option<String>,
        ttl: Option<u32>,
        priority: Option<u16>,
    ) -> Result<Record, DomainError> {
        self.zones
            .get_by_name(zone_name)
            .await?
            .ok_or_else(|| DomainError::ZoneNotFound(zone_name.to_string()))?;

        let mut record = self
            .records
            .get_by_id(id)
            .await?
            .ok_or(DomainError::RecordNotFound(id))?;

        if record.zone != zone_name {
            return Err(DomainError::InvalidRecord(
                "Record does not belong to the specified zone".to_string(),
            ));
        }

        if let Some(content) = content {
            Record::validate_content(&content).map_err(DomainError::InvalidRecord)?;
            record.content = content;
        }

        if let Some(ttl) = ttl {
            // 0 means "leave unchanged", same as omitting the field.
            if ttl != 0 {
                if !is_valid_ttl(ttl) {
                    return Err(DomainError::InvalidTtl(ttl));
                }
                record.ttl = ttl;
            }
        }

        if let Some(priority) = priority {
            record.priority = priority;
        }

        let updated = self.records.update(record).await?;

        if !updated.is_soa() {
            if let Err(e) = self.bump_serial.execute(zone_name).await {
                tracing::warn!(error = %e, zone = %zone_name, "Failed to bump SOA serial");
            }
        }

        invalidate_record_keys(self.cache.as_ref(), &updated).await;
        publish_update(self.cache.as_ref(), &updated).await;

        Ok(updated)
    }
}

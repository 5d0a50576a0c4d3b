use crate::ports::{RecordCache, RecordRepository, ZoneRepository};
use crate::use_cases::soa::BumpSoaSerialUseCase;
use quartz_dns_domain::record_name;
use quartz_dns_domain::ttl::{is_valid_ttl, DEFAULT_TTL};
use quartz_dns_domain::{DomainError, Record, RecordType};
use std::sync::Arc;

use super::invalidation::{invalidate_record_keys, publish_update};

pub struct CreateRecordUseCase {
    zones: Arc<dyn ZoneRepository>,
    records: Arc<dyn RecordRepository>,
    cache: Arc<dyn RecordCache>,
    bump_serial: Arc<BumpSoaSerialUseCase>,
}

impl CreateRecordUseCase {
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

    pub async fn execute(
        &self,
        zone_name: &str,
        name: String,
        record_type: RecordType,
        content: String,
        ttl: Option<u32>,
        priority: u16,
    ) -> Result<Record, DomainError> {
        self.zones
            .get_by_name(zone_name)
            .await?
            .ok_or_else(|| DomainError::ZoneNotFound(zone_name.to_string()))?;

        Record::validate_name(&name).map_err(DomainError::InvalidRecord)?;
        Record::validate_content(&content).map_err(DomainError::InvalidRecord)?;

        let ttl = match ttl {
            None | Some(0) => DEFAULT_TTL,
            Some(ttl) => {
                if !is_valid_ttl(ttl) {
                    return Err(DomainError::InvalidTtl(ttl));
                }
                ttl
            }
        };

        let name = record_name::qualify(&name, zone_name);
        let record = Record::new(
            zone_name.to_string(),
            name,
            record_type,
            content,
            ttl,
            priority,
        );

        let created = self.records.create(record).await?;

        // The record is committed at this point. Serial bump, invalidation
        // and fan-out are secondary effects, their failures are logged and
        // the mutation still succeeds.
        if !created.is_soa() {
            if let Err(e) = self.bump_serial.execute(zone_name).await {
                tracing::warn!(error = %e, zone = %zone_name, "Failed to bump SOA serial");
            }
        }

        invalidate_record_keys(self.cache.as_ref(), &created).await;
        publish_update(self.cache.as_ref(), &created).await;

        Ok(created)
    }
}

use crate::ports::{RecordRepository, ZoneRepository};
use quartz_dns_domain::{DomainError, Record};
use std::sync::Arc;

pub struct GetRecordUseCase {
    zones: Arc<dyn ZoneRepository>,
    records: Arc<dyn RecordRepository>,
}

impl GetRecordUseCase {
    pub fn new(zones: Arc<dyn ZoneRepository>, records: Arc<dyn RecordRepository>) -> Self {
        Self { zones, records }
    }

    pub async fn execute(&self, zone_name: &str, id: i64) -> Result<Record, DomainError> {
        self.zones
            .get_by_name(zone_name)
            .await?
            .ok_or_else(|| DomainError::ZoneNotFound(zone_name.to_string()))?;

        let record = self
            .records
            .get_by_id(id)
            .await?
            .ok_or(DomainError::RecordNotFound(id))?;

        // A record from another zone does not exist as far as this zone's
        // listing is concerned.
        if record.zone != zone_name {
            return Err(DomainError::RecordNotFound(id));
        }

        Ok(record)
    }
}

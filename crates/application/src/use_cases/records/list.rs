use crate::ports::{RecordRepository, ZoneRepository};
use quartz_dns_domain::{DomainError, Record};
use std::sync::Arc;

pub struct ListRecordsUseCase {
    zones: Arc<dyn ZoneRepository>,
    records: Arc<dyn RecordRepository>,
}

impl ListRecordsUseCase {
    pub fn new(zones: Arc<dyn ZoneRepository>, records: Arc<dyn RecordRepository>) -> Self {
        Self { zones, records }
    }

    pub async fn execute(&self, zone_name: &str) -> Result<Vec<Record>, DomainError> {
        self.zones
            .get_by_name(zone_name)
            .await?
            .ok_or_else(|| DomainError::ZoneNotFound(zone_name.to_string()))?;

        self.records.get_by_zone(zone_name).await
    }
}

use crate::ports::ZoneRepository;
use quartz_dns_domain::{DomainError, Zone};
use std::sync::Arc;

pub struct GetZoneUseCase {
    zones: Arc<dyn ZoneRepository>,
}

impl GetZoneUseCase {
    pub fn new(zones: Arc<dyn ZoneRepository>) -> Self {
        Self { zones }
    }

    pub async fn execute(&self, name: &str) -> Result<Zone, DomainError> {
        self.zones
            .get_by_name(name)
            .await?
            .ok_or_else(|| DomainError::ZoneNotFound(name.to_string()))
    }
}

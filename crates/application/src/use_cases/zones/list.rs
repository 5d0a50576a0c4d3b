use crate::ports::ZoneRepository;
use quartz_dns_domain::{DomainError, Zone};
use std::sync::Arc;

pub struct ListZonesUseCase {
    zones: Arc<dyn ZoneRepository>,
}

impl ListZonesUseCase {
    pub fn new(zones: Arc<dyn ZoneRepository>) -> Self {
        Self { zones }
    }

    pub async fn execute(&self) -> Result<Vec<Zone>, DomainError> {
        self.zones.get_all().await
    }
}

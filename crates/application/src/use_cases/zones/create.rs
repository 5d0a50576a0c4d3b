use crate::ports::ZoneRepository;
use crate::use_cases::soa::BumpSoaSerialUseCase;
use quartz_dns_domain::{DomainError, Zone};
use std::sync::Arc;

pub struct CreateZoneUseCase {
    zones: Arc<dyn ZoneRepository>,
    bump_serial: Arc<BumpSoaSerialUseCase>,
}

impl CreateZoneUseCase {
    pub fn new(zones: Arc<dyn ZoneRepository>, bump_serial: Arc<BumpSoaSerialUseCase>) -> Self {
        Self { zones, bump_serial }
    }

    pub async fn execute(&self, name: String) -> Result<Zone, DomainError> {
        Zone::validate_name(&name).map_err(DomainError::InvalidZoneName)?;

        let zone = self.zones.create(name).await?;

        // Materializes the default SOA record. The zone stands even if this
        // fails, the next mutation in the zone will retry.
        if let Err(e) = self.bump_serial.execute(&zone.name).await {
            tracing::warn!(error = %e, zone = %zone.name, "Failed to create default SOA record");
        }

        Ok(zone)
    }
}

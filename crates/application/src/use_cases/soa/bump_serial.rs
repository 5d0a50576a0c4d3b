use crate::cache_keys;
use crate::ports::{RecordCache, RecordRepository};
use quartz_dns_domain::config::SoaConfig;
use quartz_dns_domain::{DomainError, Record, RecordType, SoaData};
use std::sync::Arc;

/// TTL for start-of-authority records materialized from configuration.
const SOA_RECORD_TTL: u32 = 86_400;

/// Advances a zone's start-of-authority serial after a record mutation.
///
/// A zone with no SOA record gets one synthesized from the configured
/// defaults. Serials are derived from the wall clock but never move
/// backwards: when the clock-derived value would not advance past the stored
/// serial, the stored serial is incremented instead.
pub struct BumpSoaSerialUseCase {
    records: Arc<dyn RecordRepository>,
    cache: Arc<dyn RecordCache>,
    soa_defaults: SoaConfig,
}

impl BumpSoaSerialUseCase {
    pub fn new(
        records: Arc<dyn RecordRepository>,
        cache: Arc<dyn RecordCache>,
        soa_defaults: SoaConfig,
    ) -> Self {
        Self {
            records,
            cache,
            soa_defaults,
        }
    }

    /// Returns the serial now stored for the zone.
    pub async fn execute(&self, zone: &str) -> Result<u32, DomainError> {
        let soa_records = self
            .records
            .get_by_name_and_type(zone, zone, RecordType::SOA)
            .await?;

        let serial = match soa_records.into_iter().next() {
            None => self.create_default_soa(zone).await?,
            Some(mut record) => {
                let mut soa = SoaData::from_content(&record.content)?;
                soa.serial = next_serial(soa.serial, unix_now());
                record.content = soa.to_content()?;
                self.records.update(record).await?;
                soa.serial
            }
        };

        self.invalidate_soa_keys(zone).await;

        Ok(serial)
    }

    async fn create_default_soa(&self, zone: &str) -> Result<u32, DomainError> {
        let serial = unix_now();
        let soa = SoaData {
            mname: self.soa_defaults.primary_nameserver.clone(),
            rname: self.soa_defaults.mail_address.clone(),
            serial,
            refresh: self.soa_defaults.refresh,
            retry: self.soa_defaults.retry,
            expire: self.soa_defaults.expire,
            minimum: self.soa_defaults.minimum,
        };

        // SOA lives at the zone apex.
        let record = Record::new(
            zone.to_string(),
            zone.to_string(),
            RecordType::SOA,
            soa.to_content()?,
            SOA_RECORD_TTL,
            0,
        );

        self.records.create(record).await?;

        Ok(serial)
    }

    async fn invalidate_soa_keys(&self, zone: &str) {
        let keys = [
            cache_keys::single_record_key(zone, zone, RecordType::SOA),
            cache_keys::record_set_key(zone, zone, RecordType::SOA),
        ];

        if let Err(e) = self.cache.delete(&keys).await {
            tracing::warn!(error = %e, zone = %zone, "Failed to invalidate SOA cache keys");
        }
    }
}

fn unix_now() -> u32 {
    chrono::Utc::now().timestamp() as u32
}

fn next_serial(previous: u32, now: u32) -> u32 {
    if now > previous {
        now
    } else {
        previous.wrapping_add(1)
    }
}

use async_trait::async_trait;
use quartz_dns_domain::{DomainError, Record, RecordType};

#[async_trait]
pub trait RecordRepository: Send + Sync {
    async fn create(&self, record: Record) -> Result<Record, DomainError>;

    async fn get_by_id(&self, id: i64) -> Result<Option<Record>, DomainError>;

    async fn get_by_zone(&self, zone: &str) -> Result<Vec<Record>, DomainError>;

    /// All records matching (zone, name, type). Multiple rows are legal and
    /// must all be returned, e.g. round-robin address sets.
    async fn get_by_name_and_type(
        &self,
        zone: &str,
        name: &str,
        record_type: RecordType,
    ) -> Result<Vec<Record>, DomainError>;

    /// Single-record lookup kept for legacy schemas that stored one row per
    /// (zone, name, type).
    async fn get_one(
        &self,
        zone: &str,
        name: &str,
        record_type: RecordType,
    ) -> Result<Option<Record>, DomainError>;

    async fn update(&self, record: Record) -> Result<Record, DomainError>;

    async fn delete(&self, id: i64) -> Result<(), DomainError>;
}

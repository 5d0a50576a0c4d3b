use async_trait::async_trait;
use quartz_dns_domain::{DomainError, Zone};

#[async_trait]
pub trait ZoneRepository: Send + Sync {
    async fn create(&self, name: String) -> Result<Zone, DomainError>;

    async fn get_by_name(&self, name: &str) -> Result<Option<Zone>, DomainError>;

    async fn get_all(&self) -> Result<Vec<Zone>, DomainError>;

    async fn delete(&self, name: &str) -> Result<(), DomainError>;
}

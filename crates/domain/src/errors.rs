use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Zone not found: {0}")]
    ZoneNotFound(String),

    #[error("Record not found: {0}")]
    RecordNotFound(i64),

    #[error("Zone already exists: {0}")]
    ZoneAlreadyExists(String),

    #[error("Invalid zone name: {0}")]
    InvalidZoneName(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("Invalid TTL: {0} is not in the allowed set")]
    InvalidTtl(u32),

    #[error("Unsupported record type: {0}")]
    UnsupportedRecordType(String),

    #[error("Malformed record content: {0}")]
    MalformedRecordContent(String),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Cache unavailable: {0}")]
    CacheUnavailable(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

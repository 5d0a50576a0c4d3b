use quartz_dns_domain::Record;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordResponse {
    pub id: i64,
    pub zone: String,
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub content: String,
    pub ttl: u32,
    pub priority: u16,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl RecordResponse {
    pub fn from_record(record: Record) -> Self {
        Self {
            id: record.id.unwrap_or(0),
            zone: record.zone,
            name: record.name,
            record_type: record.record_type.as_str().to_string(),
            content: record.content,
            ttl: record.ttl,
            priority: record.priority,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateRecordRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub content: String,
    pub ttl: Option<u32>,
    pub priority: Option<u16>,
}

/// Name and type are fixed at creation; only the mutable attributes can be
/// sent here.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateRecordRequest {
    pub content: Option<String>,
    pub ttl: Option<u32>,
    pub priority: Option<u16>,
}

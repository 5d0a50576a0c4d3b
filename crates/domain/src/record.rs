use crate::record_type::RecordType;
use serde::{Deserialize, Serialize};

/// A single DNS record owned by a zone. `name` is always stored fully
/// qualified within the zone (e.g. "www.example.com" for zone "example.com").
///
/// `content` holds the type-specific payload: a plain address or hostname for
/// most types, and a JSON document for SOA, SRV and CAA.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: Option<i64>,
    pub zone: String,
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: RecordType,
    pub content: String,
    pub ttl: u32,
    pub priority: u16,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Record {
    pub fn new(
        zone: String,
        name: String,
        record_type: RecordType,
        content: String,
        ttl: u32,
        priority: u16,
    ) -> Self {
        Self {
            id: None,
            zone,
            name,
            record_type,
            content,
            ttl,
            priority,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn is_soa(&self) -> bool {
        self.record_type == RecordType::SOA
    }

    pub fn validate_name(name: &str) -> Result<(), String> {
        if name.is_empty() {
            return Err("Record name cannot be empty".to_string());
        }
        if name.len() > 253 {
            return Err("Record name cannot exceed 253 characters".to_string());
        }
        let valid = name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.' || c == '_' || c == '@' || c == '*');
        if !valid {
            return Err("Record name contains invalid characters".to_string());
        }
        Ok(())
    }

    pub fn validate_content(content: &str) -> Result<(), String> {
        if content.is_empty() {
            return Err("Record content cannot be empty".to_string());
        }
        if content.len() > 4096 {
            return Err("Record content cannot exceed 4096 characters".to_string());
        }
        Ok(())
    }
}

use crate::errors::DomainError;
use serde::{Deserialize, Serialize};

/// Structured SOA payload carried in a record's content field as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoaData {
    pub mname: String,
    pub rname: String,
    pub serial: u32,
    pub refresh: i32,
    pub retry: i32,
    pub expire: i32,
    pub minimum: u32,
}

/// Structured SRV payload carried in a record's content field as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SrvData {
    pub priority: u16,
    pub weight: u16,
    pub port: u16,
    pub target: String,
}

/// Structured CAA payload carried in a record's content field as JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaaData {
    pub flag: u8,
    pub tag: String,
    pub value: String,
}

impl SoaData {
    pub fn from_content(content: &str) -> Result<Self, DomainError> {
        serde_json::from_str(content)
            .map_err(|e| DomainError::MalformedRecordContent(format!("SOA: {}", e)))
    }

    pub fn to_content(&self) -> Result<String, DomainError> {
        serde_json::to_string(self)
            .map_err(|e| DomainError::MalformedRecordContent(format!("SOA: {}", e)))
    }
}

impl SrvData {
    pub fn from_content(content: &str) -> Result<Self, DomainError> {
        serde_json::from_str(content)
            .map_err(|e| DomainError::MalformedRecordContent(format!("SRV: {}", e)))
    }

    pub fn to_content(&self) -> Result<String, DomainError> {
        serde_json::to_string(self)
            .map_err(|e| DomainError::MalformedRecordContent(format!("SRV: {}", e)))
    }
}

impl CaaData {
    pub fn from_content(content: &str) -> Result<Self, DomainError> {
        serde_json::from_str(content)
            .map_err(|e| DomainError::MalformedRecordContent(format!("CAA: {}", e)))
    }

    pub fn to_content(&self) -> Result<String, DomainError> {
        serde_json::to_string(self)
            .map_err(|e| DomainError::MalformedRecordContent(format!("CAA: {}", e)))
    }
}

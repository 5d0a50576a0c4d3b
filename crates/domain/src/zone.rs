use serde::{Deserialize, Serialize};

/// An administrative domain this server is authoritative for. Zone names are
/// stored without a trailing dot and are unique in the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub id: Option<i64>,
    pub name: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Zone {
    pub fn new(name: String) -> Self {
        Self {
            id: None,
            name,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn validate_name(name: &str) -> Result<(), String> {
        if name.is_empty() {
            return Err("Zone name cannot be empty".to_string());
        }
        if name.len() > 253 {
            return Err("Zone name cannot exceed 253 characters".to_string());
        }
        if name.ends_with('.') {
            return Err("Zone name must not have a trailing dot".to_string());
        }
        let valid = name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '.' || c == '_');
        if !valid {
            return Err(
                "Zone name contains invalid characters (only alphanumeric, hyphens, dots and underscores are allowed)".to_string(),
            );
        }
        Ok(())
    }
}

use quartz_dns_domain::Zone;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ZoneResponse {
    pub id: i64,
    pub name: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl ZoneResponse {
    pub fn from_zone(zone: Zone) -> Self {
        Self {
            id: zone.id.unwrap_or(0),
            name: zone.name,
            created_at: zone.created_at,
            updated_at: zone.updated_at,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateZoneRequest {
    pub name: String,
}

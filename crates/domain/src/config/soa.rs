use serde::{Deserialize, Serialize};

/// Defaults used when a zone's start-of-authority record is materialized
/// automatically (on zone creation or on the first serial bump of a zone
/// that has none).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SoaConfig {
    #[serde(default = "default_primary_nameserver")]
    pub primary_nameserver: String,

    #[serde(default = "default_mail_address")]
    pub mail_address: String,

    #[serde(default = "default_refresh")]
    pub refresh: i32,

    #[serde(default = "default_retry")]
    pub retry: i32,

    #[serde(default = "default_expire")]
    pub expire: i32,

    #[serde(default = "default_minimum")]
    pub minimum: u32,
}

impl Default for SoaConfig {
    fn default() -> Self {
        Self {
            primary_nameserver: default_primary_nameserver(),
            mail_address: default_mail_address(),
            refresh: default_refresh(),
            retry: default_retry(),
            expire: default_expire(),
            minimum: default_minimum(),
        }
    }
}

fn default_primary_nameserver() -> String {
    "ns1.example.com".to_string()
}

fn default_mail_address() -> String {
    "hostmaster.example.com".to_string()
}

fn default_refresh() -> i32 {
    7200
}

fn default_retry() -> i32 {
    3600
}

fn default_expire() -> i32 {
    1_209_600
}

fn default_minimum() -> u32 {
    180
}

//! Cache key layout shared by every server instance.
//!
//! These formats are part of the deployed wire contract. Changing them
//! breaks interoperability with instances running older builds, which would
//! silently stop seeing each other's invalidations.

use quartz_dns_domain::RecordType;

/// Channel every instance subscribes to for record-change notifications.
/// The payload is the post-mutation record serialized as JSON.
pub const UPDATE_CHANNEL: &str = "dns:record:update";

/// Key holding the full record set for (zone, name, type).
pub fn record_set_key(zone: &str, name: &str, record_type: RecordType) -> String {
    format!("dns:records:{}:{}:{}", zone, name, record_type)
}

/// Legacy key holding a single record for (zone, name, type). Still read
/// and invalidated so caches written by older builds stay coherent.
pub fn single_record_key(zone: &str, name: &str, record_type: RecordType) -> String {
    format!("dns:record:{}:{}:{}", zone, name, record_type)
}

/// Pattern matching every single-record key of a zone.
pub fn zone_single_pattern(zone: &str) -> String {
    format!("dns:record:{}:*", zone)
}

/// Pattern matching every record-set key of a zone.
pub fn zone_set_pattern(zone: &str) -> String {
    format!("dns:records:{}:*", zone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_formats() {
        assert_eq!(
            record_set_key("example.com", "www.example.com", RecordType::A),
            "dns:records:example.com:www.example.com:A"
        );
        assert_eq!(
            single_record_key("example.com", "www.example.com", RecordType::AAAA),
            "dns:record:example.com:www.example.com:AAAA"
        );
    }

    #[test]
    fn test_zone_patterns() {
        assert_eq!(zone_single_pattern("example.com"), "dns:record:example.com:*");
        assert_eq!(zone_set_pattern("example.com"), "dns:records:example.com:*");
    }
}

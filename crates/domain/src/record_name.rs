//! Record name qualification rules.
//!
//! Records are stored with names fully qualified inside their zone. The API
//! accepts short forms ("www", "@") and they are expanded here before any
//! store row or cache key is built.

/// Expands a record name within its zone. "@" means the zone apex, names
/// already ending in the zone are kept as-is, dotted names are assumed to be
/// fully qualified already, and bare labels are suffixed with the zone.
pub fn qualify(name: &str, zone: &str) -> String {
    if name == "@" {
        return zone.to_string();
    }
    if name.ends_with(zone) {
        return name.to_string();
    }
    if name.contains('.') {
        return name.to_string();
    }
    format!("{}.{}", name, zone)
}

/// Appends the trailing dot expected on the wire.
pub fn to_fqdn(name: &str) -> String {
    if name.ends_with('.') {
        name.to_string()
    } else {
        format!("{}.", name)
    }
}

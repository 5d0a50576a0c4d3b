//! TTL policy shared by the API and the use cases.

/// TTL applied when a request leaves the field unset or zero.
pub const DEFAULT_TTL: u32 = 120;

/// The fixed set of TTL values accepted on record writes, in seconds.
pub const VALID_TTLS: [u32; 20] = [
    5, 10, 30, 60, 90, 120, 180, 300, 600, 900, 1800, 3600, 7200, 18000, 43200, 86400, 172800,
    432000, 1296000, 2592000,
];

pub fn is_valid_ttl(ttl: u32) -> bool {
    VALID_TTLS.contains(&ttl)
}

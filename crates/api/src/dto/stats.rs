use quartz_dns_domain::StatsSnapshot;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    pub queries: u64,
    pub cache_hits: u64,
    pub cache_misses: u64,
    pub nxdomain: u64,
    pub servfail: u64,
}

impl StatsResponse {
    pub fn from_snapshot(snapshot: StatsSnapshot) -> Self {
        Self {
            queries: snapshot.queries,
            cache_hits: snapshot.cache_hits,
            cache_misses: snapshot.cache_misses,
            nxdomain: snapshot.nxdomain,
            servfail: snapshot.servfail,
        }
    }
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Cache retention mode in seconds. The sentinel value 0 keeps entries
    /// until they are explicitly invalidated; any other value means entries
    /// expire with the TTL of the record they hold.
    #[serde(default = "default_cache_ttl")]
    pub ttl: u64,

    /// Buffer size of each invalidation subscription.
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

impl CacheConfig {
    pub fn is_permanent(&self) -> bool {
        self.ttl == 0
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: default_cache_ttl(),
            channel_capacity: default_channel_capacity(),
        }
    }
}

fn default_cache_ttl() -> u64 {
    300
}

fn default_channel_capacity() -> usize {
    1_024
}

use crate::cache_keys::{self, UPDATE_CHANNEL};
use crate::ports::RecordCache;
use quartz_dns_domain::Record;

/// Drops both cache key shapes for a record so the next read repopulates
/// them from the store. Failures are logged, never propagated: the store
/// write already committed and the cache holds no authority.
pub(crate) async fn invalidate_record_keys(cache: &dyn RecordCache, record: &Record) {
    let keys = [
        cache_keys::single_record_key(&record.zone, &record.name, record.record_type),
        cache_keys::record_set_key(&record.zone, &record.name, record.record_type),
    ];

    if let Err(e) = cache.delete(&keys).await {
        tracing::warn!(
            error = %e,
            zone = %record.zone,
            name = %record.name,
            "Failed to invalidate record cache keys"
        );
    }
}

/// Announces a mutation on the shared channel so other instances drop their
/// cached copies. For deletions the pre-deletion state is published, the
/// subscribers only consult zone, name and type.
pub(crate) async fn publish_update(cache: &dyn RecordCache, record: &Record) {
    let payload = match serde_json::to_string(record) {
        Ok(payload) => payload,
        Err(e) => {
            tracing::warn!(error = %e, "Failed to serialize record update event");
            return;
        }
    };

    if let Err(e) = cache.publish(UPDATE_CHANNEL, payload).await {
        tracing::warn!(
            error = %e,
            zone = %record.zone,
            name = %record.name,
            "Failed to publish record update event"
        );
    }
}

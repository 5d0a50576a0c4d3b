use quartz_dns_application::cache_keys::{self, UPDATE_CHANNEL};
use quartz_dns_application::ports::RecordCache;
use quartz_dns_domain::{DomainError, Record};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Listens on the record update channel and drops the cached entries for
/// every mutated record. Only the record's zone, name and type are
/// consulted, so deletion events carrying the record's last state
/// invalidate the same keys a create or update would.
pub struct InvalidationSubscriber {
    cache: Arc<dyn RecordCache>,
    shutdown: CancellationToken,
}

impl InvalidationSubscriber {
    pub fn new(cache: Arc<dyn RecordCache>) -> Self {
        Self {
            cache,
            shutdown: CancellationToken::new(),
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.shutdown = token;
        self
    }

    pub async fn start(self: Arc<Self>) -> Result<(), DomainError> {
        let mut rx = self.cache.subscribe(UPDATE_CHANNEL).await?;
        info!(channel = UPDATE_CHANNEL, "Subscribed to record updates");

        let subscriber = Arc::clone(&self);
        let shutdown = self.shutdown.clone();
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = shutdown.cancelled() => {
                        info!("InvalidationSubscriber: shutting down");
                        break;
                    }
                    message = rx.recv() => {
                        match message {
                            Some(payload) => subscriber.handle_update(&payload).await,
                            None => {
                                warn!("Record update channel closed");
                                break;
                            }
                        }
                    }
                }
            }
        });

        Ok(())
    }

    async fn handle_update(&self, payload: &str) {
        let record: Record = match serde_json::from_str(payload) {
            Ok(record) => record,
            Err(e) => {
                warn!(error = %e, "Ignoring undecodable record update");
                return;
            }
        };

        let keys = [
            cache_keys::single_record_key(&record.zone, &record.name, record.record_type),
            cache_keys::record_set_key(&record.zone, &record.name, record.record_type),
        ];

        debug!(zone = %record.zone, name = %record.name, "Invalidating cache for updated record");

        if let Err(e) = self.cache.delete(&keys).await {
            warn!(error = %e, zone = %record.zone, "Failed to invalidate cache entries");
        }
    }
}

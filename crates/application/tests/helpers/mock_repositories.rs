#![allow(dead_code)]
#![allow(unused_imports)]

use async_trait::async_trait;
use quartz_dns_application::ports::{CacheTtl, RecordCache, RecordRepository, ZoneRepository};
use quartz_dns_domain::{DomainError, Record, RecordType, Zone};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{mpsc, RwLock};

// ── MockZoneRepository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockZoneRepository {
    zones: Arc<RwLock<Vec<Zone>>>,
    next_id: Arc<RwLock<i64>>,
}

impl MockZoneRepository {
    pub fn new() -> Self {
        Self {
            zones: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(RwLock::new(1)),
        }
    }

    pub fn with_zones(names: Vec<&str>) -> Self {
        let zones = names
            .into_iter()
            .enumerate()
            .map(|(i, name)| Zone {
                id: Some(i as i64 + 1),
                name: name.to_string(),
                created_at: Some("2026-01-01 00:00:00".to_string()),
                updated_at: Some("2026-01-01 00:00:00".to_string()),
            })
            .collect::<Vec<_>>();
        let next_id = zones.len() as i64 + 1;

        Self {
            zones: Arc::new(RwLock::new(zones)),
            next_id: Arc::new(RwLock::new(next_id)),
        }
    }

    pub async fn count(&self) -> usize {
        self.zones.read().await.len()
    }
}

impl Default for MockZoneRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ZoneRepository for MockZoneRepository {
    async fn create(&self, name: String) -> Result<Zone, DomainError> {
        let mut zones = self.zones.write().await;

        if zones.iter().any(|z| z.name == name) {
            return Err(DomainError::ZoneAlreadyExists(name));
        }

        let mut next_id = self.next_id.write().await;
        let id = *next_id;
        *next_id += 1;

        let zone = Zone {
            id: Some(id),
            name,
            created_at: Some("2026-01-01 00:00:00".to_string()),
            updated_at: Some("2026-01-01 00:00:00".to_string()),
        };

        zones.push(zone.clone());
        Ok(zone)
    }

    async fn get_by_name(&self, name: &str) -> Result<Option<Zone>, DomainError> {
        let zones = self.zones.read().await;
        Ok(zones.iter().find(|z| z.name == name).cloned())
    }

    async fn get_all(&self) -> Result<Vec<Zone>, DomainError> {
        Ok(self.zones.read().await.clone())
    }

    async fn delete(&self, name: &str) -> Result<(), DomainError> {
        let mut zones = self.zones.write().await;
        let len_before = zones.len();
        zones.retain(|z| z.name != name);
        if zones.len() == len_before {
            return Err(DomainError::ZoneNotFound(name.to_string()));
        }
        Ok(())
    }
}

// ── MockRecordRepository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockRecordRepository {
    records: Arc<RwLock<Vec<Record>>>,
    next_id: Arc<RwLock<i64>>,
    set_reads: Arc<RwLock<u64>>,
    single_reads: Arc<RwLock<u64>>,
    legacy_only: Arc<RwLock<bool>>,
}

impl MockRecordRepository {
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
            next_id: Arc::new(RwLock::new(1)),
            set_reads: Arc::new(RwLock::new(0)),
            single_reads: Arc::new(RwLock::new(0)),
            legacy_only: Arc::new(RwLock::new(false)),
        }
    }

    pub fn with_records(records: Vec<Record>) -> Self {
        let mut max_id = 0i64;
        let stored = records
            .into_iter()
            .map(|mut record| {
                let id = record.id.unwrap_or(max_id + 1);
                record.id = Some(id);
                if id > max_id {
                    max_id = id;
                }
                record
            })
            .collect::<Vec<_>>();

        Self {
            records: Arc::new(RwLock::new(stored)),
            next_id: Arc::new(RwLock::new(max_id + 1)),
            set_reads: Arc::new(RwLock::new(0)),
            single_reads: Arc::new(RwLock::new(0)),
            legacy_only: Arc::new(RwLock::new(false)),
        }
    }

    /// Answer only through `get_one`, emulating a store populated by an
    /// older build that kept one row per (zone, name, type).
    pub async fn set_legacy_only(&self, legacy: bool) {
        *self.legacy_only.write().await = legacy;
    }

    /// Number of record-set reads served by the store so far.
    pub async fn set_read_count(&self) -> u64 {
        *self.set_reads.read().await
    }

    pub async fn single_read_count(&self) -> u64 {
        *self.single_reads.read().await
    }

    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn get_all_records(&self) -> Vec<Record> {
        self.records.read().await.clone()
    }
}

impl Default for MockRecordRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordRepository for MockRecordRepository {
    async fn create(&self, mut record: Record) -> Result<Record, DomainError> {
        let mut records = self.records.write().await;
        let mut next_id = self.next_id.write().await;
        let id = *next_id;
        *next_id += 1;

        record.id = Some(id);
        record.created_at = Some("2026-01-01 00:00:00".to_string());
        record.updated_at = Some("2026-01-01 00:00:00".to_string());

        records.push(record.clone());
        Ok(record)
    }

    async fn get_by_id(&self, id: i64) -> Result<Option<Record>, DomainError> {
        let records = self.records.read().await;
        Ok(records.iter().find(|r| r.id == Some(id)).cloned())
    }

    async fn get_by_zone(&self, zone: &str) -> Result<Vec<Record>, DomainError> {
        let records = self.records.read().await;
        Ok(records.iter().filter(|r| r.zone == zone).cloned().collect())
    }

    async fn get_by_name_and_type(
        &self,
        zone: &str,
        name: &str,
        record_type: RecordType,
    ) -> Result<Vec<Record>, DomainError> {
        *self.set_reads.write().await += 1;

        if *self.legacy_only.read().await {
            return Ok(Vec::new());
        }

        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|r| r.zone == zone && r.name == name && r.record_type == record_type)
            .cloned()
            .collect())
    }

    async fn get_one(
        &self,
        zone: &str,
        name: &str,
        record_type: RecordType,
    ) -> Result<Option<Record>, DomainError> {
        *self.single_reads.write().await += 1;

        let records = self.records.read().await;
        Ok(records
            .iter()
            .find(|r| r.zone == zone && r.name == name && r.record_type == record_type)
            .cloned())
    }

    async fn update(&self, record: Record) -> Result<Record, DomainError> {
        let mut records = self.records.write().await;
        let id = record.id.unwrap_or(0);

        let stored = records
            .iter_mut()
            .find(|r| r.id == Some(id))
            .ok_or(DomainError::RecordNotFound(id))?;

        *stored = Record {
            updated_at: Some("2026-01-02 00:00:00".to_string()),
            ..record
        };
        Ok(stored.clone())
    }

    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let mut records = self.records.write().await;
        let len_before = records.len();
        records.retain(|r| r.id != Some(id));
        if records.len() == len_before {
            return Err(DomainError::RecordNotFound(id));
        }
        Ok(())
    }
}

// ── MockRecordCache ────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockRecordCache {
    entries: Arc<RwLock<HashMap<String, (String, CacheTtl)>>>,
    published: Arc<RwLock<Vec<(String, String)>>>,
    subscribers: Arc<RwLock<HashMap<String, Vec<mpsc::Sender<String>>>>>,
    should_fail: Arc<RwLock<bool>>,
}

impl MockRecordCache {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            published: Arc::new(RwLock::new(Vec::new())),
            subscribers: Arc::new(RwLock::new(HashMap::new())),
            should_fail: Arc::new(RwLock::new(false)),
        }
    }

    /// Every cache operation fails until reset, emulating a lost backend.
    pub async fn set_should_fail(&self, should_fail: bool) {
        *self.should_fail.write().await = should_fail;
    }

    pub async fn entry_count(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn contains_key(&self, key: &str) -> bool {
        self.entries.read().await.contains_key(key)
    }

    pub async fn ttl_of(&self, key: &str) -> Option<CacheTtl> {
        self.entries.read().await.get(key).map(|(_, ttl)| *ttl)
    }

    pub async fn seed(&self, key: &str, value: &str) {
        self.entries
            .write()
            .await
            .insert(key.to_string(), (value.to_string(), CacheTtl::Seconds(300)));
    }

    pub async fn published_events(&self) -> Vec<(String, String)> {
        self.published.read().await.clone()
    }

    async fn check_available(&self) -> Result<(), DomainError> {
        if *self.should_fail.read().await {
            return Err(DomainError::CacheUnavailable(
                "Mock cache failed".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for MockRecordCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RecordCache for MockRecordCache {
    async fn get(&self, key: &str) -> Result<Option<String>, DomainError> {
        self.check_available().await?;
        let entries = self.entries.read().await;
        Ok(entries.get(key).map(|(value, _)| value.clone()))
    }

    async fn set(&self, key: &str, value: String, ttl: CacheTtl) -> Result<(), DomainError> {
        self.check_available().await?;
        self.entries
            .write()
            .await
            .insert(key.to_string(), (value, ttl));
        Ok(())
    }

    async fn delete(&self, keys: &[String]) -> Result<(), DomainError> {
        self.check_available().await?;
        let mut entries = self.entries.write().await;
        for key in keys {
            entries.remove(key);
        }
        Ok(())
    }

    async fn keys(&self, pattern: &str) -> Result<Vec<String>, DomainError> {
        self.check_available().await?;
        let entries = self.entries.read().await;
        let prefix = pattern.trim_end_matches('*');
        Ok(entries
            .keys()
            .filter(|k| k.starts_with(prefix))
            .cloned()
            .collect())
    }

    async fn publish(&self, channel: &str, payload: String) -> Result<(), DomainError> {
        self.check_available().await?;

        self.published
            .write()
            .await
            .push((channel.to_string(), payload.clone()));

        let subscribers = self.subscribers.read().await;
        if let Some(senders) = subscribers.get(channel) {
            for sender in senders {
                let _ = sender.try_send(payload.clone());
            }
        }
        Ok(())
    }

    async fn subscribe(&self, channel: &str) -> Result<mpsc::Receiver<String>, DomainError> {
        self.check_available().await?;
        let (tx, rx) = mpsc::channel(16);
        self.subscribers
            .write()
            .await
            .entry(channel.to_string())
            .or_default()
            .push(tx);
        Ok(rx)
    }
}

// ── RecordBuilder ──────────────────────────────────────────────────────────────

pub struct RecordBuilder {
    zone: String,
    name: String,
    record_type: RecordType,
    content: String,
    ttl: u32,
    priority: u16,
}

impl RecordBuilder {
    pub fn new() -> Self {
        Self {
            zone: "example.com".to_string(),
            name: "www.example.com".to_string(),
            record_type: RecordType::A,
            content: "192.0.2.1".to_string(),
            ttl: 3600,
            priority: 0,
        }
    }

    pub fn zone(mut self, zone: &str) -> Self {
        self.zone = zone.to_string();
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn record_type(mut self, record_type: RecordType) -> Self {
        self.record_type = record_type;
        self
    }

    pub fn content(mut self, content: &str) -> Self {
        self.content = content.to_string();
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.ttl = ttl;
        self
    }

    pub fn priority(mut self, priority: u16) -> Self {
        self.priority = priority;
        self
    }

    pub fn build(self) -> Record {
        Record::new(
            self.zone,
            self.name,
            self.record_type,
            self.content,
            self.ttl,
            self.priority,
        )
    }
}

impl Default for RecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_zone_repository() {
        let zones = MockZoneRepository::with_zones(vec!["example.com", "example.org"]);

        assert_eq!(zones.count().await, 2);
        assert!(zones.get_by_name("example.com").await.unwrap().is_some());
        assert!(zones.get_by_name("example.net").await.unwrap().is_none());

        let err = zones.create("example.com".to_string()).await.unwrap_err();
        assert!(matches!(err, DomainError::ZoneAlreadyExists(_)));
    }

    #[tokio::test]
    async fn test_mock_record_repository_counts_reads() {
        let records = MockRecordRepository::with_records(vec![RecordBuilder::new().build()]);

        let found = records
            .get_by_name_and_type("example.com", "www.example.com", RecordType::A)
            .await
            .unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(records.set_read_count().await, 1);
        assert_eq!(records.single_read_count().await, 0);
    }

    #[tokio::test]
    async fn test_mock_cache_fan_out() {
        let cache = MockRecordCache::new();
        let mut rx = cache.subscribe("dns:record:update").await.unwrap();

        cache
            .publish("dns:record:update", "payload".to_string())
            .await
            .unwrap();

        assert_eq!(rx.recv().await.unwrap(), "payload");
        assert_eq!(cache.published_events().await.len(), 1);
    }
}

use async_trait::async_trait;
use quartz_dns_application::ports::RecordRepository;
use quartz_dns_domain::{DomainError, Record, RecordType};
use sqlx::SqlitePool;
use tracing::{error, instrument};

type RecordRow = (
    i64,
    String,
    String,
    String,
    String,
    i64,
    i64,
    String,
    String,
);

pub struct SqliteRecordRepository {
    pool: SqlitePool,
}

impl SqliteRecordRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_record(row: RecordRow) -> Record {
        let (id, zone, name, record_type, content, ttl, priority, created_at, updated_at) = row;
        Record {
            id: Some(id),
            zone,
            name,
            record_type: record_type.parse::<RecordType>().unwrap_or(RecordType::A),
            content,
            ttl: ttl as u32,
            priority: priority as u16,
            created_at: Some(created_at),
            updated_at: Some(updated_at),
        }
    }
}

#[async_trait]
impl RecordRepository for SqliteRecordRepository {
    #[instrument(skip(self, record))]
    async fn create(&self, record: Record) -> Result<Record, DomainError> {
        let now = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

        let row = sqlx::query_as::<_, RecordRow>(
            "INSERT INTO records (zone, name, type, content, ttl, priority, created_at, updated_at)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?)
             RETURNING id, zone, name, type, content, ttl, priority, created_at, updated_at",
        )
        .bind(&record.zone)
        .bind(&record.name)
        .bind(record.record_type.as_str())
        .bind(&record.content)
        .bind(record.ttl as i64)
        .bind(record.priority as i64)
        .bind(&now)
        .bind(&now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to create record");
            DomainError::StoreUnavailable(e.to_string())
        })?;

        Ok(Self::row_to_record(row))
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: i64) -> Result<Option<Record>, DomainError> {
        let row = sqlx::query_as::<_, RecordRow>(
            "SELECT id, zone, name, type, content, ttl, priority, created_at, updated_at
             FROM records WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query record by id");
            DomainError::StoreUnavailable(e.to_string())
        })?;

        Ok(row.map(Self::row_to_record))
    }

    #[instrument(skip(self))]
    async fn get_by_zone(&self, zone: &str) -> Result<Vec<Record>, DomainError> {
        let rows = sqlx::query_as::<_, RecordRow>(
            "SELECT id, zone, name, type, content, ttl, priority, created_at, updated_at
             FROM records WHERE zone = ? ORDER BY name ASC, type ASC",
        )
        .bind(zone)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query records by zone");
            DomainError::StoreUnavailable(e.to_string())
        })?;

        Ok(rows.into_iter().map(Self::row_to_record).collect())
    }

    #[instrument(skip(self))]
    async fn get_by_name_and_type(
        &self,
        zone: &str,
        name: &str,
        record_type: RecordType,
    ) -> Result<Vec<Record>, DomainError> {
        let rows = sqlx::query_as::<_, RecordRow>(
            "SELECT id, zone, name, type, content, ttl, priority, created_at, updated_at
             FROM records WHERE zone = ? AND name = ? AND type = ?
             ORDER BY id ASC",
        )
        .bind(zone)
        .bind(name)
        .bind(record_type.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query records by name and type");
            DomainError::StoreUnavailable(e.to_string())
        })?;

        Ok(rows.into_iter().map(Self::row_to_record).collect())
    }

    #[instrument(skip(self))]
    async fn get_one(
        &self,
        zone: &str,
        name: &str,
        record_type: RecordType,
    ) -> Result<Option<Record>, DomainError> {
        let row = sqlx::query_as::<_, RecordRow>(
            "SELECT id, zone, name, type, content, ttl, priority, created_at, updated_at
             FROM records WHERE zone = ? AND name = ? AND type = ?
             ORDER BY id ASC LIMIT 1",
        )
        .bind(zone)
        .bind(name)
        .bind(record_type.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query record by name and type");
            DomainError::StoreUnavailable(e.to_string())
        })?;

        Ok(row.map(Self::row_to_record))
    }

    #[instrument(skip(self, record))]
    async fn update(&self, record: Record) -> Result<Record, DomainError> {
        let id = record
            .id
            .ok_or_else(|| DomainError::InvalidRecord("Record has no id".to_string()))?;
        let now = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

        let row = sqlx::query_as::<_, RecordRow>(
            "UPDATE records SET content = ?, ttl = ?, priority = ?, updated_at = ?
             WHERE id = ?
             RETURNING id, zone, name, type, content, ttl, priority, created_at, updated_at",
        )
        .bind(&record.content)
        .bind(record.ttl as i64)
        .bind(record.priority as i64)
        .bind(&now)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to update record");
            DomainError::StoreUnavailable(e.to_string())
        })?;

        row.map(Self::row_to_record)
            .ok_or(DomainError::RecordNotFound(id))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM records WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to delete record");
                DomainError::StoreUnavailable(e.to_string())
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::RecordNotFound(id));
        }

        Ok(())
    }
}

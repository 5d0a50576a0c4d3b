use async_trait::async_trait;
use quartz_dns_application::ports::ZoneRepository;
use quartz_dns_domain::{DomainError, Zone};
use sqlx::SqlitePool;
use tracing::{error, instrument};

type ZoneRow = (i64, String, String, String);

pub struct SqliteZoneRepository {
    pool: SqlitePool,
}

impl SqliteZoneRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_zone(row: ZoneRow) -> Zone {
        let (id, name, created_at, updated_at) = row;
        Zone {
            id: Some(id),
            name,
            created_at: Some(created_at),
            updated_at: Some(updated_at),
        }
    }
}

#[async_trait]
impl ZoneRepository for SqliteZoneRepository {
    #[instrument(skip(self))]
    async fn create(&self, name: String) -> Result<Zone, DomainError> {
        let now = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

        let row = sqlx::query_as::<_, ZoneRow>(
            "INSERT INTO zones (name, created_at, updated_at)
             VALUES (?, ?, ?)
             RETURNING id, name, created_at, updated_at",
        )
        .bind(&name)
        .bind(&now)
        .bind(&now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if e.to_string().contains("UNIQUE constraint failed") {
                DomainError::ZoneAlreadyExists(name.clone())
            } else {
                error!(error = %e, "Failed to create zone");
                DomainError::StoreUnavailable(e.to_string())
            }
        })?;

        Ok(Self::row_to_zone(row))
    }

    #[instrument(skip(self))]
    async fn get_by_name(&self, name: &str) -> Result<Option<Zone>, DomainError> {
        let row = sqlx::query_as::<_, ZoneRow>(
            "SELECT id, name, created_at, updated_at FROM zones WHERE name = ?",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query zone by name");
            DomainError::StoreUnavailable(e.to_string())
        })?;

        Ok(row.map(Self::row_to_zone))
    }

    #[instrument(skip(self))]
    async fn get_all(&self) -> Result<Vec<Zone>, DomainError> {
        let rows = sqlx::query_as::<_, ZoneRow>(
            "SELECT id, name, created_at, updated_at FROM zones ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to query all zones");
            DomainError::StoreUnavailable(e.to_string())
        })?;

        Ok(rows.into_iter().map(Self::row_to_zone).collect())
    }

    #[instrument(skip(self))]
    async fn delete(&self, name: &str) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM zones WHERE name = ?")
            .bind(name)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                error!(error = %e, "Failed to delete zone");
                DomainError::StoreUnavailable(e.to_string())
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::ZoneNotFound(name.to_string()));
        }

        Ok(())
    }
}

use quartz_dns_application::ports::{RecordRepository, ZoneRepository};
use quartz_dns_domain::{Record, RecordType};
use quartz_dns_infrastructure::repositories::{SqliteRecordRepository, SqliteZoneRepository};
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

async fn create_test_db() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .connect("sqlite::memory:")
        .await
        .unwrap();

    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .unwrap();

    sqlx::query(
        "CREATE TABLE zones (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
    )
    .execute(&pool)
    .await
    .unwrap();

    sqlx::query(
        "CREATE TABLE records (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            zone TEXT NOT NULL REFERENCES zones(name) ON DELETE CASCADE,
            name TEXT NOT NULL,
            type TEXT NOT NULL CHECK(type IN ('A', 'AAAA', 'CNAME', 'MX', 'NS', 'PTR', 'SOA', 'SRV', 'TXT', 'CAA')),
            content TEXT NOT NULL,
            ttl INTEGER NOT NULL DEFAULT 3600,
            priority INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
    )
    .execute(&pool)
    .await
    .unwrap();

    pool
}

#[tokio::test]
async fn test_create_and_get_by_name() {
    let pool = create_test_db().await;
    let repo = SqliteZoneRepository::new(pool);

    let zone = repo.create("example.com".to_string()).await.unwrap();

    assert!(zone.id.is_some());
    assert_eq!(zone.name, "example.com");
    assert!(zone.created_at.is_some());
    assert!(zone.updated_at.is_some());

    let fetched = repo.get_by_name("example.com").await.unwrap();
    assert!(fetched.is_some());
    assert_eq!(fetched.unwrap().name, "example.com");
}

#[tokio::test]
async fn test_get_by_name_not_found() {
    let pool = create_test_db().await;
    let repo = SqliteZoneRepository::new(pool);

    let result = repo.get_by_name("missing.com").await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_create_duplicate_zone_fails() {
    let pool = create_test_db().await;
    let repo = SqliteZoneRepository::new(pool);

    repo.create("example.com".to_string()).await.unwrap();
    let result = repo.create("example.com".to_string()).await;

    assert!(result.is_err());
    match result.unwrap_err() {
        quartz_dns_domain::DomainError::ZoneAlreadyExists(name) => {
            assert_eq!(name, "example.com");
        }
        other => panic!("Expected ZoneAlreadyExists, got {:?}", other),
    }
}

#[tokio::test]
async fn test_get_all_ordered_by_name() {
    let pool = create_test_db().await;
    let repo = SqliteZoneRepository::new(pool);

    repo.create("zeta.org".to_string()).await.unwrap();
    repo.create("alpha.com".to_string()).await.unwrap();
    repo.create("middle.net".to_string()).await.unwrap();

    let all = repo.get_all().await.unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0].name, "alpha.com");
    assert_eq!(all[1].name, "middle.net");
    assert_eq!(all[2].name, "zeta.org");
}

#[tokio::test]
async fn test_get_all_empty() {
    let pool = create_test_db().await;
    let repo = SqliteZoneRepository::new(pool);

    let all = repo.get_all().await.unwrap();
    assert!(all.is_empty());
}

#[tokio::test]
async fn test_delete_zone() {
    let pool = create_test_db().await;
    let repo = SqliteZoneRepository::new(pool);

    repo.create("example.com".to_string()).await.unwrap();
    repo.delete("example.com").await.unwrap();

    assert!(repo.get_by_name("example.com").await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_not_found() {
    let pool = create_test_db().await;
    let repo = SqliteZoneRepository::new(pool);

    let result = repo.delete("missing.com").await;

    assert!(result.is_err());
    match result.unwrap_err() {
        quartz_dns_domain::DomainError::ZoneNotFound(_) => {}
        other => panic!("Expected ZoneNotFound, got {:?}", other),
    }
}

#[tokio::test]
async fn test_delete_zone_cascades_to_records() {
    let pool = create_test_db().await;
    let zones = SqliteZoneRepository::new(pool.clone());
    let records = SqliteRecordRepository::new(pool);

    zones.create("example.com".to_string()).await.unwrap();
    zones.create("example.org".to_string()).await.unwrap();

    records
        .create(Record::new(
            "example.com".to_string(),
            "www.example.com".to_string(),
            RecordType::A,
            "192.0.2.1".to_string(),
            3600,
            0,
        ))
        .await
        .unwrap();
    records
        .create(Record::new(
            "example.org".to_string(),
            "www.example.org".to_string(),
            RecordType::A,
            "192.0.2.2".to_string(),
            3600,
            0,
        ))
        .await
        .unwrap();

    zones.delete("example.com").await.unwrap();

    assert!(records.get_by_zone("example.com").await.unwrap().is_empty());
    assert_eq!(records.get_by_zone("example.org").await.unwrap().len(), 1);
}

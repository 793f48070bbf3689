use sqlx::sqlite::SqlitePoolOptions;
use warden_dns_application::ports::ZoneStore;
use warden_dns_infrastructure::repositories::SqliteZoneStore;

async fn create_test_db() -> sqlx::SqlitePool {
    let pool = SqlitePoolOptions::new()
        .connect("sqlite::memory:")
        .await
        .unwrap();

    sqlx::query(
        r#"
        CREATE TABLE dns_zones (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL DEFAULT 0,
            domain TEXT NOT NULL,
            base_domain TEXT NOT NULL DEFAULT '',
            full_domain TEXT NOT NULL,
            active INTEGER NOT NULL DEFAULT 1,
            exact_match INTEGER NOT NULL DEFAULT 0,
            master INTEGER NOT NULL DEFAULT 0,
            forwarding INTEGER NOT NULL DEFAULT 0,
            UNIQUE(domain, base_domain)
        )
        "#,
    )
    .execute(&pool)
    .await
    .unwrap();

    pool
}

async fn insert_zone(pool: &sqlx::SqlitePool, full_domain: &str, active: bool, exact_match: bool) -> i64 {
    let row: (i64,) = sqlx::query_as(
        "INSERT INTO dns_zones (user_id, domain, base_domain, full_domain, active, exact_match)
         VALUES (1, ?, '', ?, ?, ?) RETURNING id",
    )
    .bind(full_domain)
    .bind(full_domain)
    .bind(i64::from(active))
    .bind(i64::from(exact_match))
    .fetch_one(pool)
    .await
    .unwrap();
    row.0
}

#[tokio::test]
async fn test_finds_active_zone_by_full_domain() {
    let pool = create_test_db().await;
    let id = insert_zone(&pool, "example.com", true, false).await;
    let store = SqliteZoneStore::new(pool);

    let zone = store.find_active("example.com").await.unwrap().unwrap();
    assert_eq!(zone.id, id);
    assert_eq!(zone.full_domain, "example.com");
    assert!(zone.active);
    assert!(!zone.exact_match);
}

#[tokio::test]
async fn test_inactive_zone_is_invisible() {
    let pool = create_test_db().await;
    insert_zone(&pool, "example.com", false, false).await;
    let store = SqliteZoneStore::new(pool);

    assert!(store.find_active("example.com").await.unwrap().is_none());
}

#[tokio::test]
async fn test_lookup_is_case_insensitive() {
    let pool = create_test_db().await;
    insert_zone(&pool, "Example.COM", true, false).await;
    let store = SqliteZoneStore::new(pool);

    assert!(store.find_active("example.com").await.unwrap().is_some());
}

#[tokio::test]
async fn test_unknown_domain_returns_none() {
    let pool = create_test_db().await;
    insert_zone(&pool, "example.com", true, false).await;
    let store = SqliteZoneStore::new(pool);

    assert!(store.find_active("example.org").await.unwrap().is_none());
}

#[tokio::test]
async fn test_flags_are_mapped() {
    let pool = create_test_db().await;
    insert_zone(&pool, "strict.example.com", true, true).await;
    let store = SqliteZoneStore::new(pool);

    let zone = store.find_active("strict.example.com").await.unwrap().unwrap();
    assert!(zone.exact_match);
    assert!(!zone.master);
    assert!(!zone.forwarding);
}

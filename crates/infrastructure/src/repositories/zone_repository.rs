use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::{error, instrument};
use warden_dns_application::ports::ZoneStore;
use warden_dns_domain::{DomainError, Zone};

type ZoneRow = (i64, i64, String, String, String, i64, i64, i64, i64);

pub struct SqliteZoneStore {
    pool: SqlitePool,
}

impl SqliteZoneStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_zone(row: ZoneRow) -> Zone {
        let (id, user_id, domain, base_domain, full_domain, active, exact_match, master, forwarding) =
            row;
        Zone {
            id,
            user_id,
            domain,
            base_domain,
            full_domain,
            active: active != 0,
            exact_match: exact_match != 0,
            master: master != 0,
            forwarding: forwarding != 0,
        }
    }
}

#[async_trait]
impl ZoneStore for SqliteZoneStore {
    #[instrument(skip(self))]
    async fn find_active(&self, candidate: &str) -> Result<Option<Zone>, DomainError> {
        let row = sqlx::query_as::<_, ZoneRow>(
            "SELECT id, user_id, domain, base_domain, full_domain, active, exact_match, master, forwarding
             FROM dns_zones
             WHERE active = 1 AND LOWER(full_domain) = LOWER(?)
             ORDER BY id LIMIT 1",
        )
        .bind(candidate)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, candidate, "Failed to query zone");
            DomainError::Store(e.to_string())
        })?;

        Ok(row.map(Self::row_to_zone))
    }
}

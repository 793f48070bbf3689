use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::{error, instrument};
use warden_dns_application::ports::QueryLogStore;
use warden_dns_domain::{DomainError, QueryLog};

pub struct SqliteQueryLogStore {
    pool: SqlitePool,
}

impl SqliteQueryLogStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QueryLogStore for SqliteQueryLogStore {
    /// Insert on first call, update-in-place afterwards. Only the fields
    /// that change during resolution are written back.
    #[instrument(skip(self, log))]
    async fn persist(&self, log: &mut QueryLog) -> Result<(), DomainError> {
        match log.id {
            None => {
                let row = sqlx::query_as::<_, (i64, String)>(
                    "INSERT INTO dns_query_log
                     (source_ip, domain, rclass, rtype, dns_zone_id, dns_record_id, found, forwarded, data)
                     VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
                     RETURNING id, created_at",
                )
                .bind(log.source_ip.to_string())
                .bind(&log.domain)
                .bind(log.rclass.as_str())
                .bind(log.rtype.as_str())
                .bind(log.dns_zone_id)
                .bind(log.dns_record_id)
                .bind(i64::from(log.found))
                .bind(i64::from(log.forwarded))
                .bind(&log.data)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    error!(error = %e, domain = %log.domain, "Failed to create query log");
                    DomainError::Store(e.to_string())
                })?;

                log.id = Some(row.0);
                log.created_at = Some(row.1);
            }
            Some(id) => {
                sqlx::query(
                    "UPDATE dns_query_log
                     SET dns_zone_id = ?, dns_record_id = ?, found = ?, forwarded = ?, data = ?
                     WHERE id = ?",
                )
                .bind(log.dns_zone_id)
                .bind(log.dns_record_id)
                .bind(i64::from(log.found))
                .bind(i64::from(log.forwarded))
                .bind(&log.data)
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    error!(error = %e, id, "Failed to update query log");
                    DomainError::Store(e.to_string())
                })?;
            }
        }

        Ok(())
    }
}

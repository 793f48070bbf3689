use std::str::FromStr;

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::{error, instrument};
use warden_dns_application::ports::RecordStore;
use warden_dns_domain::{DomainError, RecordClass, RecordData, RecordType, ZoneRecord};

type RecordRow = (i64, i64, i64, String, String, String);

pub struct SqliteRecordStore {
    pool: SqlitePool,
}

impl SqliteRecordStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn row_to_record(row: RecordRow) -> Result<ZoneRecord, DomainError> {
        let (id, dns_zone_id, ttl, rclass, rtype, data) = row;
        Ok(ZoneRecord {
            id,
            dns_zone_id,
            ttl: u32::try_from(ttl).unwrap_or(0),
            rclass: RecordClass::from_str(&rclass)?,
            rtype: RecordType::from_str(&rtype)?,
            data: RecordData::from_stored(&data),
        })
    }
}

#[async_trait]
impl RecordStore for SqliteRecordStore {
    #[instrument(skip(self))]
    async fn find_first(
        &self,
        dns_zone_id: i64,
        rclass: RecordClass,
        rtype: RecordType,
    ) -> Result<Option<ZoneRecord>, DomainError> {
        let row = sqlx::query_as::<_, RecordRow>(
            "SELECT id, dns_zone_id, ttl, rclass, rtype, data
             FROM dns_records
             WHERE dns_zone_id = ? AND rclass = ? AND rtype = ?
             ORDER BY id LIMIT 1",
        )
        .bind(dns_zone_id)
        .bind(rclass.as_str())
        .bind(rtype.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, dns_zone_id, "Failed to query record");
            DomainError::Store(e.to_string())
        })?;

        row.map(Self::row_to_record).transpose()
    }
}

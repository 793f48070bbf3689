use async_trait::async_trait;
use warden_dns_domain::{DomainError, RecordClass, RecordType, ZoneRecord};

/// Read access to the record rows of one zone.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// The first record on the zone for (class, type), in discovery order.
    /// A (zone, class, type) key may hold several records; resolution only
    /// ever uses the first.
    async fn find_first(
        &self,
        dns_zone_id: i64,
        rclass: RecordClass,
        rtype: RecordType,
    ) -> Result<Option<ZoneRecord>, DomainError>;
}

use async_trait::async_trait;
use warden_dns_domain::{DomainError, QueryLog};

/// Write path for query audit rows.
#[async_trait]
pub trait QueryLogStore: Send + Sync {
    /// Idempotent upsert of the row's current field values. Assigns
    /// `log.id` on the first call; later calls update the same row.
    async fn persist(&self, log: &mut QueryLog) -> Result<(), DomainError>;
}

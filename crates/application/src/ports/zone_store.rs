use async_trait::async_trait;
use warden_dns_domain::{DomainError, Zone};

/// Read access to the zones the administrative application maintains.
#[async_trait]
pub trait ZoneStore: Send + Sync {
    /// Look up an **active** zone whose stored full domain equals
    /// `candidate`. Exact-match gating against the original query domain is
    /// the engine's responsibility, not the store's.
    async fn find_active(&self, candidate: &str) -> Result<Option<Zone>, DomainError>;
}

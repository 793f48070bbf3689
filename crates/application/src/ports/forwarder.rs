use async_trait::async_trait;
use warden_dns_domain::{DomainError, ForwardReply, QueryLog, QueryRequest};

/// Relay of an unanswered query to the configured upstream resolvers.
#[async_trait]
pub trait Forwarder: Send + Sync {
    /// Try every configured upstream in order over the query's transport.
    /// Marks and persists `log` when a reply carries answers. Returns an
    /// empty reply when no upstream produced one; upstream failures are
    /// never surfaced.
    async fn forward(
        &self,
        request: &QueryRequest,
        log: &mut QueryLog,
    ) -> Result<ForwardReply, DomainError>;
}

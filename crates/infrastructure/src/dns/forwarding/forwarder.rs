use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};
use warden_dns_application::ports::{Forwarder, QueryLogStore};
use warden_dns_domain::{DomainError, ForwardReply, QueryLog, QueryRequest};

use super::exchange::exchange;

/// Relays unanswered queries to the configured upstream resolvers.
///
/// Upstreams are tried strictly in configured order with a fixed per-upstream
/// timeout. Iteration never stops at the first reply: each parsed reply
/// replaces the previous candidate, so the last upstream that did not time
/// out decides the final result. Timeouts and transport failures are skipped
/// without surfacing an error.
pub struct UpstreamForwarder {
    upstreams: Vec<SocketAddr>,
    timeout: Duration,
    logs: Arc<dyn QueryLogStore>,
}

impl UpstreamForwarder {
    pub fn new(upstreams: Vec<SocketAddr>, timeout: Duration, logs: Arc<dyn QueryLogStore>) -> Self {
        Self {
            upstreams,
            timeout,
            logs,
        }
    }
}

#[async_trait]
impl Forwarder for UpstreamForwarder {
    async fn forward(
        &self,
        request: &QueryRequest,
        log: &mut QueryLog,
    ) -> Result<ForwardReply, DomainError> {
        let mut reply = ForwardReply::empty();

        if self.upstreams.is_empty() {
            debug!(domain = %request.domain, "No upstreams configured");
            return Ok(reply);
        }

        for upstream in &self.upstreams {
            match exchange(*upstream, request, self.timeout).await {
                Ok(parsed) => {
                    reply = parsed;
                    if reply.has_answers() {
                        log.forwarded = true;
                        log.data = Some(request.domain.clone());
                        self.logs.persist(log).await?;
                    }
                }
                Err(DomainError::UpstreamTimeout { server }) => {
                    debug!(upstream = %server, domain = %request.domain, "Upstream timed out");
                }
                Err(e) => {
                    warn!(upstream = %upstream, error = %e, "Upstream exchange failed");
                }
            }
        }

        Ok(reply)
    }
}

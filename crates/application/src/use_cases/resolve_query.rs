use std::sync::Arc;

use tracing::{debug, warn};
use warden_dns_domain::dns_name::suffix_candidates;
use warden_dns_domain::{DomainError, Outcome, QueryLog, QueryRequest, Synthesis};

use crate::ports::{Forwarder, QueryLogStore, RecordStore, ZoneStore};
use crate::synthesis::synthesize;

/// The resolution engine: suffix-based zone/record matching over the
/// external stores, deciding between answering locally, forwarding upstream,
/// or returning a negative result. Holds no state across queries; every
/// execution re-reads current store contents.
pub struct ResolveQuery {
    zones: Arc<dyn ZoneStore>,
    records: Arc<dyn RecordStore>,
    logs: Arc<dyn QueryLogStore>,
    forwarder: Arc<dyn Forwarder>,
    forwarding_enabled: bool,
}

impl ResolveQuery {
    pub fn new(
        zones: Arc<dyn ZoneStore>,
        records: Arc<dyn RecordStore>,
        logs: Arc<dyn QueryLogStore>,
        forwarder: Arc<dyn Forwarder>,
        forwarding_enabled: bool,
    ) -> Self {
        Self {
            zones,
            records,
            logs,
            forwarder,
            forwarding_enabled,
        }
    }

    pub async fn execute(&self, request: &QueryRequest) -> Result<Outcome, DomainError> {
        let mut log = QueryLog::new(
            request.source.ip(),
            request.domain.clone(),
            request.rclass,
            request.rtype,
        );
        // Persisted up front so an audit row exists even if resolution
        // fails partway through.
        self.logs.persist(&mut log).await?;

        match self.probe_zones(request, &mut log).await {
            Ok(Some(outcome)) => return Ok(outcome),
            Ok(None) => {}
            Err(e) => {
                // Best-effort: keep whatever the log captured before the
                // store went away.
                let _ = self.logs.persist(&mut log).await;
                return Err(e);
            }
        }

        if self.forwarding_enabled {
            let reply = self.forwarder.forward(request, &mut log).await?;
            return Ok(Outcome::Forwarded(reply));
        }

        debug!(domain = %request.domain, "No local match, forwarding disabled");
        Ok(Outcome::NoMatch)
    }

    /// Probe suffix candidates longest-first. Returns `Some(outcome)` when a
    /// record match terminates the search, `None` when every candidate is
    /// exhausted.
    async fn probe_zones(
        &self,
        request: &QueryRequest,
        log: &mut QueryLog,
    ) -> Result<Option<Outcome>, DomainError> {
        for candidate in suffix_candidates(&request.domain) {
            let Some(zone) = self.zones.find_active(candidate).await? else {
                continue;
            };
            // An exact-match zone only answers the query at full length,
            // never at a stripped suffix level.
            if !zone.accepts_match(candidate, &request.domain) {
                continue;
            }

            // The log records the most recently inspected matching zone; a
            // shorter candidate overwrites this if the zone yields no record.
            log.dns_zone_id = Some(zone.id);
            self.logs.persist(log).await?;

            let Some(record) = self
                .records
                .find_first(zone.id, request.rclass, request.rtype)
                .await?
            else {
                // A zone match without a matching record does not terminate
                // the search.
                continue;
            };

            let synthesis = match synthesize(
                &request.domain,
                request.rclass,
                request.rtype,
                record.ttl,
                &record.data,
            ) {
                Ok(synthesis) => synthesis,
                Err(e) => {
                    warn!(
                        domain = %request.domain,
                        record_id = record.id,
                        error = %e,
                        "Matched record has unusable data"
                    );
                    Synthesis::Unsupported
                }
            };

            log.dns_record_id = Some(record.id);
            log.data = Some(record.data.to_string());
            log.found = true;
            self.logs.persist(log).await?;

            // A record match is terminal even when no usable answer could be
            // built; shorter candidates are not probed.
            let answer = match synthesis {
                Synthesis::Answer(answer) => Some(answer),
                Synthesis::Unsupported => {
                    debug!(
                        domain = %request.domain,
                        record_type = %request.rtype,
                        "Record matched but type is not synthesizable"
                    );
                    None
                }
            };
            return Ok(Some(Outcome::Answered(answer)));
        }

        Ok(None)
    }
}

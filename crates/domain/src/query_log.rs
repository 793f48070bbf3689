use std::net::IpAddr;

use crate::record::{RecordClass, RecordType};

/// Audit row for one inbound query. Created by the engine before matching
/// starts and re-persisted as resolution proceeds; the final state reflects
/// the terminal outcome. One row per query, never shared across queries.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryLog {
    /// Assigned by the store on first persist.
    pub id: Option<i64>,
    pub created_at: Option<String>,
    pub source_ip: IpAddr,
    pub domain: String,
    pub rclass: RecordClass,
    pub rtype: RecordType,
    /// Most recently inspected matching zone, not necessarily the one that
    /// eventually answered.
    pub dns_zone_id: Option<i64>,
    pub dns_record_id: Option<i64>,
    pub found: bool,
    pub forwarded: bool,
    /// Response-data snapshot: the matched record's stored data, or the
    /// queried name when the answer came from a forwarder.
    pub data: Option<String>,
}

impl QueryLog {
    pub fn new(source_ip: IpAddr, domain: String, rclass: RecordClass, rtype: RecordType) -> Self {
        Self {
            id: None,
            created_at: None,
            source_ip,
            domain,
            rclass,
            rtype,
            dns_zone_id: None,
            dns_record_id: None,
            found: false,
            forwarded: false,
            data: None,
        }
    }
}

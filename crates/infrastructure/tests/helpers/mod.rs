#![allow(dead_code)]
pub mod dns_server_mock;

use std::sync::Mutex;

use async_trait::async_trait;
use warden_dns_application::ports::QueryLogStore;
use warden_dns_domain::{DomainError, QueryLog};

/// In-memory stand-in for the query-log store, one row per assigned id.
#[derive(Default)]
pub struct MemLogs {
    pub rows: Mutex<Vec<QueryLog>>,
}

#[async_trait]
impl QueryLogStore for MemLogs {
    async fn persist(&self, log: &mut QueryLog) -> Result<(), DomainError> {
        let mut rows = self.rows.lock().unwrap();
        match log.id {
            None => {
                log.id = Some(rows.len() as i64 + 1);
                rows.push(log.clone());
            }
            Some(id) => {
                if let Some(row) = rows.iter_mut().find(|r| r.id == Some(id)) {
                    *row = log.clone();
                }
            }
        }
        Ok(())
    }
}

//! Warden DNS Domain Layer
pub mod answer;
pub mod config;
pub mod dns_name;
pub mod errors;
pub mod query_log;
pub mod record;
pub mod request;
pub mod zone;

pub use answer::{AnswerData, AnswerRecord, ForwardReply, Outcome, Rcode, Synthesis, UpstreamAnswer};
pub use config::{CliOverrides, Config};
pub use errors::DomainError;
pub use query_log::QueryLog;
pub use record::{PropertyValue, RecordClass, RecordData, RecordType, ZoneRecord};
pub use request::{QueryRequest, TransportKind};
pub use zone::Zone;

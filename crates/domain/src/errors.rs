use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Unknown record type: {0}")]
    UnknownRecordType(String),

    #[error("Unknown record class: {0}")]
    UnknownRecordClass(String),

    #[error("Invalid record data: {0}")]
    InvalidRecordData(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Upstream timeout: {server}")]
    UpstreamTimeout { server: String },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Invalid DNS message: {0}")]
    InvalidMessage(String),
}

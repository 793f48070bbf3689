use std::net::{Ipv4Addr, Ipv6Addr};

use crate::record::{RecordClass, RecordType};

/// Typed payload of a synthesized answer record. Only types the synthesizer
/// knows how to build appear here; forwarded upstream answers travel as
/// [`UpstreamAnswer`] instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerData {
    Address(Ipv4Addr),
    Address6(Ipv6Addr),
    /// Target name for CNAME/DNAME/NS/PTR and the historical mailbox types.
    Name(String),
    Mx {
        preference: u16,
        exchange: String,
    },
    Soa {
        mname: String,
        rname: String,
        serial: u32,
        refresh: u32,
        retry: u32,
        expire: u32,
        minimum: u32,
    },
    Srv {
        priority: u16,
        weight: u16,
        port: u16,
        target: String,
    },
}

/// A decoded, protocol-level answer record, ready for the listener to
/// serialize. Authority/additional sections are never produced by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerRecord {
    /// Owner name: the full, original query name.
    pub name: String,
    pub rclass: RecordClass,
    pub rtype: RecordType,
    pub ttl: u32,
    pub data: AnswerData,
}

/// Result of record synthesis: a usable answer, or a record type the
/// synthesizer has no builder for.
#[derive(Debug, Clone, PartialEq)]
pub enum Synthesis {
    Answer(AnswerRecord),
    Unsupported,
}

/// Response code subset the engine and listener care about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rcode {
    NoError,
    FormErr,
    ServFail,
    NxDomain,
    NotImp,
    Refused,
    Other(u16),
}

impl Rcode {
    pub fn from_code(code: u16) -> Self {
        match code {
            0 => Rcode::NoError,
            1 => Rcode::FormErr,
            2 => Rcode::ServFail,
            3 => Rcode::NxDomain,
            4 => Rcode::NotImp,
            5 => Rcode::Refused,
            other => Rcode::Other(other),
        }
    }

    pub fn code(&self) -> u16 {
        match self {
            Rcode::NoError => 0,
            Rcode::FormErr => 1,
            Rcode::ServFail => 2,
            Rcode::NxDomain => 3,
            Rcode::NotImp => 4,
            Rcode::Refused => 5,
            Rcode::Other(code) => *code,
        }
    }
}

/// One answer record relayed verbatim from an upstream resolver. RDATA stays
/// opaque so the wire layer can re-emit it without a per-type parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamAnswer {
    pub name: String,
    pub type_code: u16,
    pub class_code: u16,
    pub ttl: u32,
    pub rdata: Vec<u8>,
}

/// Parsed reply obtained from upstream forwarding.
#[derive(Debug, Clone, PartialEq)]
pub struct ForwardReply {
    pub rcode: Rcode,
    pub answers: Vec<UpstreamAnswer>,
}

impl ForwardReply {
    /// The reply returned when no upstream produced anything: no answers,
    /// which the listener renders as NXDOMAIN.
    pub fn empty() -> Self {
        Self {
            rcode: Rcode::NoError,
            answers: Vec::new(),
        }
    }

    pub fn has_answers(&self) -> bool {
        !self.answers.is_empty()
    }
}

/// Terminal classification of one resolution.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A local record matched. `None` means the matched record's type could
    /// not be synthesized — the search still terminated and the response is
    /// effectively empty.
    Answered(Option<AnswerRecord>),
    Forwarded(ForwardReply),
    NoMatch,
}

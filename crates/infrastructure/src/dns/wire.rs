//! Centralized conversion between the domain model and `hickory_proto`
//! wire types. Every record type, class and response code crosses the
//! protocol boundary here and nowhere else.

use hickory_proto::op::ResponseCode;
use hickory_proto::rr::rdata::{A, AAAA, CNAME, MX, NS, NULL, PTR, SOA, SRV};
use hickory_proto::rr::{DNSClass, Name, RData, Record};
use hickory_proto::serialize::binary::BinEncodable;
use std::str::FromStr;
use warden_dns_domain::{AnswerData, AnswerRecord, DomainError, Rcode, RecordClass, RecordType, UpstreamAnswer};

pub fn to_record_type(rtype: RecordType) -> hickory_proto::rr::RecordType {
    hickory_proto::rr::RecordType::from(rtype.to_u16())
}

pub fn from_record_type(rtype: hickory_proto::rr::RecordType) -> Option<RecordType> {
    RecordType::from_u16(u16::from(rtype))
}

pub fn to_dns_class(rclass: RecordClass) -> DNSClass {
    match rclass {
        RecordClass::IN => DNSClass::IN,
        RecordClass::CH => DNSClass::CH,
        RecordClass::HS => DNSClass::HS,
        RecordClass::ANY => DNSClass::ANY,
    }
}

pub fn from_dns_class(class: DNSClass) -> Option<RecordClass> {
    match class {
        DNSClass::IN => Some(RecordClass::IN),
        DNSClass::CH => Some(RecordClass::CH),
        DNSClass::HS => Some(RecordClass::HS),
        DNSClass::ANY => Some(RecordClass::ANY),
        _ => None,
    }
}

fn class_from_code(code: u16) -> DNSClass {
    match code {
        3 => DNSClass::CH,
        4 => DNSClass::HS,
        255 => DNSClass::ANY,
        _ => DNSClass::IN,
    }
}

pub fn to_response_code(rcode: Rcode) -> ResponseCode {
    match rcode {
        Rcode::NoError => ResponseCode::NoError,
        Rcode::FormErr => ResponseCode::FormErr,
        Rcode::ServFail => ResponseCode::ServFail,
        Rcode::NxDomain => ResponseCode::NXDomain,
        Rcode::NotImp => ResponseCode::NotImp,
        Rcode::Refused => ResponseCode::Refused,
        Rcode::Other(_) => ResponseCode::ServFail,
    }
}

pub fn from_response_code(code: ResponseCode) -> Rcode {
    match code {
        ResponseCode::NoError => Rcode::NoError,
        ResponseCode::FormErr => Rcode::FormErr,
        ResponseCode::ServFail => Rcode::ServFail,
        ResponseCode::NXDomain => Rcode::NxDomain,
        ResponseCode::NotImp => Rcode::NotImp,
        ResponseCode::Refused => Rcode::Refused,
        other => Rcode::Other(u16::from(other)),
    }
}

pub fn parse_name(name: &str) -> Result<Name, DomainError> {
    Name::from_str(name)
        .map_err(|e| DomainError::InvalidDomainName(format!("'{}': {}", name, e)))
}

/// Name-payload types hickory has no native RDATA for (DNAME and the
/// historical mailbox records) are emitted through the opaque-RDATA escape
/// hatch with the target name in wire form.
fn opaque_name_rdata(rtype: RecordType, target: &str) -> Result<RData, DomainError> {
    let bytes = parse_name(target)?
        .to_bytes()
        .map_err(|e| DomainError::InvalidMessage(e.to_string()))?;
    Ok(RData::Unknown {
        code: hickory_proto::rr::RecordType::from(rtype.to_u16()),
        rdata: NULL::with(bytes),
    })
}

/// Convert a synthesized answer into a wire record.
pub fn answer_to_record(answer: &AnswerRecord) -> Result<Record, DomainError> {
    let name = parse_name(&answer.name)?;

    let rdata = match &answer.data {
        AnswerData::Address(v4) => RData::A(A(*v4)),
        AnswerData::Address6(v6) => RData::AAAA(AAAA(*v6)),
        AnswerData::Name(target) => match answer.rtype {
            RecordType::CNAME => RData::CNAME(CNAME(parse_name(target)?)),
            RecordType::NS => RData::NS(NS(parse_name(target)?)),
            RecordType::PTR => RData::PTR(PTR(parse_name(target)?)),
            other => opaque_name_rdata(other, target)?,
        },
        AnswerData::Mx { preference, exchange } => {
            RData::MX(MX::new(*preference, parse_name(exchange)?))
        }
        AnswerData::Soa {
            mname,
            rname,
            serial,
            refresh,
            retry,
            expire,
            minimum,
        } => RData::SOA(SOA::new(
            parse_name(mname)?,
            parse_name(rname)?,
            *serial,
            *refresh as i32,
            *retry as i32,
            *expire as i32,
            *minimum,
        )),
        AnswerData::Srv {
            priority,
            weight,
            port,
            target,
        } => RData::SRV(SRV::new(*priority, *weight, *port, parse_name(target)?)),
    };

    let mut record = Record::from_rdata(name, answer.ttl, rdata);
    record.set_dns_class(to_dns_class(answer.rclass));
    Ok(record)
}

/// Re-emit an upstream answer without reinterpreting its RDATA.
pub fn upstream_to_record(answer: &UpstreamAnswer) -> Result<Record, DomainError> {
    let name = parse_name(&answer.name)?;
    let rdata = RData::Unknown {
        code: hickory_proto::rr::RecordType::from(answer.type_code),
        rdata: NULL::with(answer.rdata.clone()),
    };
    let mut record = Record::from_rdata(name, answer.ttl, rdata);
    record.set_dns_class(class_from_code(answer.class_code));
    Ok(record)
}

//! Record synthesis: mapping a stored (class, type, ttl, data) tuple into a
//! protocol-level answer record.
//!
//! One builder table covers every supported type. Single-payload types build
//! from the scalar stored value; MX/SOA/SRV demand a validated property map.
//! Types without a builder yield [`Synthesis::Unsupported`] — the engine
//! still terminates its search on them.

use std::net::{Ipv4Addr, Ipv6Addr};

use warden_dns_domain::{
    AnswerData, AnswerRecord, DomainError, RecordClass, RecordData, RecordType, Synthesis,
};

type BuilderFn = fn(&RecordData) -> Result<AnswerData, DomainError>;

/// The synthesis table. Returns `None` for record types this server cannot
/// answer from local data.
fn builder(rtype: RecordType) -> Option<BuilderFn> {
    match rtype {
        RecordType::A => Some(build_a),
        RecordType::AAAA => Some(build_aaaa),
        RecordType::CNAME
        | RecordType::DNAME
        | RecordType::NS
        | RecordType::PTR
        | RecordType::MB
        | RecordType::MD
        | RecordType::MF
        | RecordType::MG
        | RecordType::MR => Some(build_name),
        RecordType::MX => Some(build_mx),
        RecordType::SOA => Some(build_soa),
        RecordType::SRV => Some(build_srv),
        _ => None,
    }
}

/// Build an answer record for the query name from one stored record.
/// Pure and side-effect-free; malformed stored data is an error the caller
/// decides how to surface.
pub fn synthesize(
    name: &str,
    rclass: RecordClass,
    rtype: RecordType,
    ttl: u32,
    data: &RecordData,
) -> Result<Synthesis, DomainError> {
    let Some(build) = builder(rtype) else {
        return Ok(Synthesis::Unsupported);
    };

    Ok(Synthesis::Answer(AnswerRecord {
        name: name.to_string(),
        rclass,
        rtype,
        ttl,
        data: build(data)?,
    }))
}

fn scalar(data: &RecordData) -> Result<&str, DomainError> {
    let value = data
        .scalar()
        .ok_or_else(|| DomainError::InvalidRecordData("expected a scalar value".to_string()))?;
    if value.is_empty() {
        return Err(DomainError::InvalidRecordData("empty value".to_string()));
    }
    Ok(value)
}

fn str_prop(data: &RecordData, name: &str) -> Result<String, DomainError> {
    let value = data
        .property(name)
        .ok_or_else(|| DomainError::InvalidRecordData(format!("missing property '{}'", name)))?
        .as_str()
        .ok_or_else(|| {
            DomainError::InvalidRecordData(format!("property '{}' must be a string", name))
        })?;
    if value.is_empty() {
        return Err(DomainError::InvalidRecordData(format!(
            "property '{}' must not be empty",
            name
        )));
    }
    Ok(value.to_string())
}

fn int_prop(data: &RecordData, name: &str, max: i64) -> Result<i64, DomainError> {
    let value = data
        .property(name)
        .ok_or_else(|| DomainError::InvalidRecordData(format!("missing property '{}'", name)))?
        .as_int()
        .ok_or_else(|| {
            DomainError::InvalidRecordData(format!("property '{}' must be an integer", name))
        })?;
    if value < 0 || value > max {
        return Err(DomainError::InvalidRecordData(format!(
            "property '{}' out of range: {}",
            name, value
        )));
    }
    Ok(value)
}

fn u16_prop(data: &RecordData, name: &str) -> Result<u16, DomainError> {
    Ok(int_prop(data, name, i64::from(u16::MAX))? as u16)
}

fn u32_prop(data: &RecordData, name: &str) -> Result<u32, DomainError> {
    Ok(int_prop(data, name, i64::from(u32::MAX))? as u32)
}

fn build_a(data: &RecordData) -> Result<AnswerData, DomainError> {
    let address = scalar(data)?;
    address
        .parse::<Ipv4Addr>()
        .map(AnswerData::Address)
        .map_err(|_| DomainError::InvalidRecordData(format!("invalid IPv4 address: {}", address)))
}

fn build_aaaa(data: &RecordData) -> Result<AnswerData, DomainError> {
    let address = scalar(data)?;
    address
        .parse::<Ipv6Addr>()
        .map(AnswerData::Address6)
        .map_err(|_| DomainError::InvalidRecordData(format!("invalid IPv6 address: {}", address)))
}

fn build_name(data: &RecordData) -> Result<AnswerData, DomainError> {
    Ok(AnswerData::Name(scalar(data)?.to_string()))
}

fn build_mx(data: &RecordData) -> Result<AnswerData, DomainError> {
    Ok(AnswerData::Mx {
        preference: u16_prop(data, "preference")?,
        exchange: str_prop(data, "exchange")?,
    })
}

fn build_soa(data: &RecordData) -> Result<AnswerData, DomainError> {
    Ok(AnswerData::Soa {
        mname: str_prop(data, "mname")?,
        rname: str_prop(data, "rname")?,
        serial: u32_prop(data, "serial")?,
        refresh: u32_prop(data, "refresh")?,
        retry: u32_prop(data, "retry")?,
        expire: u32_prop(data, "expire")?,
        minimum: u32_prop(data, "minimum")?,
    })
}

fn build_srv(data: &RecordData) -> Result<AnswerData, DomainError> {
    Ok(AnswerData::Srv {
        priority: u16_prop(data, "priority")?,
        weight: u16_prop(data, "weight")?,
        port: u16_prop(data, "port")?,
        target: str_prop(data, "target")?,
    })
}

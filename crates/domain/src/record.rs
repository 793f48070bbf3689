use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::errors::DomainError;

/// Record types the store can hold. The set mirrors what the administrative
/// application lets users define, plus the historical mailbox types that
/// existing stores may still contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    AAAA,
    AFSDB,
    CNAME,
    DNAME,
    HINFO,
    MB,
    MD,
    MF,
    MG,
    MINFO,
    MR,
    MX,
    NAPTR,
    NS,
    NULL,
    PTR,
    RP,
    SOA,
    SPF,
    SRV,
    SSHFP,
    TXT,
    WKS,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::AFSDB => "AFSDB",
            RecordType::CNAME => "CNAME",
            RecordType::DNAME => "DNAME",
            RecordType::HINFO => "HINFO",
            RecordType::MB => "MB",
            RecordType::MD => "MD",
            RecordType::MF => "MF",
            RecordType::MG => "MG",
            RecordType::MINFO => "MINFO",
            RecordType::MR => "MR",
            RecordType::MX => "MX",
            RecordType::NAPTR => "NAPTR",
            RecordType::NS => "NS",
            RecordType::NULL => "NULL",
            RecordType::PTR => "PTR",
            RecordType::RP => "RP",
            RecordType::SOA => "SOA",
            RecordType::SPF => "SPF",
            RecordType::SRV => "SRV",
            RecordType::SSHFP => "SSHFP",
            RecordType::TXT => "TXT",
            RecordType::WKS => "WKS",
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::NS => 2,
            RecordType::MD => 3,
            RecordType::MF => 4,
            RecordType::CNAME => 5,
            RecordType::SOA => 6,
            RecordType::MB => 7,
            RecordType::MG => 8,
            RecordType::MR => 9,
            RecordType::NULL => 10,
            RecordType::WKS => 11,
            RecordType::PTR => 12,
            RecordType::HINFO => 13,
            RecordType::MINFO => 14,
            RecordType::MX => 15,
            RecordType::TXT => 16,
            RecordType::RP => 17,
            RecordType::AFSDB => 18,
            RecordType::AAAA => 28,
            RecordType::SRV => 33,
            RecordType::NAPTR => 35,
            RecordType::DNAME => 39,
            RecordType::SSHFP => 44,
            RecordType::SPF => 99,
        }
    }

    pub fn from_u16(code: u16) -> Option<Self> {
        match code {
            1 => Some(RecordType::A),
            2 => Some(RecordType::NS),
            3 => Some(RecordType::MD),
            4 => Some(RecordType::MF),
            5 => Some(RecordType::CNAME),
            6 => Some(RecordType::SOA),
            7 => Some(RecordType::MB),
            8 => Some(RecordType::MG),
            9 => Some(RecordType::MR),
            10 => Some(RecordType::NULL),
            11 => Some(RecordType::WKS),
            12 => Some(RecordType::PTR),
            13 => Some(RecordType::HINFO),
            14 => Some(RecordType::MINFO),
            15 => Some(RecordType::MX),
            16 => Some(RecordType::TXT),
            17 => Some(RecordType::RP),
            18 => Some(RecordType::AFSDB),
            28 => Some(RecordType::AAAA),
            33 => Some(RecordType::SRV),
            35 => Some(RecordType::NAPTR),
            39 => Some(RecordType::DNAME),
            44 => Some(RecordType::SSHFP),
            99 => Some(RecordType::SPF),
            _ => None,
        }
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "AAAA" => Ok(RecordType::AAAA),
            "AFSDB" => Ok(RecordType::AFSDB),
            "CNAME" => Ok(RecordType::CNAME),
            "DNAME" => Ok(RecordType::DNAME),
            "HINFO" => Ok(RecordType::HINFO),
            "MB" => Ok(RecordType::MB),
            "MD" => Ok(RecordType::MD),
            "MF" => Ok(RecordType::MF),
            "MG" => Ok(RecordType::MG),
            "MINFO" => Ok(RecordType::MINFO),
            "MR" => Ok(RecordType::MR),
            "MX" => Ok(RecordType::MX),
            "NAPTR" => Ok(RecordType::NAPTR),
            "NS" => Ok(RecordType::NS),
            "NULL" => Ok(RecordType::NULL),
            "PTR" => Ok(RecordType::PTR),
            "RP" => Ok(RecordType::RP),
            "SOA" => Ok(RecordType::SOA),
            "SPF" => Ok(RecordType::SPF),
            "SRV" => Ok(RecordType::SRV),
            "SSHFP" => Ok(RecordType::SSHFP),
            "TXT" => Ok(RecordType::TXT),
            "WKS" => Ok(RecordType::WKS),
            _ => Err(DomainError::UnknownRecordType(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordClass {
    IN,
    CH,
    HS,
    ANY,
}

impl RecordClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordClass::IN => "IN",
            RecordClass::CH => "CH",
            RecordClass::HS => "HS",
            RecordClass::ANY => "ANY",
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            RecordClass::IN => 1,
            RecordClass::CH => 3,
            RecordClass::HS => 4,
            RecordClass::ANY => 255,
        }
    }
}

impl fmt::Display for RecordClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordClass {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "IN" => Ok(RecordClass::IN),
            "CH" => Ok(RecordClass::CH),
            "HS" => Ok(RecordClass::HS),
            "ANY" => Ok(RecordClass::ANY),
            _ => Err(DomainError::UnknownRecordClass(s.to_string())),
        }
    }
}

/// One value of a named record property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    Str(String),
    Int(i64),
}

impl PropertyValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            PropertyValue::Int(v) => Some(*v),
            PropertyValue::Str(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PropertyValue::Str(v) => Some(v),
            PropertyValue::Int(_) => None,
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Str(v) => write!(f, "{}", v),
            PropertyValue::Int(v) => write!(f, "{}", v),
        }
    }
}

/// Typed record payload: a bare scalar for single-value types, or a mapping
/// of named sub-fields (stored as a JSON object) for types like MX/SOA/SRV.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordData {
    Value(String),
    Properties(BTreeMap<String, PropertyValue>),
}

impl RecordData {
    /// Interpret a stored `data` column. A JSON object becomes a property
    /// map; anything else is taken as the scalar payload verbatim.
    pub fn from_stored(raw: &str) -> Self {
        if let Ok(serde_json::Value::Object(map)) = serde_json::from_str(raw) {
            let mut properties = BTreeMap::new();
            for (name, value) in map {
                let value = match value {
                    serde_json::Value::Number(n) if n.is_i64() => {
                        PropertyValue::Int(n.as_i64().unwrap_or_default())
                    }
                    serde_json::Value::String(s) => PropertyValue::Str(s),
                    other => PropertyValue::Str(other.to_string()),
                };
                properties.insert(name.to_lowercase(), value);
            }
            return RecordData::Properties(properties);
        }
        RecordData::Value(raw.to_string())
    }

    pub fn scalar(&self) -> Option<&str> {
        match self {
            RecordData::Value(v) => Some(v),
            RecordData::Properties(_) => None,
        }
    }

    pub fn property(&self, name: &str) -> Option<&PropertyValue> {
        match self {
            RecordData::Properties(map) => map.get(name),
            RecordData::Value(_) => None,
        }
    }
}

impl fmt::Display for RecordData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordData::Value(v) => write!(f, "{}", v),
            RecordData::Properties(map) => {
                let mut first = true;
                for (name, value) in map {
                    if !first {
                        write!(f, " ")?;
                    }
                    write!(f, "{}={}", name, value)?;
                    first = false;
                }
                Ok(())
            }
        }
    }
}

/// A resource-record definition attached to exactly one zone.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoneRecord {
    pub id: i64,
    pub dns_zone_id: i64,
    pub ttl: u32,
    pub rclass: RecordClass,
    pub rtype: RecordType,
    pub data: RecordData,
}

//! Resource records and typed rdata

use std::net::{Ipv4Addr, Ipv6Addr};

use bytes::BufMut;

use super::name::{read_name, write_name};
use super::{WireError, read_u16, read_u32};

/// The Internet class.
pub const CLASS_IN: u16 = 1;

// Record type constants, wire values.
const TYPE_A: u16 = 1;
const TYPE_NS: u16 = 2;
const TYPE_CNAME: u16 = 5;
const TYPE_SOA: u16 = 6;
const TYPE_PTR: u16 = 12;
const TYPE_MX: u16 = 15;
const TYPE_TXT: u16 = 16;
const TYPE_AAAA: u16 = 28;
const TYPE_CAA: u16 = 257;
const TYPE_ANY: u16 = 255;

/// DNS record type as carried on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(clippy::upper_case_acronyms)]
pub enum RecordType {
    A,
    NS,
    CNAME,
    SOA,
    PTR,
    MX,
    TXT,
    AAAA,
    CAA,
    /// Query-only pseudo-type.
    ANY,
    Other(u16),
}

impl RecordType {
    pub fn from_u16(val: u16) -> Self {
        match val {
            TYPE_A => Self::A,
            TYPE_NS => Self::NS,
            TYPE_CNAME => Self::CNAME,
            TYPE_SOA => Self::SOA,
            TYPE_PTR => Self::PTR,
            TYPE_MX => Self::MX,
            TYPE_TXT => Self::TXT,
            TYPE_AAAA => Self::AAAA,
            TYPE_CAA => Self::CAA,
            TYPE_ANY => Self::ANY,
            n => Self::Other(n),
        }
    }

    pub fn to_u16(self) -> u16 {
        match self {
            Self::A => TYPE_A,
            Self::NS => TYPE_NS,
            Self::CNAME => TYPE_CNAME,
            Self::SOA => TYPE_SOA,
            Self::PTR => TYPE_PTR,
            Self::MX => TYPE_MX,
            Self::TXT => TYPE_TXT,
            Self::AAAA => TYPE_AAAA,
            Self::CAA => TYPE_CAA,
            Self::ANY => TYPE_ANY,
            Self::Other(n) => n,
        }
    }
}

impl std::fmt::Display for RecordType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::A => write!(f, "A"),
            Self::NS => write!(f, "NS"),
            Self::CNAME => write!(f, "CNAME"),
            Self::SOA => write!(f, "SOA"),
            Self::PTR => write!(f, "PTR"),
            Self::MX => write!(f, "MX"),
            Self::TXT => write!(f, "TXT"),
            Self::AAAA => write!(f, "AAAA"),
            Self::CAA => write!(f, "CAA"),
            Self::ANY => write!(f, "ANY"),
            Self::Other(n) => write!(f, "TYPE({n})"),
        }
    }
}

/// Typed rdata for the record types this codec understands; anything else
/// passes through as raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(clippy::upper_case_acronyms)]
pub enum RData {
    A(Ipv4Addr),
    AAAA(Ipv6Addr),
    NS(String),
    CNAME(String),
    PTR(String),
    MX {
        preference: u16,
        exchange: String,
    },
    TXT(Vec<String>),
    SOA {
        mname: String,
        rname: String,
        serial: u32,
        refresh: u32,
        retry: u32,
        expire: u32,
        minimum: u32,
    },
    CAA {
        flags: u8,
        tag: String,
        value: Vec<u8>,
    },
    Raw(Vec<u8>),
}

/// A single resource record in the answer, authority, or additional section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub rtype: RecordType,
    pub class: u16,
    pub ttl: u32,
    pub rdata: RData,
}

impl Record {
    /// Convenience constructor for the common IN-class case.
    #[must_use]
    pub fn new(name: impl Into<String>, rtype: RecordType, ttl: u32, rdata: RData) -> Self {
        Self {
            name: name.into(),
            rtype,
            class: CLASS_IN,
            ttl,
            rdata,
        }
    }

    pub(super) fn encode(&self, buf: &mut Vec<u8>) -> Result<(), WireError> {
        write_name(buf, &self.name)?;
        buf.put_u16(self.rtype.to_u16());
        buf.put_u16(self.class);
        buf.put_u32(self.ttl);

        let mut rdata = Vec::new();
        encode_rdata(&mut rdata, &self.rdata)?;
        buf.put_u16(rdata.len() as u16);
        buf.extend_from_slice(&rdata);
        Ok(())
    }

    pub(super) fn decode(msg: &[u8], offset: usize) -> Result<(Self, usize), WireError> {
        let (name, mut pos) = read_name(msg, offset)?;
        let rtype = RecordType::from_u16(read_u16(msg, pos)?);
        let class = read_u16(msg, pos + 2)?;
        let ttl = read_u32(msg, pos + 4)?;
        let rdlen = read_u16(msg, pos + 8)? as usize;
        pos += 10;

        if msg.len() < pos + rdlen {
            return Err(WireError::Truncated(pos));
        }
        let rdata = decode_rdata(msg, pos, rdlen, rtype)?;

        Ok((
            Record {
                name,
                rtype,
                class,
                ttl,
                rdata,
            },
            pos + rdlen,
        ))
    }
}

fn encode_rdata(buf: &mut Vec<u8>, rdata: &RData) -> Result<(), WireError> {
    match rdata {
        RData::A(addr) => buf.extend_from_slice(&addr.octets()),
        RData::AAAA(addr) => buf.extend_from_slice(&addr.octets()),
        RData::NS(name) | RData::CNAME(name) | RData::PTR(name) => {
            write_name(buf, name)?;
        }
        RData::MX {
            preference,
            exchange,
        } => {
            buf.put_u16(*preference);
            write_name(buf, exchange)?;
        }
        RData::TXT(entries) => {
            for entry in entries {
                let bytes = entry.as_bytes();
                if bytes.len() > u8::MAX as usize {
                    return Err(WireError::LabelTooLong);
                }
                buf.put_u8(bytes.len() as u8);
                buf.extend_from_slice(bytes);
            }
        }
        RData::SOA {
            mname,
            rname,
            serial,
            refresh,
            retry,
            expire,
            minimum,
        } => {
            write_name(buf, mname)?;
            write_name(buf, rname)?;
            buf.put_u32(*serial);
            buf.put_u32(*refresh);
            buf.put_u32(*retry);
            buf.put_u32(*expire);
            buf.put_u32(*minimum);
        }
        RData::CAA { flags, tag, value } => {
            let tag_bytes = tag.as_bytes();
            if tag_bytes.len() > u8::MAX as usize {
                return Err(WireError::LabelTooLong);
            }
            buf.put_u8(*flags);
            buf.put_u8(tag_bytes.len() as u8);
            buf.extend_from_slice(tag_bytes);
            buf.extend_from_slice(value);
        }
        RData::Raw(bytes) => buf.extend_from_slice(bytes),
    }
    Ok(())
}

fn decode_rdata(
    msg: &[u8],
    offset: usize,
    rdlen: usize,
    rtype: RecordType,
) -> Result<RData, WireError> {
    let end = offset + rdlen;
    match rtype {
        RecordType::A => {
            if rdlen != 4 {
                return Err(WireError::BadRecordLength(offset));
            }
            let mut octets = [0u8; 4];
            octets.copy_from_slice(&msg[offset..end]);
            Ok(RData::A(Ipv4Addr::from(octets)))
        }
        RecordType::AAAA => {
            if rdlen != 16 {
                return Err(WireError::BadRecordLength(offset));
            }
            let mut octets = [0u8; 16];
            octets.copy_from_slice(&msg[offset..end]);
            Ok(RData::AAAA(Ipv6Addr::from(octets)))
        }
        RecordType::NS => Ok(RData::NS(read_name(msg, offset)?.0)),
        RecordType::CNAME => Ok(RData::CNAME(read_name(msg, offset)?.0)),
        RecordType::PTR => Ok(RData::PTR(read_name(msg, offset)?.0)),
        RecordType::MX => {
            let preference = read_u16(msg, offset)?;
            let (exchange, _) = read_name(msg, offset + 2)?;
            Ok(RData::MX {
                preference,
                exchange,
            })
        }
        RecordType::TXT => {
            let mut entries = Vec::new();
            let mut pos = offset;
            while pos < end {
                let len = msg[pos] as usize;
                let bytes = msg
                    .get(pos + 1..pos + 1 + len)
                    .ok_or(WireError::Truncated(pos + 1))?;
                if pos + 1 + len > end {
                    return Err(WireError::BadRecordLength(pos));
                }
                entries.push(String::from_utf8_lossy(bytes).into_owned());
                pos += 1 + len;
            }
            Ok(RData::TXT(entries))
        }
        RecordType::SOA => {
            let (mname, pos) = read_name(msg, offset)?;
            let (rname, pos) = read_name(msg, pos)?;
            if pos + 20 > msg.len() {
                return Err(WireError::Truncated(pos));
            }
            Ok(RData::SOA {
                mname,
                rname,
                serial: read_u32(msg, pos)?,
                refresh: read_u32(msg, pos + 4)?,
                retry: read_u32(msg, pos + 8)?,
                expire: read_u32(msg, pos + 12)?,
                minimum: read_u32(msg, pos + 16)?,
            })
        }
        RecordType::CAA => {
            if rdlen < 2 {
                return Err(WireError::BadRecordLength(offset));
            }
            let flags = msg[offset];
            let tag_len = msg[offset + 1] as usize;
            if offset + 2 + tag_len > end {
                return Err(WireError::BadRecordLength(offset));
            }
            let tag = String::from_utf8_lossy(&msg[offset + 2..offset + 2 + tag_len]).into_owned();
            let value = msg[offset + 2 + tag_len..end].to_vec();
            Ok(RData::CAA { flags, tag, value })
        }
        RecordType::ANY | RecordType::Other(_) => Ok(RData::Raw(msg[offset..end].to_vec())),
    }
}

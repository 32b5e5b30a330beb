//! Minimal DNS message codec (RFC 1035 section 4 framing)
//!
//! Encodes and decodes complete DNS messages: 12-byte big-endian header,
//! question section, and answer/authority/additional resource records with
//! typed rdata. Name decompression follows pointer chains with a hop limit;
//! the encoder always emits uncompressed names.
//!
//! This codec exists so tests can stand up mock resolvers speaking real
//! wire format. Production dialing never touches it.

pub mod message;
mod name;
pub mod record;

pub use message::{Message, Question, flags};
pub use record::{CLASS_IN, RData, Record, RecordType};

use thiserror::Error;

/// Errors produced while encoding or decoding a DNS message.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WireError {
    #[error("truncated message at offset {0}")]
    Truncated(usize),
    #[error("label exceeds 63 bytes")]
    LabelTooLong,
    #[error("name exceeds 255 bytes")]
    NameTooLong,
    #[error("compression pointer loop")]
    PointerLoop,
    #[error("resource record length mismatch at offset {0}")]
    BadRecordLength(usize),
}

pub(super) fn read_u16(msg: &[u8], offset: usize) -> Result<u16, WireError> {
    let bytes = msg
        .get(offset..offset + 2)
        .ok_or(WireError::Truncated(offset))?;
    Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
}

pub(super) fn read_u32(msg: &[u8], offset: usize) -> Result<u32, WireError> {
    let bytes = msg
        .get(offset..offset + 4)
        .ok_or(WireError::Truncated(offset))?;
    Ok(u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
}

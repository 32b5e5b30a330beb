//! Message framing: header, question section, record sections

use bytes::BufMut;

use super::name::{read_name, write_name};
use super::record::{CLASS_IN, Record, RecordType};
use super::{WireError, read_u16};

/// DNS header size in bytes.
const HEADER_SIZE: usize = 12;

/// Header flag bits.
pub mod flags {
    /// QR: message is a response.
    pub const RESPONSE: u16 = 0x8000;
    /// AA: responding server is authoritative.
    pub const AUTHORITATIVE: u16 = 0x0400;
    /// TC: message was truncated.
    pub const TRUNCATED: u16 = 0x0200;
    /// RD: recursion desired.
    pub const RECURSION_DESIRED: u16 = 0x0100;
    /// RA: recursion available.
    pub const RECURSION_AVAILABLE: u16 = 0x0080;
}

/// A single question section entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub name: String,
    pub qtype: RecordType,
    pub qclass: u16,
}

impl Question {
    #[must_use]
    pub fn new(name: impl Into<String>, qtype: RecordType) -> Self {
        Self {
            name: name.into(),
            qtype,
            qclass: CLASS_IN,
        }
    }
}

/// A complete DNS message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Message {
    pub id: u16,
    pub flags: u16,
    pub questions: Vec<Question>,
    pub answers: Vec<Record>,
    pub authorities: Vec<Record>,
    pub additionals: Vec<Record>,
}

impl Message {
    /// A recursion-desired query for a single name.
    #[must_use]
    pub fn query(id: u16, name: impl Into<String>, qtype: RecordType) -> Self {
        Self {
            id,
            flags: flags::RECURSION_DESIRED,
            questions: vec![Question::new(name, qtype)],
            ..Self::default()
        }
    }

    /// A response shell echoing this message's id and question section.
    #[must_use]
    pub fn response(&self) -> Self {
        Self {
            id: self.id,
            flags: flags::RESPONSE | (self.flags & flags::RECURSION_DESIRED),
            questions: self.questions.clone(),
            ..Self::default()
        }
    }

    /// Append an answer record, builder style.
    #[must_use]
    pub fn answer(mut self, record: Record) -> Self {
        self.answers.push(record);
        self
    }

    #[must_use]
    pub fn is_response(&self) -> bool {
        self.flags & flags::RESPONSE != 0
    }

    /// The 4-bit response code from the flags word.
    #[must_use]
    pub fn rcode(&self) -> u8 {
        (self.flags & 0x000F) as u8
    }

    /// Encode to wire format.
    ///
    /// # Errors
    ///
    /// Returns an error if any contained name or string field violates the
    /// wire-format length limits.
    pub fn encode(&self) -> Result<Vec<u8>, WireError> {
        let mut buf = Vec::with_capacity(HEADER_SIZE + 32 * self.questions.len());
        buf.put_u16(self.id);
        buf.put_u16(self.flags);
        buf.put_u16(self.questions.len() as u16);
        buf.put_u16(self.answers.len() as u16);
        buf.put_u16(self.authorities.len() as u16);
        buf.put_u16(self.additionals.len() as u16);

        for question in &self.questions {
            write_name(&mut buf, &question.name)?;
            buf.put_u16(question.qtype.to_u16());
            buf.put_u16(question.qclass);
        }
        for record in self
            .answers
            .iter()
            .chain(&self.authorities)
            .chain(&self.additionals)
        {
            record.encode(&mut buf)?;
        }
        Ok(buf)
    }

    /// Decode from wire format.
    ///
    /// # Errors
    ///
    /// Returns an error on truncation, malformed names, or rdata whose
    /// declared length disagrees with its content.
    pub fn decode(msg: &[u8]) -> Result<Self, WireError> {
        if msg.len() < HEADER_SIZE {
            return Err(WireError::Truncated(0));
        }
        let id = read_u16(msg, 0)?;
        let flags = read_u16(msg, 2)?;
        let qdcount = read_u16(msg, 4)? as usize;
        let ancount = read_u16(msg, 6)? as usize;
        let nscount = read_u16(msg, 8)? as usize;
        let arcount = read_u16(msg, 10)? as usize;

        let mut offset = HEADER_SIZE;

        let mut questions = Vec::with_capacity(qdcount);
        for _ in 0..qdcount {
            let (name, next) = read_name(msg, offset)?;
            let qtype = RecordType::from_u16(read_u16(msg, next)?);
            let qclass = read_u16(msg, next + 2)?;
            offset = next + 4;
            questions.push(Question {
                name,
                qtype,
                qclass,
            });
        }

        let read_section = |count: usize, offset: &mut usize| -> Result<Vec<Record>, WireError> {
            let mut records = Vec::with_capacity(count);
            for _ in 0..count {
                let (record, next) = Record::decode(msg, *offset)?;
                *offset = next;
                records.push(record);
            }
            Ok(records)
        };

        let answers = read_section(ancount, &mut offset)?;
        let authorities = read_section(nscount, &mut offset)?;
        let additionals = read_section(arcount, &mut offset)?;

        Ok(Message {
            id,
            flags,
            questions,
            answers,
            authorities,
            additionals,
        })
    }
}

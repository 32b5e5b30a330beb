//! Domain-name label encoding and decompression

use super::WireError;

/// Maximum label length per RFC 1035 section 2.3.4.
const MAX_LABEL_LENGTH: usize = 63;

/// Maximum encoded name length, length bytes included.
const MAX_NAME_LENGTH: usize = 255;

/// Pointer-hop ceiling while decompressing; a legitimate message needs far
/// fewer, and a crafted loop must not hang the decoder.
const MAX_POINTER_HOPS: usize = 64;

/// Append `name` as a sequence of length-prefixed labels plus the root byte.
///
/// Names are written uncompressed; the decoder accepts both forms.
pub(super) fn write_name(buf: &mut Vec<u8>, name: &str) -> Result<(), WireError> {
    let mut written = 0usize;
    for label in name.split('.').filter(|l| !l.is_empty()) {
        let bytes = label.as_bytes();
        if bytes.len() > MAX_LABEL_LENGTH {
            return Err(WireError::LabelTooLong);
        }
        written += bytes.len() + 1;
        if written + 1 > MAX_NAME_LENGTH {
            return Err(WireError::NameTooLong);
        }
        buf.push(bytes.len() as u8);
        buf.extend_from_slice(bytes);
    }
    buf.push(0);
    Ok(())
}

/// Read a (possibly compressed) name starting at `offset`.
///
/// Returns the dotted name and the offset of the first byte after the name
/// in the original (un-followed) byte stream.
pub(super) fn read_name(msg: &[u8], offset: usize) -> Result<(String, usize), WireError> {
    let mut labels: Vec<String> = Vec::new();
    let mut pos = offset;
    // Offset just past the name in the outer record; fixed by the first
    // pointer we follow.
    let mut resume: Option<usize> = None;
    let mut hops = 0usize;

    loop {
        let len = *msg.get(pos).ok_or(WireError::Truncated(pos))? as usize;

        if len == 0 {
            let next = resume.unwrap_or(pos + 1);
            return Ok((labels.join("."), next));
        }

        if len & 0xC0 == 0xC0 {
            let low = *msg.get(pos + 1).ok_or(WireError::Truncated(pos + 1))? as usize;
            let target = ((len & 0x3F) << 8) | low;
            if resume.is_none() {
                resume = Some(pos + 2);
            }
            hops += 1;
            if hops > MAX_POINTER_HOPS {
                return Err(WireError::PointerLoop);
            }
            pos = target;
            continue;
        }

        if len > MAX_LABEL_LENGTH {
            return Err(WireError::LabelTooLong);
        }
        let bytes = msg
            .get(pos + 1..pos + 1 + len)
            .ok_or(WireError::Truncated(pos + 1))?;
        labels.push(String::from_utf8_lossy(bytes).into_owned());
        pos += 1 + len;
    }
}

//! ARR binary decoder.

use arr_buffers::Reader;

use crate::constants::from_fixed;
use crate::error::ArrError;
use crate::text::decode_text;
use crate::value::{ArrKind, ArrValue};

/// ARR binary decoder.
///
/// Reads a whole byte buffer into an ordered sequence of entries. The
/// format is a 4-byte little-endian entry count followed by tagged
/// payloads; decoding is all-or-nothing because entry widths depend on
/// the tags.
#[derive(Default)]
pub struct ArrDecoder;

impl ArrDecoder {
    pub fn new() -> Self {
        Self
    }

    /// Decodes a byte buffer into entries, in file order.
    ///
    /// An empty buffer is an empty array (the untitled-document case).
    /// Bytes after the last declared entry are ignored; the count field is
    /// authoritative.
    pub fn decode(&self, data: &[u8]) -> Result<Vec<ArrValue>, ArrError> {
        if data.is_empty() {
            return Ok(Vec::new());
        }
        let mut reader = Reader::new(data);
        let count = reader.u32()? as usize;
        // The smallest entry is 8 bytes, so a count larger than that bound
        // is a lie; let the reads fail instead of pre-allocating for it.
        let mut entries = Vec::with_capacity(count.min(data.len() / 8));
        for _ in 0..count {
            entries.push(self.read_entry(&mut reader)?);
        }
        Ok(entries)
    }

    fn read_entry(&self, reader: &mut Reader<'_>) -> Result<ArrValue, ArrError> {
        let tag = reader.u32()?;
        let kind = ArrKind::from_tag(tag).ok_or(ArrError::UnrecognizedType(tag))?;
        let value = match kind {
            ArrKind::Integer => ArrValue::Integer(reader.i32()?),
            ArrKind::Str => {
                let length = reader.u32()? as usize;
                ArrValue::Str(decode_text(reader.buf(length)?))
            }
            // On disk, exactly 1 is true; every other raw value reads back
            // as false. The same rule the encoder writes by.
            ArrKind::Bool => ArrValue::Bool(reader.u32()? == 1),
            ArrKind::Double => ArrValue::Double(from_fixed(reader.i32()?)),
        };
        Ok(value)
    }
}

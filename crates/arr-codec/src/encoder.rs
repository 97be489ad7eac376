//! ARR binary encoder.

use arr_buffers::Writer;

use crate::constants::to_fixed;
use crate::text::encode_text;
use crate::value::ArrValue;

/// ARR binary encoder.
///
/// Writes an ordered sequence of entries into the byte layout the decoder
/// reads. Encoding a well-formed in-memory array cannot fail: strings
/// substitute unmappable characters, and doubles truncate toward zero onto
/// the 1/10000 fixed-point grid (saturating at the i32 range).
#[derive(Default)]
pub struct ArrEncoder {
    pub writer: Writer,
}

impl ArrEncoder {
    pub fn new() -> Self {
        Self {
            writer: Writer::new(),
        }
    }

    /// Encodes entries into a fresh byte buffer.
    pub fn encode(&mut self, entries: &[ArrValue]) -> Vec<u8> {
        self.writer.u32(entries.len() as u32);
        for entry in entries {
            self.write_entry(entry);
        }
        self.writer.flush()
    }

    fn write_entry(&mut self, entry: &ArrValue) {
        self.writer.u32(entry.kind().tag());
        match entry {
            ArrValue::Integer(v) => self.writer.i32(*v),
            ArrValue::Str(s) => {
                let bytes = encode_text(s);
                self.writer.u32(bytes.len() as u32);
                self.writer.buf(&bytes);
            }
            ArrValue::Bool(b) => self.writer.u32(u32::from(*b)),
            ArrValue::Double(v) => self.writer.i32(to_fixed(*v)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_array_is_a_zero_count() {
        let mut encoder = ArrEncoder::new();
        assert_eq!(encoder.encode(&[]), vec![0, 0, 0, 0]);
    }

    #[test]
    fn integer_layout() {
        let mut encoder = ArrEncoder::new();
        let mut expected = 1u32.to_le_bytes().to_vec();
        expected.extend(1u32.to_le_bytes());
        expected.extend(42i32.to_le_bytes());
        assert_eq!(encoder.encode(&[ArrValue::Integer(42)]), expected);
    }

    #[test]
    fn string_length_is_byte_count() {
        let mut encoder = ArrEncoder::new();
        // Two characters, two bytes in the single-byte page.
        let data = encoder.encode(&[ArrValue::Str("čš".to_string())]);
        let length = u32::from_le_bytes([data[8], data[9], data[10], data[11]]);
        assert_eq!(length, 2);
        assert_eq!(data[12..], [0xe8, 0x9a]);
    }

    #[test]
    fn bool_writes_one_or_zero() {
        let mut encoder = ArrEncoder::new();
        let data = encoder.encode(&[ArrValue::Bool(true), ArrValue::Bool(false)]);
        assert_eq!(data[8..12], 1u32.to_le_bytes());
        assert_eq!(data[16..20], 0u32.to_le_bytes());
    }

    #[test]
    fn double_truncates_toward_zero() {
        let mut encoder = ArrEncoder::new();
        let data = encoder.encode(&[ArrValue::Double(1.23456), ArrValue::Double(-1.23456)]);
        assert_eq!(data[8..12], 12345i32.to_le_bytes());
        assert_eq!(data[16..20], (-12345i32).to_le_bytes());
    }

    #[test]
    fn encoder_is_reusable() {
        let mut encoder = ArrEncoder::new();
        let first = encoder.encode(&[ArrValue::Integer(1)]);
        let second = encoder.encode(&[ArrValue::Integer(1)]);
        assert_eq!(first, second);
    }
}

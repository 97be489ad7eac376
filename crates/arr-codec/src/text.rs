//! Legacy single-byte text codec for string payloads.
//!
//! The target engine stores strings in Windows-1250, the Central-European
//! single-byte code page. Decoding is total (every defined byte maps to one
//! char); characters outside the page are substituted on encode, never an
//! error, so a well-formed in-memory array always encodes.

use encoding_rs::WINDOWS_1250;

/// Decodes Windows-1250 bytes to a native string.
pub fn decode_text(bytes: &[u8]) -> String {
    let (text, _had_errors) = WINDOWS_1250.decode_without_bom_handling(bytes);
    text.into_owned()
}

/// Encodes a native string to Windows-1250 bytes.
///
/// Characters with no mapping in the page are written as numeric character
/// references (the `encoding_rs` substitution), so the result is always a
/// valid payload. The returned length is the byte count the file format
/// stores, not a character count.
pub fn encode_text(text: &str) -> Vec<u8> {
    let (bytes, _, _had_errors) = WINDOWS_1250.encode(text);
    bytes.into_owned()
}

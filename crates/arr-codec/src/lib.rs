//! Binary codec for the ARR typed-array file format.
//!
//! ARR files persist an ordered list of tagged scalar values (integers,
//! fixed-point doubles, booleans, and strings in a legacy single-byte
//! encoding) for a point-and-click game engine. This crate is the whole
//! format: the wire layout, the text code page, and the coercion rules the
//! editor applies when an entry changes type or is edited as text.
//!
//! Decided format policies, kept in one place:
//!
//! - **Booleans on disk**: raw value `1` is true, everything else reads as
//!   false. The editor-side truthiness of numbers (`!= 0`) is a separate
//!   rule and lives in [`convert`].
//! - **Doubles on disk**: value × 10000, truncated toward zero, saturating
//!   at the i32 range. User-entered doubles are snapped to that grid at
//!   coercion time, so `decode(encode(x)) == x` holds for every array the
//!   editor can produce.
//! - **Text**: Windows-1250; unmappable characters substitute rather than
//!   fail on encode.

mod constants;
mod convert;
mod decoder;
mod encoder;
mod error;
mod text;
mod value;

pub use constants::{from_fixed, to_fixed, DOUBLE_SCALE, TAG_BOOL, TAG_DOUBLE, TAG_INTEGER, TAG_STR};
pub use convert::{
    convert, from_display_string, parse_f64_lenient, parse_int_lenient, to_display_string,
};
pub use decoder::ArrDecoder;
pub use encoder::ArrEncoder;
pub use error::ArrError;
pub use text::{decode_text, encode_text};
pub use value::{ArrKind, ArrValue};

/// Decodes an ARR byte buffer into entries.
pub fn decode_arr(data: &[u8]) -> Result<Vec<ArrValue>, ArrError> {
    ArrDecoder::new().decode(data)
}

/// Encodes entries into an ARR byte buffer.
pub fn encode_arr(entries: &[ArrValue]) -> Vec<u8> {
    ArrEncoder::new().encode(entries)
}

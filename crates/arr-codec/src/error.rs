//! ARR codec error type.

use arr_buffers::BufferError;
use thiserror::Error;

/// Error type for ARR decoding.
///
/// Both variants are fatal to the whole decode call: once a field cannot
/// be read, the width of every following entry is unknown, so there is no
/// partial result. Encoding and coercion never fail.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArrError {
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("unrecognized entry type tag: {0}")]
    UnrecognizedType(u32),
}

impl From<BufferError> for ArrError {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::EndOfBuffer => ArrError::UnexpectedEof,
        }
    }
}

//! Document-level error type.

use arr_codec::ArrError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DocumentError {
    /// The file bytes could not be decoded; surfaced to the user as
    /// "file cannot be read". No partial document is produced.
    #[error("array file cannot be read: {0}")]
    Codec(#[from] ArrError),
    /// A command addressed a row that does not exist.
    #[error("entry index {index} out of range for array of {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    /// A command carried a type tag outside the four defined kinds.
    #[error("invalid entry type tag: {0}")]
    InvalidType(u32),
}

//! Document model and editor commands for ARR array files.
//!
//! Sits between the [`arr_codec`] wire format and a host editor. The
//! document holds the decoded entry sequence; commands mutate it one at a
//! time and hand back invertible [`Change`] records, which [`History`]
//! stacks into undo/redo. A [`view`](ArrDocument::view) projection gives
//! presentation layers a JSON table to render.

mod change;
mod document;
mod error;
mod history;

pub use change::Change;
pub use document::ArrDocument;
pub use error::DocumentError;
pub use history::History;

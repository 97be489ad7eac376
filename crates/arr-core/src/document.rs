//! The in-memory ARR document: an ordered entry sequence plus the editor
//! commands that mutate it.

use std::collections::BTreeSet;

use arr_codec::{
    convert, decode_arr, encode_arr, from_display_string, to_display_string, ArrKind, ArrValue,
};
use serde_json::{json, Value};

use crate::change::Change;
use crate::error::DocumentError;

/// A decoded ARR array under edit.
///
/// The sequence owns its entries exclusively; an entry's only identity is
/// its position. Every mutating command validates first, applies, and
/// returns the [`Change`] a host undo stack needs to invert it.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ArrDocument {
    entries: Vec<ArrValue>,
}

impl ArrDocument {
    /// Creates an empty, untitled document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes file bytes into a document. All-or-nothing: a malformed
    /// buffer yields an error and no document.
    pub fn from_binary(data: &[u8]) -> Result<Self, DocumentError> {
        Ok(Self {
            entries: decode_arr(data)?,
        })
    }

    /// Encodes the current sequence for persistence. Saving and backing
    /// up both call this; only the destination differs, and that belongs
    /// to the host.
    pub fn to_binary(&self) -> Vec<u8> {
        encode_arr(&self.entries)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ArrValue> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[ArrValue] {
        &self.entries
    }

    fn check_index(&self, index: usize) -> Result<(), DocumentError> {
        if index >= self.entries.len() {
            return Err(DocumentError::IndexOutOfBounds {
                index,
                len: self.entries.len(),
            });
        }
        Ok(())
    }

    // ---------------------------------------------------------------- commands

    /// Appends a fresh zero value of `kind`.
    pub fn add(&mut self, kind: ArrKind) -> Change {
        let change = Change::Insert {
            index: self.entries.len(),
            value: ArrValue::zero(kind),
        };
        change.apply(&mut self.entries);
        change
    }

    /// Re-types the entry at `index`, coercing its value across kinds.
    pub fn set_type(&mut self, index: usize, kind: ArrKind) -> Result<Change, DocumentError> {
        self.check_index(index)?;
        let before = self.entries[index].clone();
        let change = Change::Replace {
            index,
            after: convert(&before, kind),
            before,
        };
        change.apply(&mut self.entries);
        Ok(change)
    }

    /// Like [`set_type`](Self::set_type), taking the wire-level type tag a
    /// host transport carries.
    pub fn set_type_tag(&mut self, index: usize, tag: u32) -> Result<Change, DocumentError> {
        let kind = ArrKind::from_tag(tag).ok_or(DocumentError::InvalidType(tag))?;
        self.set_type(index, kind)
    }

    /// Sets the entry at `index` from its user-edited display text. The
    /// entry keeps its kind; the text is re-parsed by that kind's rules.
    pub fn set_value(&mut self, index: usize, text: &str) -> Result<Change, DocumentError> {
        self.check_index(index)?;
        let before = self.entries[index].clone();
        let change = Change::Replace {
            index,
            after: from_display_string(before.kind(), text),
            before,
        };
        change.apply(&mut self.entries);
        Ok(change)
    }

    /// Removes a set of rows in one command. Survivors keep their relative
    /// order; the change restores removed rows to their exact positions.
    pub fn remove(&mut self, indices: &BTreeSet<usize>) -> Result<Change, DocumentError> {
        if let Some(&max) = indices.iter().next_back() {
            self.check_index(max)?;
        }
        let removed = indices
            .iter()
            .map(|&index| (index, self.entries[index].clone()))
            .collect();
        let change = Change::Remove { removed };
        change.apply(&mut self.entries);
        Ok(change)
    }

    /// Drops every entry.
    pub fn clear(&mut self) -> Change {
        let change = Change::Clear {
            before: self.entries.clone(),
        };
        change.apply(&mut self.entries);
        change
    }

    // ---------------------------------------------------------------- history hooks

    /// Replays a change (redo).
    pub fn apply(&mut self, change: &Change) {
        change.apply(&mut self.entries);
    }

    /// Reverts a change (undo).
    pub fn revert(&mut self, change: &Change) {
        change.invert(&mut self.entries);
    }

    // ---------------------------------------------------------------- view

    /// A JSON view of the sequence for presentation layers: one row per
    /// entry with its type name and display text.
    pub fn view(&self) -> Value {
        Value::Array(
            self.entries
                .iter()
                .map(|entry| {
                    json!({
                        "type": entry.kind().name(),
                        "value": to_display_string(entry),
                    })
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_appends_zero_values() {
        let mut doc = ArrDocument::new();
        doc.add(ArrKind::Integer);
        doc.add(ArrKind::Str);
        doc.add(ArrKind::Bool);
        doc.add(ArrKind::Double);
        assert_eq!(
            doc.entries(),
            &[
                ArrValue::Integer(0),
                ArrValue::Str(String::new()),
                ArrValue::Bool(false),
                ArrValue::Double(0.0),
            ]
        );
    }

    #[test]
    fn set_type_coerces_in_place() {
        let mut doc = ArrDocument::new();
        doc.add(ArrKind::Str);
        doc.set_value(0, "3.7").unwrap();
        doc.set_type(0, ArrKind::Integer).unwrap();
        assert_eq!(doc.get(0), Some(&ArrValue::Integer(3)));
    }

    #[test]
    fn set_type_tag_rejects_unknown_tags() {
        let mut doc = ArrDocument::new();
        doc.add(ArrKind::Integer);
        assert_eq!(
            doc.set_type_tag(0, 99),
            Err(DocumentError::InvalidType(99))
        );
        // The entry is untouched by the failed command.
        assert_eq!(doc.get(0), Some(&ArrValue::Integer(0)));
        assert!(doc.set_type_tag(0, 4).is_ok());
        assert_eq!(doc.get(0), Some(&ArrValue::Double(0.0)));
    }

    #[test]
    fn commands_validate_indices() {
        let mut doc = ArrDocument::new();
        assert_eq!(
            doc.set_value(0, "x"),
            Err(DocumentError::IndexOutOfBounds { index: 0, len: 0 })
        );
        doc.add(ArrKind::Integer);
        assert_eq!(
            doc.set_type(5, ArrKind::Bool),
            Err(DocumentError::IndexOutOfBounds { index: 5, len: 1 })
        );
        let indices: BTreeSet<usize> = [0, 3].into_iter().collect();
        assert_eq!(
            doc.remove(&indices),
            Err(DocumentError::IndexOutOfBounds { index: 3, len: 1 })
        );
        // A failed remove must not have taken row 0 with it.
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn remove_empty_set_is_a_noop() {
        let mut doc = ArrDocument::new();
        doc.add(ArrKind::Integer);
        let change = doc.remove(&BTreeSet::new()).unwrap();
        assert_eq!(change, Change::Remove { removed: vec![] });
        assert_eq!(doc.len(), 1);
    }

    #[test]
    fn view_rows_carry_type_and_display_text() {
        let mut doc = ArrDocument::new();
        doc.add(ArrKind::Double);
        doc.set_value(0, "2.5").unwrap();
        doc.add(ArrKind::Bool);
        assert_eq!(
            doc.view(),
            serde_json::json!([
                {"type": "double", "value": "2.5000"},
                {"type": "boolean", "value": "FALSE"},
            ])
        );
    }

    #[test]
    fn binary_roundtrip_preserves_document() {
        let mut doc = ArrDocument::new();
        doc.add(ArrKind::Integer);
        doc.set_value(0, "-12").unwrap();
        doc.add(ArrKind::Str);
        doc.set_value(1, "název").unwrap();
        let reloaded = ArrDocument::from_binary(&doc.to_binary()).unwrap();
        assert_eq!(reloaded, doc);
    }
}

//! Two-stack undo/redo over change records.

use crate::change::Change;
use crate::document::ArrDocument;

/// A host-side undo stack for document changes.
///
/// Commands push their change records here; undoing moves a record to the
/// redo stack and reverts it on the document, redoing moves it back. A new
/// edit after an undo discards the redo branch, the usual editor rule.
#[derive(Debug, Default)]
pub struct History {
    undo: Vec<Change>,
    redo: Vec<Change>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a freshly applied change.
    pub fn push(&mut self, change: Change) {
        self.redo.clear();
        self.undo.push(change);
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Reverts the most recent change. Returns `false` if there was none.
    pub fn undo(&mut self, doc: &mut ArrDocument) -> bool {
        match self.undo.pop() {
            Some(change) => {
                doc.revert(&change);
                self.redo.push(change);
                true
            }
            None => false,
        }
    }

    /// Replays the most recently undone change. Returns `false` if there
    /// was none.
    pub fn redo(&mut self, doc: &mut ArrDocument) -> bool {
        match self.redo.pop() {
            Some(change) => {
                doc.apply(&change);
                self.undo.push(change);
                true
            }
            None => false,
        }
    }
}

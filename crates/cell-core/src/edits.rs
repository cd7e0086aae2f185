//! Edit-operation compilation and replay.
//!
//! The compiler walks a diff's segment sequence left to right and turns it
//! into an ordered list of positional [`ContentEdit`]s suitable for wire
//! transmission. A removed run immediately followed by an inserted run is
//! coalesced into a single replace operation.
//!
//! All offsets and lengths are in **character offsets** (Unicode scalar
//! values). An edit's `position` is interpreted against the old snapshot as
//! progressively modified by the edits before it in the sequence: a
//! reconciler replaying the sequence against a buffer that reflects prior
//! replays lands every edit at the correct offset. This is why compilation
//! advances its cursor by inserted-text length only — removed text never
//! occupies space in the result.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::diff::{DiffSegment, diff};

/// A single positional edit over cell content.
///
/// On the wire the fields serialize as `position`, `deleteLength`, and
/// `insertedText`. Edits are transient: built per change event, handed to
/// listeners, never retained.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentEdit {
    /// Character offset at which the edit applies.
    pub position: usize,
    /// Count of characters removed at `position` before inserting.
    pub delete_length: usize,
    /// Text inserted at `position` after the deletion (may be empty).
    pub inserted_text: String,
}

impl ContentEdit {
    /// Create a new edit.
    pub fn new(position: usize, delete_length: usize, inserted_text: impl Into<String>) -> Self {
        Self {
            position,
            delete_length,
            inserted_text: inserted_text.into(),
        }
    }

    /// Length of `inserted_text` in characters.
    pub fn inserted_len(&self) -> usize {
        self.inserted_text.chars().count()
    }

    /// Returns `true` if the edit both removes and inserts text.
    pub fn is_replace(&self) -> bool {
        self.delete_length > 0 && !self.inserted_text.is_empty()
    }
}

/// Compile a segment sequence into an ordered edit sequence.
///
/// Single left-to-right pass, O(segments) time and space:
///
/// - `Unchanged` runs advance the position cursor and emit nothing.
/// - An `Inserted` run (with no preceding removal) becomes a pure
///   insertion; consecutive inserted segments are concatenated.
/// - A `Removed` run, together with any `Inserted` run immediately
///   following it, becomes one operation: a pure deletion when no insertion
///   follows, a replace otherwise. Never two separate operations.
///
/// Equal snapshots (an all-`Unchanged` sequence) compile to no edits.
pub fn compile(segments: &[DiffSegment]) -> Vec<ContentEdit> {
    let mut edits = Vec::new();
    let mut pos = 0usize;
    let mut i = 0;

    while i < segments.len() {
        while let Some(DiffSegment::Unchanged(text)) = segments.get(i) {
            pos += text.chars().count();
            i += 1;
        }

        match segments.get(i) {
            Some(DiffSegment::Inserted(_)) => {
                let mut text = String::new();
                while let Some(DiffSegment::Inserted(run)) = segments.get(i) {
                    text.push_str(run);
                    i += 1;
                }
                let inserted = text.chars().count();
                edits.push(ContentEdit::new(pos, 0, text));
                pos += inserted;
            }
            Some(DiffSegment::Removed(_)) => {
                let mut delete_length = 0;
                while let Some(DiffSegment::Removed(run)) = segments.get(i) {
                    delete_length += run.chars().count();
                    i += 1;
                }
                let mut text = String::new();
                while let Some(DiffSegment::Inserted(run)) = segments.get(i) {
                    text.push_str(run);
                    i += 1;
                }
                let inserted = text.chars().count();
                edits.push(ContentEdit::new(pos, delete_length, text));
                pos += inserted;
            }
            _ => {}
        }
    }

    edits
}

/// Diff two snapshots and compile the result in one step.
pub fn edits_between(old: &str, new: &str) -> Vec<ContentEdit> {
    compile(&diff(old, new))
}

/// Errors produced when replaying an edit sequence against a snapshot.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EditError {
    /// An edit's position lies beyond the end of the content.
    #[error("edit position {position} is beyond the content length {len}")]
    PositionOutOfBounds {
        /// The offending position (character offset).
        position: usize,
        /// Content length in characters at the time the edit applied.
        len: usize,
    },
    /// An edit's deletion overruns the end of the content.
    #[error("deleting {delete_length} characters at {position} overruns the content length {len}")]
    DeleteOutOfBounds {
        /// Position of the offending edit (character offset).
        position: usize,
        /// Requested deletion length in characters.
        delete_length: usize,
        /// Content length in characters at the time the edit applied.
        len: usize,
    },
}

/// Replay an edit sequence against a snapshot.
///
/// Each edit's `position` is interpreted against the buffer as modified by
/// the edits before it, the same coordinate space [`compile`] emits. For
/// sequences produced by [`edits_between`] this reconstructs the new
/// snapshot exactly.
pub fn apply(old: &str, edits: &[ContentEdit]) -> Result<String, EditError> {
    let mut chars: Vec<char> = old.chars().collect();

    for edit in edits {
        let len = chars.len();
        if edit.position > len {
            return Err(EditError::PositionOutOfBounds {
                position: edit.position,
                len,
            });
        }
        if edit.position + edit.delete_length > len {
            return Err(EditError::DeleteOutOfBounds {
                position: edit.position,
                delete_length: edit.delete_length,
                len,
            });
        }
        chars.splice(
            edit.position..edit.position + edit.delete_length,
            edit.inserted_text.chars(),
        );
    }

    Ok(chars.into_iter().collect())
}

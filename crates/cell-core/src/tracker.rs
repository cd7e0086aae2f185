//! Snapshot tracking for an editing surface.
//!
//! An editing surface (a code editor, a rich-text editor) reports content
//! changes as whole snapshots. [`ContentTracker`] holds the last-known
//! snapshot across notifications and turns each new snapshot into the edit
//! sequence that produced it. The surface itself is reached only through
//! the narrow [`ContentSource`] seam, so the diff/compile pair stays
//! testable without any real editor behind it.
//!
//! The tracker is synchronous and single-threaded: callers serialize change
//! notifications (`update` takes `&mut self`), and the snapshot swap happens
//! atomically within one call.

use crate::edits::{ContentEdit, edits_between};

/// The narrow collaborator interface to an editing surface.
pub trait ContentSource {
    /// Full content as currently reported by the editing surface.
    fn current_text(&self) -> String;
}

/// Tracks the last-known content snapshot for one editing surface.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContentTracker {
    last_content: String,
}

impl ContentTracker {
    /// Create a tracker seeded with the surface's initial content.
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            last_content: content.into(),
        }
    }

    /// The last-known snapshot.
    pub fn content(&self) -> &str {
        &self.last_content
    }

    /// Handle a content-change notification.
    ///
    /// Diffs the last-known snapshot against `new_text`, compiles the edit
    /// sequence, and adopts `new_text` as the new snapshot. Returns the
    /// compiled edits; empty when nothing changed.
    pub fn update(&mut self, new_text: &str) -> Vec<ContentEdit> {
        let edits = edits_between(&self.last_content, new_text);
        self.last_content.clear();
        self.last_content.push_str(new_text);
        edits
    }

    /// Pull the current text from a [`ContentSource`] and handle it as a
    /// content-change notification.
    pub fn sync_from<S: ContentSource>(&mut self, source: &S) -> Vec<ContentEdit> {
        self.update(&source.current_text())
    }

    /// Adopt `new_text` without diffing.
    ///
    /// The code-editor path: the surface already reported positional edits,
    /// so only the snapshot needs to catch up.
    pub fn replace(&mut self, new_text: impl Into<String>) {
        self.last_content = new_text.into();
    }
}

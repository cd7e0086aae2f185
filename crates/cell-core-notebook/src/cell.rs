//! The cell model.
//!
//! A cell is a content snapshot plus the metadata the surrounding system
//! needs: its kind, its language, and any reports attached to the last run.
//! Cells are headless; the editing surface behind a cell is reached only
//! through content-change notifications.

use cell_core::{ContentEdit, ContentTracker};
use serde::{Deserialize, Serialize};

use crate::event::{CellEvent, CellId};
use crate::report::Report;

/// What kind of editing surface backs a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellKind {
    /// Backed by a code editor that reports positional edits natively.
    Code,
    /// Backed by a rich-text editor; edits are recovered by diffing
    /// content snapshots.
    Text,
}

/// One notebook cell.
#[derive(Debug, Clone)]
pub struct Cell {
    id: CellId,
    kind: CellKind,
    language: String,
    tracker: ContentTracker,
    reports: Vec<Report>,
}

impl Cell {
    /// Create a cell with its initial content.
    pub fn new(
        id: CellId,
        kind: CellKind,
        language: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            id,
            kind,
            language: language.into(),
            tracker: ContentTracker::new(content),
            reports: Vec::new(),
        }
    }

    /// The cell's id.
    pub fn id(&self) -> CellId {
        self.id
    }

    /// The kind of surface backing this cell.
    pub fn kind(&self) -> CellKind {
        self.kind
    }

    /// The cell's language.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Change the cell's language.
    pub fn set_language(&mut self, language: impl Into<String>) {
        self.language = language.into();
    }

    /// The cell's current content snapshot.
    pub fn content(&self) -> &str {
        self.tracker.content()
    }

    /// Handle a content-change notification from a diffing surface.
    ///
    /// Recovers the edit sequence by diffing the last-known snapshot
    /// against `new_text`, adopts the new snapshot, and clears stale
    /// reports. Returns the outward change notification, or `None` when
    /// nothing actually changed.
    pub fn content_changed(&mut self, new_text: &str) -> Option<CellEvent> {
        let edits = self.tracker.update(new_text);
        self.reports.clear();
        if edits.is_empty() {
            return None;
        }
        tracing::debug!(cell = %self.id, edit_count = edits.len(), "content changed");
        Some(CellEvent::ContentChange {
            cell: self.id,
            edits,
            new_content: new_text.to_string(),
        })
    }

    /// Handle positional edits reported natively by a code-editor surface.
    ///
    /// No diffing happens; the snapshot catches up to `new_text` and the
    /// edits are forwarded as-is in the outward change notification.
    pub fn record_edits(&mut self, edits: Vec<ContentEdit>, new_text: &str) -> CellEvent {
        self.tracker.replace(new_text);
        self.reports.clear();
        tracing::debug!(cell = %self.id, edit_count = edits.len(), "native edits recorded");
        CellEvent::ContentChange {
            cell: self.id,
            edits,
            new_content: new_text.to_string(),
        }
    }

    /// Reports attached to this cell.
    pub fn reports(&self) -> &[Report] {
        &self.reports
    }

    /// Replace this cell's reports wholesale.
    pub fn set_reports(&mut self, reports: Vec<Report>) {
        self.reports = reports;
    }

    /// Drop all reports.
    pub fn clear_reports(&mut self) {
        self.reports.clear();
    }
}

//! The notebook coordinator.
//!
//! Owns the ordered cell list, the focus coordinator, and the event
//! listener registry. Editing surfaces and the transport layer talk to the
//! notebook; cells never reach each other or any global state directly.

use cell_core::ContentEdit;
use thiserror::Error;

use crate::cell::Cell;
use crate::event::{CellEvent, CellEventHub, CellId};
use crate::focus::FocusCoordinator;
use crate::report::Report;

/// Errors from notebook-level operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NotebookError {
    /// The referenced cell is not part of this notebook.
    #[error("unknown cell: {0}")]
    UnknownCell(CellId),
}

/// Coordinates a notebook's cells, focus state, and event listeners.
///
/// Cell ids must be unique within a notebook; lookups resolve to the first
/// cell with a matching id.
#[derive(Debug, Default)]
pub struct Notebook {
    cells: Vec<Cell>,
    focus: FocusCoordinator,
    events: CellEventHub,
}

impl Notebook {
    /// Create an empty notebook.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an event listener. Listeners see every event the notebook
    /// emits, in emission order.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&CellEvent) + Send + 'static,
    {
        self.events.subscribe(listener);
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns `true` if the notebook holds no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Cell ids in notebook order.
    pub fn cell_ids(&self) -> impl Iterator<Item = CellId> + '_ {
        self.cells.iter().map(Cell::id)
    }

    /// Borrow a cell.
    pub fn cell(&self, id: CellId) -> Option<&Cell> {
        self.cells.iter().find(|cell| cell.id() == id)
    }

    /// Append a cell at the end of the notebook.
    pub fn push_cell(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    /// Insert a cell after an existing one and announce the insertion.
    pub fn insert_cell_after(&mut self, after: CellId, cell: Cell) -> Result<(), NotebookError> {
        let index = self.index_of(after)?;
        self.cells.insert(index + 1, cell);
        self.events.emit(&CellEvent::InsertCellAfter { cell: after });
        Ok(())
    }

    /// Remove a cell, releasing its focus if it held any.
    pub fn remove_cell(&mut self, id: CellId) -> Result<Cell, NotebookError> {
        let index = self.index_of(id)?;
        self.focus.blur(id);
        Ok(self.cells.remove(index))
    }

    /// Handle a content-change notification from a diffing surface.
    ///
    /// Emits a [`CellEvent::ContentChange`] when the content actually
    /// changed; returns whether it did.
    pub fn cell_content_changed(
        &mut self,
        id: CellId,
        new_text: &str,
    ) -> Result<bool, NotebookError> {
        let event = self.cell_mut(id)?.content_changed(new_text);
        match event {
            Some(event) => {
                self.events.emit(&event);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Forward positional edits reported natively by a code-editor surface.
    pub fn record_cell_edits(
        &mut self,
        id: CellId,
        edits: Vec<ContentEdit>,
        new_text: &str,
    ) -> Result<(), NotebookError> {
        let event = self.cell_mut(id)?.record_edits(edits, new_text);
        self.events.emit(&event);
        Ok(())
    }

    /// Request that a cell be run.
    pub fn request_run(&mut self, id: CellId) -> Result<(), NotebookError> {
        self.index_of(id)?;
        self.events.emit(&CellEvent::RunCell { cell: id });
        Ok(())
    }

    /// Mark a cell run as starting: clears stale reports, then announces.
    pub fn begin_run(&mut self, id: CellId) -> Result<(), NotebookError> {
        self.cell_mut(id)?.clear_reports();
        self.events.emit(&CellEvent::BeforeCellRun { cell: id });
        Ok(())
    }

    /// Attach reports to a cell.
    pub fn set_cell_reports(
        &mut self,
        id: CellId,
        reports: Vec<Report>,
    ) -> Result<(), NotebookError> {
        self.cell_mut(id)?.set_reports(reports);
        Ok(())
    }

    /// Change a cell's language.
    pub fn set_cell_language(
        &mut self,
        id: CellId,
        language: impl Into<String>,
    ) -> Result<(), NotebookError> {
        self.cell_mut(id)?.set_language(language);
        Ok(())
    }

    /// Request completion candidates at a position in a cell.
    pub fn request_completion(&mut self, id: CellId, pos: usize) -> Result<(), NotebookError> {
        self.index_of(id)?;
        self.events.emit(&CellEvent::CompletionRequest { cell: id, pos });
        Ok(())
    }

    /// Request parameter hints at a position in a cell.
    pub fn request_param_hints(&mut self, id: CellId, pos: usize) -> Result<(), NotebookError> {
        self.index_of(id)?;
        self.events.emit(&CellEvent::ParamHintRequest { cell: id, pos });
        Ok(())
    }

    /// Give focus to a cell, returning the cell that lost it.
    pub fn focus_cell(&mut self, id: CellId) -> Result<Option<CellId>, NotebookError> {
        self.index_of(id)?;
        Ok(self.focus.focus(id))
    }

    /// Release a cell's focus if it holds it.
    pub fn blur_cell(&mut self, id: CellId) -> bool {
        self.focus.blur(id)
    }

    /// The currently focused cell, if any.
    pub fn focused_cell(&self) -> Option<CellId> {
        self.focus.current()
    }

    /// Move focus to the next (or previous) cell in notebook order.
    ///
    /// Clamps at the first and last cell; the [`CellEvent::AdvanceCell`]
    /// event still fires at the edge so the outer surface can decide to
    /// create a new cell instead. Returns the newly focused cell.
    pub fn advance_focus(&mut self, from: CellId, backward: bool) -> Result<CellId, NotebookError> {
        let index = self.index_of(from)?;
        let target = if backward {
            index.saturating_sub(1)
        } else {
            (index + 1).min(self.cells.len() - 1)
        };
        let id = self.cells[target].id();
        self.focus.focus(id);
        self.events
            .emit(&CellEvent::AdvanceCell { cell: from, backward });
        Ok(id)
    }

    fn index_of(&self, id: CellId) -> Result<usize, NotebookError> {
        self.cells
            .iter()
            .position(|cell| cell.id() == id)
            .ok_or(NotebookError::UnknownCell(id))
    }

    fn cell_mut(&mut self, id: CellId) -> Result<&mut Cell, NotebookError> {
        self.cells
            .iter_mut()
            .find(|cell| cell.id() == id)
            .ok_or(NotebookError::UnknownCell(id))
    }
}

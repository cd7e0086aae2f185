//! Cell events and listener registration.
//!
//! Every notebook action is one variant of [`CellEvent`], tagged by kind and
//! carrying only the fields that action needs. Events are dispatched through
//! an explicit listener registry ([`CellEventHub`]) rather than an
//! inheritance hierarchy; the transport collaborator subscribes like any
//! other listener and forwards what it needs.

use std::fmt;

use cell_core::ContentEdit;
use serde::{Deserialize, Serialize};

/// Identifies one cell within a notebook.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CellId(pub u32);

impl CellId {
    /// Create a new cell id.
    pub fn new(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cell{}", self.0)
    }
}

/// One notebook action, tagged by kind.
///
/// The serialized tag uses the action name (`"RunCell"`, `"ContentChange"`,
/// ...), the names the backend protocol already speaks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum CellEvent {
    /// Request to run a cell.
    RunCell {
        /// The cell to run.
        cell: CellId,
    },
    /// A cell run is about to start; stale reports have been cleared.
    BeforeCellRun {
        /// The cell about to run.
        cell: CellId,
    },
    /// A cell's content changed.
    ///
    /// Carries the compiled edit sequence together with the full new
    /// content, the outward change notification of the editing core.
    #[serde(rename_all = "camelCase")]
    ContentChange {
        /// The edited cell.
        cell: CellId,
        /// Ordered positional edits reconstructing the new content.
        edits: Vec<ContentEdit>,
        /// The cell's full content after the change.
        new_content: String,
    },
    /// Focus moved from a cell to its neighbour.
    AdvanceCell {
        /// The cell focus moved away from.
        cell: CellId,
        /// Whether focus moved to the previous cell instead of the next.
        backward: bool,
    },
    /// A new cell was inserted after an existing one.
    InsertCellAfter {
        /// The cell the insertion happened after.
        cell: CellId,
    },
    /// Completion candidates are wanted at a position.
    CompletionRequest {
        /// The cell being completed in.
        cell: CellId,
        /// Character offset of the completion point.
        pos: usize,
    },
    /// Parameter hints are wanted at a position.
    ParamHintRequest {
        /// The cell being hinted in.
        cell: CellId,
        /// Character offset of the hint point.
        pos: usize,
    },
}

impl CellEvent {
    /// The cell this event concerns.
    pub fn cell(&self) -> CellId {
        match self {
            CellEvent::RunCell { cell }
            | CellEvent::BeforeCellRun { cell }
            | CellEvent::ContentChange { cell, .. }
            | CellEvent::AdvanceCell { cell, .. }
            | CellEvent::InsertCellAfter { cell }
            | CellEvent::CompletionRequest { cell, .. }
            | CellEvent::ParamHintRequest { cell, .. } => *cell,
        }
    }
}

/// Listener invoked for every dispatched cell event.
pub type CellEventListener = Box<dyn FnMut(&CellEvent) + Send>;

/// Explicit listener registry for cell events.
#[derive(Default)]
pub struct CellEventHub {
    listeners: Vec<CellEventListener>,
}

impl CellEventHub {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener. Listeners are invoked in registration order.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&CellEvent) + Send + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Dispatch an event to every listener.
    pub fn emit(&mut self, event: &CellEvent) {
        tracing::trace!(cell = %event.cell(), "dispatching cell event");
        for listener in &mut self.listeners {
            listener(event);
        }
    }
}

impl fmt::Debug for CellEventHub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellEventHub")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

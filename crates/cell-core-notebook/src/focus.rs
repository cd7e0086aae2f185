//! Focus coordination.
//!
//! The "currently focused cell" is explicit state owned by one coordinator,
//! queried and changed by reference. Nothing else in the system holds focus
//! state.

use crate::event::CellId;

/// Owns the currently focused cell, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusCoordinator {
    current: Option<CellId>,
}

impl FocusCoordinator {
    /// Create a coordinator with nothing focused.
    pub fn new() -> Self {
        Self::default()
    }

    /// Give focus to `id`.
    ///
    /// Returns the cell that lost focus, so the caller can blur it. Focusing
    /// the already-focused cell is a no-op returning `None`.
    pub fn focus(&mut self, id: CellId) -> Option<CellId> {
        if self.current == Some(id) {
            return None;
        }
        let previous = self.current.replace(id);
        tracing::debug!(cell = %id, "focus moved");
        previous
    }

    /// Release focus if `id` currently holds it. Returns whether it did.
    pub fn blur(&mut self, id: CellId) -> bool {
        if self.current == Some(id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    /// The currently focused cell, if any.
    pub fn current(&self) -> Option<CellId> {
        self.current
    }
}

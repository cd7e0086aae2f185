#![warn(missing_docs)]
//! Notebook composition layer for `cell-core`.
//!
//! # Overview
//!
//! `cell-core-notebook` composes the diff-to-edit kernel into the cell
//! model a notebook client needs:
//!
//! - **Cells**: content snapshot, language, kind (code or rich text), and
//!   attached reports ([`Cell`])
//! - **Events**: one tagged variant type over the notebook's action set,
//!   dispatched through explicit listener registration ([`CellEvent`],
//!   [`CellEventHub`])
//! - **Focus**: the currently focused cell as explicit coordinator-owned
//!   state ([`FocusCoordinator`])
//! - **Coordination**: the [`Notebook`] owns all of the above and is the
//!   single entry point for editing surfaces and the transport layer
//!
//! # Example
//!
//! ```rust
//! use cell_core_notebook::{Cell, CellEvent, CellId, CellKind, Notebook};
//!
//! let mut notebook = Notebook::new();
//! notebook.push_cell(Cell::new(CellId::new(1), CellKind::Text, "markdown", "draft"));
//!
//! notebook.subscribe(|event| {
//!     if let CellEvent::ContentChange { cell, edits, .. } = event {
//!         println!("{cell}: {} edit(s)", edits.len());
//!     }
//! });
//!
//! // The rich-text surface reports its new full content; the notebook
//! // recovers the edits and notifies every listener.
//! notebook.cell_content_changed(CellId::new(1), "final draft").unwrap();
//! ```

pub mod cell;
pub mod event;
pub mod focus;
pub mod notebook;
pub mod report;

pub use cell::{Cell, CellKind};
pub use event::{CellEvent, CellEventHub, CellEventListener, CellId};
pub use focus::FocusCoordinator;
pub use notebook::{Notebook, NotebookError};
pub use report::{Report, ReportRange, RuntimeError, Severity, StackFrame};

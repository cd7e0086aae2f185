#![warn(missing_docs)]
//! Headless diff-to-edit translation kernel for notebook cell content.
//!
//! # Overview
//!
//! `cell-core` turns an editing surface's content changes into a canonical,
//! position-stable sequence of edit operations for transmission to a remote
//! execution/collaboration backend. Given the previous and the current full
//! content of a cell, it produces an ordered list of
//! `(position, deleteLength, insertedText)` operations that exactly
//! reconstructs the new content from the old, using character offsets.
//!
//! The kernel has two stages:
//!
//! - **Diff**: [`diff()`] classifies the text into tagged runs —
//!   unchanged, inserted, or removed ([`DiffSegment`]).
//! - **Compile**: [`compile()`] walks the runs left to right with a
//!   position cursor and emits [`ContentEdit`]s, coalescing a removed run
//!   followed by an inserted run into a single replace operation.
//!
//! Replaying the operations in order against the old content — each
//! operation positioned in the coordinate space left by the ones before
//! it — yields the new content exactly ([`apply()`]).
//!
//! # Quick Start
//!
//! ```rust
//! use cell_core::{ContentEdit, ContentTracker};
//!
//! let mut tracker = ContentTracker::new("hello world");
//!
//! // The editing surface reports its new full content.
//! let edits = tracker.update("hello, world");
//! assert_eq!(edits, vec![ContentEdit::new(5, 0, ",")]);
//! assert_eq!(tracker.content(), "hello, world");
//! ```
//!
//! # Module Description
//!
//! - [`diff`] - snapshot diffing into classified runs
//! - [`edits`] - edit compilation, replay, and the wire-facing edit type
//! - [`tracker`] - snapshot tracking behind the editing-surface seam
//!
//! The kernel is synchronous and pure: a compilation either completes and
//! returns a full operation sequence or is not started, and no state is
//! shared between calls beyond the tracker's snapshot.

pub mod diff;
pub mod edits;
pub mod tracker;

pub use diff::{DiffSegment, diff};
pub use edits::{ContentEdit, EditError, apply, compile, edits_between};
pub use tracker::{ContentSource, ContentTracker};

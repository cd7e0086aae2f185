//! Compiler reports and runtime errors for cells.
//!
//! Data model only: the backend attaches these to a cell run, the host
//! surface decides how (and whether) to render them. Offsets are character
//! offsets into the owning cell's content.

use serde::{Deserialize, Serialize};

/// Report severity levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Severity {
    /// Informational reports.
    Info,
    /// Warning reports.
    Warning,
    /// Error reports.
    Error,
}

/// A half-open character-offset range (`start..end`) in a cell's content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRange {
    /// Range start offset (inclusive).
    pub start: usize,
    /// Range end offset (exclusive).
    pub end: usize,
}

impl ReportRange {
    /// Create a new report range.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// A single compile/check report attached to a cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Where in the cell the report points.
    pub range: ReportRange,
    /// How severe the report is.
    pub severity: Severity,
    /// The report message.
    pub message: String,
}

impl Report {
    /// Create a new report.
    pub fn new(range: ReportRange, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            range,
            severity,
            message: message.into(),
        }
    }
}

/// One stack-trace element of a runtime error.
///
/// `file` is the backend's source identifier; for code generated from a
/// notebook cell it is the cell's display name (`Cell3`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StackFrame {
    /// Fully qualified class or module name.
    pub class_name: String,
    /// Method or function name.
    pub method: String,
    /// Source identifier the frame points into.
    pub file: String,
    /// One-based source line; negative when unknown.
    pub line: i32,
}

/// An uncaught exception reported by the backend for a cell run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeError {
    /// The exception message.
    pub message: String,
    /// The exception class name.
    pub class_name: String,
    /// Stack trace, innermost frame first.
    pub stack_trace: Vec<StackFrame>,
}

impl RuntimeError {
    /// The first stack-trace line that points into the given cell, if any.
    ///
    /// `cell_file` is the cell's display name as the backend knows it.
    pub fn line_in_cell(&self, cell_file: &str) -> Option<i32> {
        self.stack_trace
            .iter()
            .find(|frame| frame.file == cell_file && frame.line >= 0)
            .map(|frame| frame.line)
    }
}

//! Snapshot diffing.
//!
//! Compares two full content snapshots and classifies the text into an
//! ordered sequence of tagged runs ([`DiffSegment`]). This stage only
//! classifies: it never merges a removed run with an inserted run and never
//! computes positions. Both of those are the edit compiler's job
//! ([`crate::edits::compile`]).
//!
//! Granularity is character-level (Unicode scalar values). Small edits
//! inside a larger unchanged context therefore surface as short
//! `Inserted`/`Removed` runs rather than a rewrite of the whole text, and
//! independent edits to the same word stay independent.

use similar::{ChangeTag, TextDiff};

/// A contiguous run of text classified by the diff stage.
///
/// Runs are maximal: two segments of the same variant never appear
/// adjacent, and no segment is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffSegment {
    /// Text present in both snapshots.
    Unchanged(String),
    /// Text present only in the new snapshot.
    Inserted(String),
    /// Text present only in the old snapshot.
    Removed(String),
}

impl DiffSegment {
    /// The run's text.
    pub fn text(&self) -> &str {
        match self {
            DiffSegment::Unchanged(text)
            | DiffSegment::Inserted(text)
            | DiffSegment::Removed(text) => text,
        }
    }

    /// Length of the run in characters.
    pub fn char_len(&self) -> usize {
        self.text().chars().count()
    }
}

/// Compute the classified runs between two content snapshots.
///
/// Pure and deterministic: identical inputs always produce the identical
/// segment sequence. Equal inputs produce a single `Unchanged` run (or
/// nothing, for two empty snapshots).
///
/// Within a replaced region the removed run precedes the inserted run;
/// two distinct edit regions are always separated by an `Unchanged` run.
pub fn diff(old: &str, new: &str) -> Vec<DiffSegment> {
    let changes = TextDiff::from_chars(old, new);

    let mut segments = Vec::new();
    let mut run_tag: Option<ChangeTag> = None;
    let mut run = String::new();

    for change in changes.iter_all_changes() {
        let tag = change.tag();
        if run_tag != Some(tag) {
            if let Some(prev) = run_tag
                && !run.is_empty()
            {
                segments.push(segment(prev, std::mem::take(&mut run)));
            }
            run_tag = Some(tag);
        }
        run.push_str(change.value());
    }

    if let Some(tag) = run_tag
        && !run.is_empty()
    {
        segments.push(segment(tag, run));
    }

    segments
}

fn segment(tag: ChangeTag, text: String) -> DiffSegment {
    match tag {
        ChangeTag::Equal => DiffSegment::Unchanged(text),
        ChangeTag::Insert => DiffSegment::Inserted(text),
        ChangeTag::Delete => DiffSegment::Removed(text),
    }
}

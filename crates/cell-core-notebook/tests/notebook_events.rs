use std::sync::{Arc, Mutex};

use cell_core::{ContentEdit, apply};
use cell_core_notebook::{Cell, CellEvent, CellId, CellKind, Notebook, NotebookError};
use cell_core_notebook::{Report, ReportRange, Severity};
use pretty_assertions::assert_eq;

fn collecting_notebook(cells: Vec<Cell>) -> (Notebook, Arc<Mutex<Vec<CellEvent>>>) {
    let mut notebook = Notebook::new();
    for cell in cells {
        notebook.push_cell(cell);
    }
    let seen: Arc<Mutex<Vec<CellEvent>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    notebook.subscribe(move |event| sink.lock().expect("lock").push(event.clone()));
    (notebook, seen)
}

fn text_cell(id: u32, content: &str) -> Cell {
    Cell::new(CellId::new(id), CellKind::Text, "markdown", content)
}

fn code_cell(id: u32, content: &str) -> Cell {
    Cell::new(CellId::new(id), CellKind::Code, "scala", content)
}

#[test]
fn test_text_edit_emits_one_content_change_with_replayable_edits() {
    let (mut notebook, seen) = collecting_notebook(vec![text_cell(1, "hello world")]);

    let changed = notebook
        .cell_content_changed(CellId::new(1), "hello, world!")
        .unwrap();
    assert!(changed);

    let seen = seen.lock().expect("lock");
    assert_eq!(seen.len(), 1);
    match &seen[0] {
        CellEvent::ContentChange {
            cell,
            edits,
            new_content,
        } => {
            assert_eq!(*cell, CellId::new(1));
            assert_eq!(new_content, "hello, world!");
            assert_eq!(apply("hello world", edits).unwrap(), "hello, world!");
        }
        other => panic!("unexpected event: {other:?}"),
    }
}

#[test]
fn test_noop_text_edit_emits_nothing() {
    let (mut notebook, seen) = collecting_notebook(vec![text_cell(1, "same")]);

    let changed = notebook.cell_content_changed(CellId::new(1), "same").unwrap();

    assert!(!changed);
    assert!(seen.lock().expect("lock").is_empty());
}

#[test]
fn test_native_edits_are_forwarded_untouched() {
    let (mut notebook, seen) = collecting_notebook(vec![code_cell(2, "val a = 1")]);

    let edits = vec![ContentEdit::new(8, 1, "2")];
    notebook
        .record_cell_edits(CellId::new(2), edits.clone(), "val a = 2")
        .unwrap();

    let seen = seen.lock().expect("lock");
    assert_eq!(seen.len(), 1);
    match &seen[0] {
        CellEvent::ContentChange {
            edits: forwarded, ..
        } => assert_eq!(*forwarded, edits),
        other => panic!("unexpected event: {other:?}"),
    }
    assert_eq!(notebook.cell(CellId::new(2)).unwrap().content(), "val a = 2");
}

#[test]
fn test_run_lifecycle_clears_reports() {
    let (mut notebook, seen) = collecting_notebook(vec![code_cell(1, "val a = b")]);

    notebook
        .set_cell_reports(
            CellId::new(1),
            vec![Report::new(
                ReportRange::new(8, 9),
                Severity::Error,
                "not found: value b",
            )],
        )
        .unwrap();
    assert_eq!(notebook.cell(CellId::new(1)).unwrap().reports().len(), 1);

    notebook.request_run(CellId::new(1)).unwrap();
    notebook.begin_run(CellId::new(1)).unwrap();

    assert!(notebook.cell(CellId::new(1)).unwrap().reports().is_empty());
    let seen = seen.lock().expect("lock");
    assert_eq!(
        *seen,
        vec![
            CellEvent::RunCell {
                cell: CellId::new(1)
            },
            CellEvent::BeforeCellRun {
                cell: CellId::new(1)
            },
        ]
    );
}

#[test]
fn test_editing_clears_reports() {
    let (mut notebook, _) = collecting_notebook(vec![text_cell(1, "x")]);
    notebook
        .set_cell_reports(
            CellId::new(1),
            vec![Report::new(ReportRange::new(0, 1), Severity::Warning, "w")],
        )
        .unwrap();

    notebook.cell_content_changed(CellId::new(1), "xy").unwrap();

    assert!(notebook.cell(CellId::new(1)).unwrap().reports().is_empty());
}

#[test]
fn test_advance_focus_moves_and_announces() {
    let (mut notebook, seen) = collecting_notebook(vec![code_cell(1, ""), code_cell(2, "")]);
    notebook.focus_cell(CellId::new(1)).unwrap();

    let next = notebook.advance_focus(CellId::new(1), false).unwrap();

    assert_eq!(next, CellId::new(2));
    assert_eq!(notebook.focused_cell(), Some(CellId::new(2)));
    assert_eq!(
        *seen.lock().expect("lock"),
        vec![CellEvent::AdvanceCell {
            cell: CellId::new(1),
            backward: false
        }]
    );
}

#[test]
fn test_focus_transfer_blurs_exactly_the_predecessor() {
    let (mut notebook, _) = collecting_notebook(vec![code_cell(1, ""), code_cell(2, "")]);

    assert_eq!(notebook.focus_cell(CellId::new(1)).unwrap(), None);
    assert_eq!(
        notebook.focus_cell(CellId::new(2)).unwrap(),
        Some(CellId::new(1))
    );
    assert_eq!(notebook.focused_cell(), Some(CellId::new(2)));
}

#[test]
fn test_completion_and_param_hint_requests() {
    let (mut notebook, seen) = collecting_notebook(vec![code_cell(3, "List(1).ma")]);

    notebook.request_completion(CellId::new(3), 10).unwrap();
    notebook.request_param_hints(CellId::new(3), 8).unwrap();

    assert_eq!(
        *seen.lock().expect("lock"),
        vec![
            CellEvent::CompletionRequest {
                cell: CellId::new(3),
                pos: 10
            },
            CellEvent::ParamHintRequest {
                cell: CellId::new(3),
                pos: 8
            },
        ]
    );
}

#[test]
fn test_insertion_announces_the_anchor_cell() {
    let (mut notebook, seen) = collecting_notebook(vec![code_cell(1, "")]);

    notebook
        .insert_cell_after(CellId::new(1), text_cell(2, ""))
        .unwrap();

    assert_eq!(
        *seen.lock().expect("lock"),
        vec![CellEvent::InsertCellAfter {
            cell: CellId::new(1)
        }]
    );
    assert_eq!(
        notebook.cell_ids().collect::<Vec<_>>(),
        vec![CellId::new(1), CellId::new(2)]
    );
}

#[test]
fn test_operations_on_unknown_cells_fail() {
    let (mut notebook, seen) = collecting_notebook(vec![code_cell(1, "")]);
    let missing = CellId::new(42);

    assert_eq!(
        notebook.cell_content_changed(missing, "x"),
        Err(NotebookError::UnknownCell(missing))
    );
    assert_eq!(
        notebook.request_run(missing),
        Err(NotebookError::UnknownCell(missing))
    );
    assert_eq!(
        notebook.advance_focus(missing, false),
        Err(NotebookError::UnknownCell(missing))
    );
    assert!(seen.lock().expect("lock").is_empty());
}

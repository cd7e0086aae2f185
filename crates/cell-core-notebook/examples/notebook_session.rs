//! A small headless notebook session: two cells, a transport-style
//! listener, and a round of edits.
//!
//! Run with: `cargo run -p cell-core-notebook --example notebook_session`

use cell_core_notebook::{Cell, CellEvent, CellId, CellKind, Notebook};

fn main() {
    let mut notebook = Notebook::new();
    notebook.push_cell(Cell::new(
        CellId::new(1),
        CellKind::Text,
        "markdown",
        "# Analysis",
    ));
    notebook.push_cell(Cell::new(
        CellId::new(2),
        CellKind::Code,
        "scala",
        "val data = load()",
    ));

    // A transport collaborator would serialize these and send them on.
    notebook.subscribe(|event| match event {
        CellEvent::ContentChange {
            cell,
            edits,
            new_content,
        } => {
            println!("{cell}: {} edit(s) -> {new_content:?}", edits.len());
            for edit in edits {
                println!(
                    "  @{} -{} +{:?}",
                    edit.position, edit.delete_length, edit.inserted_text
                );
            }
        }
        other => println!("{}: {other:?}", other.cell()),
    });

    // The rich-text surface reports whole snapshots; edits are recovered.
    notebook
        .cell_content_changed(CellId::new(1), "# Analysis (draft)")
        .unwrap();

    // The code surface hands over positional edits natively.
    notebook
        .record_cell_edits(
            CellId::new(2),
            vec![cell_core::ContentEdit::new(11, 6, "fetch(url)")],
            "val data = fetch(url)",
        )
        .unwrap();

    notebook.request_run(CellId::new(2)).unwrap();
    notebook.advance_focus(CellId::new(1), false).unwrap();
    println!("focused: {:?}", notebook.focused_cell());
}

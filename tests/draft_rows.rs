//! Draft row tests - all-or-nothing commit, perpetual blank draft

mod common;

use common::{
    activate, blur, edit_and_commit, focus_draft, marks_modified, render_requests, table_rows,
    test_model, top_draft, type_text,
};
use tablet::messages::{EditMsg, Msg};
use tablet::model::{Focus, GridModel, RowId};
use tablet::update::update;
use tablet::view::{GridView, RowKind};

/// Fill `values` into a draft one column at a time, leaving focus on the last
fn fill_draft(model: &mut GridModel, row: RowId, values: &[(usize, &str)]) {
    for (column, value) in values {
        focus_draft(model, row, *column);
        type_text(model, value);
    }
}

fn assert_single_idle_draft(model: &GridModel) {
    assert_eq!(model.drafts.len(), 1);
    assert!(model.drafts[0].is_blank());
    assert_eq!(model.idle_blank_drafts(), 1);
}

#[test]
fn test_loaded_grid_has_one_blank_draft() {
    let model = test_model("a,b\n1,2\n");
    assert_single_idle_draft(&model);
}

#[test]
fn test_partial_draft_does_not_commit() {
    let mut model = test_model("a,b,c\n1,2,3\n");
    let draft = top_draft(&model);

    fill_draft(&mut model, draft, &[(0, "x"), (1, "y")]);
    let cmd = blur(&mut model);

    assert!(!marks_modified(&cmd));
    assert_eq!(model.table.row_count(), 1);
    assert!(!model.table.is_dirty());
    // The partial draft stays, with a fresh blank one above it
    assert_eq!(model.drafts.len(), 2);
    assert!(model.drafts[0].is_blank());
    assert_eq!(model.drafts[1].id, draft);
    assert_eq!(model.drafts[1].field_values(), vec!["x", "y", ""]);
}

#[test]
fn test_completing_draft_commits_one_row_at_top() {
    let mut model = test_model("a,b,c\n1,2,3\n");
    let draft = top_draft(&model);

    fill_draft(&mut model, draft, &[(0, "x"), (1, "y")]);
    blur(&mut model);
    fill_draft(&mut model, draft, &[(2, "z")]);
    let cmd = blur(&mut model);

    assert!(marks_modified(&cmd));
    assert_eq!(render_requests(cmd).len(), 3);
    assert_eq!(
        table_rows(&model),
        vec![vec!["x", "y", "z"], vec!["1", "2", "3"]]
    );
    assert_eq!(model.rows[0].id, draft);
    assert_single_idle_draft(&model);
}

#[test]
fn test_commit_draft_scenario() {
    let mut model = test_model("a,b\n1,2\n3,4\n");
    edit_and_commit(&mut model, 0, 0, "9");
    let draft = top_draft(&model);

    fill_draft(&mut model, draft, &[(0, "5"), (1, "6")]);
    blur(&mut model);

    assert_eq!(
        table_rows(&model),
        vec![vec!["5", "6"], vec!["9", "2"], vec!["3", "4"]]
    );
    assert_eq!(model.get_view_data().unwrap(), "a,b\n5,6\n9,2\n3,4\n");
}

#[test]
fn test_focusing_draft_spawns_another() {
    let mut model = test_model("a,b\n1,2\n");
    let draft = top_draft(&model);
    focus_draft(&mut model, draft, 0);

    assert_eq!(model.drafts.len(), 2);
    assert_ne!(model.drafts[0].id, draft);
    assert_eq!(model.idle_blank_drafts(), 1);
    assert_eq!(model.focus, Some(Focus::Draft { row: draft, column: 0 }));
}

#[test]
fn test_leaving_untouched_draft_restores_single_draft() {
    let mut model = test_model("a,b\n1,2\n");
    let draft = top_draft(&model);
    focus_draft(&mut model, draft, 0);
    blur(&mut model);

    assert_single_idle_draft(&model);
    assert_eq!(model.table.row_count(), 1);
}

#[test]
fn test_whitespace_only_draft_counts_as_blank() {
    let mut model = test_model("a,b\n1,2\n");
    let draft = top_draft(&model);
    fill_draft(&mut model, draft, &[(0, "  "), (1, " ")]);
    blur(&mut model);

    assert_eq!(model.table.row_count(), 1);
    assert_single_idle_draft(&model);
}

#[test]
fn test_enter_in_draft_runs_commit_check() {
    let mut model = test_model("a,b\n1,2\n");
    let draft = top_draft(&model);
    fill_draft(&mut model, draft, &[(0, "5"), (1, "6")]);
    update(&mut model, Msg::Edit(EditMsg::Enter { modifier: false }));

    assert_eq!(model.table.get(0, 0), "5");
    assert!(model.focus.is_none());
    assert_single_idle_draft(&model);
}

#[test]
fn test_activating_data_cell_commits_complete_draft() {
    let mut model = test_model("a,b\n1,2\n");
    let draft = top_draft(&model);
    fill_draft(&mut model, draft, &[(0, "5"), (1, "6")]);

    // Row identity survives the insert above it
    let cell = model.cell_ref(0, 1).unwrap();
    activate(&mut model, 0, 1);

    assert_eq!(model.table.row_count(), 2);
    assert_eq!(model.row_index(cell.row), Some(1));
    let state = model.cell(cell).unwrap();
    assert!(state.is_editing());
    assert_eq!(state.buffer().unwrap().as_str(), "2");
    assert_single_idle_draft(&model);
}

#[test]
fn test_repeated_commits_keep_one_draft() {
    let mut model = test_model("a\n1\n");
    for value in ["x", "y", "z"] {
        let draft = top_draft(&model);
        fill_draft(&mut model, draft, &[(0, value)]);
        blur(&mut model);
        assert_single_idle_draft(&model);
    }

    assert_eq!(
        table_rows(&model),
        vec![vec!["z"], vec!["y"], vec!["x"], vec!["1"]]
    );
}

#[test]
fn test_view_shows_drafts_above_data() {
    let mut model = test_model("a,b\n1,2\n");
    let draft = top_draft(&model);
    fill_draft(&mut model, draft, &[(0, "5")]);

    let view = GridView::build(&model);
    let kinds: Vec<RowKind> = view.rows.iter().map(|r| r.kind).collect();
    assert_eq!(kinds, vec![RowKind::Draft, RowKind::Draft, RowKind::Data]);
    assert_eq!(view.rows[1].cells[0].text, "5");
    assert!(view.rows[1].cells[0].focused);
    assert_eq!(view.rows_of(RowKind::Data).count(), 1);
}

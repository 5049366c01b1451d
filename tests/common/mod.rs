//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use tablet::commands::Cmd;
use tablet::config::GridConfig;
use tablet::host::{
    DocumentHost, FormattedTextRenderer, LinkMarkerRenderer, LinkNavigator, RenderError,
    RenderedCell,
};
use tablet::messages::{DocumentMsg, EditMsg, FocusMsg, Msg};
use tablet::model::{CellRef, GridModel, RowId};
use tablet::update::update;

pub const SOURCE: &str = "notes/people.csv";

/// Create a model with `text` loaded from `SOURCE`
pub fn test_model(text: &str) -> GridModel {
    let mut model = GridModel::new(GridConfig::default());
    update(&mut model, load_msg(text));
    model
}

pub fn load_msg(text: &str) -> Msg {
    Msg::Document(DocumentMsg::Load {
        text: text.to_string(),
        source_path: PathBuf::from(SOURCE),
        delimiter: None,
    })
}

/// Table contents as plain rows
pub fn table_rows(model: &GridModel) -> Vec<Vec<String>> {
    model
        .table
        .rows()
        .map(|row| row.values().to_vec())
        .collect()
}

/// Topmost draft row
pub fn top_draft(model: &GridModel) -> RowId {
    model.drafts[0].id
}

pub fn focus_draft(model: &mut GridModel, row: RowId, column: usize) -> Option<Cmd> {
    update(model, Msg::Focus(FocusMsg::FocusDraft { row, column }))
}

pub fn activate(model: &mut GridModel, row_index: usize, column: usize) -> Option<Cmd> {
    let cell = model.cell_ref(row_index, column).expect("cell exists");
    update(model, Msg::Focus(FocusMsg::ActivateCell(cell)))
}

pub fn blur(model: &mut GridModel) -> Option<Cmd> {
    update(model, Msg::Focus(FocusMsg::Blur))
}

/// Type characters into the focused surface
pub fn type_text(model: &mut GridModel, text: &str) {
    for ch in text.chars() {
        update(model, Msg::Edit(EditMsg::InsertChar(ch)));
    }
}

/// Replace the focused buffer's content
pub fn replace_text(model: &mut GridModel, text: &str) {
    update(model, Msg::Edit(EditMsg::SelectAll));
    update(model, Msg::Edit(EditMsg::InsertText(text.to_string())));
}

/// Activate a data cell, replace its text and commit by blurring
pub fn edit_and_commit(
    model: &mut GridModel,
    row_index: usize,
    column: usize,
    text: &str,
) -> Option<Cmd> {
    activate(model, row_index, column);
    replace_text(model, text);
    blur(model)
}

/// Render requests carried by a command, as (cell, generation, raw)
pub fn render_requests(cmd: Option<Cmd>) -> Vec<(CellRef, u64, String)> {
    cmd.map(Cmd::flatten)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|c| match c {
            Cmd::RenderCell {
                cell,
                generation,
                raw,
                ..
            } => Some((cell, generation, raw)),
            _ => None,
        })
        .collect()
}

/// Whether a command tells the host to mark the document modified
pub fn marks_modified(cmd: &Option<Cmd>) -> bool {
    cmd.clone()
        .map(Cmd::flatten)
        .unwrap_or_default()
        .contains(&Cmd::MarkModified)
}

// ========================================================================
// Recording collaborators
// ========================================================================

/// Link-marker renderer that records every raw value and source path it sees
#[derive(Clone, Default)]
pub struct RecordingRenderer {
    pub calls: Arc<Mutex<Vec<(String, PathBuf)>>>,
    /// Raw values that fail to render
    pub fail_on: Arc<Mutex<Vec<String>>>,
}

impl RecordingRenderer {
    pub fn raws(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(raw, _)| raw.clone())
            .collect()
    }
}

impl FormattedTextRenderer for RecordingRenderer {
    fn render(&self, raw: &str, source_path: &Path) -> Result<RenderedCell, RenderError> {
        self.calls
            .lock()
            .unwrap()
            .push((raw.to_string(), source_path.to_path_buf()));
        if self.fail_on.lock().unwrap().iter().any(|f| f == raw) {
            return Err(RenderError(format!("cannot render {:?}", raw)));
        }
        LinkMarkerRenderer.render(raw, source_path)
    }
}

/// Navigator that records (target, source_path, new_pane)
#[derive(Clone, Default)]
pub struct RecordingNavigator {
    pub opened: Arc<Mutex<Vec<(String, PathBuf, bool)>>>,
}

impl LinkNavigator for RecordingNavigator {
    fn open(&self, target: &str, source_path: &Path, new_pane: bool) {
        self.opened
            .lock()
            .unwrap()
            .push((target.to_string(), source_path.to_path_buf(), new_pane));
    }
}

/// Host that counts modification notices
#[derive(Clone, Default)]
pub struct CountingHost {
    pub modified: Arc<AtomicUsize>,
}

impl CountingHost {
    pub fn count(&self) -> usize {
        self.modified.load(Ordering::SeqCst)
    }
}

impl DocumentHost for CountingHost {
    fn mark_modified(&mut self) {
        self.modified.fetch_add(1, Ordering::SeqCst);
    }
}

//! View Model
//!
//! Pure mapping from a todo snapshot to what the list shows.
//! Components render exactly this, so the DOM is a function of the snapshot.

use crate::models::Todo;

/// What the list container displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    /// Single placeholder line
    Empty(String),
    /// One row per todo, in list order
    Rows(Vec<RowView>),
}

/// One rendered todo row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowView {
    pub id: u32,
    /// Value of the row element's `id` attribute
    pub dom_id: String,
    pub checked: bool,
    pub text: String,
    /// Text is wrapped in `<s>`
    pub struck: bool,
}

pub fn list_view(todos: &[Todo], empty_message: &str) -> ListView {
    if todos.is_empty() {
        return ListView::Empty(empty_message.to_string());
    }
    ListView::Rows(todos.iter().map(row_view).collect())
}

pub fn row_view(todo: &Todo) -> RowView {
    RowView {
        id: todo.id,
        dom_id: todo.id.to_string(),
        checked: todo.complete,
        text: todo.text.clone(),
        struck: todo.complete,
    }
}

/// Identity of a rendered row: any change to what the row shows, or a new
/// render epoch, yields a new key and therefore a fresh DOM node
pub type RowKey = (u32, String, bool, u32);

pub fn row_key(row: &RowView, epoch: u32) -> RowKey {
    (row.id, row.text.clone(), row.checked, epoch)
}

/// Rows in list order, paired with their keys
pub fn keyed_rows(todos: &[Todo], epoch: u32) -> Vec<(RowKey, RowView)> {
    todos
        .iter()
        .map(row_view)
        .map(|row| (row_key(&row, epoch), row))
        .collect()
}

/// What to do with an in-place text edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Commit(String),
    Unchanged,
    /// Blank edit: throw the DOM text away and re-render the stored one
    Revert,
}

pub fn edit_outcome(stored: Option<&str>, edited: &str) -> EditOutcome {
    match normalize_input(edited) {
        None => EditOutcome::Revert,
        Some(text) if stored == Some(text.as_str()) => EditOutcome::Unchanged,
        Some(text) => EditOutcome::Commit(text),
    }
}

/// Recover a todo id from a row element's `id` attribute
pub fn parse_row_id(dom_id: &str) -> Option<u32> {
    dom_id.trim().parse().ok().filter(|id| *id > 0)
}

/// Trimmed text, or `None` when nothing is left
pub fn normalize_input(raw: &str) -> Option<String> {
    let text = raw.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

pub fn remaining_count(todos: &[Todo]) -> usize {
    todos.iter().filter(|t| !t.complete).count()
}

/// Footer counter label
pub fn remaining_label(remaining: usize) -> String {
    match remaining {
        1 => "1 item left".to_string(),
        n => format!("{} items left", n),
    }
}

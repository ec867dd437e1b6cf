//! Todo List Component
//!
//! Renders the snapshot into `ul.todo-list` and delegates row events
//! (delete click, checkbox change, text edit) from the container.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::components::TodoRow;
use crate::models::Todo;
use crate::view_model::{edit_outcome, keyed_rows, list_view, parse_row_id, EditOutcome, ListView};

/// Element an event was dispatched on
fn event_element(ev: &web_sys::Event) -> Option<web_sys::Element> {
    ev.target()?.dyn_into::<web_sys::Element>().ok()
}

/// Id of the row an element sits in
fn row_id_of(el: &web_sys::Element) -> Option<u32> {
    let row = el.parent_element()?;
    parse_row_id(&row.id())
}

/// List of todos; a row whose shown state changed gets a fresh node
#[component]
pub fn TodoList(
    todos: ReadSignal<Vec<Todo>>,
    #[prop(into)] empty_message: String,
    #[prop(into)] on_toggle: Callback<u32>,
    #[prop(into)] on_delete: Callback<u32>,
    #[prop(into)] on_edit: Callback<(u32, String)>,
) -> impl IntoView {
    // Bumped to throw away in-place DOM edits that were rejected
    let (render_epoch, set_render_epoch) = signal(0u32);

    let on_click = move |ev: web_sys::MouseEvent| {
        let Some(el) = event_element(&ev) else { return };
        if !el.class_list().contains("delete") {
            return;
        }
        if let Some(id) = row_id_of(&el) {
            on_delete.run(id);
        }
    };

    let on_change = move |ev: web_sys::Event| {
        let Some(el) = event_element(&ev) else { return };
        let is_checkbox = el
            .dyn_ref::<web_sys::HtmlInputElement>()
            .is_some_and(|input| input.type_() == "checkbox");
        if !is_checkbox {
            return;
        }
        if let Some(id) = row_id_of(&el) {
            on_toggle.run(id);
        }
    };

    let on_focusout = move |ev: web_sys::FocusEvent| {
        let Some(el) = event_element(&ev) else { return };
        if !el.class_list().contains("editable") {
            return;
        }
        let Some(id) = row_id_of(&el) else { return };
        let current = todos.with_untracked(|todos| {
            todos.iter().find(|t| t.id == id).map(|t| t.text.clone())
        });
        match edit_outcome(current.as_deref(), &el.text_content().unwrap_or_default()) {
            EditOutcome::Commit(text) => on_edit.run((id, text)),
            EditOutcome::Unchanged => {}
            EditOutcome::Revert => {
                // New epoch means new row keys, so the edited node is replaced
                log::debug!("[LIST] Empty edit on todo {}, reverting", id);
                set_render_epoch.update(|epoch| *epoch += 1);
            }
        }
    };

    let placeholder = move || {
        todos.with(|todos| match list_view(todos, &empty_message) {
            ListView::Empty(message) => Some(view! { <li class="empty">{message}</li> }),
            ListView::Rows(_) => None,
        })
    };
    let rows = move || {
        let epoch = render_epoch.get();
        todos.with(|todos| keyed_rows(todos, epoch))
    };

    view! {
        <ul class="todo-list" on:click=on_click on:change=on_change on:focusout=on_focusout>
            {placeholder}
            <For
                each=rows
                key=|(key, _)| key.clone()
                children=|(_, row)| view! { <TodoRow row=row /> }
            />
        </ul>
    }
}

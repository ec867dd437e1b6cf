//! Todo Row Component
//!
//! Individual todo in the list. Carries no handlers of its own: the list
//! container picks up events bubbling out of the row.

use leptos::either::Either;
use leptos::prelude::*;

use crate::view_model::RowView;

/// A single todo row
#[component]
pub fn TodoRow(row: RowView) -> impl IntoView {
    let text = row.text;

    view! {
        <li id=row.dom_id class={if row.checked { "todo-row completed" } else { "todo-row" }}>
            <input type="checkbox" prop:checked=row.checked />
            <span class="editable" contenteditable="true">
                {if row.struck {
                    Either::Left(view! { <s>{text}</s> })
                } else {
                    Either::Right(text)
                }}
            </span>
            <button class="delete">"Delete"</button>
        </li>
    }
}

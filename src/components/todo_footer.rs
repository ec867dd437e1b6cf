//! Todo Footer Component

use leptos::prelude::*;

use crate::models::Todo;
use crate::view_model::{remaining_count, remaining_label};

/// Remaining counter and "Clear completed" button
#[component]
pub fn TodoFooter(
    todos: ReadSignal<Vec<Todo>>,
    #[prop(into)] on_clear_completed: Callback<()>,
) -> impl IntoView {
    let remaining = move || todos.with(|todos| remaining_count(todos));
    let any_complete = move || todos.with(|todos| todos.iter().any(|t| t.complete));

    view! {
        <footer class="todo-footer">
            <span class="todo-count">{move || remaining_label(remaining())}</span>
            <Show when=any_complete>
                <button class="clear-completed" on:click=move |_| on_clear_completed.run(())>
                    "Clear completed"
                </button>
            </Show>
        </footer>
    }
}

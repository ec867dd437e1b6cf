//! Todo Form Component
//!
//! Text input plus submit button for adding todos.

use leptos::prelude::*;

use crate::view_model::normalize_input;

/// Form for creating new todos
///
/// Blank input never reaches `on_add`; the input is cleared after a
/// successful submit.
#[component]
pub fn TodoForm(
    #[prop(into)] placeholder: String,
    #[prop(into)] on_add: Callback<String>,
) -> impl IntoView {
    let (new_text, set_new_text) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(text) = normalize_input(&new_text.get_untracked()) else {
            return;
        };
        on_add.run(text);
        set_new_text.set(String::new());
    };

    view! {
        <form class="todo-form" on:submit=submit>
            <input
                type="text"
                name="todo"
                placeholder=placeholder
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit">"Submit"</button>
        </form>
    }
}

//! Todo App
//!
//! Wires the components to the store: component events become store
//! mutations, store changes become a new snapshot in the `todos` signal.

use leptos::prelude::*;

use crate::components::{TodoFooter, TodoForm, TodoList};
use crate::config::AppConfig;
use crate::models::Todo;
use crate::storage::AppStorage;
use crate::store::TodoStore;

#[component]
pub fn App(config: AppConfig, store: TodoStore<AppStorage>) -> impl IntoView {
    // Initial render uses whatever the store loaded
    let (todos, set_todos) = signal(store.todos().to_vec());
    log::info!("[APP] Rendering {} todos", store.todos().len());

    // web_sys::Storage is !Send, keep the store in a local arena slot
    let store = StoredValue::new_local(store);
    store.update_value(|store| {
        store.subscribe(move |snapshot: &[Todo]| set_todos.set(snapshot.to_vec()));
    });

    let on_add = Callback::new(move |text: String| {
        store.update_value(|store| {
            store.add_todo(text);
        });
    });
    let on_toggle = Callback::new(move |id: u32| {
        store.update_value(|store| {
            store.toggle_todo(id);
        });
    });
    let on_delete = Callback::new(move |id: u32| {
        store.update_value(|store| {
            store.delete_todo(id);
        });
    });
    let on_edit = Callback::new(move |(id, text): (u32, String)| {
        store.update_value(|store| {
            store.edit_todo(id, text);
        });
    });
    let on_clear_completed = Callback::new(move |_: ()| {
        store.update_value(|store| {
            store.clear_completed();
        });
    });

    view! {
        <h1>{config.title}</h1>
        <TodoForm placeholder=config.placeholder on_add=on_add />
        <TodoList
            todos=todos
            empty_message=config.empty_message
            on_toggle=on_toggle
            on_delete=on_delete
            on_edit=on_edit
        />
        <TodoFooter todos=todos on_clear_completed=on_clear_completed />
    }
}

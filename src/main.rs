//! Todo MVC Frontend Entry Point

mod app;
mod components;
mod config;
mod logging;
mod models;
mod storage;
mod store;
mod view_model;

use app::App;
use config::AppConfig;
use leptos::mount::mount_to;
use leptos::prelude::*;
use storage::AppStorage;
use store::TodoStore;
use wasm_bindgen::JsCast;

/// Locate the pre-existing mount point
fn find_root(selector: &str) -> Option<web_sys::HtmlElement> {
    let document = web_sys::window()?.document()?;
    document
        .query_selector(selector)
        .ok()??
        .dyn_into::<web_sys::HtmlElement>()
        .ok()
}

fn main() {
    console_error_panic_hook::set_once();

    let defaults = AppConfig::default();
    logging::init(defaults.log_level);

    let root = find_root(&defaults.root_selector);
    let config = match &root {
        Some(root) => AppConfig::from_element(root),
        None => defaults,
    };
    logging::init(config.log_level);

    let store = TodoStore::load(
        AppStorage::detect(),
        config.storage_key.clone(),
        config.initial_todos.clone(),
    );

    match root {
        Some(root) => {
            mount_to(root, move || view! { <App config=config store=store /> }).forget();
        }
        None => {
            log::warn!("[MAIN] No element matches '{}', mounting to body", config.root_selector);
            mount_to_body(move || view! { <App config=config store=store /> });
        }
    }
}

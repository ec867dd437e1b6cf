//! Application Configuration
//!
//! Defaults, overridable through `data-*` attributes on the root element:
//!
//! ```html
//! <div id="root" data-storage-key="groceries" data-log-level="debug"></div>
//! ```

use log::LevelFilter;

use crate::models::Todo;

pub const DEFAULT_ROOT_SELECTOR: &str = "#root";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub root_selector: String,
    /// localStorage key holding the JSON todo list
    pub storage_key: String,
    pub title: String,
    pub placeholder: String,
    pub empty_message: String,
    pub log_level: LevelFilter,
    /// Used when nothing is stored yet
    pub initial_todos: Vec<Todo>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            root_selector: DEFAULT_ROOT_SELECTOR.to_string(),
            storage_key: "todos".to_string(),
            title: "Todos".to_string(),
            placeholder: "Add todo".to_string(),
            empty_message: "Nothing to do! Add a task?".to_string(),
            log_level: LevelFilter::Info,
            initial_todos: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Apply overrides; `lookup` returns the raw attribute value by name
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        if let Some(key) = non_empty("data-storage-key") {
            self.storage_key = key;
        }
        if let Some(title) = non_empty("data-title") {
            self.title = title;
        }
        if let Some(placeholder) = non_empty("data-placeholder") {
            self.placeholder = placeholder;
        }
        if let Some(message) = non_empty("data-empty-message") {
            self.empty_message = message;
        }
        if let Some(level) = non_empty("data-log-level") {
            match level.trim().parse::<LevelFilter>() {
                Ok(level) => self.log_level = level,
                Err(_) => log::warn!("[CONFIG] Unknown log level '{}', keeping {}", level, self.log_level),
            }
        }
        if let Some(raw) = lookup("data-initial-todos") {
            match serde_json::from_str::<Vec<Todo>>(&raw) {
                Ok(todos) => self.initial_todos = todos,
                Err(e) => log::warn!("[CONFIG] Ignoring data-initial-todos: {}", e),
            }
        }
        self
    }

    /// Read overrides from the root element's attributes
    pub fn from_element(root: &web_sys::Element) -> Self {
        Self::default().with_overrides(|name| root.get_attribute(name))
    }
}

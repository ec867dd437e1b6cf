//! Frontend Models
//!
//! The single entity of the app.

use serde::{Deserialize, Serialize};

/// Todo data structure, persisted as-is
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u32,
    pub text: String,
    pub complete: bool,
}

impl Todo {
    /// Create a new, not yet completed todo
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            complete: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_todo_creation() {
        let todo = Todo::new(1, "Run a marathon");
        assert_eq!(todo.id, 1);
        assert_eq!(todo.text, "Run a marathon");
        assert!(!todo.complete);
    }

    #[test]
    fn test_todo_field_names() {
        let json = serde_json::to_string(&Todo::new(1, "a")).unwrap();
        assert_eq!(json, r#"{"id":1,"text":"a","complete":false}"#);
    }
}

//! Todo Store
//!
//! Owns the authoritative todo list. Every change is committed to the
//! key-value storage and pushed to subscribers in registration order.

use crate::models::Todo;
use crate::storage::{KeyValueStore, StorageError, StorageResult};

/// Change subscriber, receives the new snapshot
pub type Subscriber = Box<dyn Fn(&[Todo])>;

pub struct TodoStore<S: KeyValueStore> {
    todos: Vec<Todo>,
    /// Next id to hand out; only ever grows
    next_id: u32,
    storage: S,
    key: String,
    subscribers: Vec<Subscriber>,
}

impl<S: KeyValueStore> TodoStore<S> {
    /// Load the list stored under `key`
    ///
    /// Falls back to `initial` when nothing is stored yet, and to an empty
    /// list when the stored value can't be read or parsed.
    pub fn load(storage: S, key: impl Into<String>, initial: Vec<Todo>) -> Self {
        let key = key.into();
        let todos = match read_todos(&storage, &key) {
            Ok(Some(todos)) => {
                log::info!("[STORE] Loaded {} todos from '{}'", todos.len(), key);
                todos
            }
            Ok(None) => {
                log::debug!("[STORE] Nothing stored under '{}', using {} initial todos", key, initial.len());
                initial
            }
            Err(e) => {
                log::warn!("[STORE] Discarding stored todos: {}", e);
                Vec::new()
            }
        };
        let (todos, next_id) = match todos.iter().map(|t| t.id).max() {
            None => (todos, 1),
            Some(max) => match max.checked_add(1) {
                Some(next_id) => (todos, next_id),
                None => {
                    log::warn!("[STORE] Discarding stored todos: id {} leaves no room for new ones", max);
                    (Vec::new(), 1)
                }
            },
        };

        Self {
            todos,
            next_id,
            storage,
            key,
            subscribers: Vec::new(),
        }
    }

    /// Current snapshot
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Register a change subscriber
    pub fn subscribe(&mut self, subscriber: impl Fn(&[Todo]) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Append a new todo and return its id, `None` once ids run out
    pub fn add_todo(&mut self, text: impl Into<String>) -> Option<u32> {
        let id = self.next_id;
        let Some(next_id) = id.checked_add(1) else {
            log::error!("[STORE] Todo ids exhausted, not adding");
            return None;
        };
        self.next_id = next_id;
        self.todos.push(Todo::new(id, text));
        log::debug!("[STORE] Added todo {}", id);
        self.commit();
        Some(id)
    }

    /// Replace the text of todo `id`, keeping its completion flag
    pub fn edit_todo(&mut self, id: u32, text: impl Into<String>) -> bool {
        let text = text.into();
        self.update_where(id, |todo| todo.text = text)
    }

    /// Flip the completion flag of todo `id`
    pub fn toggle_todo(&mut self, id: u32) -> bool {
        self.update_where(id, |todo| todo.complete = !todo.complete)
    }

    /// Remove todo `id`
    pub fn delete_todo(&mut self, id: u32) -> bool {
        let before = self.todos.len();
        self.todos.retain(|todo| todo.id != id);
        let removed = self.todos.len() != before;
        if removed {
            log::debug!("[STORE] Deleted todo {}", id);
            self.commit();
        }
        removed
    }

    /// Remove every completed todo, returning how many went away
    pub fn clear_completed(&mut self) -> usize {
        let before = self.todos.len();
        self.todos.retain(|todo| !todo.complete);
        let removed = before - self.todos.len();
        if removed > 0 {
            log::debug!("[STORE] Cleared {} completed todos", removed);
            self.commit();
        }
        removed
    }

    fn update_where(&mut self, id: u32, f: impl FnOnce(&mut Todo)) -> bool {
        match self.todos.iter_mut().find(|todo| todo.id == id) {
            Some(todo) => {
                f(todo);
                self.commit();
                true
            }
            None => {
                log::debug!("[STORE] No todo with id {}", id);
                false
            }
        }
    }

    /// Persist, then notify
    fn commit(&self) {
        if let Err(e) = write_todos(&self.storage, &self.key, &self.todos) {
            log::error!("[STORE] {}", e);
        }
        for subscriber in &self.subscribers {
            subscriber(&self.todos);
        }
    }
}

fn read_todos(storage: &impl KeyValueStore, key: &str) -> StorageResult<Option<Vec<Todo>>> {
    match storage.get(key)? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StorageError::Serialize(e.to_string())),
        None => Ok(None),
    }
}

fn write_todos(storage: &impl KeyValueStore, key: &str, todos: &[Todo]) -> StorageResult<()> {
    let raw = serde_json::to_string(todos).map_err(|e| StorageError::Serialize(e.to_string()))?;
    storage.set(key, &raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use std::cell::RefCell;
    use std::collections::HashSet;
    use std::rc::Rc;

    const KEY: &str = "todos";

    fn empty_store() -> TodoStore<MemoryStorage> {
        TodoStore::load(MemoryStorage::new(), KEY, Vec::new())
    }

    fn store_with(texts: &[&str]) -> TodoStore<MemoryStorage> {
        let mut store = empty_store();
        for text in texts {
            store.add_todo(*text);
        }
        store
    }

    /// Storage that refuses every write
    struct ReadOnlyStorage;

    impl KeyValueStore for ReadOnlyStorage {
        fn get(&self, _key: &str) -> StorageResult<Option<String>> {
            Ok(None)
        }

        fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Write("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_add_assigns_sequential_ids() {
        let store = store_with(&["Buy milk", "Walk dog"]);
        let todos = store.todos();
        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0], Todo::new(1, "Buy milk"));
        assert_eq!(todos[1], Todo::new(2, "Walk dog"));
    }

    #[test]
    fn test_ids_unique_after_every_add() {
        let mut store = empty_store();
        for i in 0..20 {
            store.add_todo(format!("todo {}", i));
            if i % 3 == 0 {
                let first = store.todos()[0].id;
                store.delete_todo(first);
            }
            let ids: HashSet<u32> = store.todos().iter().map(|t| t.id).collect();
            assert_eq!(ids.len(), store.todos().len());
        }
    }

    #[test]
    fn test_deleted_max_id_not_reused() {
        let mut store = store_with(&["a", "b"]);
        assert!(store.delete_todo(2));
        assert_eq!(store.add_todo("c"), Some(3));
    }

    #[test]
    fn test_edit_keeps_complete_flag() {
        let mut store = store_with(&["a", "b"]);
        store.toggle_todo(1);
        assert!(store.edit_todo(1, "A"));
        assert_eq!(store.todos()[0].text, "A");
        assert!(store.todos()[0].complete);
        assert_eq!(store.todos()[1], Todo::new(2, "b"));
    }

    #[test]
    fn test_edit_missing_id_is_noop() {
        let mut store = store_with(&["a", "b"]);
        let before = store.todos().to_vec();
        assert!(!store.edit_todo(42, "zzz"));
        assert_eq!(store.todos(), before.as_slice());
    }

    #[test]
    fn test_toggle_twice_restores() {
        let mut store = store_with(&["a", "b"]);
        let before = store.todos().to_vec();
        store.toggle_todo(2);
        assert!(store.todos()[1].complete);
        assert!(!store.todos()[0].complete);
        store.toggle_todo(2);
        assert_eq!(store.todos(), before.as_slice());
    }

    #[test]
    fn test_delete_present_and_absent() {
        let mut store = store_with(&["a", "b", "c"]);
        assert!(store.delete_todo(2));
        assert_eq!(store.todos().len(), 2);
        assert!(store.todos().iter().all(|t| t.id != 2));

        assert!(!store.delete_todo(2));
        assert_eq!(store.todos().len(), 2);
    }

    #[test]
    fn test_clear_completed() {
        let mut store = store_with(&["a", "b", "c"]);
        store.toggle_todo(1);
        store.toggle_todo(3);
        assert_eq!(store.clear_completed(), 2);
        assert_eq!(store.todos(), &[Todo::new(2, "b")]);
        assert_eq!(store.clear_completed(), 0);
    }

    #[test]
    fn test_every_mutation_notifies() {
        let mut store = empty_store();
        let calls = Rc::new(RefCell::new(Vec::<usize>::new()));
        let seen = calls.clone();
        store.subscribe(move |todos| seen.borrow_mut().push(todos.len()));

        store.add_todo("a");
        store.add_todo("b");
        store.edit_todo(1, "A");
        store.toggle_todo(2);
        store.clear_completed();
        store.delete_todo(1);

        assert_eq!(*calls.borrow(), vec![1, 2, 2, 2, 1, 0]);
    }

    #[test]
    fn test_noop_mutation_does_not_notify() {
        let mut store = store_with(&["a"]);
        let calls = Rc::new(RefCell::new(0));
        let seen = calls.clone();
        store.subscribe(move |_| *seen.borrow_mut() += 1);

        store.edit_todo(9, "x");
        store.toggle_todo(9);
        store.delete_todo(9);
        store.clear_completed();

        assert_eq!(*calls.borrow(), 0);
    }

    #[test]
    fn test_subscribers_called_in_order() {
        let mut store = empty_store();
        let order = Rc::new(RefCell::new(Vec::new()));
        for tag in ["first", "second", "third"] {
            let order = order.clone();
            store.subscribe(move |_| order.borrow_mut().push(tag));
        }
        store.add_todo("a");
        assert_eq!(*order.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_persisted_round_trip() {
        let mut store = store_with(&["a", "b"]);
        store.toggle_todo(2);
        let expected = store.todos().to_vec();

        let raw = store.storage.get(KEY).unwrap().unwrap();
        let reloaded = TodoStore::load(MemoryStorage::with_entry(KEY, &raw), KEY, Vec::new());
        assert_eq!(reloaded.todos(), expected.as_slice());
    }

    #[test]
    fn test_load_known_blob() {
        let raw = r#"[{"id":1,"text":"a","complete":false}]"#;
        let store = TodoStore::load(MemoryStorage::with_entry(KEY, raw), KEY, Vec::new());
        assert_eq!(store.todos(), &[Todo::new(1, "a")]);
    }

    #[test]
    fn test_load_continues_ids_after_max() {
        let raw = r#"[{"id":7,"text":"a","complete":false},{"id":3,"text":"b","complete":true}]"#;
        let mut store = TodoStore::load(MemoryStorage::with_entry(KEY, raw), KEY, Vec::new());
        assert_eq!(store.add_todo("c"), Some(8));
    }

    #[test]
    fn test_load_max_id_falls_back_to_empty() {
        let raw = r#"[{"id":4294967295,"text":"a","complete":false}]"#;
        let mut store = TodoStore::load(MemoryStorage::with_entry(KEY, raw), KEY, Vec::new());
        assert!(store.todos().is_empty());
        assert_eq!(store.add_todo("b"), Some(1));
    }

    #[test]
    fn test_add_refuses_when_ids_exhausted() {
        let raw = r#"[{"id":4294967294,"text":"a","complete":false}]"#;
        let mut store = TodoStore::load(MemoryStorage::with_entry(KEY, raw), KEY, Vec::new());
        assert_eq!(store.todos().len(), 1);
        assert_eq!(store.add_todo("b"), None);
        assert_eq!(store.todos().len(), 1);
        assert!(store.todos().iter().all(|t| t.id != 0));
    }

    #[test]
    fn test_load_malformed_falls_back_to_empty() {
        let initial = vec![Todo::new(1, "seed")];
        let store = TodoStore::load(MemoryStorage::with_entry(KEY, "{not json"), KEY, initial);
        assert!(store.todos().is_empty());
    }

    #[test]
    fn test_load_absent_uses_initial() {
        let initial = vec![Todo::new(1, "Run a marathon"), Todo::new(2, "Plant a garden")];
        let mut store = TodoStore::load(MemoryStorage::new(), KEY, initial.clone());
        assert_eq!(store.todos(), initial.as_slice());
        assert_eq!(store.add_todo("Grocery Shopping"), Some(3));
    }

    #[test]
    fn test_write_failure_still_notifies() {
        let mut store = TodoStore::load(ReadOnlyStorage, KEY, Vec::new());
        let calls = Rc::new(RefCell::new(0));
        let seen = calls.clone();
        store.subscribe(move |_| *seen.borrow_mut() += 1);

        store.add_todo("a");
        assert_eq!(store.todos().len(), 1);
        assert_eq!(*calls.borrow(), 1);
    }
}

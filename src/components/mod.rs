//! UI Components
//!
//! Leptos components rendering the todo app.

mod todo_footer;
mod todo_form;
mod todo_list;
mod todo_row;

pub use todo_footer::TodoFooter;
pub use todo_form::TodoForm;
pub use todo_list::TodoList;
pub use todo_row::TodoRow;

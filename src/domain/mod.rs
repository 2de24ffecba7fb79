pub mod samples;
pub mod store;
pub mod todo;

pub use store::{DeleteTarget, Store, StoreError};
pub use todo::{new_todo_id, Priority, Todo, TodoDraft, TodoUpdate, DESC_MAX_CHARS, TITLE_MAX_CHARS};

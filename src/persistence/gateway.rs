use super::kv::KvStore;
use crate::domain::{samples, Todo};
use anyhow::{Context, Result};

/// Storage key holding the JSON-encoded todo list
pub const TODOS_KEY: &str = "todo-info-list";

/// Storage key holding the JSON-encoded project name list
pub const PROJECTS_KEY: &str = "projects";

/// Collections revived from the blob store, seeded where the store held
/// nothing usable
#[derive(Debug)]
pub struct LoadedState {
    pub projects: Vec<String>,
    pub todos: Vec<Todo>,
    /// True when `todos` are the seeded samples rather than user data
    pub todo_samples: bool,
}

/// Load both collections. Missing or empty stored projects seed the default
/// pair; missing or empty stored todos seed the five samples and flag them
/// so they are discarded on the first real creation and never written back.
/// Due dates are stored as ISO-8601 strings and revived to local timestamps
/// by the todo record's serde model.
pub fn load_state(kv: &KvStore) -> Result<LoadedState> {
    let projects = match kv.get(PROJECTS_KEY) {
        Some(raw) => {
            let stored: Vec<String> =
                serde_json::from_str(raw).context("Failed to decode stored projects")?;
            if stored.is_empty() {
                samples::project_samples()
            } else {
                stored
            }
        }
        None => samples::project_samples(),
    };

    let (todos, todo_samples) = match kv.get(TODOS_KEY) {
        Some(raw) => {
            let stored: Vec<Todo> =
                serde_json::from_str(raw).context("Failed to decode stored todos")?;
            if stored.is_empty() {
                (samples::todo_samples(&projects), true)
            } else {
                (stored, false)
            }
        }
        None => (samples::todo_samples(&projects), true),
    };

    Ok(LoadedState {
        projects,
        todos,
        todo_samples,
    })
}

/// Flush both collections, once, at session teardown. Projects are written
/// whenever non-empty. Todos are written only when they are real (non-sample)
/// and non-empty; a todo list that ended empty clears the whole store instead
/// of writing an empty array, matching the stored-format contract.
pub fn save_state(
    kv: &mut KvStore,
    projects: &[String],
    todos: &[Todo],
    todo_samples: bool,
) -> Result<()> {
    if !projects.is_empty() {
        let encoded = serde_json::to_string(projects).context("Failed to encode projects")?;
        kv.set(PROJECTS_KEY, encoded);
    }

    if !todo_samples && !todos.is_empty() {
        let encoded = serde_json::to_string(todos).context("Failed to encode todos")?;
        kv.set(TODOS_KEY, encoded);
    } else if todos.is_empty() && kv.get(TODOS_KEY).is_some() {
        kv.clear();
    }

    Ok(())
}

use super::samples;
use super::todo::{new_todo_id, Todo, TodoDraft, TodoUpdate};
use thiserror::Error;

/// What a pending delete points at: a project by position or a todo by id.
/// The two cases share one slot, so at most one delete is ever pending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteTarget {
    Project(usize),
    Todo(String),
}

/// Invariant violations raised by store transitions. Each one means the view
/// and the store have fallen out of sync; none of them is recoverable, so
/// they abort the running transition instead of failing quietly.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("todo edit cannot be confirmed: no matching edit is pending")]
    TodoEditNotPending,
    #[error("delete cannot be confirmed: nothing is pending deletion")]
    DeleteNotPending,
    #[error("project edit cannot be confirmed: no project edit is pending")]
    ProjectEditNotPending,
    #[error("no todo with id {0}")]
    UnknownTodo(String),
    #[error("unknown project {0:?}")]
    UnknownProject(String),
    #[error("project index {0} is out of range")]
    ProjectIndexOutOfRange(usize),
    #[error("project name cannot be empty")]
    EmptyProjectName,
}

/// In-memory authoritative state: projects, todos, the active project
/// filter, and the single-slot pending references for in-flight edit and
/// delete confirmations. All mutation goes through one transition method per
/// event kind; a transition that fails leaves the store untouched, and only
/// a successful one clears its pending reference.
#[derive(Debug)]
pub struct Store {
    projects: Vec<String>,
    todos: Vec<Todo>,
    current_project: String,
    todo_samples: bool,
    pending_todo_edit: Option<String>,
    pending_project_edit: Option<usize>,
    pending_delete: Option<DeleteTarget>,
}

impl Store {
    /// Build the store from loaded (or seeded) collections. An empty project
    /// list is replaced by the sample pair so the never-empty invariant holds
    /// from the first frame.
    pub fn new(projects: Vec<String>, todos: Vec<Todo>, todo_samples: bool) -> Self {
        let projects = if projects.is_empty() {
            samples::project_samples()
        } else {
            projects
        };
        let current_project = projects[0].clone();

        Self {
            projects,
            todos,
            current_project,
            todo_samples,
            pending_todo_edit: None,
            pending_project_edit: None,
            pending_delete: None,
        }
    }

    pub fn projects(&self) -> &[String] {
        &self.projects
    }

    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn current_project(&self) -> &str {
        &self.current_project
    }

    /// Whether the todo list still holds the seeded samples
    pub fn todo_samples(&self) -> bool {
        self.todo_samples
    }

    pub fn pending_delete(&self) -> Option<&DeleteTarget> {
        self.pending_delete.as_ref()
    }

    /// Todos belonging to the active project, in stored (due-date) order
    pub fn current_todos(&self) -> Vec<&Todo> {
        self.todos
            .iter()
            .filter(|t| t.project == self.current_project)
            .collect()
    }

    pub fn todo(&self, id: &str) -> Option<&Todo> {
        self.todos.iter().find(|t| t.id == id)
    }

    pub fn project_name(&self, index: usize) -> Option<&str> {
        self.projects.get(index).map(String::as_str)
    }

    pub fn project_todo_count(&self, name: &str) -> usize {
        self.todos.iter().filter(|t| t.project == name).count()
    }

    /// Create a todo from the form draft: assign a fresh id, attach the
    /// active project, insert, and re-sort ascending by due date (stable, so
    /// equal due dates keep insertion order). The first real creation
    /// discards any remaining sample todos wholesale.
    pub fn create_todo(&mut self, draft: TodoDraft) {
        if self.todo_samples {
            self.todos.clear();
            self.todo_samples = false;
        }

        self.todos.push(Todo {
            id: new_todo_id(),
            project: self.current_project.clone(),
            title: draft.title,
            description: draft.description,
            due_date: draft.due_date,
            priority: draft.priority,
        });
        self.todos.sort_by_key(|t| t.due_date);
    }

    /// Mark the todo with `id` as the pending edit and return a copy for
    /// prefilling the form
    pub fn begin_todo_edit(&mut self, id: &str) -> Result<Todo, StoreError> {
        let todo = self
            .todos
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or_else(|| StoreError::UnknownTodo(id.to_string()))?;

        self.pending_todo_edit = Some(todo.id.clone());
        Ok(todo)
    }

    /// Merge the edited fields into the pending todo in place. The list is
    /// not re-sorted even when the due date moved; only creation sorts.
    pub fn apply_todo_edit(&mut self, update: TodoUpdate) -> Result<(), StoreError> {
        match &self.pending_todo_edit {
            Some(id) if *id == update.id => {}
            _ => return Err(StoreError::TodoEditNotPending),
        }

        let todo = self
            .todos
            .iter_mut()
            .find(|t| t.id == update.id)
            .ok_or_else(|| StoreError::UnknownTodo(update.id.clone()))?;

        todo.title = update.title;
        todo.description = update.description;
        todo.due_date = update.due_date;
        todo.priority = update.priority;
        self.pending_todo_edit = None;
        Ok(())
    }

    /// Record which entity a delete confirmation will apply to. The target
    /// must resolve now; an unresolvable id or index means the view offered
    /// something the store does not hold.
    pub fn request_delete(&mut self, target: DeleteTarget) -> Result<(), StoreError> {
        match &target {
            DeleteTarget::Project(index) => {
                if *index >= self.projects.len() {
                    return Err(StoreError::ProjectIndexOutOfRange(*index));
                }
            }
            DeleteTarget::Todo(id) => {
                if !self.todos.iter().any(|t| t.id == *id) {
                    return Err(StoreError::UnknownTodo(id.clone()));
                }
            }
        }

        self.pending_delete = Some(target);
        Ok(())
    }

    /// Apply the pending delete. A project takes its todos with it; if the
    /// last project goes, the sample pair is restored. The active project
    /// resets to the first entry after a project deletion.
    pub fn confirm_delete(&mut self) -> Result<(), StoreError> {
        match self.pending_delete.clone() {
            Some(DeleteTarget::Project(index)) => {
                if index >= self.projects.len() {
                    return Err(StoreError::ProjectIndexOutOfRange(index));
                }
                let name = self.projects.remove(index);
                self.todos.retain(|t| t.project != name);
                if self.projects.is_empty() {
                    self.projects = samples::project_samples();
                }
                self.current_project = self.projects[0].clone();
                self.pending_delete = None;
                Ok(())
            }
            Some(DeleteTarget::Todo(id)) => {
                let pos = self
                    .todos
                    .iter()
                    .position(|t| t.id == id)
                    .ok_or(StoreError::UnknownTodo(id))?;
                self.todos.remove(pos);
                self.pending_delete = None;
                Ok(())
            }
            None => Err(StoreError::DeleteNotPending),
        }
    }

    /// Drop the pending delete without touching projects or todos
    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    pub fn create_project(&mut self, name: String) -> Result<(), StoreError> {
        if name.is_empty() {
            return Err(StoreError::EmptyProjectName);
        }
        self.projects.push(name);
        self.current_project = self.projects[0].clone();
        Ok(())
    }

    /// Switch the active project filter
    pub fn change_project(&mut self, name: &str) -> Result<(), StoreError> {
        if !self.projects.iter().any(|p| p == name) {
            return Err(StoreError::UnknownProject(name.to_string()));
        }
        self.current_project = name.to_string();
        Ok(())
    }

    /// Mark the project at `index` as the pending edit and return its name
    /// for prefilling the form
    pub fn begin_project_edit(&mut self, index: usize) -> Result<String, StoreError> {
        let name = self
            .projects
            .get(index)
            .cloned()
            .ok_or(StoreError::ProjectIndexOutOfRange(index))?;

        self.pending_project_edit = Some(index);
        Ok(name)
    }

    /// Rename the pending project and re-point every todo that referenced
    /// the old name, in one transition
    pub fn apply_project_edit(&mut self, name: String) -> Result<(), StoreError> {
        let index = self
            .pending_project_edit
            .ok_or(StoreError::ProjectEditNotPending)?;
        if name.is_empty() {
            return Err(StoreError::EmptyProjectName);
        }
        if index >= self.projects.len() {
            return Err(StoreError::ProjectIndexOutOfRange(index));
        }

        let old = std::mem::replace(&mut self.projects[index], name.clone());
        for todo in &mut self.todos {
            if todo.project == old {
                todo.project = name.clone();
            }
        }
        self.pending_project_edit = None;
        self.current_project = self.projects[0].clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Priority;
    use chrono::{DateTime, Duration, Local, TimeZone};
    use pretty_assertions::assert_eq;

    fn at(hour: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 6, 1, hour, 0, 0).unwrap()
    }

    fn draft(title: &str, due: DateTime<Local>) -> TodoDraft {
        TodoDraft {
            title: title.to_string(),
            description: String::new(),
            due_date: due,
            priority: Priority::Medium,
        }
    }

    fn fresh_store() -> Store {
        Store::new(samples::project_samples(), Vec::new(), false)
    }

    fn sample_store() -> Store {
        let projects = samples::project_samples();
        let todos = samples::todo_samples(&projects);
        Store::new(projects, todos, true)
    }

    #[test]
    fn test_empty_project_list_is_replaced_by_samples() {
        let store = Store::new(Vec::new(), Vec::new(), false);
        assert_eq!(store.projects(), ["Default 1", "Default 2"]);
        assert_eq!(store.current_project(), "Default 1");
    }

    #[test]
    fn test_create_todo_attaches_current_project() {
        let mut store = fresh_store();
        store.create_todo(draft("A", Local::now() + Duration::hours(2)));

        assert_eq!(store.todos().len(), 1);
        assert_eq!(store.todos()[0].title, "A");
        assert_eq!(store.todos()[0].project, "Default 1");
        assert!(!store.todos()[0].id.is_empty());
    }

    #[test]
    fn test_create_todo_keeps_list_sorted_with_stable_ties() {
        let mut store = fresh_store();
        store.create_todo(draft("late", at(18)));
        store.create_todo(draft("early", at(9)));
        store.create_todo(draft("tie-first", at(12)));
        store.create_todo(draft("tie-second", at(12)));

        let titles: Vec<&str> = store.todos().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["early", "tie-first", "tie-second", "late"]);
    }

    #[test]
    fn test_first_real_todo_discards_samples() {
        let mut store = sample_store();
        assert_eq!(store.todos().len(), 5);

        store.create_todo(draft("real", at(10)));

        assert_eq!(store.todos().len(), 1);
        assert_eq!(store.todos()[0].title, "real");
        assert!(!store.todo_samples());
    }

    #[test]
    fn test_editing_a_sample_does_not_clear_the_flag() {
        let mut store = sample_store();
        let id = store.todos()[0].id.clone();

        store.begin_todo_edit(&id).unwrap();
        store
            .apply_todo_edit(TodoUpdate {
                id,
                title: "tweaked".to_string(),
                description: String::new(),
                due_date: at(8),
                priority: Priority::Low,
            })
            .unwrap();

        assert!(store.todo_samples());
    }

    #[test]
    fn test_apply_todo_edit_merges_in_place_without_resort() {
        let mut store = fresh_store();
        store.create_todo(draft("first", at(9)));
        store.create_todo(draft("second", at(12)));
        let id = store.todos()[0].id.clone();

        store.begin_todo_edit(&id).unwrap();
        store
            .apply_todo_edit(TodoUpdate {
                id: id.clone(),
                title: "first-late".to_string(),
                description: "moved".to_string(),
                due_date: at(20),
                priority: Priority::High,
            })
            .unwrap();

        // Edited entry stays at its position even though the due date moved
        assert_eq!(store.todos()[0].id, id);
        assert_eq!(store.todos()[0].title, "first-late");
        assert_eq!(store.todos()[0].due_date, at(20));
        assert_eq!(store.todos()[0].project, "Default 1");
    }

    #[test]
    fn test_apply_todo_edit_requires_matching_pending() {
        let mut store = fresh_store();
        store.create_todo(draft("a", at(9)));
        store.create_todo(draft("b", at(10)));
        let other = store.todos()[1].id.clone();
        let id = store.todos()[0].id.clone();
        store.begin_todo_edit(&id).unwrap();

        let update = TodoUpdate {
            id: other,
            title: "x".to_string(),
            description: String::new(),
            due_date: at(9),
            priority: Priority::Low,
        };
        assert_eq!(
            store.apply_todo_edit(update.clone()),
            Err(StoreError::TodoEditNotPending)
        );

        // Pending reference survives the failed transition
        let matching = TodoUpdate { id, ..update };
        assert!(store.apply_todo_edit(matching).is_ok());
    }

    #[test]
    fn test_begin_todo_edit_unknown_id_errors() {
        let mut store = fresh_store();
        assert_eq!(
            store.begin_todo_edit("nope"),
            Err(StoreError::UnknownTodo("nope".to_string()))
        );
    }

    #[test]
    fn test_delete_project_cascades_exactly() {
        let mut store = fresh_store();
        store.create_todo(draft("one", at(9)));
        store.create_todo(draft("two", at(10)));
        store.change_project("Default 2").unwrap();
        store.create_todo(draft("kept", at(11)));

        store.request_delete(DeleteTarget::Project(0)).unwrap();
        store.confirm_delete().unwrap();

        assert_eq!(store.projects(), ["Default 2"]);
        let titles: Vec<&str> = store.todos().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["kept"]);
    }

    #[test]
    fn test_deleting_last_project_restores_samples() {
        let mut store = Store::new(vec!["Only".to_string()], Vec::new(), false);
        store.create_todo(draft("t", at(9)));
        store.create_todo(draft("u", at(10)));

        store.request_delete(DeleteTarget::Project(0)).unwrap();
        store.confirm_delete().unwrap();

        assert_eq!(store.projects(), ["Default 1", "Default 2"]);
        assert_eq!(store.current_project(), "Default 1");
        assert!(store.todos().is_empty());
        assert!(!store.projects().is_empty());
    }

    #[test]
    fn test_confirm_delete_removes_single_todo() {
        let mut store = fresh_store();
        store.create_todo(draft("keep", at(9)));
        store.create_todo(draft("drop", at(10)));
        let id = store.todos()[1].id.clone();

        store.request_delete(DeleteTarget::Todo(id)).unwrap();
        store.confirm_delete().unwrap();

        assert_eq!(store.todos().len(), 1);
        assert_eq!(store.todos()[0].title, "keep");
    }

    #[test]
    fn test_confirm_delete_without_pending_is_fatal_and_harmless() {
        let mut store = fresh_store();
        store.create_todo(draft("a", at(9)));
        let projects_before = store.projects().to_vec();
        let todos_before = store.todos().to_vec();

        assert_eq!(store.confirm_delete(), Err(StoreError::DeleteNotPending));

        assert_eq!(store.projects(), projects_before);
        assert_eq!(store.todos(), todos_before);
    }

    #[test]
    fn test_cancel_delete_clears_pending_without_mutation() {
        let mut store = fresh_store();
        store.create_todo(draft("a", at(9)));
        let id = store.todos()[0].id.clone();

        store.request_delete(DeleteTarget::Todo(id)).unwrap();
        store.cancel_delete();

        assert_eq!(store.todos().len(), 1);
        assert_eq!(store.confirm_delete(), Err(StoreError::DeleteNotPending));
    }

    #[test]
    fn test_request_delete_rejects_unresolvable_targets() {
        let mut store = fresh_store();
        assert_eq!(
            store.request_delete(DeleteTarget::Project(7)),
            Err(StoreError::ProjectIndexOutOfRange(7))
        );
        assert_eq!(
            store.request_delete(DeleteTarget::Todo("missing".to_string())),
            Err(StoreError::UnknownTodo("missing".to_string()))
        );
        assert!(store.pending_delete().is_none());
    }

    #[test]
    fn test_rename_repoints_all_todos_atomically() {
        let mut store = fresh_store();
        store.create_todo(draft("a", at(9)));
        store.create_todo(draft("b", at(10)));
        store.change_project("Default 2").unwrap();
        store.create_todo(draft("c", at(11)));
        let before = store.project_todo_count("Default 1");

        store.begin_project_edit(0).unwrap();
        store.apply_project_edit("Renamed".to_string()).unwrap();

        assert_eq!(store.projects()[0], "Renamed");
        assert_eq!(store.project_todo_count("Default 1"), 0);
        assert_eq!(store.project_todo_count("Renamed"), before);
        // Pending reference is cleared after the transition
        assert_eq!(
            store.apply_project_edit("Again".to_string()),
            Err(StoreError::ProjectEditNotPending)
        );
    }

    #[test]
    fn test_apply_project_edit_rejects_empty_name() {
        let mut store = fresh_store();
        store.begin_project_edit(1).unwrap();
        assert_eq!(
            store.apply_project_edit(String::new()),
            Err(StoreError::EmptyProjectName)
        );
        // The pending edit survives, so a corrected resubmit goes through
        assert!(store.apply_project_edit("Fixed".to_string()).is_ok());
    }

    #[test]
    fn test_project_transitions_reset_current_to_first() {
        let mut store = fresh_store();
        store.change_project("Default 2").unwrap();
        store.create_project("Third".to_string()).unwrap();
        assert_eq!(store.current_project(), "Default 1");

        store.change_project("Third").unwrap();
        store.begin_project_edit(2).unwrap();
        store.apply_project_edit("Fourth".to_string()).unwrap();
        assert_eq!(store.current_project(), "Default 1");
    }

    #[test]
    fn test_create_project_rejects_empty_name() {
        let mut store = fresh_store();
        assert_eq!(
            store.create_project(String::new()),
            Err(StoreError::EmptyProjectName)
        );
        assert_eq!(store.projects().len(), 2);
    }

    #[test]
    fn test_change_project_rejects_unknown_name() {
        let mut store = fresh_store();
        assert_eq!(
            store.change_project("Nowhere"),
            Err(StoreError::UnknownProject("Nowhere".to_string()))
        );
        assert_eq!(store.current_project(), "Default 1");
    }

    #[test]
    fn test_current_todos_filters_by_active_project() {
        let mut store = fresh_store();
        store.create_todo(draft("a", at(9)));
        store.change_project("Default 2").unwrap();
        store.create_todo(draft("b", at(10)));

        let visible: Vec<&str> = store.current_todos().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(visible, ["b"]);
    }
}

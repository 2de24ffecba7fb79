use crate::bus::{Event, EventBus, EventKind};
use crate::coordinator::{Coordinator, Panel};
use crate::domain::{Priority, Store, Todo, TodoDraft, DESC_MAX_CHARS, TITLE_MAX_CHARS};
use chrono::{Duration, Local, NaiveDateTime, TimeZone, Timelike};

/// Format of the due-date form field
pub const DUE_DATE_FMT: &str = "%Y-%m-%d %H:%M";

/// Editable state of the todo form. Creating and editing share it; an edit
/// carries the id of the todo whose pending edit is open in the store.
#[derive(Debug, Clone)]
pub struct TodoFormState {
    pub editing_id: Option<String>,
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub priority: Priority,
    pub editing_field: usize, // 0 = title, 1 = description, 2 = due date, 3 = priority
    pub title_error: Option<String>,
    pub due_date_error: Option<String>,
}

impl TodoFormState {
    /// Blank form for a new todo. The due date defaults to two hours out.
    pub fn blank() -> Self {
        Self {
            editing_id: None,
            title: String::new(),
            description: String::new(),
            due_date: (Local::now() + Duration::hours(2))
                .format(DUE_DATE_FMT)
                .to_string(),
            priority: Priority::Medium,
            editing_field: 0,
            title_error: None,
            due_date_error: None,
        }
    }

    /// Form prefilled from an existing todo
    pub fn prefilled(todo: &Todo) -> Self {
        Self {
            editing_id: Some(todo.id.clone()),
            title: todo.title.clone(),
            description: todo.description.clone(),
            due_date: todo.due_date.format(DUE_DATE_FMT).to_string(),
            priority: todo.priority,
            editing_field: 0,
            title_error: None,
            due_date_error: None,
        }
    }

    pub fn next_field(&mut self) {
        self.editing_field = (self.editing_field + 1) % 4;
    }

    pub fn prev_field(&mut self) {
        self.editing_field = (self.editing_field + 3) % 4;
    }

    /// Type a character into the active field. Title and description are
    /// clamped to their character limits as they are typed.
    pub fn add_char(&mut self, c: char) {
        match self.editing_field {
            0 => {
                if self.title.chars().count() < TITLE_MAX_CHARS {
                    self.title.push(c);
                }
                self.title_error = None;
            }
            1 => {
                if self.description.chars().count() < DESC_MAX_CHARS {
                    self.description.push(c);
                }
            }
            2 => {
                self.due_date.push(c);
                self.due_date_error = None;
            }
            _ => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.editing_field {
            0 => {
                self.title.pop();
                self.title_error = None;
            }
            1 => {
                self.description.pop();
            }
            2 => {
                self.due_date.pop();
                self.due_date_error = None;
            }
            _ => {}
        }
    }

    pub fn cycle_priority(&mut self) {
        self.priority = self.priority.next();
    }

    /// Validate the fields, recording inline errors on the ones that fail.
    /// Returns the parsed draft only when every field is acceptable; the
    /// draft never reaches the store otherwise.
    pub fn validate(&mut self) -> Option<TodoDraft> {
        self.title_error = None;
        self.due_date_error = None;

        if self.title.is_empty() {
            self.title_error = Some("Title cannot be empty!".to_string());
        }

        let due = match NaiveDateTime::parse_from_str(self.due_date.trim(), DUE_DATE_FMT) {
            Ok(naive) => match Local.from_local_datetime(&naive).earliest() {
                Some(due) => Some(due),
                None => {
                    self.due_date_error = Some("Not a valid local date/time!".to_string());
                    None
                }
            },
            Err(_) => {
                self.due_date_error =
                    Some("Use the YYYY-MM-DD HH:MM format!".to_string());
                None
            }
        };

        if let Some(due) = due {
            // Compare at minute precision, like the form's minimum value
            let now = Local::now();
            let now = now
                .with_second(0)
                .and_then(|t| t.with_nanosecond(0))
                .unwrap_or(now);
            if due < now {
                self.due_date_error =
                    Some("The due date must not be in the past!".to_string());
            }
        }

        if self.title_error.is_some() || self.due_date_error.is_some() {
            return None;
        }

        Some(TodoDraft {
            title: self.title.clone(),
            description: self.description.clone(),
            due_date: due?,
            priority: self.priority,
        })
    }
}

/// Editable state of the project form
#[derive(Debug, Clone)]
pub struct ProjectFormState {
    pub editing_index: Option<usize>,
    pub name: String,
    pub error: Option<String>,
}

impl ProjectFormState {
    pub fn blank() -> Self {
        Self {
            editing_index: None,
            name: String::new(),
            error: None,
        }
    }

    pub fn prefilled(index: usize, name: String) -> Self {
        Self {
            editing_index: Some(index),
            name,
            error: None,
        }
    }

    pub fn add_char(&mut self, c: char) {
        if self.name.chars().count() < TITLE_MAX_CHARS {
            self.name.push(c);
        }
        self.error = None;
    }

    pub fn backspace(&mut self) {
        self.name.pop();
        self.error = None;
    }

    /// Returns the project name when acceptable, recording an inline error
    /// otherwise
    pub fn validate(&mut self) -> Option<String> {
        if self.name.is_empty() {
            self.error = Some("Title cannot be empty!".to_string());
            return None;
        }
        Some(self.name.clone())
    }
}

/// Top-level mutable state threaded through the event bus: the domain store
/// plus everything the view needs between frames
pub struct App {
    pub store: Store,
    pub coordinator: Coordinator,
    pub todo_form: Option<TodoFormState>,
    pub project_form: Option<ProjectFormState>,
    pub selected_todo: usize,
    pub selected_project: usize,
    pub should_quit: bool,
}

impl App {
    pub fn new(store: Store) -> Self {
        Self {
            store,
            coordinator: Coordinator::new(),
            todo_form: None,
            project_form: None,
            selected_todo: 0,
            selected_project: 0,
            should_quit: false,
        }
    }

    /// Todos shown by the todo list panel
    pub fn visible_todos(&self) -> Vec<&Todo> {
        self.store.current_todos()
    }

    pub fn selected_visible_todo(&self) -> Option<&Todo> {
        self.visible_todos().get(self.selected_todo).copied()
    }

    /// Keep selections inside the lists they point into after a mutation
    pub fn clamp_selections(&mut self) {
        let visible = self.visible_todos().len();
        if self.selected_todo >= visible {
            self.selected_todo = visible.saturating_sub(1);
        }
        let projects = self.store.projects().len();
        if self.selected_project >= projects {
            self.selected_project = projects.saturating_sub(1);
        }
    }

    pub fn move_selection_up(&mut self) {
        match self.coordinator.panel() {
            Panel::ProjectList => {
                if self.selected_project > 0 {
                    self.selected_project -= 1;
                }
            }
            _ => {
                if self.selected_todo > 0 {
                    self.selected_todo -= 1;
                }
            }
        }
    }

    pub fn move_selection_down(&mut self) {
        match self.coordinator.panel() {
            Panel::ProjectList => {
                if self.selected_project + 1 < self.store.projects().len() {
                    self.selected_project += 1;
                }
            }
            _ => {
                if self.selected_todo + 1 < self.visible_todos().len() {
                    self.selected_todo += 1;
                }
            }
        }
    }

    /// The project after the current one, wrapping around. None when there
    /// is nothing to cycle to.
    pub fn next_project_name(&self) -> Option<String> {
        let projects = self.store.projects();
        if projects.len() < 2 {
            return None;
        }
        let idx = projects
            .iter()
            .position(|p| p == self.store.current_project())?;
        Some(projects[(idx + 1) % projects.len()].clone())
    }

    pub fn toggle_todo_form(&mut self) {
        if self.coordinator.toggle_todo_form() {
            self.todo_form = Some(TodoFormState::blank());
        } else {
            self.todo_form = None;
        }
    }

    pub fn toggle_project_form(&mut self) {
        if self.coordinator.toggle_project_form() {
            self.project_form = Some(ProjectFormState::blank());
        } else {
            self.project_form = None;
        }
    }

    pub fn toggle_projects(&mut self) {
        self.coordinator.toggle_projects();
        self.selected_project = 0;
    }

    pub fn close_todo_form(&mut self) {
        self.todo_form = None;
        self.coordinator.close_form();
    }

    pub fn close_project_form(&mut self) {
        self.project_form = None;
        self.coordinator.close_form();
    }
}

/// Subscribe the domain and view handlers for every event kind. This is the
/// listener block the session installs once at startup; each handler is one
/// atomic transition on the store followed by the matching panel change.
pub fn wire_events(bus: &EventBus<App>) {
    bus.subscribe(EventKind::CreateTodo, |app, event, _| {
        if let Event::CreateTodo(draft) = event {
            app.store.create_todo(draft.clone());
        }
        app.close_todo_form();
        Ok(())
    });

    bus.subscribe(EventKind::EditTodoRequested, |app, event, _| {
        if let Event::EditTodoRequested(id) = event {
            let todo = app.store.begin_todo_edit(id)?;
            app.todo_form = Some(TodoFormState::prefilled(&todo));
            app.coordinator.open(Panel::TodoForm);
        }
        Ok(())
    });

    bus.subscribe(EventKind::TodoEdited, |app, event, _| {
        if let Event::TodoEdited(update) = event {
            app.store.apply_todo_edit(update.clone())?;
        }
        app.close_todo_form();
        Ok(())
    });

    bus.subscribe(EventKind::DeleteRequested, |app, event, _| {
        if let Event::DeleteRequested(target) = event {
            app.store.request_delete(target.clone())?;
            app.coordinator.open_delete_overlay();
        }
        Ok(())
    });

    bus.subscribe(EventKind::ConfirmDelete, |app, _, _| {
        app.store.confirm_delete()?;
        app.clamp_selections();
        app.coordinator.close_delete_overlay();
        Ok(())
    });

    bus.subscribe(EventKind::CancelDelete, |app, _, _| {
        app.store.cancel_delete();
        app.coordinator.close_delete_overlay();
        Ok(())
    });

    bus.subscribe(EventKind::CreateProject, |app, event, _| {
        if let Event::CreateProject(name) = event {
            app.store.create_project(name.clone())?;
        }
        app.close_project_form();
        Ok(())
    });

    bus.subscribe(EventKind::ProjectChanged, |app, event, _| {
        if let Event::ProjectChanged(name) = event {
            app.store.change_project(name)?;
            app.selected_todo = 0;
        }
        Ok(())
    });

    bus.subscribe(EventKind::EditProjectRequested, |app, event, _| {
        if let Event::EditProjectRequested(index) = event {
            let name = app.store.begin_project_edit(*index)?;
            app.project_form = Some(ProjectFormState::prefilled(*index, name));
            app.coordinator.open(Panel::ProjectForm);
        }
        Ok(())
    });

    bus.subscribe(EventKind::ProjectEdited, |app, event, _| {
        if let Event::ProjectEdited(name) = event {
            app.store.apply_project_edit(name.clone())?;
        }
        app.close_project_form();
        Ok(())
    });
}

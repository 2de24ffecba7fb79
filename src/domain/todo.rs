use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum length of a todo or project title (clamped at input time)
pub const TITLE_MAX_CHARS: usize = 50;

/// Maximum length of a todo description (clamped at input time)
pub const DESC_MAX_CHARS: usize = 250;

/// Priority of a todo. Stored lowercase in the blob store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    /// Display name for list rows and the form field
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }

    /// Next priority in the form's cycle order
    pub fn next(&self) -> Self {
        match self {
            Priority::Low => Priority::Medium,
            Priority::Medium => Priority::High,
            Priority::High => Priority::Low,
        }
    }
}

/// A single todo entry. Field names and value casing match the stored JSON
/// format (`dueDate` as ISO-8601, lowercase priority).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Todo {
    /// Opaque unique id
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub due_date: DateTime<Local>,
    pub priority: Priority,
    /// Name of the project this todo belongs to
    pub project: String,
}

/// Fields collected by the todo form when creating a new todo. The store
/// assigns the id and the owning project.
#[derive(Debug, Clone, PartialEq)]
pub struct TodoDraft {
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Local>,
    pub priority: Priority,
}

/// Fields collected by the todo form when confirming an edit
#[derive(Debug, Clone, PartialEq)]
pub struct TodoUpdate {
    pub id: String,
    pub title: String,
    pub description: String,
    pub due_date: DateTime<Local>,
    pub priority: Priority,
}

/// Generate a fresh opaque todo id
pub fn new_todo_id() -> String {
    Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_priority_cycle() {
        assert_eq!(Priority::Low.next(), Priority::Medium);
        assert_eq!(Priority::Medium.next(), Priority::High);
        assert_eq!(Priority::High.next(), Priority::Low);
    }

    #[test]
    fn test_priority_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"high\"");
        assert_eq!(
            serde_json::from_str::<Priority>("\"medium\"").unwrap(),
            Priority::Medium
        );
    }

    #[test]
    fn test_todo_uses_stored_field_names() {
        let todo = Todo {
            id: new_todo_id(),
            title: "Water plants".to_string(),
            description: String::new(),
            due_date: Local.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
            priority: Priority::Low,
            project: "Home".to_string(),
        };

        let value = serde_json::to_value(&todo).unwrap();
        assert!(value.get("dueDate").is_some());
        assert!(value.get("due_date").is_none());
        assert_eq!(value["priority"], "low");
    }

    #[test]
    fn test_new_todo_ids_are_unique() {
        assert_ne!(new_todo_id(), new_todo_id());
    }
}

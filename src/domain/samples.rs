use super::todo::{new_todo_id, Priority, Todo};
use chrono::{Duration, Local};

/// Default project names, restored whenever the project list would be empty
pub fn project_samples() -> Vec<String> {
    vec!["Default 1".to_string(), "Default 2".to_string()]
}

/// Fixed set of five sample todos shown when storage holds none, spread
/// across the first two project names. Sample todos are discarded wholesale
/// on the first real creation and are never persisted.
pub fn todo_samples(projects: &[String]) -> Vec<Todo> {
    let first = projects.first().map(String::as_str).unwrap_or("Default 1");
    let second = projects.get(1).map(String::as_str).unwrap_or(first);
    let now = Local::now();

    vec![
        Todo {
            id: new_todo_id(),
            project: first.to_string(),
            title: "Todo Sample #1".to_string(),
            description: "Sed consectetur adipiscing elit, sed do eiusmod.".to_string(),
            due_date: now + Duration::hours(2),
            priority: Priority::High,
        },
        Todo {
            id: new_todo_id(),
            project: first.to_string(),
            title: "Todo Sample #2".to_string(),
            description: "Duis aute irure dolor in reprehenderit in voluptate velit esse cillum \
                          dolore eu fugiat nulla pariatur. Excepteur sint occaecat cupidatat non \
                          proident, sunt in culpa qui officia deserunt mollit anim id est laborum."
                .to_string(),
            due_date: now + Duration::hours(4),
            priority: Priority::Medium,
        },
        Todo {
            id: new_todo_id(),
            project: first.to_string(),
            title: "Todo Sample #3".to_string(),
            description: "Sed ut perspiciatis unde omnis iste natus error sit voluptatem \
                          accusantium doloremque laudantium"
                .to_string(),
            due_date: now + Duration::hours(6),
            priority: Priority::Low,
        },
        Todo {
            id: new_todo_id(),
            project: second.to_string(),
            title: "Todo Sample #4".to_string(),
            description: "Sed consectetur adipiscing elit, sed do eiusmod.".to_string(),
            due_date: now + Duration::hours(2),
            priority: Priority::High,
        },
        Todo {
            id: new_todo_id(),
            project: second.to_string(),
            title: "Todo Sample #5".to_string(),
            description: "Sed ut perspiciatis unde omnis iste natus error sit voluptatem \
                          accusantium doloremque laudantium"
                .to_string(),
            due_date: now + Duration::hours(4),
            priority: Priority::Low,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_samples_pair() {
        assert_eq!(project_samples(), vec!["Default 1", "Default 2"]);
    }

    #[test]
    fn test_todo_samples_cover_both_projects() {
        let projects = project_samples();
        let todos = todo_samples(&projects);

        assert_eq!(todos.len(), 5);
        assert_eq!(todos.iter().filter(|t| t.project == projects[0]).count(), 3);
        assert_eq!(todos.iter().filter(|t| t.project == projects[1]).count(), 2);
    }

    #[test]
    fn test_todo_samples_with_single_stored_project() {
        let projects = vec!["Only".to_string()];
        let todos = todo_samples(&projects);

        assert!(todos.iter().all(|t| t.project == "Only"));
    }
}

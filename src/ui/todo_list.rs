use crate::app::App;
use crate::domain::Todo;
use crate::ui::styles::{
    border_style, default_style, hint_style, overdue_style, priority_style, selected_style,
    title_style,
};
use chrono::Local;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the todo list for the active project
pub fn render_todo_list(f: &mut Frame, app: &App, area: Rect) {
    let todos = app.visible_todos();

    let items: Vec<ListItem> = if todos.is_empty() {
        vec![ListItem::new(Line::raw(
            "  No todos here yet. Press n to add one.",
        ))
        .style(hint_style())]
    } else {
        todos
            .iter()
            .enumerate()
            .map(|(idx, todo)| {
                let line = create_todo_line(todo);
                let style = if idx == app.selected_todo {
                    selected_style()
                } else {
                    default_style()
                };
                ListItem::new(line).style(style)
            })
            .collect()
    };

    let title = format!(
        " Todos — {} ({}) ",
        app.store.current_project(),
        todos.len()
    );

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(list, area);
}

/// One row per todo: priority badge, title, due date, overdue marker
fn create_todo_line(todo: &Todo) -> Line<'static> {
    let mut spans = Vec::new();

    spans.push(Span::styled(
        format!("[{:<6}] ", todo.priority.label()),
        priority_style(todo.priority),
    ));
    spans.push(Span::raw(todo.title.clone()));
    spans.push(Span::raw(format!(
        "  due {}",
        todo.due_date.format("%a %b %d %H:%M")
    )));

    if todo.due_date < Local::now() {
        spans.push(Span::styled(" (overdue)".to_string(), overdue_style()));
    }

    if !todo.description.is_empty() {
        spans.push(Span::styled("  ·".to_string(), hint_style()));
    }

    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{new_todo_id, Priority};
    use chrono::Duration;

    #[test]
    fn test_create_todo_line_contains_title_and_priority() {
        let todo = Todo {
            id: new_todo_id(),
            title: "Water plants".to_string(),
            description: String::new(),
            due_date: Local::now() + Duration::hours(2),
            priority: Priority::High,
            project: "Home".to_string(),
        };

        let line_str = format!("{:?}", create_todo_line(&todo));
        assert!(line_str.contains("Water plants"));
        assert!(line_str.contains("High"));
        assert!(!line_str.contains("overdue"));
    }

    #[test]
    fn test_create_todo_line_flags_overdue() {
        let todo = Todo {
            id: new_todo_id(),
            title: "Late".to_string(),
            description: String::new(),
            due_date: Local::now() - Duration::hours(1),
            priority: Priority::Low,
            project: "Home".to_string(),
        };

        let line_str = format!("{:?}", create_todo_line(&todo));
        assert!(line_str.contains("overdue"));
    }
}

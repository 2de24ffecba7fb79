use crate::app::App;
use crate::domain::DeleteTarget;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the delete confirmation stacked over the current list
pub fn render_delete_confirm(f: &mut Frame, app: &App, area: Rect) {
    let Some(target) = app.store.pending_delete() else {
        return;
    };

    let modal_area = create_modal_area(area);

    // Clear the area behind the modal
    f.render_widget(Clear, modal_area);

    let mut lines = Vec::new();
    lines.push(Line::raw(""));
    lines.push(Line::raw("  Are you sure, you want to delete?"));
    lines.push(Line::raw(""));

    match target {
        DeleteTarget::Todo(id) => {
            if let Some(todo) = app.store.todo(id) {
                lines.push(Line::raw(format!("  Todo: {}", todo.title)));
                lines.push(Line::raw(format!(
                    "  Due {}",
                    todo.due_date.format("%a %b %d %H:%M")
                )));
            }
        }
        DeleteTarget::Project(index) => {
            if let Some(name) = app.store.project_name(*index) {
                let count = app.store.project_todo_count(name);
                lines.push(Line::raw(format!("  Project: {}", name)));
                lines.push(Line::raw(format!(
                    "  Its {} todo{} will be deleted with it.",
                    count,
                    if count == 1 { "" } else { "s" }
                )));
            }
        }
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(vec![
        Span::styled("  [y]", modal_title_style()),
        Span::raw(" Yes, Delete.  "),
        Span::styled("[n]", modal_title_style()),
        Span::raw(" No, Cancel.  "),
    ]));

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(" Confirm Delete ", modal_title_style()))
                .style(modal_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, modal_area);
}

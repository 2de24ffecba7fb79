use crate::app::{App, TodoFormState};
use crate::domain::{DESC_MAX_CHARS, TITLE_MAX_CHARS};
use crate::ui::styles::{border_style, error_style, hint_style, modal_title_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the create/edit todo form panel
pub fn render_todo_form(f: &mut Frame, app: &App, area: Rect) {
    let Some(form) = &app.todo_form else {
        return;
    };

    let mut lines = Vec::new();
    lines.push(Line::raw(""));

    push_text_field(
        &mut lines,
        form,
        0,
        &format!("Title ({}/{})", form.title.chars().count(), TITLE_MAX_CHARS),
        &form.title,
        form.title_error.as_deref(),
    );
    push_text_field(
        &mut lines,
        form,
        1,
        &format!(
            "Description ({}/{})",
            form.description.chars().count(),
            DESC_MAX_CHARS
        ),
        &form.description,
        None,
    );
    push_text_field(
        &mut lines,
        form,
        2,
        "Due Date (YYYY-MM-DD HH:MM)",
        &form.due_date,
        form.due_date_error.as_deref(),
    );

    // Priority cycles instead of taking typed input
    let priority_label = if form.editing_field == 3 {
        "Priority: (editing, Space to change)"
    } else {
        "Priority:"
    };
    lines.push(Line::raw(priority_label.to_string()));
    lines.push(Line::from(vec![
        Span::raw("> "),
        Span::styled(
            format!("‹ {} ›", form.priority.label()),
            modal_title_style(),
        ),
    ]));
    lines.push(Line::raw(""));

    lines.push(Line::styled(
        "Tab to switch fields  ·  Enter to submit  ·  Esc to cancel",
        hint_style(),
    ));

    let title = if form.editing_id.is_some() {
        " Edit Todo "
    } else {
        " New Todo "
    };

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(title, title_style())),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

/// One labelled text field with a cursor on the active one and an optional
/// inline error underneath
fn push_text_field(
    lines: &mut Vec<Line<'static>>,
    form: &TodoFormState,
    field: usize,
    label: &str,
    value: &str,
    error: Option<&str>,
) {
    let label = if form.editing_field == field {
        format!("{} (editing)", label)
    } else {
        label.to_string()
    };
    lines.push(Line::raw(label));

    lines.push(Line::from(vec![
        Span::raw("> "),
        Span::styled(value.to_string(), modal_title_style()),
        if form.editing_field == field {
            Span::styled("█", modal_title_style())
        } else {
            Span::raw("")
        },
    ]));

    if let Some(message) = error {
        lines.push(Line::styled(format!("  {}", message), error_style()));
    }
    lines.push(Line::raw(""));
}

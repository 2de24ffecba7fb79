use crate::app::App;
use crate::domain::TITLE_MAX_CHARS;
use crate::ui::styles::{border_style, error_style, hint_style, modal_title_style, title_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the create/rename project form panel
pub fn render_project_form(f: &mut Frame, app: &App, area: Rect) {
    let Some(form) = &app.project_form else {
        return;
    };

    let mut lines = Vec::new();
    lines.push(Line::raw(""));
    lines.push(Line::raw(format!(
        "Title ({}/{})",
        form.name.chars().count(),
        TITLE_MAX_CHARS
    )));
    lines.push(Line::from(vec![
        Span::raw("> "),
        Span::styled(form.name.clone(), modal_title_style()),
        Span::styled("█", modal_title_style()),
    ]));
    if let Some(message) = &form.error {
        lines.push(Line::styled(format!("  {}", message), error_style()));
    }
    lines.push(Line::raw(""));
    lines.push(Line::styled(
        "Enter to submit  ·  Esc to cancel",
        hint_style(),
    ));

    let title = if form.editing_index.is_some() {
        " Edit Project "
    } else {
        " New Project "
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

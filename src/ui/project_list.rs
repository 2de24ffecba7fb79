use crate::app::App;
use crate::ui::styles::{
    border_style, current_project_style, default_style, selected_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the project list panel
pub fn render_project_list(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .store
        .projects()
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            let count = app.store.project_todo_count(name);
            let mut spans = vec![
                Span::raw(format!("{}  ", name)),
                Span::styled(
                    format!("({} todo{})", count, if count == 1 { "" } else { "s" }),
                    border_style(),
                ),
            ];
            if name == app.store.current_project() {
                spans.push(Span::styled("  ● current", current_project_style()));
            }

            let style = if idx == app.selected_project {
                selected_style()
            } else {
                default_style()
            };
            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();

    let title = format!(" Projects ({}) ", app.store.projects().len());

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(list, area);
}

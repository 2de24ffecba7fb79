pub mod delete_confirm;
pub mod keybindings;
pub mod layout;
pub mod project_form;
pub mod project_list;
pub mod styles;
pub mod todo_form;
pub mod todo_list;

use crate::app::App;
use crate::coordinator::Panel;
use delete_confirm::render_delete_confirm;
use keybindings::render_keybindings;
use layout::create_layout;
use project_form::render_project_form;
use project_list::render_project_list;
use ratatui::Frame;
use todo_form::render_todo_form;
use todo_list::render_todo_list;

/// Main render function - draws the active panel and any overlay
pub fn render(f: &mut Frame, app: &App) {
    let size = f.size();
    let layout = create_layout(size);

    render_keybindings(f, app, layout.hints_area);

    match app.coordinator.panel() {
        Panel::TodoList => render_todo_list(f, app, layout.content_area),
        Panel::ProjectList => render_project_list(f, app, layout.content_area),
        Panel::TodoForm => render_todo_form(f, app, layout.content_area),
        Panel::ProjectForm => render_project_form(f, app, layout.content_area),
    }

    // The delete confirmation stacks over whichever list is behind it
    if app.coordinator.delete_overlay() {
        render_delete_confirm(f, app, size);
    }
}

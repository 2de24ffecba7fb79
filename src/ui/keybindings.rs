use crate::app::App;
use crate::coordinator::Panel;
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, widgets::Paragraph, Frame};

/// Render the one-line hint bar for whatever is currently focused
pub fn render_keybindings(f: &mut Frame, app: &App, area: Rect) {
    let hints = if app.coordinator.delete_overlay() {
        " [y] delete  [n] cancel"
    } else {
        match app.coordinator.panel() {
            Panel::TodoList => {
                " [↑/↓] select  [n] new todo  [e] edit  [x] delete  [Tab] project  [l] projects  [p] new project  [q] quit"
            }
            Panel::ProjectList => {
                " [↑/↓] select  [Enter] switch  [n] new project  [e] edit  [x] delete  [l/Esc] home"
            }
            Panel::TodoForm | Panel::ProjectForm => {
                " [Tab] next field  [Enter] submit  [Esc] cancel"
            }
        }
    };

    f.render_widget(Paragraph::new(hints).style(hint_style()), area);
}

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub hints_area: Rect,
    pub content_area: Rect,
}

/// Create the main layout
/// - Top bar: keybinding hints (1 row)
/// - Rest: the active panel
pub fn create_layout(area: Rect) -> MainLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Hints bar
            Constraint::Min(0),    // Panel content
        ])
        .split(area);

    MainLayout {
        hints_area: chunks[0],
        content_area: chunks[1],
    }
}

/// Create the centered modal area for the delete confirmation
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(12),
            Constraint::Percentage(30),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout() {
        let area = Rect::new(0, 0, 100, 40);
        let layout = create_layout(area);

        assert_eq!(layout.hints_area.height, 1);
        assert_eq!(layout.content_area.height, 39);
        assert_eq!(layout.content_area.width, 100);
    }

    #[test]
    fn test_create_modal_area() {
        let area = Rect::new(0, 0, 100, 40);
        let modal = create_modal_area(area);

        assert!(modal.width < area.width);
        assert_eq!(modal.height, 12);
    }
}

/// One of the main content panels. Exactly one is visible at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    TodoList,
    ProjectList,
    TodoForm,
    ProjectForm,
}

/// Decides which panel is shown and mediates transitions between them.
/// Opening any panel silently closes whichever other panel was open. The
/// delete confirmation is an overlay that stacks over a list panel; the
/// panel to return to is recorded when the overlay opens, not re-derived
/// when it closes. No other state lives here.
#[derive(Debug)]
pub struct Coordinator {
    panel: Panel,
    delete_overlay: bool,
    return_panel: Panel,
}

impl Coordinator {
    pub fn new() -> Self {
        Self {
            panel: Panel::TodoList,
            delete_overlay: false,
            return_panel: Panel::TodoList,
        }
    }

    pub fn panel(&self) -> Panel {
        self.panel
    }

    pub fn delete_overlay(&self) -> bool {
        self.delete_overlay
    }

    /// Bring `panel` forward, replacing the current one
    pub fn open(&mut self, panel: Panel) {
        self.panel = panel;
    }

    /// Toggle the todo form: open it if closed, otherwise go back home.
    /// Returns whether the form is now open.
    pub fn toggle_todo_form(&mut self) -> bool {
        if self.panel == Panel::TodoForm {
            self.panel = Panel::TodoList;
            false
        } else {
            self.panel = Panel::TodoForm;
            true
        }
    }

    /// Toggle the project form, same shape as [`toggle_todo_form`](Self::toggle_todo_form)
    pub fn toggle_project_form(&mut self) -> bool {
        if self.panel == Panel::ProjectForm {
            self.panel = Panel::TodoList;
            false
        } else {
            self.panel = Panel::ProjectForm;
            true
        }
    }

    /// Toggle between the project list and the todo list
    pub fn toggle_projects(&mut self) {
        self.panel = if self.panel == Panel::ProjectList {
            Panel::TodoList
        } else {
            Panel::ProjectList
        };
    }

    /// Close whichever form is open and show the todo list again
    pub fn close_form(&mut self) {
        self.panel = Panel::TodoList;
    }

    /// Stack the delete confirmation over the current content, remembering
    /// which list panel to restore afterwards
    pub fn open_delete_overlay(&mut self) {
        self.return_panel = if self.panel == Panel::ProjectList {
            Panel::ProjectList
        } else {
            Panel::TodoList
        };
        self.delete_overlay = true;
    }

    /// Drop the overlay and restore the panel that was active before it
    pub fn close_delete_overlay(&mut self) {
        self.delete_overlay = false;
        self.panel = self.return_panel;
    }
}

impl Default for Coordinator {
    fn default() -> Self {
        Self::new()
    }
}

use crate::app::App;
use crate::bus::{Event, EventBus};
use crate::coordinator::Panel;
use crate::domain::{DeleteTarget, TodoUpdate};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Route a key press to the delete overlay or the active panel
pub fn handle_key(app: &mut App, bus: &EventBus<App>, key: KeyEvent) -> Result<()> {
    if app.coordinator.delete_overlay() {
        return handle_delete_overlay(app, bus, key);
    }

    match app.coordinator.panel() {
        Panel::TodoList => handle_todo_list(app, bus, key),
        Panel::ProjectList => handle_project_list(app, bus, key),
        Panel::TodoForm => handle_todo_form(app, bus, key),
        Panel::ProjectForm => handle_project_form(app, bus, key),
    }
}

/// Keys on the todo list (the home panel)
fn handle_todo_list(app: &mut App, bus: &EventBus<App>, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        KeyCode::Up => app.move_selection_up(),
        KeyCode::Down => app.move_selection_down(),
        KeyCode::Char('n') | KeyCode::Char('N') => app.toggle_todo_form(),
        KeyCode::Char('p') | KeyCode::Char('P') => app.toggle_project_form(),
        KeyCode::Char('l') | KeyCode::Char('L') => app.toggle_projects(),
        KeyCode::Tab => {
            if let Some(next) = app.next_project_name() {
                bus.publish(app, &Event::ProjectChanged(next))?;
            }
        }
        KeyCode::Char('e') | KeyCode::Char('E') => {
            let id = app.selected_visible_todo().map(|t| t.id.clone());
            if let Some(id) = id {
                bus.publish(app, &Event::EditTodoRequested(id))?;
            }
        }
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => {
            let id = app.selected_visible_todo().map(|t| t.id.clone());
            if let Some(id) = id {
                bus.publish(app, &Event::DeleteRequested(DeleteTarget::Todo(id)))?;
            }
        }
        _ => {}
    }
    Ok(())
}

/// Keys on the project list
fn handle_project_list(app: &mut App, bus: &EventBus<App>, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        KeyCode::Esc | KeyCode::Char('l') | KeyCode::Char('L') => app.toggle_projects(),
        KeyCode::Up => app.move_selection_up(),
        KeyCode::Down => app.move_selection_down(),
        KeyCode::Char('n') | KeyCode::Char('N') => app.toggle_project_form(),
        KeyCode::Enter => {
            let name = app
                .store
                .project_name(app.selected_project)
                .map(str::to_string);
            if let Some(name) = name {
                bus.publish(app, &Event::ProjectChanged(name))?;
            }
        }
        KeyCode::Char('e') | KeyCode::Char('E') => {
            let index = app.selected_project;
            bus.publish(app, &Event::EditProjectRequested(index))?;
        }
        KeyCode::Char('x') | KeyCode::Char('X') | KeyCode::Delete => {
            let index = app.selected_project;
            bus.publish(app, &Event::DeleteRequested(DeleteTarget::Project(index)))?;
        }
        _ => {}
    }
    Ok(())
}

/// Keys inside the todo form. Printable characters go to the active field;
/// the priority field cycles instead of typing.
fn handle_todo_form(app: &mut App, bus: &EventBus<App>, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => app.close_todo_form(),
        KeyCode::Tab => {
            if let Some(form) = app.todo_form.as_mut() {
                form.next_field();
            }
        }
        KeyCode::BackTab => {
            if let Some(form) = app.todo_form.as_mut() {
                form.prev_field();
            }
        }
        KeyCode::Backspace => {
            if let Some(form) = app.todo_form.as_mut() {
                form.backspace();
            }
        }
        KeyCode::Left | KeyCode::Right => {
            if let Some(form) = app.todo_form.as_mut() {
                if form.editing_field == 3 {
                    form.cycle_priority();
                }
            }
        }
        KeyCode::Enter => {
            let event = app.todo_form.as_mut().and_then(|form| {
                let draft = form.validate()?;
                Some(match &form.editing_id {
                    Some(id) => Event::TodoEdited(TodoUpdate {
                        id: id.clone(),
                        title: draft.title,
                        description: draft.description,
                        due_date: draft.due_date,
                        priority: draft.priority,
                    }),
                    None => Event::CreateTodo(draft),
                })
            });
            if let Some(event) = event {
                bus.publish(app, &event)?;
            }
        }
        KeyCode::Char(c) => {
            if let Some(form) = app.todo_form.as_mut() {
                if form.editing_field == 3 {
                    if c == ' ' {
                        form.cycle_priority();
                    }
                } else {
                    form.add_char(c);
                }
            }
        }
        _ => {}
    }
    Ok(())
}

/// Keys inside the project form
fn handle_project_form(app: &mut App, bus: &EventBus<App>, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => app.close_project_form(),
        KeyCode::Backspace => {
            if let Some(form) = app.project_form.as_mut() {
                form.backspace();
            }
        }
        KeyCode::Enter => {
            let event = app.project_form.as_mut().and_then(|form| {
                let name = form.validate()?;
                Some(match form.editing_index {
                    Some(_) => Event::ProjectEdited(name),
                    None => Event::CreateProject(name),
                })
            });
            if let Some(event) = event {
                bus.publish(app, &event)?;
            }
        }
        KeyCode::Char(c) => {
            if let Some(form) = app.project_form.as_mut() {
                form.add_char(c);
            }
        }
        _ => {}
    }
    Ok(())
}

/// Keys while the delete confirmation is stacked over a list
fn handle_delete_overlay(app: &mut App, bus: &EventBus<App>, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
            bus.publish(app, &Event::ConfirmDelete)?;
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            bus.publish(app, &Event::CancelDelete)?;
        }
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::wire_events;
    use crate::domain::{samples, Store};
    use crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn wired_app() -> (App, EventBus<App>) {
        let projects = samples::project_samples();
        let todos = samples::todo_samples(&projects);
        let app = App::new(Store::new(projects, todos, true));
        let bus = EventBus::new();
        wire_events(&bus);
        (app, bus)
    }

    #[test]
    fn test_q_quits_from_the_todo_list() {
        let (mut app, bus) = wired_app();
        handle_key(&mut app, &bus, press(KeyCode::Char('q'))).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_tab_cycles_the_active_project() {
        let (mut app, bus) = wired_app();
        handle_key(&mut app, &bus, press(KeyCode::Tab)).unwrap();
        assert_eq!(app.store.current_project(), "Default 2");
        handle_key(&mut app, &bus, press(KeyCode::Tab)).unwrap();
        assert_eq!(app.store.current_project(), "Default 1");
    }

    #[test]
    fn test_delete_key_walks_through_the_overlay() {
        let (mut app, bus) = wired_app();
        let before = app.store.todos().len();

        handle_key(&mut app, &bus, press(KeyCode::Char('x'))).unwrap();
        assert!(app.coordinator.delete_overlay());

        handle_key(&mut app, &bus, press(KeyCode::Char('y'))).unwrap();
        assert!(!app.coordinator.delete_overlay());
        assert_eq!(app.store.todos().len(), before - 1);
    }

    #[test]
    fn test_overlay_swallows_unrelated_keys() {
        let (mut app, bus) = wired_app();
        handle_key(&mut app, &bus, press(KeyCode::Char('x'))).unwrap();

        handle_key(&mut app, &bus, press(KeyCode::Char('q'))).unwrap();
        assert!(!app.should_quit);
        assert!(app.coordinator.delete_overlay());
    }

    #[test]
    fn test_form_submission_creates_a_todo() {
        let (mut app, bus) = wired_app();
        handle_key(&mut app, &bus, press(KeyCode::Char('n'))).unwrap();
        for c in "Buy milk".chars() {
            handle_key(&mut app, &bus, press(KeyCode::Char(c))).unwrap();
        }
        handle_key(&mut app, &bus, press(KeyCode::Enter)).unwrap();

        assert_eq!(app.store.todos().len(), 1);
        assert_eq!(app.store.todos()[0].title, "Buy milk");
        assert_eq!(app.coordinator.panel(), Panel::TodoList);
    }

    #[test]
    fn test_invalid_form_submission_stays_open() {
        let (mut app, bus) = wired_app();
        handle_key(&mut app, &bus, press(KeyCode::Char('n'))).unwrap();
        handle_key(&mut app, &bus, press(KeyCode::Enter)).unwrap();

        assert_eq!(app.coordinator.panel(), Panel::TodoForm);
        assert!(app.todo_form.as_ref().unwrap().title_error.is_some());
    }

    #[test]
    fn test_project_rename_from_the_project_list() {
        let (mut app, bus) = wired_app();
        handle_key(&mut app, &bus, press(KeyCode::Char('l'))).unwrap();
        handle_key(&mut app, &bus, press(KeyCode::Char('e'))).unwrap();
        assert_eq!(app.coordinator.panel(), Panel::ProjectForm);

        for _ in 0.."Default 1".len() {
            handle_key(&mut app, &bus, press(KeyCode::Backspace)).unwrap();
        }
        for c in "Chores".chars() {
            handle_key(&mut app, &bus, press(KeyCode::Char(c))).unwrap();
        }
        handle_key(&mut app, &bus, press(KeyCode::Enter)).unwrap();

        assert_eq!(app.store.projects()[0], "Chores");
        assert!(app.store.todos().iter().any(|t| t.project == "Chores"));
    }
}

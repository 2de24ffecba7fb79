//! Named-event publish/subscribe registry used for all cross-component
//! communication. Delivery is synchronous and single-threaded: handlers for
//! one kind run in subscription order, and a publish from inside a handler
//! runs depth-first to completion before the outer publish continues.
//!
//! Handlers are stored as `Rc<RefCell<..>>` for single-threaded shared
//! ownership; the registry snapshot taken at publish time is what gets
//! invoked, so handlers added during a publish first run on the next one.

use crate::domain::{DeleteTarget, TodoDraft, TodoUpdate};
use anyhow::Result;
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

/// Events carried by the bus, with their typed payloads
#[derive(Debug, Clone)]
pub enum Event {
    /// Todo form submitted for a new todo
    CreateTodo(TodoDraft),
    /// User asked to edit the todo with this id
    EditTodoRequested(String),
    /// Todo form submitted for an in-flight edit
    TodoEdited(TodoUpdate),
    /// User asked to delete a project (by index) or a todo (by id)
    DeleteRequested(DeleteTarget),
    /// Delete confirmation accepted
    ConfirmDelete,
    /// Delete confirmation dismissed
    CancelDelete,
    /// Project form submitted for a new project
    CreateProject(String),
    /// Another project was picked as the active filter
    ProjectChanged(String),
    /// User asked to edit the project at this index
    EditProjectRequested(usize),
    /// Project form submitted for an in-flight rename
    ProjectEdited(String),
}

/// Subscription key: the discriminant of [`Event`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    CreateTodo,
    EditTodoRequested,
    TodoEdited,
    DeleteRequested,
    ConfirmDelete,
    CancelDelete,
    CreateProject,
    ProjectChanged,
    EditProjectRequested,
    ProjectEdited,
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::CreateTodo(_) => EventKind::CreateTodo,
            Event::EditTodoRequested(_) => EventKind::EditTodoRequested,
            Event::TodoEdited(_) => EventKind::TodoEdited,
            Event::DeleteRequested(_) => EventKind::DeleteRequested,
            Event::ConfirmDelete => EventKind::ConfirmDelete,
            Event::CancelDelete => EventKind::CancelDelete,
            Event::CreateProject(_) => EventKind::CreateProject,
            Event::ProjectChanged(_) => EventKind::ProjectChanged,
            Event::EditProjectRequested(_) => EventKind::EditProjectRequested,
            Event::ProjectEdited(_) => EventKind::ProjectEdited,
        }
    }
}

/// Identifies one subscription so it can be removed again
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandlerToken(u64);

type Handler<C> = Rc<RefCell<dyn FnMut(&mut C, &Event, &EventBus<C>) -> Result<()>>>;

struct Entry<C> {
    token: HandlerToken,
    handler: Handler<C>,
}

impl<C> Clone for Entry<C> {
    fn clone(&self) -> Self {
        Entry {
            token: self.token,
            handler: Rc::clone(&self.handler),
        }
    }
}

/// The registry. `C` is the shared context threaded through every handler
/// (the application state); the bus itself is passed back in so handlers can
/// publish follow-up events re-entrantly.
pub struct EventBus<C> {
    registry: RefCell<HashMap<EventKind, Vec<Entry<C>>>>,
    next_token: Cell<u64>,
}

impl<C> EventBus<C> {
    pub fn new() -> Self {
        Self {
            registry: RefCell::new(HashMap::new()),
            next_token: Cell::new(0),
        }
    }

    /// Register `handler` for `kind`. Handlers fire in registration order.
    pub fn subscribe<F>(&self, kind: EventKind, handler: F) -> HandlerToken
    where
        F: FnMut(&mut C, &Event, &EventBus<C>) -> Result<()> + 'static,
    {
        let token = HandlerToken(self.next_token.get());
        self.next_token.set(token.0 + 1);
        self.registry
            .borrow_mut()
            .entry(kind)
            .or_default()
            .push(Entry {
                token,
                handler: Rc::new(RefCell::new(handler)),
            });
        token
    }

    /// Remove the subscription identified by `token`. Removing a token that
    /// is not subscribed (any more) is a no-op.
    pub fn unsubscribe(&self, kind: EventKind, token: HandlerToken) {
        if let Some(entries) = self.registry.borrow_mut().get_mut(&kind) {
            entries.retain(|e| e.token != token);
        }
    }

    /// Deliver `event` to every handler subscribed to its kind at this
    /// moment, in registration order. The first handler error aborts the
    /// remaining handlers and propagates to the publisher.
    pub fn publish(&self, ctx: &mut C, event: &Event) -> Result<()> {
        let snapshot: Vec<Entry<C>> = self
            .registry
            .borrow()
            .get(&event.kind())
            .cloned()
            .unwrap_or_default();

        for entry in snapshot {
            (&mut *entry.handler.borrow_mut())(ctx, event, self)?;
        }
        Ok(())
    }
}

impl<C> Default for EventBus<C> {
    fn default() -> Self {
        Self::new()
    }
}

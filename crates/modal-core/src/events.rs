//! Lifecycle events and the publisher port.

use std::cell::RefCell;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LifecycleKind {
    Show,
    Hide,
}

/// A `cssmodal:show` / `cssmodal:hide` notification. Fire-and-forget.
#[derive(Clone, Debug, PartialEq)]
pub struct LifecycleEvent<E> {
    pub kind: LifecycleKind,
    pub name: String,
    pub target: E,
}

/// Broadcasts lifecycle events to whoever listens on the document.
///
/// Implementations run listeners synchronously: by the time `publish`
/// returns every listener has seen the event. A host that cannot build
/// events at all should degrade to doing nothing.
pub trait EventPublisher<E> {
    fn publish(&self, event: &LifecycleEvent<E>);
}

/// Publisher for hosts without event support.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullPublisher;

impl<E> EventPublisher<E> for NullPublisher {
    fn publish(&self, event: &LifecycleEvent<E>) {
        log::debug!("[events] no event support; dropped {}", event.name);
    }
}

/// Keeps every published event in order.
#[derive(Debug)]
pub struct RecordingPublisher<E> {
    events: RefCell<Vec<LifecycleEvent<E>>>,
}

impl<E> Default for RecordingPublisher<E> {
    fn default() -> Self {
        Self {
            events: RefCell::new(Vec::new()),
        }
    }
}

impl<E: Clone> RecordingPublisher<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<LifecycleEvent<E>> {
        self.events.borrow().clone()
    }

    pub fn take(&self) -> Vec<LifecycleEvent<E>> {
        std::mem::take(&mut *self.events.borrow_mut())
    }

    pub fn kinds(&self) -> Vec<LifecycleKind> {
        self.events.borrow().iter().map(|e| e.kind).collect()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }
}

impl<E: Clone> EventPublisher<E> for RecordingPublisher<E> {
    fn publish(&self, event: &LifecycleEvent<E>) {
        self.events.borrow_mut().push(event.clone());
    }
}

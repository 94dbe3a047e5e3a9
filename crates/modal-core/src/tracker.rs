//! The visibility state machine.
//!
//! Two phases, `Idle` and `Active(element)`. The tracker owns the
//! [`ActivationState`] and drives classes, focus and lifecycle events on
//! each transition. It does not stop a caller from activating a second
//! element without deactivating the first; [`crate::navigation`] always
//! deactivates first, which is what keeps at most one element marked.

use crate::classes;
use crate::config::ModalConfig;
use crate::events::{EventPublisher, LifecycleEvent, LifecycleKind};
use crate::focus;
use crate::host::DocumentHost;

#[derive(Clone, Debug, PartialEq)]
pub struct ActivationState<E> {
    pub active: Option<E>,
    /// Focus target captured on the last activation. Stale once used.
    pub last_focused: Option<E>,
}

impl<E> Default for ActivationState<E> {
    fn default() -> Self {
        Self {
            active: None,
            last_focused: None,
        }
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum ModalPhase<'a, E> {
    Idle,
    Active(&'a E),
}

#[derive(Debug)]
pub struct ModalTracker<E> {
    state: ActivationState<E>,
    config: ModalConfig,
}

impl<E: Clone + PartialEq> ModalTracker<E> {
    pub fn new(config: ModalConfig) -> Self {
        Self {
            state: ActivationState::default(),
            config,
        }
    }

    pub fn config(&self) -> &ModalConfig {
        &self.config
    }

    pub fn state(&self) -> &ActivationState<E> {
        &self.state
    }

    pub fn active(&self) -> Option<&E> {
        self.state.active.as_ref()
    }

    pub fn last_focused(&self) -> Option<&E> {
        self.state.last_focused.as_ref()
    }

    pub fn phase(&self) -> ModalPhase<'_, E> {
        match self.state.active.as_ref() {
            Some(el) => ModalPhase::Active(el),
            None => ModalPhase::Idle,
        }
    }

    /// Mark `element` active, focus it and publish the show event.
    pub fn activate<H, P>(&mut self, host: &H, publisher: &P, element: E)
    where
        H: DocumentHost<Element = E>,
        P: EventPublisher<E>,
    {
        classes::add_class(host, Some(&element), &self.config.active_class);
        self.state.active = Some(element.clone());
        focus::set_focus(&mut self.state, host);
        log::debug!("[modal] activated #{}", host.element_id(&element));
        publisher.publish(&LifecycleEvent {
            kind: LifecycleKind::Show,
            name: self.config.show_event.clone(),
            target: element,
        });
    }

    /// Unmark the active element, publish the hide event and restore focus.
    /// Does nothing while idle.
    pub fn deactivate<H, P>(&mut self, host: &H, publisher: &P)
    where
        H: DocumentHost<Element = E>,
        P: EventPublisher<E>,
    {
        let Some(outgoing) = self.state.active.clone() else {
            log::debug!("[modal] deactivate while idle");
            return;
        };
        classes::remove_class(host, Some(&outgoing), &self.config.active_class);
        log::debug!("[modal] deactivated #{}", host.element_id(&outgoing));
        publisher.publish(&LifecycleEvent {
            kind: LifecycleKind::Hide,
            name: self.config.hide_event.clone(),
            target: outgoing,
        });
        focus::remove_focus(&self.state, host);
        self.state.active = None;
    }
}

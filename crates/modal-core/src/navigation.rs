//! Fragment-driven controller.
//!
//! Translates the location fragment into tracker transitions and turns the
//! escape key into a fragment write. The host owns event registration and
//! calls [`NavigationSync::on_load`], [`NavigationSync::on_fragment_change`]
//! and [`NavigationSync::on_key_up`] from its listeners.
//!
//! Transitions publish events synchronously. A listener that writes the
//! fragment gets its change delivered by the host after the current handler
//! returns; a listener that reaches back into the controller directly while
//! a transition runs is not guarded against here.

use crate::classes;
use crate::config::ModalConfig;
use crate::events::EventPublisher;
use crate::fragment::{fragment_from_hash, is_sentinel};
use crate::host::DocumentHost;
use crate::keys::{KeyOutcome, KeyPress};
use crate::tracker::{ModalPhase, ModalTracker};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Sentinel or unknown id: scroll lock dropped, active modal (if any) hidden.
    Cleared,
    /// The element with this id is now the active modal.
    Activated(String),
    /// The id names an element that is not a modal; nothing changed.
    Ignored(String),
}

pub struct NavigationSync<H: DocumentHost, P> {
    host: H,
    publisher: P,
    tracker: ModalTracker<H::Element>,
}

impl<H, P> NavigationSync<H, P>
where
    H: DocumentHost,
    P: EventPublisher<H::Element>,
{
    pub fn new(host: H, publisher: P, config: ModalConfig) -> Self {
        Self {
            host,
            publisher,
            tracker: ModalTracker::new(config),
        }
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn publisher(&self) -> &P {
        &self.publisher
    }

    pub fn tracker(&self) -> &ModalTracker<H::Element> {
        &self.tracker
    }

    pub fn config(&self) -> &ModalConfig {
        self.tracker.config()
    }

    pub fn phase(&self) -> ModalPhase<'_, H::Element> {
        self.tracker.phase()
    }

    /// Current fragment without the leading `#`.
    pub fn current_fragment(&self) -> String {
        fragment_from_hash(&self.host.fragment()).to_string()
    }

    /// Id of the active modal, if one is shown.
    pub fn active_id(&self) -> Option<String> {
        self.tracker.active().map(|el| self.host.element_id(el))
    }

    pub fn on_load(&mut self) -> Resolution {
        let hash = self.host.fragment();
        self.resolve(&hash)
    }

    pub fn on_fragment_change(&mut self) -> Resolution {
        let hash = self.host.fragment();
        self.resolve(&hash)
    }

    /// Resolve a raw location hash. Exactly one leading `#` is stripped, so
    /// `##login` names the id `#login`, not `login`.
    pub fn resolve(&mut self, hash: &str) -> Resolution {
        let fragment = fragment_from_hash(hash);
        let target = if is_sentinel(fragment, &self.config().sentinel) {
            None
        } else {
            self.host.element_by_id(fragment)
        };

        let Some(element) = target else {
            log::debug!("[nav] fragment {:?} selects no modal", fragment);
            self.clear();
            return Resolution::Cleared;
        };

        let is_modal = self
            .host
            .first_element_child(&element)
            .map(|child| classes::has_class(&self.host, &child, &self.config().inner_class))
            .unwrap_or(false);
        if !is_modal {
            log::debug!("[nav] #{} is not a modal; ignoring", fragment);
            return Resolution::Ignored(fragment.to_string());
        }

        let root = self.host.root();
        let overlay_class = self.config().overlay_class.clone();
        classes::add_class(&self.host, root.as_ref(), &overlay_class);
        // Re-navigating to the active modal hides and shows it again.
        self.tracker.deactivate(&self.host, &self.publisher);
        self.tracker.activate(&self.host, &self.publisher, element);
        log::info!("[nav] showing #{}", fragment);
        Resolution::Activated(fragment.to_string())
    }

    /// Escape dismisses the active modal by writing the sentinel fragment.
    pub fn on_key_up(&mut self, key: &KeyPress) -> KeyOutcome {
        if !key.is_escape() {
            return KeyOutcome::default();
        }
        let fragment = self.current_fragment();
        if is_sentinel(&fragment, &self.config().sentinel) {
            return KeyOutcome::default();
        }

        let sentinel = self.config().sentinel.clone();
        self.host.set_fragment(&sentinel);
        log::debug!("[keys] escape on #{}; fragment set to {:?}", fragment, sentinel);

        if self.tracker.last_focused().is_some() {
            crate::focus::remove_focus(self.tracker.state(), &self.host);
            KeyOutcome {
                dismissed: true,
                prevent_default: false,
            }
        } else {
            KeyOutcome {
                dismissed: true,
                prevent_default: true,
            }
        }
    }

    /// Show the modal with `id` by routing through the fragment.
    pub fn open(&self, id: &str) {
        self.host.set_fragment(id);
    }

    /// Dismiss whatever is shown by writing the sentinel fragment.
    pub fn close(&self) {
        self.host.set_fragment(&self.config().sentinel);
    }

    fn clear(&mut self) {
        let root = self.host.root();
        let overlay_class = self.config().overlay_class.clone();
        classes::remove_class(&self.host, root.as_ref(), &overlay_class);
        self.tracker.deactivate(&self.host, &self.publisher);
    }
}

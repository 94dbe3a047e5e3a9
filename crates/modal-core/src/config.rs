//! Runtime configuration for the modal controller.
//!
//! Every field defaults to the matching constant in [`crate::constants`].

use crate::constants::{
    ACTIVE_CLASS, HIDE_EVENT, INNER_CLASS, OVERLAY_CLASS, SENTINEL_FRAGMENT, SHOW_EVENT,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModalConfig {
    pub active_class: String,
    pub overlay_class: String,
    pub inner_class: String,
    pub sentinel: String,
    pub show_event: String,
    pub hide_event: String,
}

impl Default for ModalConfig {
    fn default() -> Self {
        Self {
            active_class: ACTIVE_CLASS.to_string(),
            overlay_class: OVERLAY_CLASS.to_string(),
            inner_class: INNER_CLASS.to_string(),
            sentinel: SENTINEL_FRAGMENT.to_string(),
            show_event: SHOW_EVENT.to_string(),
            hide_event: HIDE_EVENT.to_string(),
        }
    }
}

impl ModalConfig {
    pub fn with_active_class(mut self, name: impl Into<String>) -> Self {
        self.active_class = name.into();
        self
    }

    pub fn with_overlay_class(mut self, name: impl Into<String>) -> Self {
        self.overlay_class = name.into();
        self
    }

    pub fn with_inner_class(mut self, name: impl Into<String>) -> Self {
        self.inner_class = name.into();
        self
    }

    /// Fragment written on dismissal. `""` is always treated as a sentinel too.
    pub fn with_sentinel(mut self, value: impl Into<String>) -> Self {
        self.sentinel = value.into();
        self
    }

    pub fn with_event_names(mut self, show: impl Into<String>, hide: impl Into<String>) -> Self {
        self.show_event = show.into();
        self.hide_event = hide.into();
        self
    }
}

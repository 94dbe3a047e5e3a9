//! Keyboard focus across activation and deactivation.

use crate::host::DocumentHost;
use crate::tracker::ActivationState;

/// Remember who had focus, then focus the active modal.
///
/// The capture happens before the move so a later [`remove_focus`] returns
/// focus to the pre-activation target rather than to the modal itself.
pub fn set_focus<H: DocumentHost>(state: &mut ActivationState<H::Element>, host: &H) {
    if let Some(active) = state.active.as_ref() {
        state.last_focused = host.focused();
        host.focus(active);
    }
}

/// Give focus back to the recorded target. Leaves the record in place.
pub fn remove_focus<H: DocumentHost>(state: &ActivationState<H::Element>, host: &H) {
    match state.last_focused.as_ref() {
        Some(target) => host.focus(target),
        None => log::debug!("[modal] no recorded focus target to restore"),
    }
}

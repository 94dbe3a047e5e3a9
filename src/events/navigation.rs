use crate::dom;
use crate::error::WebError;
use crate::Controller;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn sync_with_fragment(controller: &Rc<RefCell<Controller>>, cause: &str) {
    match controller.try_borrow_mut() {
        Ok(mut c) => {
            let resolution = c.on_fragment_change();
            log::debug!("[nav] {}: {:?}", cause, resolution);
        }
        Err(_) => log::warn!("[nav] {} arrived during a transition; skipped", cause),
    }
}

/// Resolve the fragment on `load` and on every `hashchange`.
///
/// The module usually finishes instantiating after `load` has fired, so an
/// already complete document is resolved right away as well.
pub fn wire_fragment_sync(
    window: &web::Window,
    document: &web::Document,
    controller: &Rc<RefCell<Controller>>,
) -> Result<(), WebError> {
    for event in ["hashchange", "load"] {
        let controller = controller.clone();
        dom::add_listener(window, event, move |_ev: web::Event| {
            sync_with_fragment(&controller, event);
        })?;
    }
    if document.ready_state() == "complete" {
        sync_with_fragment(controller, "ready");
    }
    Ok(())
}

use crate::dom;
use crate::error::WebError;
use crate::Controller;
use modal_core::KeyPress;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn key_press(ev: &web::KeyboardEvent) -> KeyPress {
    KeyPress::new(ev.key(), ev.key_code())
}

pub fn handle_keyup(ev: &web::KeyboardEvent, controller: &Rc<RefCell<Controller>>) {
    let press = key_press(ev);
    if !press.is_escape() {
        return;
    }
    let outcome = match controller.try_borrow_mut() {
        Ok(mut c) => c.on_key_up(&press),
        Err(_) => {
            log::warn!("[keys] escape during a transition; ignored");
            return;
        }
    };
    if outcome.prevent_default {
        ev.prevent_default();
    }
}

// Escape closes the active modal by rewriting the fragment
pub fn wire_escape_keyup(
    document: &web::Document,
    controller: &Rc<RefCell<Controller>>,
) -> Result<(), WebError> {
    let controller = controller.clone();
    dom::add_listener(document, "keyup", move |ev: web::Event| {
        if let Some(kev) = ev.dyn_ref::<web::KeyboardEvent>() {
            handle_keyup(kev, &controller);
        }
    })
}

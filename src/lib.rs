#![cfg(target_arch = "wasm32")]
use anyhow::Context;
use modal_core::{ModalConfig, NavigationSync};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

mod dom;
mod error;
mod events;
mod host;
mod publish;

use error::WebError;

pub(crate) type Controller = NavigationSync<host::WebHost, publish::DomEventPublisher>;

thread_local! {
    // Handle for the exported JS API; listeners hold their own clones
    static CONTROLLER: RefCell<Option<Rc<RefCell<Controller>>>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("css-modal starting");

    init().map_err(|e| {
        log::error!("init error: {:?}", e);
        JsValue::from(js_sys::Error::new(&format!("{:#}", e)))
    })
}

fn init() -> anyhow::Result<()> {
    let (window, document) = dom::window_and_document()?;
    let controller = Rc::new(RefCell::new(NavigationSync::new(
        host::WebHost::new(window.clone(), document.clone()),
        publish::DomEventPublisher::new(document.clone()),
        ModalConfig::default(),
    )));

    CONTROLLER.with(|c| *c.borrow_mut() = Some(controller.clone()));
    events::wire_fragment_sync(&window, &document, &controller)
        .context("wiring load/hashchange")?;
    events::wire_escape_keyup(&document, &controller).context("wiring keyup")?;
    Ok(())
}

fn with_controller<R>(f: impl FnOnce(&Controller) -> R) -> Result<R, JsValue> {
    let controller = CONTROLLER
        .with(|c| c.borrow().clone())
        .ok_or(WebError::NotStarted)?;
    let guard = controller.try_borrow().map_err(|_| {
        log::warn!("[modal] API call from inside a transition rejected");
        WebError::Busy
    })?;
    Ok(f(&guard))
}

/// Show the modal with `id` by pointing the fragment at it.
#[wasm_bindgen]
pub fn open(id: &str) -> Result<(), JsValue> {
    with_controller(|c| c.open(id))
}

/// Hide the active modal by writing the `!` fragment.
#[wasm_bindgen]
pub fn close() -> Result<(), JsValue> {
    with_controller(|c| c.close())
}

#[wasm_bindgen(js_name = activeId)]
pub fn active_id() -> Result<Option<String>, JsValue> {
    with_controller(|c| c.active_id())
}

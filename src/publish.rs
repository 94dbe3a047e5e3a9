use modal_core::{EventPublisher, LifecycleEvent};
use wasm_bindgen::JsValue;
use web_sys as web;

/// Dispatches lifecycle events as bubbling, cancelable `CustomEvent`s on the document.
///
/// The element travels as `detail.modal`, and as `customData.modal` for
/// listeners written against the 1.x script.
pub struct DomEventPublisher {
    document: web::Document,
}

impl DomEventPublisher {
    pub fn new(document: web::Document) -> Self {
        Self { document }
    }
}

fn build_event(name: &str, target: &web::Element) -> Result<web::CustomEvent, JsValue> {
    let payload = js_sys::Object::new();
    js_sys::Reflect::set(&payload, &JsValue::from_str("modal"), target)?;

    let init = web::CustomEventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    init.set_detail(&payload);

    let event = web::CustomEvent::new_with_event_init_dict(name, &init)?;
    js_sys::Reflect::set(&event, &JsValue::from_str("customData"), &payload)?;
    Ok(event)
}

impl EventPublisher<web::Element> for DomEventPublisher {
    fn publish(&self, event: &LifecycleEvent<web::Element>) {
        match build_event(&event.name, &event.target) {
            Ok(ev) => {
                _ = self.document.dispatch_event(&ev);
            }
            Err(e) => log::debug!("[events] cannot construct {}: {:?}", event.name, e),
        }
    }
}

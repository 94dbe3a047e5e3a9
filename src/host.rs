use modal_core::DocumentHost;
use wasm_bindgen::JsCast;
use web_sys as web;

/// The live page behind [`DocumentHost`].
pub struct WebHost {
    window: web::Window,
    document: web::Document,
}

impl WebHost {
    pub fn new(window: web::Window, document: web::Document) -> Self {
        Self { window, document }
    }
}

impl DocumentHost for WebHost {
    type Element = web::Element;

    fn element_by_id(&self, id: &str) -> Option<web::Element> {
        self.document.get_element_by_id(id)
    }

    fn first_element_child(&self, element: &web::Element) -> Option<web::Element> {
        element.first_element_child()
    }

    fn root(&self) -> Option<web::Element> {
        self.document.document_element()
    }

    fn element_id(&self, element: &web::Element) -> String {
        element.id()
    }

    fn class_name(&self, element: &web::Element) -> String {
        element.class_name()
    }

    fn set_class_name(&self, element: &web::Element, value: &str) {
        element.set_class_name(value);
    }

    fn focused(&self) -> Option<web::Element> {
        self.document.active_element()
    }

    fn focus(&self, element: &web::Element) {
        match element.dyn_ref::<web::HtmlElement>() {
            Some(el) => {
                if let Err(e) = el.focus() {
                    log::debug!("[modal] focus #{} failed: {:?}", element.id(), e);
                }
            }
            // SVG and friends
            None => log::debug!("[modal] #{} is not focusable", element.id()),
        }
    }

    fn fragment(&self) -> String {
        self.window.location().hash().unwrap_or_default()
    }

    fn set_fragment(&self, value: &str) {
        if let Err(e) = self.window.location().set_hash(value) {
            log::warn!("[nav] could not set fragment {:?}: {:?}", value, e);
        }
    }
}

use crate::error::WebError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_and_document() -> Result<(web::Window, web::Document), WebError> {
    let window = web::window().ok_or(WebError::NoWindow)?;
    let document = window.document().ok_or(WebError::NoDocument)?;
    Ok((window, document))
}

/// Register `handler` for `event` on `target` for the lifetime of the page.
pub fn add_listener(
    target: &web::EventTarget,
    event: &str,
    handler: impl FnMut(web::Event) + 'static,
) -> Result<(), WebError> {
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| WebError::Listener {
            event: event.to_string(),
            reason: format!("{:?}", e),
        })?;
    closure.forget();
    Ok(())
}

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum WebError {
    #[error("no window")]
    NoWindow,
    #[error("no document")]
    NoDocument,
    #[error("failed to register `{event}` listener: {reason}")]
    Listener { event: String, reason: String },
    #[error("css-modal has not been started")]
    NotStarted,
    #[error("css-modal is mid-transition; call again from outside cssmodal:* listeners")]
    Busy,
}

impl From<WebError> for JsValue {
    fn from(e: WebError) -> Self {
        js_sys::Error::new(&e.to_string()).into()
    }
}

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};

/// Failures of the DOM layer. Handlers log these and move on.
#[derive(Debug, Error)]
pub enum UiError {
    #[error("no global `window`")]
    NoWindow,
    #[error("no `document` on window")]
    NoDocument,
    #[error("missing element `{0}`")]
    MissingElement(String),
    #[error("clipboard write failed: {0}")]
    Clipboard(String),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<JsValue> for UiError {
    fn from(value: JsValue) -> Self {
        UiError::Js(js_error_message(value, "unknown error"))
    }
}

/// Best-effort message extraction from a thrown JS value.
pub fn js_error_message(err: JsValue, fallback: &str) -> String {
    if let Some(message) = err.as_string() {
        return message;
    }
    if let Ok(error) = err.dyn_into::<js_sys::Error>() {
        return error.message().into();
    }
    fallback.to_string()
}

pub type UiResult<T> = Result<T, UiError>;

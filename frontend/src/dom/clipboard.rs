use js_sys::{Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlTextAreaElement;

use super::{document, log_failure, set_style, window};
use crate::error::{js_error_message, UiError, UiResult};

/// Copies `text`, preferring the async Clipboard API in secure contexts and
/// falling back to a hidden textarea plus `execCommand("copy")`.
pub async fn copy_text(text: &str) -> UiResult<()> {
    let window = window()?;
    let navigator = window.navigator();
    let has_clipboard = Reflect::has(&navigator, &JsValue::from_str("clipboard")).unwrap_or(false);
    if has_clipboard && window.is_secure_context() {
        return JsFuture::from(navigator.clipboard().write_text(text))
            .await
            .map(|_| ())
            .map_err(|err| UiError::Clipboard(js_error_message(err, "write rejected")));
    }
    legacy_copy(text)
}

fn legacy_copy(text: &str) -> UiResult<()> {
    let document = document()?;
    let body = document
        .body()
        .ok_or_else(|| UiError::MissingElement("body".into()))?;
    let textarea = document
        .create_element("textarea")?
        .dyn_into::<HtmlTextAreaElement>()
        .map_err(|_| UiError::Js("created element is not a textarea".into()))?;
    textarea.set_value(text);
    set_style(&textarea, "position", "fixed")?;
    set_style(&textarea, "left", "-999999px")?;
    set_style(&textarea, "top", "-999999px")?;
    body.append_child(&textarea)?;
    log_failure("copy buffer focus", textarea.focus());
    textarea.select();

    let copied = exec_copy(&document);
    textarea.remove();
    match copied {
        Ok(true) => Ok(()),
        Ok(false) => Err(UiError::Clipboard("execCommand refused".into())),
        Err(err) => Err(UiError::Clipboard(js_error_message(err, "execCommand threw"))),
    }
}

fn exec_copy(document: &web_sys::Document) -> Result<bool, JsValue> {
    let exec = Reflect::get(document.as_ref(), &JsValue::from_str("execCommand"))?;
    if !exec.is_function() {
        return Ok(false);
    }
    let func: Function = exec.dyn_into()?;
    let result = func.call1(document.as_ref(), &JsValue::from_str("copy"))?;
    Ok(result.as_bool().unwrap_or(false))
}

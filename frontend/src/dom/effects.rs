use js_sys::{Array, Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};

use super::{document, listen, log_failure, query_all, set_style, window};
use crate::error::{UiError, UiResult};
use crate::theme::INJECTED_STYLES;

pub fn inject_styles() -> UiResult<()> {
    let document = document()?;
    let head = document
        .head()
        .ok_or_else(|| UiError::MissingElement("head".into()))?;
    let style = document.create_element("style")?;
    style.set_text_content(Some(INJECTED_STYLES));
    head.append_child(&style)?;
    Ok(())
}

pub fn init_card_hover() -> UiResult<()> {
    for card in query_all(".luxury-property-card")? {
        let target = card.clone();
        listen(&card, "mouseenter", move |_| {
            log_failure(
                "card hover",
                set_style(&target, "transform", "translateY(-10px) scale(1.02)"),
            );
        })?;
        let target = card.clone();
        listen(&card, "mouseleave", move |_| {
            log_failure("card unhover", set_style(&target, "transform", "translateY(0) scale(1)"));
        })?;
    }
    Ok(())
}

pub fn init_page_loaded() -> UiResult<()> {
    let window = window()?;
    listen(&window, "load", |_| {
        if let Some(body) = document().ok().and_then(|d| d.body()) {
            log_failure("page-loaded class", body.class_list().add_1("page-loaded"));
        }
        tracing::info!("Maeva Investimentos - All resources loaded");
    })
}

/// Bootstrap tooltips, when the Bootstrap bundle is on the page.
pub fn init_tooltips() -> UiResult<()> {
    let window = window()?;
    let bootstrap = Reflect::get(&window, &JsValue::from_str("bootstrap"))?;
    if bootstrap.is_undefined() {
        tracing::debug!("bootstrap not loaded; tooltips skipped");
        return Ok(());
    }
    let constructor: Function = Reflect::get(&bootstrap, &JsValue::from_str("Tooltip"))?.dyn_into()?;
    for trigger in query_all("[data-bs-toggle=\"tooltip\"]")? {
        Reflect::construct(&constructor, &Array::of1(&trigger))?;
    }
    Ok(())
}

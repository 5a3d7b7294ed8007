//! Enhancements over the server-rendered markup.
//!
//! Each submodule wires its listeners once at start. A missing element turns
//! the matching enhancement into a no-op rather than an error.

pub mod clipboard;
pub mod effects;
pub mod filters;
pub mod forms;
pub mod navigation;
pub mod reveal;
pub mod share;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, EventTarget, HtmlElement, NodeList, Window};

use crate::config::SiteConfig;
use crate::error::{UiError, UiResult};
use crate::overlays::Overlays;

pub fn window() -> UiResult<Window> {
    web_sys::window().ok_or(UiError::NoWindow)
}

pub fn document() -> UiResult<Document> {
    window()?.document().ok_or(UiError::NoDocument)
}

/// Current `location.href`, or empty when unavailable.
pub fn current_href() -> String {
    window()
        .and_then(|w| w.location().href().map_err(UiError::from))
        .unwrap_or_default()
}

pub fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn query_all(selector: &str) -> UiResult<Vec<Element>> {
    Ok(elements(document()?.query_selector_all(selector)?))
}

pub fn query(selector: &str) -> UiResult<Option<Element>> {
    Ok(document()?.query_selector(selector)?)
}

pub fn remove_all(selector: &str) -> UiResult<()> {
    for el in query_all(selector)? {
        el.remove();
    }
    Ok(())
}

/// Adds a listener that lives as long as the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> UiResult<()>
where
    F: FnMut(web_sys::Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web_sys::Event)>);
    target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

/// Publishes a zero-argument function on `window` for inline `onclick=` markup.
pub fn expose_global<F>(name: &str, handler: F) -> UiResult<()>
where
    F: FnMut() + 'static,
{
    let window = window()?;
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
    js_sys::Reflect::set(&window, &JsValue::from_str(name), closure.as_ref())?;
    closure.forget();
    Ok(())
}

pub fn set_style(el: &Element, property: &str, value: &str) -> UiResult<()> {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        html.style().set_property(property, value)?;
    }
    Ok(())
}

/// Cosmetic writes that may fail without consequence; logged, not raised.
pub fn log_failure<E: Into<UiError>>(what: &str, result: Result<(), E>) {
    if let Err(err) = result {
        tracing::debug!("{what} failed: {}", err.into());
    }
}

pub fn open_in_new_context(url: &str) -> UiResult<()> {
    window()?.open_with_url_and_target(url, "_blank")?;
    Ok(())
}

/// Wires every enhancement. Failures are logged per enhancement so one
/// broken section never blocks the rest.
pub fn enhance_page(config: &SiteConfig, overlays: Overlays) {
    let steps: [(&str, UiResult<()>); 8] = [
        ("styles", effects::inject_styles()),
        ("navigation", navigation::init(config, overlays)),
        ("sharing", share::init(overlays)),
        ("animations", reveal::init_animations(config)),
        ("forms", forms::init()),
        ("lazy images", reveal::init_lazy_images()),
        ("tooltips", effects::init_tooltips()),
        ("filters", filters::init()),
    ];
    for (name, result) in steps {
        if let Err(err) = result {
            tracing::warn!("{name} enhancement skipped: {err}");
        }
    }
    if let Err(err) = effects::init_card_hover().and_then(|_| effects::init_page_loaded()) {
        tracing::warn!("page effects skipped: {err}");
    }
    tracing::info!("Maeva Investimentos - Website initialized successfully");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logged_failures_do_not_propagate() {
        log_failure("missing", Err::<(), _>(UiError::MissingElement("#x".into())));
        log_failure("ok", Ok::<(), UiError>(()));
    }
}

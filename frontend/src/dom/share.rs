use js_sys::{Function, Object, Promise, Reflect};
use leptos::task::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Navigator;

use super::{current_href, document, listen, query, query_all, window};
use crate::error::{js_error_message, UiError, UiResult};
use crate::overlays::Overlays;
use crate::share::ShareMenu;
use crate::types::SharePayload;

pub const SHARE_MODAL_SELECTOR: &str = "#shareModal";

pub fn init(overlays: Overlays) -> UiResult<()> {
    for button in query_all(".share-property")? {
        let source = button.clone();
        listen(&button, "click", move |_| {
            let title = source.get_attribute("data-title").unwrap_or_default();
            let url = source
                .get_attribute("data-url")
                .filter(|url| !url.is_empty())
                .unwrap_or_else(current_href);
            share_property(overlays, SharePayload::new(title, url));
        })?;
    }

    if let Some(button) = query(".share-modal-property")? {
        listen(&button, "click", move |_| {
            let title = document()
                .ok()
                .and_then(|d| d.get_element_by_id("modalTitle"))
                .and_then(|el| el.text_content())
                .unwrap_or_default();
            share_property(overlays, SharePayload::new(title, current_href()));
        })?;
    }

    expose_share_global(overlays)
}

/// `window.shareProperty(title, url)` for templates that call it inline.
fn expose_share_global(overlays: Overlays) -> UiResult<()> {
    let window = window()?;
    let closure = Closure::wrap(Box::new(move |title: JsValue, url: JsValue| {
        let title = title.as_string().unwrap_or_default();
        let url = url
            .as_string()
            .filter(|url| !url.is_empty())
            .unwrap_or_else(current_href);
        share_property(overlays, SharePayload::new(title, url));
    }) as Box<dyn FnMut(JsValue, JsValue)>);
    Reflect::set(&window, &JsValue::from_str("shareProperty"), closure.as_ref())?;
    closure.forget();
    Ok(())
}

/// Native share sheet when the browser has one, the fallback menu otherwise
/// or when the native attempt is rejected.
pub fn share_property(overlays: Overlays, payload: SharePayload) {
    let navigator = match window() {
        Ok(window) => window.navigator(),
        Err(err) => {
            tracing::warn!("cannot share: {err}");
            return;
        }
    };

    if !has_native_share(&navigator) {
        overlays.open_share_menu(ShareMenu::new(&payload, current_href()));
        return;
    }

    spawn_local(async move {
        match native_share(&navigator, &payload).await {
            Ok(()) => tracing::info!("shared \"{}\" natively", payload.title),
            Err(err) => {
                tracing::warn!("native share failed, showing menu: {err}");
                overlays.open_share_menu(ShareMenu::new(&payload, current_href()));
            }
        }
    });
}

fn has_native_share(navigator: &Navigator) -> bool {
    Reflect::get(navigator, &JsValue::from_str("share"))
        .map(|share| share.is_function())
        .unwrap_or(false)
}

async fn native_share(navigator: &Navigator, payload: &SharePayload) -> UiResult<()> {
    let share: Function = Reflect::get(navigator, &JsValue::from_str("share"))?.dyn_into()?;
    let data = Object::new();
    Reflect::set(&data, &"title".into(), &payload.native_title().into())?;
    Reflect::set(&data, &"text".into(), &payload.message().into())?;
    Reflect::set(&data, &"url".into(), &payload.url.as_str().into())?;

    let promise: Promise = share.call1(navigator, &data)?.dyn_into()?;
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|err| UiError::Js(js_error_message(err, "share rejected")))
}

//! Viewport-triggered work: entrance animations and deferred image sources.
//! Both observe each element once and unobserve it on first intersection.

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use super::{log_failure, query_all, set_style};
use crate::config::SiteConfig;
use crate::error::UiResult;

const ANIMATED_SELECTOR: &str = ".luxury-property-card, .service-card, .value-card, .contact-card";
const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";

fn observe_once<F>(
    targets: &[Element],
    options: Option<&IntersectionObserverInit>,
    on_visible: F,
) -> UiResult<()>
where
    F: Fn(&Element) + 'static,
{
    if targets.is_empty() {
        return Ok(());
    }
    let callback = Closure::wrap(Box::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                on_visible(&target);
                observer.unobserve(&target);
            }
        },
    ) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let observer = match options {
        Some(options) => {
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), options)?
        }
        None => IntersectionObserver::new(callback.as_ref().unchecked_ref())?,
    };
    callback.forget();

    for target in targets {
        observer.observe(target);
    }
    Ok(())
}

pub fn init_animations(config: &SiteConfig) -> UiResult<()> {
    let targets = query_all(ANIMATED_SELECTOR)?;
    for el in &targets {
        set_style(el, "opacity", "0")?;
        set_style(el, "transform", "translateY(30px)")?;
        set_style(el, "transition", "opacity 0.6s ease, transform 0.6s ease")?;
    }

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.reveal_threshold));
    options.set_root_margin(&config.reveal_root_margin);

    observe_once(&targets, Some(&options), |el| {
        log_failure("reveal opacity", set_style(el, "opacity", "1"));
        log_failure("reveal transform", set_style(el, "transform", "translateY(0)"));
    })
}

pub fn init_lazy_images() -> UiResult<()> {
    let images = query_all(LAZY_IMAGE_SELECTOR)?;
    tracing::debug!("deferring {} images", images.len());
    observe_once(&images, None, |img| {
        let Some(src) = img.get_attribute("data-src") else {
            return;
        };
        log_failure("deferred src", img.set_attribute("src", &src));
        log_failure("loaded class", img.class_list().add_1("loaded"));
    })
}

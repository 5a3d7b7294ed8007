use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, Node, ScrollBehavior, ScrollIntoViewOptions, ScrollToOptions};

use super::{document, listen, log_failure, query, query_all, set_style, window};
use crate::config::SiteConfig;
use crate::error::UiResult;
use crate::overlays::Overlays;
use crate::scroll;

pub fn init(config: &SiteConfig, overlays: Overlays) -> UiResult<()> {
    init_navbar(config)?;
    highlight_active_link()?;
    init_mobile_menu()?;
    init_hero(config)?;
    init_smooth_anchors(config)?;
    init_back_to_top(config, overlays)?;
    Ok(())
}

fn init_navbar(config: &SiteConfig) -> UiResult<()> {
    let Some(navbar) = query(".luxury-navbar")? else {
        tracing::debug!("no .luxury-navbar on this page");
        return Ok(());
    };
    let window = window()?;
    let threshold = config.clone();
    let win = window.clone();
    listen(&window, "scroll", move |_| {
        let y = win.scroll_y().unwrap_or_default();
        let classes = navbar.class_list();
        let result = if scroll::navbar_scrolled(y, &threshold) {
            classes.add_1("scrolled")
        } else {
            classes.remove_1("scrolled")
        };
        log_failure("navbar class", result);
    })
}

fn highlight_active_link() -> UiResult<()> {
    let path = window()?.location().pathname()?;
    for link in query_all(".luxury-nav-link")? {
        if scroll::is_active_link(link.get_attribute("href").as_deref(), &path) {
            link.class_list().add_1("active")?;
        }
    }
    Ok(())
}

fn init_mobile_menu() -> UiResult<()> {
    let (Some(toggler), Some(collapse)) = (query(".navbar-toggler")?, query(".navbar-collapse")?)
    else {
        return Ok(());
    };

    {
        let collapse = collapse.clone();
        listen(&toggler, "click", move |_| {
            log_failure("menu toggle", collapse.class_list().toggle("show").map(drop));
        })?;
    }

    let document = document()?;
    listen(&document, "click", move |event| {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
            return;
        };
        if !toggler.contains(Some(&target)) && !collapse.contains(Some(&target)) {
            log_failure("menu close", collapse.class_list().remove_1("show"));
        }
    })
}

fn init_hero(config: &SiteConfig) -> UiResult<()> {
    let Some(hero) = query(".hero-section")? else {
        return Ok(());
    };

    if let Some(indicator) = query(".hero-scroll-indicator")? {
        let hero = hero.clone();
        listen(&indicator, "click", move |_| {
            if let Some(next) = hero.next_element_sibling() {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                next.scroll_into_view_with_scroll_into_view_options(&options);
            }
        })?;
    }

    let window = window()?;
    let win = window.clone();
    let config = config.clone();
    listen(&window, "scroll", move |_| {
        let width = win
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or_default();
        let y = win.page_y_offset().unwrap_or_default();
        if let Some(offset) = scroll::parallax_offset(y, width, &config) {
            log_failure(
                "parallax",
                set_style(&hero, "transform", &format!("translateY({offset}px)")),
            );
        }
    })
}

fn init_smooth_anchors(config: &SiteConfig) -> UiResult<()> {
    for link in query_all("a[href^=\"#\"]")? {
        let config = config.clone();
        let anchor = link.clone();
        listen(&link, "click", move |event| {
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            // a bare "#" is not a valid selector
            let Ok(Some(target)) = document().and_then(|d| Ok(d.query_selector(&href)?)) else {
                return;
            };
            event.prevent_default();
            scroll_window_to(scroll::anchor_scroll_top(offset_top(&target), &config));
        })?;
    }
    Ok(())
}

fn offset_top(el: &Element) -> f64 {
    el.dyn_ref::<HtmlElement>()
        .map(|html| html.offset_top() as f64)
        .unwrap_or_default()
}

fn init_back_to_top(config: &SiteConfig, overlays: Overlays) -> UiResult<()> {
    let window = window()?;
    let win = window.clone();
    let config = config.clone();
    listen(&window, "scroll", move |_| {
        let y = win.page_y_offset().unwrap_or_default();
        overlays.set_back_to_top(scroll::back_to_top_wanted(y, &config));
    })
}

pub fn scroll_window_to(top: f64) {
    let Ok(window) = window() else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

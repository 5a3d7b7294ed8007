use std::cell::Cell;
use std::rc::Rc;

use leptos::prelude::*;

use crate::components::{BackToTop, NotificationToast, ShareMenuOverlay};
use crate::config::SiteConfig;
use crate::dom;
use crate::overlays::Overlays;

/// Root mounted onto the server-rendered page: owns the overlay state and
/// wires every enhancement once the reactive owner exists.
#[component]
pub fn App() -> impl IntoView {
    let config = dom::document()
        .map(|document| SiteConfig::load(&document))
        .unwrap_or_default();
    let overlays = Overlays::new(config.clone());

    {
        let initialized = Rc::new(Cell::new(false));
        Effect::new(move |_| {
            if initialized.get() {
                return;
            }
            initialized.set(true);
            dom::enhance_page(&config, overlays);
        });
    }

    view! {
        <NotificationToast overlays=overlays />
        <ShareMenuOverlay overlays=overlays />
        <BackToTop overlays=overlays />
    }
}

use leptos::prelude::*;

use crate::dom::navigation::scroll_window_to;
use crate::overlays::Overlays;
use crate::theme::BACK_TO_TOP_STYLE;

#[component]
pub fn BackToTop(overlays: Overlays) -> impl IntoView {
    let hovered = RwSignal::new(false);

    let style = move || {
        let fade = overlays.back_to_top.get();
        let (scale, shadow) = if hovered.get() {
            ("1.1", "0 8px 25px rgba(212, 175, 55, 0.4)")
        } else {
            ("1", "0 5px 15px rgba(212, 175, 55, 0.3)")
        };
        format!(
            "{BACK_TO_TOP_STYLE} display: {}; opacity: {}; transform: scale({scale}); box-shadow: {shadow};",
            if fade.displayed { "block" } else { "none" },
            if fade.opaque { "1" } else { "0" },
        )
    };

    view! {
        <button
            id="backToTop"
            style=style
            on:click=move |_| scroll_window_to(0.0)
            on:mouseenter=move |_| hovered.set(true)
            on:mouseleave=move |_| hovered.set(false)
        >
            <i class="fas fa-chevron-up"></i>
        </button>
    }
}

use leptos::prelude::*;

use crate::overlays::Overlays;
use crate::theme::NOTIFICATION_STYLE;

/// The single toast slot. Keyed on the notification id so a phase change
/// restyles the element in place instead of re-creating it.
#[component]
pub fn NotificationToast(overlays: Overlays) -> impl IntoView {
    let current_id = Memo::new(move |_| {
        overlays
            .notifications
            .with(|center| center.current().map(|active| active.id))
    });

    view! {
        {move || {
            let rendered: AnyView = match current_id.get() {
                None => ().into_any(),
                Some(id) => {
                    let Some(active) = overlays
                        .notifications
                        .with_untracked(|center| center.current().cloned())
                    else {
                        return ().into_any();
                    };
                    let animation = move || {
                        overlays.notifications.with(|center| {
                            center
                                .current()
                                .filter(|n| n.id == id)
                                .map(|n| n.animation())
                                .unwrap_or("slideOutRight 0.3s ease")
                        })
                    };
                    view! {
                        <div
                            class=format!("luxury-notification luxury-notification-{}", active.kind.as_str())
                            style=move || format!("{NOTIFICATION_STYLE} animation: {};", animation())
                        >
                            <div class="notification-content">
                                <i class=format!("fas {}", active.kind.icon())></i>
                                <span>{active.message.clone()}</span>
                            </div>
                            <button
                                class="notification-close"
                                on:click=move |_| overlays.close_notification(id)
                            >
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                    }
                    .into_any()
                }
            };
            rendered
        }}
    }
}

use leptos::prelude::*;

use crate::overlays::Overlays;
use crate::share::ShareTarget;
use crate::theme::SHARE_BACKDROP_STYLE;

/// Fallback share dialog. Rendered only while `overlays.share_menu` holds a
/// menu, so dismissing it removes it from the document. Each opening has its
/// own key, and a new key mounts a fresh dialog.
#[component]
pub fn ShareMenuOverlay(overlays: Overlays) -> impl IntoView {
    let open_key = Memo::new(move |_| overlays.share_menu.with(|slot| slot.open_key()));

    move || open_key.get().map(|_| view! { <ShareDialog overlays=overlays /> })
}

#[component]
fn ShareDialog(overlays: Overlays) -> impl IntoView {
    let options = overlays
        .share_menu
        .with_untracked(|slot| slot.menu().map(|menu| menu.options.clone()))
        .unwrap_or_default();

    view! {
        <div
            class="modal fade show"
            id="shareModal"
            tabindex="-1"
            style=SHARE_BACKDROP_STYLE
            on:click=move |ev| {
                // only clicks on the backdrop itself dismiss
                if ev.target() == ev.current_target() {
                    overlays.close_share_menu();
                }
            }
        >
            <div class="modal-dialog modal-sm modal-dialog-centered">
                <div class="modal-content luxury-modal">
                    <div class="modal-header">
                        <h5 class="modal-title luxury-text-gold">"Compartilhar"</h5>
                        <button
                            type="button"
                            class="btn-close btn-close-white"
                            on:click=move |_| overlays.close_share_menu()
                        ></button>
                    </div>
                    <div class="modal-body">
                        <div class="share-options">
                            {options
                                .into_iter()
                                .map(|target| view! { <ShareOptionButton overlays=overlays target=target /> })
                                .collect_view()}
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
fn ShareOptionButton(overlays: Overlays, target: ShareTarget) -> impl IntoView {
    view! {
        <button
            class="share-option-btn"
            data-action=target.label()
            style=format!("--option-color: {}", target.color())
            on:click=move |_| overlays.choose_share_option(target)
        >
            <i class=target.icon()></i>
            <span>{target.label()}</span>
        </button>
    }
}

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::SiteConfig;
use crate::dom;
use crate::notification::{NotificationCenter, NotificationId};
use crate::share::{ShareAction, ShareMenu, ShareMenuSlot, ShareTarget};
use crate::types::{NotificationKind, NotificationRequest};

const FADE_IN_DELAY_MS: u32 = 10;

/// Display state of the back-to-top control; the fade needs both halves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Fade {
    pub displayed: bool,
    pub opaque: bool,
}

/// Shared handle over the Leptos-rendered overlays (toast, share menu,
/// back-to-top). `Copy`, so DOM listeners and view closures can each hold one.
///
/// Pending timers live in local stored values; replacing a slot drops the
/// old `Timeout`, which cancels it.
#[derive(Clone, Copy)]
pub struct Overlays {
    pub notifications: RwSignal<NotificationCenter>,
    pub share_menu: RwSignal<ShareMenuSlot>,
    pub back_to_top: RwSignal<Fade>,
    config: StoredValue<SiteConfig>,
    dismiss_timer: StoredValue<Option<Timeout>, LocalStorage>,
    removal_timer: StoredValue<Option<Timeout>, LocalStorage>,
    fade_target: StoredValue<Option<bool>>,
    fade_timer: StoredValue<Option<Timeout>, LocalStorage>,
}

impl Overlays {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            notifications: RwSignal::new(NotificationCenter::default()),
            share_menu: RwSignal::new(ShareMenuSlot::default()),
            back_to_top: RwSignal::new(Fade::default()),
            config: StoredValue::new(config),
            dismiss_timer: StoredValue::new_local(None),
            removal_timer: StoredValue::new_local(None),
            fade_target: StoredValue::new(None),
            fade_timer: StoredValue::new_local(None),
        }
    }

    pub fn show_notification(&self, request: NotificationRequest) -> NotificationId {
        let mut id = 0;
        self.notifications.update(|center| id = center.show(request));

        // the replaced toast's timers must not fire against this one
        self.removal_timer.set_value(None);
        let overlays = *self;
        let delay = self.config.with_value(|c| c.notification_timeout_ms);
        let timeout = Timeout::new(delay, move || overlays.begin_exit(id));
        self.dismiss_timer.set_value(Some(timeout));
        id
    }

    /// Close button: skip the remaining auto-dismiss wait.
    pub fn close_notification(&self, id: NotificationId) {
        if self.notifications.with_untracked(|center| center.is_current(id)) {
            self.dismiss_timer.set_value(None);
        }
        self.begin_exit(id);
    }

    fn begin_exit(&self, id: NotificationId) {
        let mut started = false;
        self.notifications
            .update(|center| started = center.begin_exit(id));
        if !started {
            return;
        }
        let overlays = *self;
        let delay = self.config.with_value(|c| c.notification_exit_ms);
        let timeout = Timeout::new(delay, move || {
            overlays.notifications.update(|center| {
                center.remove(id);
            });
        });
        self.removal_timer.set_value(Some(timeout));
    }

    /// Replaces any open menu. A `#shareModal` found while nothing is open
    /// came from the page markup, not from us, and is removed.
    pub fn open_share_menu(&self, menu: ShareMenu) {
        if !self.share_menu.with_untracked(ShareMenuSlot::is_open) {
            dom::log_failure(
                "stale share menu cleanup",
                dom::remove_all(dom::share::SHARE_MODAL_SELECTOR),
            );
        }
        self.share_menu.update(|slot| {
            slot.open(menu);
        });
    }

    pub fn close_share_menu(&self) {
        self.share_menu.update(ShareMenuSlot::close);
    }

    pub fn choose_share_option(&self, target: ShareTarget) {
        let Some(menu) = self.share_menu.with_untracked(|slot| slot.menu().cloned()) else {
            return;
        };
        match menu.action_for(target) {
            ShareAction::OpenUrl(url) => {
                if let Err(err) = dom::open_in_new_context(&url) {
                    tracing::warn!("could not open {}: {err}", target.label());
                }
            }
            ShareAction::CopyText { text, notice } => {
                spawn_local(async move {
                    if let Err(err) = dom::clipboard::copy_text(&text).await {
                        tracing::error!("failed to copy text: {err}");
                    }
                });
                self.show_notification(NotificationRequest::new(
                    notice,
                    NotificationKind::Success,
                ));
            }
        }
        self.close_share_menu();
    }

    /// Drives the back-to-top fade toward `wanted`, cancelling any transition
    /// still pending from the opposite direction.
    pub fn set_back_to_top(&self, wanted: bool) {
        if self.fade_target.get_value() == Some(wanted) {
            return;
        }
        self.fade_target.set_value(Some(wanted));
        self.fade_timer.set_value(None);

        let back_to_top = self.back_to_top;
        let timeout = if wanted {
            back_to_top.update(|fade| fade.displayed = true);
            Timeout::new(FADE_IN_DELAY_MS, move || {
                back_to_top.update(|fade| fade.opaque = true);
            })
        } else {
            back_to_top.update(|fade| fade.opaque = false);
            let delay = self.config.with_value(|c| c.back_to_top_fade_ms);
            Timeout::new(delay, move || {
                back_to_top.update(|fade| fade.displayed = false);
            })
        };
        self.fade_timer.set_value(Some(timeout));
    }
}

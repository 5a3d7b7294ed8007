//! Share message composition and the fallback share menu.

use urlencoding::encode;

use crate::types::SharePayload;

pub const BRAND: &str = "Maeva Investimentos";

pub const INSTAGRAM_NOTICE: &str = "Texto copiado! Cole no Instagram para compartilhar.";
pub const COPY_NOTICE: &str = "Texto copiado para a área de transferência!";

impl SharePayload {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }

    pub fn message(&self) -> String {
        format!(
            "Confira este imóvel exclusivo: {}\n\nMaeva Investimentos Imobiliários\n\"Conectando pessoas aos melhores imóveis de São Paulo.\"\n\n{}",
            self.title, self.url
        )
    }

    /// Title handed to the native share sheet.
    pub fn native_title(&self) -> String {
        format!("{} - {BRAND}", self.title)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareTarget {
    WhatsApp,
    Instagram,
    LinkedIn,
    CopyLink,
}

impl ShareTarget {
    pub const ALL: [ShareTarget; 4] = [
        ShareTarget::WhatsApp,
        ShareTarget::Instagram,
        ShareTarget::LinkedIn,
        ShareTarget::CopyLink,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ShareTarget::WhatsApp => "WhatsApp",
            ShareTarget::Instagram => "Instagram",
            ShareTarget::LinkedIn => "LinkedIn",
            ShareTarget::CopyLink => "Copiar Link",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ShareTarget::WhatsApp => "fab fa-whatsapp",
            ShareTarget::Instagram => "fab fa-instagram",
            ShareTarget::LinkedIn => "fab fa-linkedin",
            ShareTarget::CopyLink => "fas fa-copy",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            ShareTarget::WhatsApp => "#25D366",
            ShareTarget::Instagram => "#E4405F",
            ShareTarget::LinkedIn => "#0077B5",
            ShareTarget::CopyLink => "#6c757d",
        }
    }

    /// What choosing this option does. Instagram has no share URL, so the
    /// message goes to the clipboard instead.
    pub fn action(self, message: &str, page_url: &str) -> ShareAction {
        match self {
            ShareTarget::WhatsApp => {
                ShareAction::OpenUrl(format!("https://wa.me/?text={}", encode(message)))
            }
            ShareTarget::LinkedIn => ShareAction::OpenUrl(format!(
                "https://www.linkedin.com/sharing/share-offsite/?url={}",
                encode(page_url)
            )),
            ShareTarget::Instagram => ShareAction::CopyText {
                text: message.to_string(),
                notice: INSTAGRAM_NOTICE,
            },
            ShareTarget::CopyLink => ShareAction::CopyText {
                text: message.to_string(),
                notice: COPY_NOTICE,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareAction {
    /// Open in a new browsing context.
    OpenUrl(String),
    /// Copy to the clipboard and confirm with a success toast.
    CopyText { text: String, notice: &'static str },
}

/// The overlay offered when the browser cannot share natively.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareMenu {
    pub message: String,
    /// Location of the page the menu was opened from; LinkedIn shares this.
    pub page_url: String,
    pub options: Vec<ShareTarget>,
}

impl ShareMenu {
    pub fn new(payload: &SharePayload, page_url: impl Into<String>) -> Self {
        Self {
            message: payload.message(),
            page_url: page_url.into(),
            options: ShareTarget::ALL.to_vec(),
        }
    }

    pub fn action_for(&self, target: ShareTarget) -> ShareAction {
        target.action(&self.message, &self.page_url)
    }
}

/// Holds the open menu, if any. Every `open` gets a fresh key so a menu
/// opened over another one is mounted anew instead of patched in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShareMenuSlot {
    menu: Option<ShareMenu>,
    opened: u64,
}

impl ShareMenuSlot {
    pub fn open(&mut self, menu: ShareMenu) -> u64 {
        self.opened += 1;
        self.menu = Some(menu);
        self.opened
    }

    pub fn close(&mut self) {
        self.menu = None;
    }

    pub fn is_open(&self) -> bool {
        self.menu.is_some()
    }

    pub fn menu(&self) -> Option<&ShareMenu> {
        self.menu.as_ref()
    }

    /// Identity of the current opening; `None` while closed.
    pub fn open_key(&self) -> Option<u64> {
        self.menu.as_ref().map(|_| self.opened)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_embeds_title_and_url() {
        let payload = SharePayload::new("Casa X", "http://example.com");
        let message = payload.message();
        assert!(message.starts_with("Confira este imóvel exclusivo: Casa X\n\n"));
        assert!(message.ends_with("\n\nhttp://example.com"));
        assert_eq!(payload.native_title(), "Casa X - Maeva Investimentos");
    }

    #[test]
    fn menu_has_four_fixed_options() {
        let menu = ShareMenu::new(&SharePayload::new("Casa X", "http://example.com"), "http://site/galeria");
        let labels: Vec<_> = menu.options.iter().map(|t| t.label()).collect();
        assert_eq!(labels, ["WhatsApp", "Instagram", "LinkedIn", "Copiar Link"]);
    }

    #[test]
    fn whatsapp_carries_encoded_message() {
        let payload = SharePayload::new("Casa X", "http://example.com");
        let menu = ShareMenu::new(&payload, "http://site/galeria");
        let ShareAction::OpenUrl(url) = menu.action_for(ShareTarget::WhatsApp) else {
            panic!("whatsapp should open a url");
        };
        assert!(url.starts_with("https://wa.me/?text="));
        assert!(url.contains(encode(&payload.message()).as_ref()));
        assert!(url.contains("Casa%20X"));
    }

    #[test]
    fn linkedin_shares_the_page_url() {
        let menu = ShareMenu::new(&SharePayload::new("Casa X", "http://example.com"), "http://site/galeria?id=2");
        assert_eq!(
            menu.action_for(ShareTarget::LinkedIn),
            ShareAction::OpenUrl(
                "https://www.linkedin.com/sharing/share-offsite/?url=http%3A%2F%2Fsite%2Fgaleria%3Fid%3D2".into()
            )
        );
    }

    #[test]
    fn copy_targets_notify() {
        let menu = ShareMenu::new(&SharePayload::new("Casa X", "u"), "p");
        match menu.action_for(ShareTarget::Instagram) {
            ShareAction::CopyText { text, notice } => {
                assert_eq!(text, menu.message);
                assert_eq!(notice, INSTAGRAM_NOTICE);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert!(matches!(
            menu.action_for(ShareTarget::CopyLink),
            ShareAction::CopyText { notice: COPY_NOTICE, .. }
        ));
    }

    #[test]
    fn reopening_gets_a_fresh_key() {
        let mut slot = ShareMenuSlot::default();
        assert_eq!(slot.open_key(), None);

        let first = slot.open(ShareMenu::new(&SharePayload::new("Casa X", "u1"), "p"));
        let second = slot.open(ShareMenu::new(&SharePayload::new("Casa Y", "u2"), "p"));
        assert_ne!(first, second);
        assert_eq!(slot.open_key(), Some(second));
        assert!(slot.menu().is_some_and(|m| m.message.contains("Casa Y")));
    }

    #[test]
    fn closing_clears_the_menu() {
        let mut slot = ShareMenuSlot::default();
        let key = slot.open(ShareMenu::new(&SharePayload::new("Casa X", "u"), "p"));
        slot.close();
        assert!(!slot.is_open());
        assert_eq!(slot.open_key(), None);

        let reopened = slot.open(ShareMenu::new(&SharePayload::new("Casa X", "u"), "p"));
        assert!(reopened > key);
    }
}

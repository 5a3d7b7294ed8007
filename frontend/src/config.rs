use serde::Deserialize;

/// Element carrying optional JSON overrides for [`SiteConfig`].
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Thresholds and delays for every page behavior.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Scroll offset past which the navbar switches to its `scrolled` look.
    pub navbar_scroll_px: f64,
    pub back_to_top_scroll_px: f64,
    pub back_to_top_fade_ms: u32,
    /// Parallax only runs on viewports wider than this.
    pub parallax_min_width_px: f64,
    pub parallax_rate: f64,
    /// Fixed navbar height compensated when jumping to an anchor.
    pub anchor_offset_px: f64,
    pub notification_timeout_ms: u32,
    pub notification_exit_ms: u32,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            navbar_scroll_px: 100.0,
            back_to_top_scroll_px: 300.0,
            back_to_top_fade_ms: 300,
            parallax_min_width_px: 768.0,
            parallax_rate: -0.5,
            anchor_offset_px: 100.0,
            notification_timeout_ms: 5000,
            notification_exit_ms: 300,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parses overrides; blank input yields the defaults.
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(text)
    }

    /// Reads `#site-config` from the page, falling back to defaults.
    pub fn load(document: &web_sys::Document) -> Self {
        let Some(el) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
            return Self::default();
        };
        let text = el.text_content().unwrap_or_default();
        match Self::from_json(&text) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("ignoring malformed #{CONFIG_ELEMENT_ID}: {err}");
                Self::default()
            }
        }
    }
}

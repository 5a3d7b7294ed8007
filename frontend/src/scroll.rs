use crate::config::SiteConfig;

pub fn navbar_scrolled(scroll_y: f64, config: &SiteConfig) -> bool {
    scroll_y > config.navbar_scroll_px
}

pub fn back_to_top_wanted(scroll_y: f64, config: &SiteConfig) -> bool {
    scroll_y > config.back_to_top_scroll_px
}

/// Hero `translateY` in px, or `None` on narrow viewports.
pub fn parallax_offset(scroll_y: f64, viewport_width: f64, config: &SiteConfig) -> Option<f64> {
    (viewport_width > config.parallax_min_width_px).then(|| scroll_y * config.parallax_rate)
}

/// Scroll target for an in-page anchor, clearing the fixed navbar.
pub fn anchor_scroll_top(target_offset_top: f64, config: &SiteConfig) -> f64 {
    target_offset_top - config.anchor_offset_px
}

/// Nav link whose `href` is exactly the current path.
pub fn is_active_link(href: Option<&str>, current_path: &str) -> bool {
    href.is_some_and(|href| href == current_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_strict() {
        let config = SiteConfig::default();
        assert!(!navbar_scrolled(100.0, &config));
        assert!(navbar_scrolled(100.5, &config));
        assert!(!back_to_top_wanted(300.0, &config));
        assert!(back_to_top_wanted(301.0, &config));
    }

    #[test]
    fn parallax_only_on_wide_viewports() {
        let config = SiteConfig::default();
        assert_eq!(parallax_offset(200.0, 1280.0, &config), Some(-100.0));
        assert_eq!(parallax_offset(200.0, 768.0, &config), None);
    }

    #[test]
    fn anchor_and_links() {
        let config = SiteConfig::default();
        assert_eq!(anchor_scroll_top(900.0, &config), 800.0);
        assert!(is_active_link(Some("/galeria"), "/galeria"));
        assert!(is_active_link(Some("/"), "/"));
        assert!(!is_active_link(Some("/sobre"), "/galeria"));
        assert!(!is_active_link(None, "/"));
    }
}

//! Page contract and timing knobs.
//!
//! Defaults match the farm site's markup. A page can override any subset by
//! embedding JSON in `<script type="application/json" id="site-config">`;
//! missing keys keep their defaults.

use serde::Deserialize;

use crate::core::anchor::ANCHOR_GAP_PX;
use crate::core::newsletter::{RESET_DELAY_MS, SUBMIT_LATENCY_MS};
use crate::core::scroll::{ACTIVE_SECTION_MARGIN_PX, SCROLLED_THRESHOLD_PX};

/// Id of the optional inline JSON config block.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Navigation
    pub nav_id: String,
    pub nav_toggle_id: String,
    pub nav_links_id: String,
    pub nav_link_selector: String,
    pub anchor_gap_px: f64,

    // Scroll effects
    pub section_selector: String,
    pub scrolled_threshold_px: f64,
    pub active_section_margin_px: f64,

    // Reveal animations
    pub card_selector: String,
    pub hero_selector: String,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub hero_delay_ms: u32,

    // Newsletter
    pub newsletter_form_id: String,
    pub submit_latency_ms: u32,
    pub reset_delay_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            nav_id: "nav".to_owned(),
            nav_toggle_id: "navToggle".to_owned(),
            nav_links_id: "navLinks".to_owned(),
            nav_link_selector: ".nav-link".to_owned(),
            anchor_gap_px: ANCHOR_GAP_PX,

            section_selector: "section[id]".to_owned(),
            scrolled_threshold_px: SCROLLED_THRESHOLD_PX,
            active_section_margin_px: ACTIVE_SECTION_MARGIN_PX,

            card_selector: ".product-card, .value-item".to_owned(),
            hero_selector: ".hero-badge, .hero-title, .hero-subtitle, .hero-actions, .hero-stats"
                .to_owned(),
            reveal_threshold: 0.1,
            reveal_root_margin: "0px".to_owned(),
            hero_delay_ms: 100,

            newsletter_form_id: "newsletterForm".to_owned(),
            submit_latency_ms: SUBMIT_LATENCY_MS,
            reset_delay_ms: RESET_DELAY_MS,
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_is_default() {
        assert_eq!(SiteConfig::from_json("{}").unwrap(), SiteConfig::default());
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config =
            SiteConfig::from_json(r#"{ "nav_id": "topbar", "hero_delay_ms": 250 }"#).unwrap();
        assert_eq!(config.nav_id, "topbar");
        assert_eq!(config.hero_delay_ms, 250);
        assert_eq!(config.nav_toggle_id, "navToggle");
        assert_eq!(config.scrolled_threshold_px, 50.0);
        assert_eq!(config.submit_latency_ms, 1500);
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(SiteConfig::from_json("{ nav_id: ").is_err());
        assert!(SiteConfig::from_json(r#"{ "hero_delay_ms": "soon" }"#).is_err());
    }
}

use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Thresholds, delays and selectors the page behaviors are wired with.
#[derive(Debug, Clone, PartialEq)]
pub struct BehaviorConfig {
    /// Pointer rows (from the top of the viewport) that reveal the navbar.
    pub nav_reveal_zone_px: f64,
    /// Scroll offset past which the navbar gets its solid background.
    pub nav_solid_after_px: f64,
    /// Parallax rate applied to the hero visual, negative moves against the scroll.
    pub parallax_rate: f64,
    pub card_enter_delay_ms: u32,
    pub toast_enter_delay_ms: u32,
    pub toast_visible_ms: u32,
    pub toast_exit_ms: u32,
    pub typing_start_delay_ms: u32,
    pub typing_char_interval_ms: u32,
    pub reveal_threshold: f64,
    pub reveal_root_margin: &'static str,
    pub reveal_selectors: &'static str,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            nav_reveal_zone_px: 50.0,
            nav_solid_after_px: 100.0,
            parallax_rate: -0.5,
            card_enter_delay_ms: 100,
            toast_enter_delay_ms: 100,
            toast_visible_ms: 3000,
            toast_exit_ms: 300,
            typing_start_delay_ms: 500,
            typing_char_interval_ms: 50,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px",
            reveal_selectors: ".blog-card, .stat, .about-content, .contact-content",
        }
    }
}

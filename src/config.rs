use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Timings and thresholds shared by the landing page behaviors.
#[derive(Clone, Debug, PartialEq)]
pub struct LandingConfig {
    /// How long the simulated submission takes before it succeeds.
    pub submit_delay_ms: u32,
    /// Delay before the success dialog and contact panel close on their own.
    pub auto_dismiss_ms: u32,
    /// Carousel movement per animation frame, in pixels.
    pub carousel_step: f64,
    /// Distance from the viewport top that a section must straddle to be active.
    pub probe_line: f64,
    /// Vertical offset after which the scroll-to-top button shows up.
    pub scroll_top_threshold: f64,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 1_000,
            auto_dismiss_ms: 5_000,
            carousel_step: 0.5,
            probe_line: 100.0,
            scroll_top_threshold: 300.0,
        }
    }
}

impl LandingConfig {
    pub fn shows_scroll_to_top(&self, scroll_offset: f64) -> bool {
        scroll_offset > self.scroll_top_threshold
    }
}

//! Page chrome state (navigation bar, back-to-top button).
//!
//! DESIGN
//! ======
//! Keeps scroll-driven presentation rules out of the components so the
//! thresholds can be tested without a browser.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Scroll offset past which the back-to-top button appears.
pub const BACK_TO_TOP_OFFSET: f64 = 300.0;

/// Scroll offset past which the navigation bar gains its solid background.
pub const NAV_SOLID_OFFSET: f64 = 50.0;

/// Scroll-derived chrome flags.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ChromeState {
    pub scroll_y: f64,
    pub menu_open: bool,
}

impl ChromeState {
    /// Record a new scroll position.
    pub fn on_scroll(&mut self, y: f64) {
        self.scroll_y = y.max(0.0);
    }

    #[must_use]
    pub fn back_to_top_visible(&self) -> bool {
        self.scroll_y > BACK_TO_TOP_OFFSET
    }

    #[must_use]
    pub fn nav_solid(&self) -> bool {
        self.scroll_y > NAV_SOLID_OFFSET || self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Following a navigation link always collapses the mobile menu.
    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}

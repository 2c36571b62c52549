//! One-shot viewport visibility latch used to gate section entrance
//! animations.
//!
//! DESIGN
//! ======
//! The latch only ever moves `false -> true`. Observer callbacks may report
//! the element leaving and re-entering the viewport any number of times;
//! only the first intersection is reported as a transition.

#[cfg(test)]
#[path = "visibility_test.rs"]
mod visibility_test;

/// Fraction of the element that must be inside the viewport to count as
/// visible.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Delay between successive cards in a staggered entrance.
pub const STAGGER_STEP_MS: usize = 200;

/// Non-resettable visibility flag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VisibilityLatch {
    visible: bool,
}

impl VisibilityLatch {
    #[must_use]
    pub fn is_visible(self) -> bool {
        self.visible
    }

    /// Feed one observer report. Returns `true` only when this report flips
    /// the latch.
    pub fn observe(&mut self, is_intersecting: bool) -> bool {
        if self.visible || !is_intersecting {
            return false;
        }
        self.visible = true;
        true
    }
}

/// Entrance class for a revealed block; hidden blocks stay transparent until
/// their section latches.
#[must_use]
pub fn reveal_class(visible: bool, entrance: &'static str) -> &'static str {
    if visible { entrance } else { "opacity-0" }
}

/// Inline `animation-delay` for the `index`-th card in a grid.
#[must_use]
pub fn stagger_style(index: usize) -> String {
    delay_style(index * STAGGER_STEP_MS)
}

/// Inline `animation-delay` of a fixed number of milliseconds.
#[must_use]
pub fn delay_style(ms: usize) -> String {
    format!("animation-delay: {ms}ms")
}

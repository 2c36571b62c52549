//! Binary digits that trail the mouse pointer.
//!
//! A glyph is spawned per `mousemove`, starts opaque at a jittered offset
//! from the pointer, then fades and rises over [`GLYPH_LIFETIME_MS`] before
//! being removed from the document.

#[cfg(test)]
#[path = "glyph_test.rs"]
mod glyph_test;

pub const GLYPH_LIFETIME_MS: u32 = 800;

/// Maximum offset from the pointer on each axis, in pixels.
pub const GLYPH_JITTER_PX: f64 = 10.0;

/// Pixels the glyph rises while fading.
pub const GLYPH_RISE_PX: f64 = 10.0;

pub const GLYPH_COLOR: &str = "#38bdf8";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Glyph {
    pub digit: char,
    pub x: f64,
    pub y: f64,
}

impl Glyph {
    /// Place a glyph near the pointer. `samples` are three uniform values in
    /// `[0, 1)`: digit choice, horizontal jitter, vertical jitter.
    #[must_use]
    pub fn spawn(client_x: f64, client_y: f64, samples: [f64; 3]) -> Self {
        let [digit, dx, dy] = samples;
        Self {
            digit: if digit > 0.5 { '1' } else { '0' },
            x: client_x + dx * GLYPH_JITTER_PX,
            y: client_y + dy * GLYPH_JITTER_PX,
        }
    }

    /// Inline style at spawn time.
    #[must_use]
    pub fn initial_style(&self) -> String {
        self.style(1.0, 0.0)
    }

    /// Inline style once the fade has been kicked off.
    #[must_use]
    pub fn faded_style(&self) -> String {
        self.style(0.0, -GLYPH_RISE_PX)
    }

    fn style(&self, opacity: f64, translate_y: f64) -> String {
        format!(
            "position: fixed; left: {}px; top: {}px; color: {GLYPH_COLOR}; font-size: 14px; \
             font-family: monospace; pointer-events: none; opacity: {opacity}; \
             transition: opacity 0.8s ease, transform 0.8s ease; transform: translateY({translate_y}px)",
            self.x, self.y
        )
    }
}

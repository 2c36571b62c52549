//! Floating background particles for the hero section.
//!
//! Positions come from a fixed integer hash of the particle index so the
//! server-rendered markup and the hydrated markup agree.

#[cfg(test)]
#[path = "particles_test.rs"]
mod particles_test;

pub const PARTICLE_COUNT: usize = 20;

/// Placement and timing of one particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Horizontal position, percent of the container width.
    pub left: f64,
    /// Vertical position, percent of the container height.
    pub top: f64,
    /// Seconds before the float animation starts (0..6).
    pub delay: f64,
    /// Seconds per float cycle (6..10).
    pub duration: f64,
}

impl Particle {
    #[must_use]
    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; animation-delay: {:.2}s; animation-duration: {:.2}s",
            self.left, self.top, self.delay, self.duration
        )
    }
}

// splitmix64 finaliser
fn mix(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// A value in `[0, 1)` derived from `seed`.
#[allow(clippy::cast_precision_loss)]
fn unit(seed: u64) -> f64 {
    (mix(seed) >> 11) as f64 / (1_u64 << 53) as f64
}

/// Layout for the particle at `index`.
#[must_use]
pub fn particle(index: usize) -> Particle {
    let base = (index as u64) << 2;
    Particle {
        left: unit(base) * 100.0,
        top: unit(base + 1) * 100.0,
        delay: unit(base + 2) * 6.0,
        duration: 6.0 + unit(base + 3) * 4.0,
    }
}

/// Every particle in render order.
#[must_use]
pub fn particles() -> Vec<Particle> {
    (0..PARTICLE_COUNT).map(particle).collect()
}

//! Particle Drift
//!
//! Positions for the hero background. Coordinates are percentages of the
//! container; particles float upward and wrap to the bottom.

pub const PARTICLE_COUNT: usize = 50;

/// Animation step interval
pub const TICK_MS: u64 = 50;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub speed: f64,
}

impl Particle {
    /// Build a particle from uniform samples in `[0, 1)`
    pub fn from_samples(mut sample: impl FnMut() -> f64) -> Self {
        Self {
            x: sample() * 100.0,
            y: sample() * 100.0,
            size: sample() * 4.0 + 1.0,
            speed: sample() * 0.3 + 0.1,
        }
    }

    /// Advance one tick
    pub fn drift(&mut self) {
        let next = self.y - self.speed;
        self.y = if next > 0.0 { next } else { 100.0 };
    }

    pub fn style(&self) -> String {
        format!(
            "left: {:.2}%; top: {:.2}%; width: {:.2}px; height: {:.2}px;",
            self.x, self.y, self.size, self.size
        )
    }
}

pub fn spawn(count: usize, mut sample: impl FnMut() -> f64) -> Vec<Particle> {
    (0..count).map(|_| Particle::from_samples(&mut sample)).collect()
}

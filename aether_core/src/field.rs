//! Particle field simulation behind the dashboard.
//!
//! Pure state: positions advance one velocity step per frame tick, velocities
//! reflect off the bounds, and nearby particles report connection lines whose
//! strength fades linearly with distance. Each particle also keeps a short
//! position history the renderer draws as trailing ghosts. Rendering lives in
//! the desktop crate.

use std::collections::VecDeque;

use crate::entropy::RandomSource;

/// Positions retained per particle for the trailing-ghost effect.
pub const TRAIL_LENGTH: usize = 12;

/// Which of the two palette hues a particle uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    Primary,
    Accent,
}

/// One drifting particle.
#[derive(Debug, Clone)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub vx: f32,
    pub vy: f32,
    pub radius: f32,
    pub shade: Shade,
    /// Recent positions, oldest first.
    pub trail: VecDeque<(f32, f32)>,
}

impl Particle {
    /// Draw order: x, y, vx, vy, radius, shade.
    fn spawn(width: f32, height: f32, rng: &mut dyn RandomSource) -> Self {
        Self {
            x: rng.next_f32() * width,
            y: rng.next_f32() * height,
            vx: (rng.next_f32() - 0.5) * 1.5,
            vy: (rng.next_f32() - 0.5) * 1.5,
            radius: rng.next_f32() * 2.0 + 1.0,
            shade: if rng.next_f64() > 0.5 {
                Shade::Primary
            } else {
                Shade::Accent
            },
            trail: VecDeque::with_capacity(TRAIL_LENGTH),
        }
    }

    /// Moves one velocity step and reflects off the bounds, each axis on its
    /// own. The position is never clamped; a particle that stepped outside
    /// re-enters on a later tick.
    fn advance(&mut self, width: f32, height: f32) {
        if self.trail.len() == TRAIL_LENGTH {
            self.trail.pop_front();
        }
        self.trail.push_back((self.x, self.y));

        self.x += self.vx;
        self.y += self.vy;

        if self.x < 0.0 || self.x > width {
            self.vx = -self.vx;
        }
        if self.y < 0.0 || self.y > height {
            self.vy = -self.vy;
        }
    }
}

/// A link between two nearby particles.
#[derive(Debug, Clone, Copy)]
pub struct Connection {
    pub from: (f32, f32),
    pub to: (f32, f32),
    /// 1.0 at zero distance, falling linearly towards 0.0 at the link
    /// distance. Always positive; pairs at or past the distance emit nothing.
    pub strength: f32,
}

/// The simulated particle field.
#[derive(Debug, Clone)]
pub struct ParticleField {
    particles: Vec<Particle>,
    width: f32,
    height: f32,
    link_distance: f32,
}

impl ParticleField {
    pub fn new(
        width: f32,
        height: f32,
        count: usize,
        link_distance: f32,
        rng: &mut dyn RandomSource,
    ) -> Self {
        let particles = (0..count)
            .map(|_| Particle::spawn(width, height, rng))
            .collect();
        Self {
            particles,
            width,
            height,
            link_distance,
        }
    }

    /// Updates the bounds to the new viewport. Particles are not repositioned;
    /// ones left outside bounce back in over the following ticks.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Advances every particle by one frame.
    pub fn tick(&mut self) {
        for particle in &mut self.particles {
            particle.advance(self.width, self.height);
        }
    }

    /// Links for every pair of distinct particles strictly closer than the
    /// link distance.
    pub fn connections(&self) -> Vec<Connection> {
        let mut connections = Vec::new();
        for i in 0..self.particles.len() {
            for j in (i + 1)..self.particles.len() {
                let a = &self.particles[i];
                let b = &self.particles[j];
                let dx = a.x - b.x;
                let dy = a.y - b.y;
                let dist = (dx * dx + dy * dy).sqrt();
                if dist < self.link_distance {
                    connections.push(Connection {
                        from: (a.x, a.y),
                        to: (b.x, b.y),
                        strength: 1.0 - dist / self.link_distance,
                    });
                }
            }
        }
        connections
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn bounds(&self) -> (f32, f32) {
        (self.width, self.height)
    }
}

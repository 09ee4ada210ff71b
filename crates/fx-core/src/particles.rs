//! Particle data model and stepping, independent of any canvas API.
//!
//! Positions live in logical (CSS-pixel) space; the web frontend scales the
//! drawing context by the device pixel ratio so these coordinates map 1:1
//! onto what is drawn.

use crate::constants::{
    PARTICLE_COUNT, PARTICLE_OPACITY_MIN, PARTICLE_OPACITY_SPAN, PARTICLE_SIZE_MIN,
    PARTICLE_SIZE_SPAN, PARTICLE_SPEED_SPAN,
};
use glam::Vec2;
use rand::Rng;

/// One drifting dot. Velocity, size and opacity are fixed at spawn.
#[derive(Clone, Debug)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub opacity: f32,
}

impl Particle {
    pub fn spawn(rng: &mut impl Rng, bounds: Vec2) -> Self {
        let vel = Vec2::new(
            (rng.gen::<f32>() - 0.5) * PARTICLE_SPEED_SPAN,
            (rng.gen::<f32>() - 0.5) * PARTICLE_SPEED_SPAN,
        );
        Self {
            pos: Vec2::new(rng.gen::<f32>() * bounds.x, rng.gen::<f32>() * bounds.y),
            vel,
            size: PARTICLE_SIZE_MIN + rng.gen::<f32>() * PARTICLE_SIZE_SPAN,
            opacity: PARTICLE_OPACITY_MIN + rng.gen::<f32>() * PARTICLE_OPACITY_SPAN,
        }
    }

    /// Advance one step with toroidal wrap: each coordinate stays in
    /// `[0, bound)`.
    pub fn step(&mut self, bounds: Vec2) {
        self.pos += self.vel;
        self.pos.x = self.pos.x.rem_euclid(bounds.x);
        self.pos.y = self.pos.y.rem_euclid(bounds.y);
    }
}

/// Fixed-size set of particles inside a rectangular bound. The whole set is
/// regenerated on resize; particles are never removed individually.
pub struct ParticleField {
    bounds: Vec2,
    particles: Vec<Particle>,
}

impl ParticleField {
    pub fn new(bounds: Vec2, rng: &mut impl Rng) -> Self {
        // A zero-sized bound would wrap to NaN; a collapsed viewport
        // (hidden iframe) still gets a 1x1 field.
        let bounds = bounds.max(Vec2::ONE);
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle::spawn(rng, bounds))
            .collect();
        Self { bounds, particles }
    }

    /// Rebuild the field wholesale for a new viewport size.
    pub fn resize(&mut self, bounds: Vec2, rng: &mut impl Rng) {
        let bounds = bounds.max(Vec2::ONE);
        self.bounds = bounds;
        self.particles.clear();
        self.particles
            .extend((0..PARTICLE_COUNT).map(|_| Particle::spawn(rng, bounds)));
        log::debug!(
            "particle field regenerated: {} particles in {}x{}",
            self.particles.len(),
            bounds.x,
            bounds.y
        );
    }

    pub fn step(&mut self) {
        for p in &mut self.particles {
            p.step(self.bounds);
        }
    }

    pub fn bounds(&self) -> Vec2 {
        self.bounds
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }
}

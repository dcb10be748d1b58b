// Owns the particle collection and its kinematics. Resizing rebuilds the
// whole collection; the render loop only ever mutates positions in place.

use crate::particle::Particle;
use rand::Rng;

pub const NODE_COUNT: usize = 50;

pub struct Field {
    particles: Vec<Particle>,
}

impl Field {
    pub fn new() -> Field {
        Field {
            particles: Vec::new(),
        }
    }

    // Discard whatever is there and place NODE_COUNT fresh particles
    // inside the given bounds. The swap is a single assignment, so a
    // caller never observes a half-built collection.
    pub fn reinitialize<R: Rng>(&mut self, width: f64, height: f64, rng: &mut R) {
        let mut particles = Vec::with_capacity(NODE_COUNT);
        for _ in 0..NODE_COUNT {
            particles.push(Particle::random(width, height, rng));
        }
        self.particles = particles;
    }

    pub fn advance(&mut self, width: f64, height: f64) {
        for particle in &mut self.particles {
            particle.step(width, height);
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn particles_mut(&mut self) -> &mut [Particle] {
        &mut self.particles
    }
}

// Simple particle struct to keep track of individual position, velocity,
// radius, and color

use crate::color::Color;
use rand::Rng;

// Every node shares the same opaque violet
pub const NODE_COLOR: Color = Color {
    r: 0x93,
    g: 0x33,
    b: 0xea,
    a: 0xff,
};

#[derive(Copy, Clone, Debug)]
pub struct Particle {
    pub pos: [f64; 2],
    pub vel: [f64; 2],
    pub radius: f64,
    pub color: Color,
}

impl Particle {
    pub const MIN_RADIUS: f64 = 1.0;
    pub const MAX_RADIUS: f64 = 3.0;
    pub const MAX_SPEED: f64 = 0.25;

    pub fn new(pos_x: f64, pos_y: f64, vel_x: f64, vel_y: f64, radius: f64) -> Particle {
        Particle {
            pos: [pos_x, pos_y],
            vel: [vel_x, vel_y],
            radius,
            color: NODE_COLOR,
        }
    }

    // Random placement anywhere on the surface, with a slow drift in
    // either direction on each axis
    pub fn random<R: Rng>(width: f64, height: f64, rng: &mut R) -> Particle {
        let pos_x = rng.gen::<f64>() * width;
        let pos_y = rng.gen::<f64>() * height;
        let radius = rng.gen::<f64>() * (Self::MAX_RADIUS - Self::MIN_RADIUS) + Self::MIN_RADIUS;
        let vel_x = rng.gen::<f64>() * (Self::MAX_SPEED * 2.0) - Self::MAX_SPEED;
        let vel_y = rng.gen::<f64>() * (Self::MAX_SPEED * 2.0) - Self::MAX_SPEED;
        Particle::new(pos_x, pos_y, vel_x, vel_y, radius)
    }

    // Move one frame, then bounce off the edges. The velocity flips only
    // after the position has already crossed the bound, so a particle can
    // sit just outside the surface for a single frame before it heads
    // back in. The position is never clamped; this keeps the motion
    // identical to the page animation this replaces.
    pub fn step(&mut self, width: f64, height: f64) {
        self.pos[0] += self.vel[0];
        self.pos[1] += self.vel[1];
        if self.pos[0] < 0.0 || self.pos[0] > width {
            self.vel[0] *= -1.0;
        }
        if self.pos[1] < 0.0 || self.pos[1] > height {
            self.vel[1] *= -1.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_moves_by_velocity_inside_bounds() {
        let mut p = Particle::new(100.0, 200.0, 0.2, -0.1, 1.5);
        p.step(800.0, 600.0);
        assert!((p.pos[0] - 100.2).abs() < 1e-9);
        assert!((p.pos[1] - 199.9).abs() < 1e-9);
        assert_eq!(p.vel, [0.2, -0.1]);
    }

    #[test]
    fn reflection_flips_velocity_one_frame_late() {
        let width = 800.0;
        let mut p = Particle::new(width - 0.1, 300.0, 0.2, 0.0, 1.5);

        // First step overshoots the edge; position is left unclamped and
        // only the velocity flips.
        p.step(width, 600.0);
        assert!((p.pos[0] - (width + 0.1)).abs() < 1e-12);
        assert_eq!(p.vel[0], -0.2);

        // Second step carries the particle back inside.
        p.step(width, 600.0);
        assert!((p.pos[0] - (width - 0.1)).abs() < 1e-12);
        assert_eq!(p.vel[0], -0.2);
    }

    #[test]
    fn reflection_applies_at_the_lower_bound_too() {
        let mut p = Particle::new(0.05, 0.05, -0.2, -0.2, 1.5);
        p.step(800.0, 600.0);
        assert!(p.pos[0] < 0.0);
        assert!(p.pos[1] < 0.0);
        assert_eq!(p.vel, [0.2, 0.2]);
    }

    #[test]
    fn axes_reflect_independently() {
        let mut p = Particle::new(799.9, 300.0, 0.2, 0.1, 1.5);
        p.step(800.0, 600.0);
        assert_eq!(p.vel, [-0.2, 0.1]);
    }
}

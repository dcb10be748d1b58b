// Renderer struct that owns the drawing surface and the particle field,
// and runs the two draw passes of each frame: connection lines first,
// then the particles themselves.

use crate::field::Field;
use crate::particle::Particle;
use crate::surface::DrawSurface;
use rand::Rng;
use vecmath;

pub const CONNECTION_DISTANCE: f64 = 150.0;
pub const LINE_ALPHA: f64 = 0.15;
pub const LINE_WIDTH: f64 = 0.5;

// Strict inequality: a pair at exactly the threshold draws nothing.
pub fn within_connection_distance(a: &Particle, b: &Particle) -> bool {
    let distance = vecmath::vec2_len(vecmath::vec2_sub(a.pos, b.pos));
    distance < CONNECTION_DISTANCE
}

pub struct Renderer<S: DrawSurface, R: Rng> {
    surface: S,
    rng: R,
    width: u32,
    height: u32,
    field: Field,
}

impl<S: DrawSurface, R: Rng> Renderer<S, R> {
    pub fn new(surface: S, rng: R) -> Renderer<S, R> {
        Renderer {
            surface,
            rng,
            width: 0,
            height: 0,
            field: Field::new(),
        }
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    // Adopt the new viewport size and scatter a fresh set of particles
    // over it. Runs once at startup and again on every resize event.
    pub fn on_resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.surface.set_size(width, height);
        self.field
            .reinitialize(width as f64, height as f64, &mut self.rng);
    }

    // One frame: clear, draw every qualifying connection, then draw each
    // particle and advance it. Particles are drawn at the same positions
    // the connection pass measured.
    pub fn render_frame(&mut self) {
        let width = self.width as f64;
        let height = self.height as f64;
        self.surface.clear(width, height);
        self.draw_connections();
        self.draw_particles(width, height);
    }

    fn draw_connections(&mut self) {
        let stroke = crate::particle::NODE_COLOR.to_css_with_alpha(LINE_ALPHA);
        self.surface.set_stroke_style(&stroke);
        self.surface.set_line_width(LINE_WIDTH);

        let particles = self.field.particles();
        for i in 0..particles.len() {
            for j in (i + 1)..particles.len() {
                if within_connection_distance(&particles[i], &particles[j]) {
                    self.surface.begin_path();
                    self.surface.move_to(particles[i].pos[0], particles[i].pos[1]);
                    self.surface.line_to(particles[j].pos[0], particles[j].pos[1]);
                    self.surface.stroke();
                }
            }
        }
    }

    fn draw_particles(&mut self, width: f64, height: f64) {
        for particle in self.field.particles_mut() {
            self.surface.set_fill_style(&particle.color.to_css());
            self.surface
                .fill_circle(particle.pos[0], particle.pos[1], particle.radius);
            particle.step(width, height);
        }
    }
}

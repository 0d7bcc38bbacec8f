//! Drifting particle field with proximity connections.
//!
//! The field owns its particles and surface size; several independent
//! fields may coexist. Every frame each particle moves by its velocity and
//! bounces off the surface edges, then the field draws the particles and a
//! line between every pair closer than the connection distance. Pairs are
//! evaluated exhaustively, which is fine for the few dozen points a
//! background uses.

use crate::config::FxConfig;
use crate::constants::*;
use crate::lifecycle::{LoopControl, StopHandle};
use crate::surface::{Rgba, Surface};
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Particle {
    /// Uniform position on the surface, slow symmetric velocity, small radius.
    pub fn random(size: Vec2, rng: &mut impl Rng) -> Self {
        let speed = Vec2::splat(PARTICLE_SPEED_MAX);
        let unit = Vec2::new(rng.gen::<f32>(), rng.gen::<f32>());
        let jitter = Vec2::new(rng.gen::<f32>() - 0.5, rng.gen::<f32>() - 0.5);
        Self {
            pos: unit * size,
            vel: jitter * 2.0 * speed,
            radius: PARTICLE_RADIUS_MIN
                + rng.gen::<f32>() * (PARTICLE_RADIUS_MAX - PARTICLE_RADIUS_MIN),
        }
    }

    /// Advance one frame inside `[0, size.x] x [0, size.y]`, reflecting the
    /// velocity on any axis that would leave the surface.
    #[inline]
    pub fn advance(&mut self, size: Vec2) {
        self.pos += self.vel;
        if self.pos.x < 0.0 || self.pos.x > size.x {
            self.vel.x = -self.vel.x;
            self.pos.x = self.pos.x.clamp(0.0, size.x);
        }
        if self.pos.y < 0.0 || self.pos.y > size.y {
            self.vel.y = -self.vel.y;
            self.pos.y = self.pos.y.clamp(0.0, size.y);
        }
    }
}

/// A line to draw between particles `a` and `b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
    pub a: usize,
    pub b: usize,
    pub opacity: f32,
}

/// Line opacity for a pair at `distance`; `None` at or beyond `threshold`.
#[inline]
pub fn connection_opacity(distance: f32, threshold: f32) -> Option<f32> {
    (distance < threshold).then(|| (1.0 - distance / threshold).clamp(0.0, 1.0))
}

pub struct ParticleField {
    particles: Vec<Particle>,
    size: Vec2,
    connection_distance: f32,
    color: Rgba,
    stop: StopHandle,
}

impl ParticleField {
    pub fn initialize(count: usize, size: Vec2, rng: &mut impl Rng) -> Self {
        let size = size.max(Vec2::ZERO);
        let particles = (0..count).map(|_| Particle::random(size, rng)).collect();
        log::debug!("[particles] seeded {count} on {}x{}", size.x, size.y);
        Self {
            particles,
            size,
            connection_distance: CONNECTION_DISTANCE,
            color: Rgba::from_rgb(PARTICLE_RGB),
            stop: StopHandle::new(),
        }
    }

    /// Field over explicit particles, clamped into `size`.
    pub fn from_particles(particles: Vec<Particle>, size: Vec2) -> Self {
        let mut field = Self {
            particles,
            size,
            connection_distance: CONNECTION_DISTANCE,
            color: Rgba::from_rgb(PARTICLE_RGB),
            stop: StopHandle::new(),
        };
        field.on_resize(size);
        field
    }

    pub fn from_config(config: &FxConfig, size: Vec2, rng: &mut impl Rng) -> Self {
        let mut field = Self::initialize(config.particle_count, size, rng);
        field.connection_distance = config.connection_distance;
        field
    }

    pub fn with_connection_distance(mut self, distance: f32) -> Self {
        self.connection_distance = distance;
        self
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    /// Adopt a new surface size, pulling particles back inside it so none are
    /// stranded beyond a shrunken edge.
    pub fn on_resize(&mut self, size: Vec2) {
        self.size = size.max(Vec2::ZERO);
        for p in &mut self.particles {
            p.pos = p.pos.clamp(Vec2::ZERO, self.size);
        }
    }

    /// Move every particle one frame.
    pub fn step(&mut self) {
        let size = self.size;
        for p in &mut self.particles {
            p.advance(size);
        }
    }

    /// Every unordered pair close enough to be joined.
    pub fn connections(&self) -> impl Iterator<Item = Connection> + '_ {
        let threshold = self.connection_distance;
        let ps = &self.particles;
        (0..ps.len()).flat_map(move |a| {
            (a + 1..ps.len()).filter_map(move |b| {
                let d = ps[a].pos.distance(ps[b].pos);
                connection_opacity(d, threshold).map(|opacity| Connection { a, b, opacity })
            })
        })
    }

    pub fn render(&self, surface: &mut impl Surface) {
        surface.clear();
        for p in &self.particles {
            surface.fill_circle(p.pos, p.radius, self.color);
        }
        for c in self.connections() {
            surface.stroke_line(
                self.particles[c.a].pos,
                self.particles[c.b].pos,
                self.color.with_alpha(c.opacity),
                CONNECTION_LINE_WIDTH,
            );
        }
    }

    /// One frame: step, draw, and report whether to run again.
    pub fn tick(&mut self, surface: &mut impl Surface) -> LoopControl {
        if self.stop.is_stopped() {
            return LoopControl::Stop;
        }
        self.step();
        self.render(surface);
        self.stop.control()
    }

    pub fn stop(&self) {
        self.stop.stop();
    }

    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn opacity_decays_linearly_to_the_threshold() {
        assert_eq!(connection_opacity(0.0, 150.0), Some(1.0));
        let half = connection_opacity(75.0, 150.0).unwrap();
        assert!((half - 0.5).abs() < 1e-6);
        assert_eq!(connection_opacity(150.0, 150.0), None);
        assert_eq!(connection_opacity(151.0, 150.0), None);
    }

    #[test]
    fn seeded_particles_respect_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let field = ParticleField::initialize(200, Vec2::new(640.0, 480.0), &mut rng);
        assert_eq!(field.particles().len(), 200);
        for p in field.particles() {
            assert!(p.pos.x >= 0.0 && p.pos.x <= 640.0);
            assert!(p.pos.y >= 0.0 && p.pos.y <= 480.0);
            assert!(p.vel.x.abs() <= PARTICLE_SPEED_MAX);
            assert!(p.vel.y.abs() <= PARTICLE_SPEED_MAX);
            assert!(p.radius >= PARTICLE_RADIUS_MIN && p.radius < PARTICLE_RADIUS_MAX);
        }
    }

    #[test]
    fn particle_bounces_off_the_right_edge() {
        let mut p = Particle {
            pos: Vec2::new(99.9, 10.0),
            vel: Vec2::new(0.2, 0.0),
            radius: 1.0,
        };
        p.advance(Vec2::new(100.0, 100.0));
        assert_eq!(p.pos.x, 100.0);
        assert!(p.vel.x < 0.0);
        p.advance(Vec2::new(100.0, 100.0));
        assert!(p.pos.x < 100.0);
    }

    #[test]
    fn resize_clamps_into_new_bounds() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut field = ParticleField::initialize(50, Vec2::new(1000.0, 1000.0), &mut rng);
        field.on_resize(Vec2::new(100.0, 50.0));
        assert!(field
            .particles()
            .iter()
            .all(|p| p.pos.x <= 100.0 && p.pos.y <= 50.0));
    }

    #[test]
    fn empty_surface_does_not_panic() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut field = ParticleField::initialize(5, Vec2::ZERO, &mut rng);
        field.step();
        assert!(field.particles().iter().all(|p| p.pos == Vec2::ZERO));
    }
}

//! Pulsing dot grid drawn over project images while they are on screen.

use crate::constants::*;
use crate::lifecycle::StopHandle;
use crate::surface::{Rgba, Surface};
use glam::Vec2;

/// Radius of the intersection dot at `(x, y)` at time `t_sec`.
#[inline]
pub fn dot_radius(x: f32, y: f32, t_sec: f32) -> f32 {
    let pulse = (t_sec + x * GRID_PHASE_PER_UNIT + y * GRID_PHASE_PER_UNIT).sin() * 0.5 + 0.5;
    GRID_DOT_RADIUS_BASE + pulse * GRID_DOT_RADIUS_SPAN
}

/// Multiples of `spacing` strictly below `extent`, starting at zero.
fn grid_lines(extent: f32, spacing: f32) -> impl Iterator<Item = f32> {
    let n = if spacing > 0.0 && extent > 0.0 {
        (extent / spacing).ceil() as usize
    } else {
        0
    };
    (0..n).map(move |i| i as f32 * spacing).filter(move |v| *v < extent)
}

pub struct GridPulse {
    spacing: f32,
    color: Rgba,
    running: Option<StopHandle>,
}

impl Default for GridPulse {
    fn default() -> Self {
        Self::new(GRID_SPACING)
    }
}

impl GridPulse {
    pub fn new(spacing: f32) -> Self {
        Self {
            spacing,
            color: Rgba::from_rgb(PARTICLE_RGB),
            running: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.as_ref().is_some_and(|h| !h.is_stopped())
    }

    /// Visibility changed. Returns a handle for a loop the caller must start;
    /// leaving the viewport stops the current loop.
    pub fn on_visibility(&mut self, intersecting: bool) -> Option<StopHandle> {
        if intersecting {
            if self.is_running() {
                return None;
            }
            let handle = StopHandle::new();
            self.running = Some(handle.clone());
            Some(handle)
        } else {
            if let Some(h) = self.running.take() {
                h.stop();
            }
            None
        }
    }

    pub fn render(&self, surface: &mut impl Surface, t_sec: f32) {
        let size = surface.size();
        surface.clear();
        let line = self.color.with_alpha(GRID_LINE_ALPHA);
        for y in grid_lines(size.y, self.spacing) {
            surface.stroke_line(Vec2::new(0.0, y), Vec2::new(size.x, y), line, 1.0);
        }
        for x in grid_lines(size.x, self.spacing) {
            surface.stroke_line(Vec2::new(x, 0.0), Vec2::new(x, size.y), line, 1.0);
        }
        for y in grid_lines(size.y, self.spacing) {
            for x in grid_lines(size.x, self.spacing) {
                surface.fill_circle(Vec2::new(x, y), dot_radius(x, y, t_sec), self.color);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_stays_in_band() {
        for i in 0..100 {
            let r = dot_radius(i as f32 * 7.0, i as f32 * 3.0, i as f32 * 0.37);
            assert!((2.0..=4.0).contains(&r));
        }
    }

    #[test]
    fn lines_cover_extent_exclusively() {
        let v: Vec<f32> = grid_lines(90.0, 30.0).collect();
        assert_eq!(v, vec![0.0, 30.0, 60.0]);
        let v: Vec<f32> = grid_lines(91.0, 30.0).collect();
        assert_eq!(v, vec![0.0, 30.0, 60.0, 90.0]);
        assert_eq!(grid_lines(0.0, 30.0).count(), 0);
    }

    #[test]
    fn leaving_the_viewport_stops_the_loop() {
        let mut g = GridPulse::default();
        let h = g.on_visibility(true).unwrap();
        assert!(g.on_visibility(true).is_none());
        g.on_visibility(false);
        assert!(h.is_stopped());
        assert!(!g.is_running());
        let again = g.on_visibility(true).unwrap();
        assert!(!again.is_stopped());
    }
}

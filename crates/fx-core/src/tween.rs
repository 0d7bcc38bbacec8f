use crate::constants::{ANCHOR_SCROLL_DURATION_MS, ANCHOR_SCROLL_OFFSET};

#[inline]
pub fn ease_in_out_cubic(p: f64) -> f64 {
    if p < 0.5 {
        4.0 * p * p * p
    } else {
        1.0 - (-2.0 * p + 2.0).powi(3) / 2.0
    }
}

/// Where an anchor click should scroll to.
#[inline]
pub fn anchor_target(element_offset_top: f64) -> f64 {
    element_offset_top - ANCHOR_SCROLL_OFFSET
}

/// Time-based smooth scroll from the current offset to a target.
/// The clock starts at the first sampled frame timestamp.
#[derive(Clone, Debug)]
pub struct ScrollTween {
    from: f64,
    distance: f64,
    duration_ms: f64,
    started_at: Option<f64>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TweenFrame {
    pub position: f64,
    pub done: bool,
}

impl ScrollTween {
    pub fn new(from: f64, to: f64, duration_ms: f64) -> Self {
        Self {
            from,
            distance: to - from,
            duration_ms,
            started_at: None,
        }
    }

    pub fn anchor(from: f64, to: f64) -> Self {
        Self::new(from, to, ANCHOR_SCROLL_DURATION_MS)
    }

    pub fn sample(&mut self, now_ms: f64) -> TweenFrame {
        let start = *self.started_at.get_or_insert(now_ms);
        let elapsed = now_ms - start;
        let progress = if self.duration_ms > 0.0 {
            (elapsed / self.duration_ms).clamp(0.0, 1.0)
        } else {
            1.0
        };
        TweenFrame {
            position: self.from + self.distance * ease_in_out_cubic(progress),
            done: progress >= 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_hits_endpoints_and_midpoint() {
        assert_eq!(ease_in_out_cubic(0.0), 0.0);
        assert_eq!(ease_in_out_cubic(1.0), 1.0);
        assert!((ease_in_out_cubic(0.5) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn tween_runs_from_first_timestamp() {
        let mut t = ScrollTween::new(100.0, 500.0, 1000.0);
        let f0 = t.sample(5000.0);
        assert_eq!(f0.position, 100.0);
        assert!(!f0.done);
        let mid = t.sample(5500.0);
        assert!((mid.position - 300.0).abs() < 1e-9);
        let end = t.sample(6000.0);
        assert_eq!(end.position, 500.0);
        assert!(end.done);
    }

    #[test]
    fn anchor_target_leaves_room_for_the_header() {
        assert_eq!(anchor_target(1000.0), 920.0);
    }
}

//! One-shot reveal on first viewport entry, with staggered children.

use crate::config::FxConfig;
use crate::constants::{STAGGER_EASING, STAGGER_SETTLE_MS};
use fnv::FnvHashSet;
use smallvec::SmallVec;
use std::hash::Hash;

/// Host capability: report intersection transitions for a target.
///
/// The callback receives `true` when the target starts intersecting the
/// viewport and `false` when it stops.
pub trait VisibilitySource {
    type Target;

    fn observe(&mut self, target: &Self::Target, on_change: Box<dyn FnMut(bool)>);
}

/// Observe `target` and run `on_enter` the first time it becomes visible.
/// Later transitions are ignored.
pub fn observe_once<V, F>(source: &mut V, target: &V::Target, on_enter: F)
where
    V: VisibilitySource,
    F: FnOnce() + 'static,
{
    let mut pending = Some(on_enter);
    source.observe(
        target,
        Box::new(move |intersecting| {
            if intersecting {
                if let Some(f) = pending.take() {
                    f();
                }
            }
        }),
    );
}

/// Tracks which elements already carry the persistent "revealed" marker.
#[derive(Debug)]
pub struct RevealTracker<K> {
    revealed: FnvHashSet<K>,
}

impl<K: Hash + Eq> Default for RevealTracker<K> {
    fn default() -> Self {
        Self {
            revealed: FnvHashSet::default(),
        }
    }
}

impl<K: Hash + Eq> RevealTracker<K> {
    /// Returns `true` exactly once per key: on its first intersecting event.
    pub fn on_visibility(&mut self, key: K, intersecting: bool) -> bool {
        intersecting && self.revealed.insert(key)
    }

    pub fn is_revealed(&self, key: &K) -> bool {
        self.revealed.contains(key)
    }

    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }
}

/// CSS-style cubic Bézier easing through (0,0), (x1,y1), (x2,y2), (1,1).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Default for CubicBezier {
    fn default() -> Self {
        let [x1, y1, x2, y2] = STAGGER_EASING;
        Self { x1, y1, x2, y2 }
    }
}

impl CubicBezier {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    #[inline]
    fn axis(a: f64, b: f64, t: f64) -> f64 {
        let u = 1.0 - t;
        3.0 * u * u * t * a + 3.0 * u * t * t * b + t * t * t
    }

    #[inline]
    fn axis_slope(a: f64, b: f64, t: f64) -> f64 {
        let u = 1.0 - t;
        3.0 * u * u * a + 6.0 * u * t * (b - a) + 3.0 * t * t * (1.0 - b)
    }

    /// Eased progress for linear progress `x` in `[0, 1]`.
    pub fn sample(&self, x: f64) -> f64 {
        let x = x.clamp(0.0, 1.0);
        // Newton first, bisection if the slope flattens out.
        let mut t = x;
        for _ in 0..8 {
            let err = Self::axis(self.x1, self.x2, t) - x;
            if err.abs() < 1e-7 {
                return Self::axis(self.y1, self.y2, t);
            }
            let d = Self::axis_slope(self.x1, self.x2, t);
            if d.abs() < 1e-6 {
                break;
            }
            t = (t - err / d).clamp(0.0, 1.0);
        }
        let (mut lo, mut hi) = (0.0, 1.0);
        t = x;
        for _ in 0..50 {
            let v = Self::axis(self.x1, self.x2, t);
            if (v - x).abs() < 1e-7 {
                break;
            }
            if v < x {
                lo = t;
            } else {
                hi = t;
            }
            t = 0.5 * (lo + hi);
        }
        Self::axis(self.y1, self.y2, t)
    }

    pub fn css(&self) -> String {
        format!(
            "cubic-bezier({}, {}, {}, {})",
            self.x1, self.y1, self.x2, self.y2
        )
    }
}

/// Timing for one child of a staggered container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StaggerStep {
    pub index: usize,
    /// When the child is put into its hidden, offset start state.
    pub stage_at_ms: u32,
    /// When the child is released to transition into place.
    pub release_at_ms: u32,
}

pub type StaggerPlan = SmallVec<[StaggerStep; 8]>;

pub fn stagger_plan(children: usize, spacing_ms: u32) -> StaggerPlan {
    (0..children)
        .map(|index| {
            let stage_at_ms = spacing_ms.saturating_mul(index as u32);
            StaggerStep {
                index,
                stage_at_ms,
                release_at_ms: stage_at_ms.saturating_add(STAGGER_SETTLE_MS),
            }
        })
        .collect()
}

/// Staggered-reveal parameters taken from the config.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stagger {
    pub spacing_ms: u32,
    pub duration_ms: u32,
    pub easing: CubicBezier,
}

impl Stagger {
    pub fn from_config(config: &FxConfig) -> Self {
        Self {
            spacing_ms: config.stagger_spacing_ms,
            duration_ms: config.stagger_duration_ms,
            easing: CubicBezier::default(),
        }
    }

    pub fn plan(&self, children: usize) -> StaggerPlan {
        stagger_plan(children, self.spacing_ms)
    }

    /// Value for the `transition` property of every staged child.
    pub fn transition_css(&self) -> String {
        format!(
            "all {}s {}",
            self.duration_ms as f64 / 1000.0,
            self.easing.css()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_fires_once_per_key() {
        let mut t = RevealTracker::default();
        assert!(!t.on_visibility("a", false));
        assert!(t.on_visibility("a", true));
        assert!(!t.on_visibility("a", true));
        assert!(!t.on_visibility("a", false));
        assert!(t.on_visibility("b", true));
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn bezier_endpoints_and_monotonicity() {
        let e = CubicBezier::default();
        assert!(e.sample(0.0).abs() < 1e-6);
        assert!((e.sample(1.0) - 1.0).abs() < 1e-6);
        let mut prev = 0.0;
        for i in 1..=20 {
            let v = e.sample(i as f64 / 20.0);
            assert!(v >= prev - 1e-9);
            prev = v;
        }
        // ease-out shape: ahead of linear at the midpoint
        assert!(e.sample(0.5) > 0.5);
    }

    #[test]
    fn linear_bezier_is_identity() {
        let lin = CubicBezier::new(1.0 / 3.0, 1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0);
        for x in [0.1, 0.25, 0.5, 0.9] {
            assert!((lin.sample(x) - x).abs() < 1e-5);
        }
    }

    #[test]
    fn transition_css_matches_defaults() {
        let s = Stagger::from_config(&FxConfig::default());
        assert_eq!(
            s.transition_css(),
            "all 0.6s cubic-bezier(0.25, 0.46, 0.45, 0.94)"
        );
    }

    #[test]
    fn stagger_plan_spaces_children() {
        let plan = stagger_plan(3, 100);
        let stages: Vec<u32> = plan.iter().map(|s| s.stage_at_ms).collect();
        assert_eq!(stages, vec![0, 100, 200]);
        assert!(plan.iter().all(|s| s.release_at_ms == s.stage_at_ms + 50));
    }
}

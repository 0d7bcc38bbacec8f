//! Stateless viewport helpers shared by every scroll-driven effect.

/// Client-space rectangle, as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }
}

/// Document-space vertical extent of a section: `[top, top + height)`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VerticalBounds {
    pub top: f64,
    pub height: f64,
}

impl VerticalBounds {
    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    #[inline]
    pub fn contains(&self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// True when any part of `rect` lies vertically inside a viewport of the
/// given height.
#[inline]
pub fn intersects_viewport(rect: &Rect, viewport_height: f64) -> bool {
    rect.top < viewport_height && rect.bottom() > 0.0
}

/// How far the viewport's bottom edge has advanced past the top of `rect`.
#[inline]
pub fn viewport_advance(rect: &Rect, viewport_height: f64) -> f64 {
    viewport_height - rect.top
}

/// Pointer position inside `rect` as percentages, for `--mouse-x`/`--mouse-y`.
/// Returns `None` for a degenerate rect.
pub fn pointer_percent(rect: &Rect, client_x: f64, client_y: f64) -> Option<[f64; 2]> {
    if rect.width <= 0.0 || rect.height <= 0.0 {
        return None;
    }
    let x = (client_x - rect.left) / rect.width * 100.0;
    let y = (client_y - rect.top) / rect.height * 100.0;
    Some([x, y])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_partially_above_viewport_still_intersects() {
        let r = Rect::new(0.0, -50.0, 100.0, 80.0);
        assert!(intersects_viewport(&r, 600.0));
        let gone = Rect::new(0.0, -80.0, 100.0, 80.0);
        assert!(!intersects_viewport(&gone, 600.0));
        let below = Rect::new(0.0, 600.0, 100.0, 80.0);
        assert!(!intersects_viewport(&below, 600.0));
    }

    #[test]
    fn bounds_are_half_open() {
        let b = VerticalBounds::new(100.0, 50.0);
        assert!(b.contains(100.0));
        assert!(b.contains(149.9));
        assert!(!b.contains(150.0));
        assert!(!b.contains(99.9));
    }

    #[test]
    fn pointer_percent_maps_corners() {
        let r = Rect::new(10.0, 20.0, 200.0, 100.0);
        assert_eq!(pointer_percent(&r, 10.0, 20.0), Some([0.0, 0.0]));
        assert_eq!(pointer_percent(&r, 110.0, 120.0), Some([50.0, 100.0]));
        assert_eq!(pointer_percent(&Rect::default(), 1.0, 1.0), None);
    }
}

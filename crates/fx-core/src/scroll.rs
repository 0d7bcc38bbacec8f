//! Scroll-synchronised effects: progress bar, hero parallax, title drift,
//! active navigation and the scroll-to-top control.
//!
//! The host feeds a [`ScrollSnapshot`] at most once per frame (see
//! [`FrameCoalescer`]) and applies the returned [`ScrollUpdate`] to the DOM.

use crate::config::FxConfig;
use crate::geometry::{intersects_viewport, viewport_advance, Rect, VerticalBounds};
use fnv::FnvHashMap;

/// Collapses bursts of scroll/resize notifications into one recompute per
/// frame. Extra requests while one is pending are dropped.
#[derive(Debug, Default)]
pub struct FrameCoalescer {
    pending: bool,
}

impl FrameCoalescer {
    /// Returns `true` when the caller should schedule a frame.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Called by the scheduled frame before it recomputes.
    pub fn begin_frame(&mut self) {
        self.pending = false;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub id: String,
    pub bounds: VerticalBounds,
}

/// Geometry read from the page at recompute time; never persisted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScrollSnapshot {
    pub offset: f64,
    /// `scrollHeight - clientHeight`.
    pub max_extent: f64,
    pub viewport_height: f64,
    pub sections: Vec<Section>,
    /// Client rects of the section titles, in document order.
    pub titles: Vec<Rect>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroStyle {
    pub translate_y: f64,
    pub opacity: f64,
}

/// Progress in percent, clamped to `[0, 100]`; zero when the page cannot scroll.
pub fn progress_percent(offset: f64, max_extent: f64) -> f64 {
    if max_extent <= 0.0 {
        return 0.0;
    }
    (offset / max_extent * 100.0).clamp(0.0, 100.0)
}

pub fn hero_style(offset: f64, parallax: f64, fade_distance: f64) -> HeroStyle {
    HeroStyle {
        translate_y: offset * parallax,
        opacity: (1.0 - offset / fade_distance).clamp(0.0, 1.0),
    }
}

/// Horizontal drift for a title, or `None` while it is off screen (its last
/// transform is left in place).
pub fn title_offset(rect: &Rect, viewport_height: f64, factor: f64) -> Option<f64> {
    intersects_viewport(rect, viewport_height).then(|| viewport_advance(rect, viewport_height) * factor)
}

/// Index of the section whose `[top, top + height)` holds `probe`.
pub fn active_section(sections: &[Section], probe: f64) -> Option<usize> {
    sections.iter().position(|s| s.bounds.contains(probe))
}

/// Maps section ids to navigation link indices via their `#id` hrefs.
#[derive(Debug, Default)]
pub struct NavMap {
    by_section: FnvHashMap<String, usize>,
}

impl NavMap {
    pub fn from_hrefs<I, S>(hrefs: I) -> Self
    where
        I: IntoIterator<Item = Option<S>>,
        S: AsRef<str>,
    {
        let mut by_section = FnvHashMap::default();
        for (i, href) in hrefs.into_iter().enumerate() {
            if let Some(id) = href.as_ref().and_then(|h| h.as_ref().strip_prefix('#')) {
                if !id.is_empty() {
                    by_section.entry(id.to_string()).or_insert(i);
                }
            }
        }
        Self { by_section }
    }

    pub fn link_for(&self, section_id: &str) -> Option<usize> {
        self.by_section.get(section_id).copied()
    }

    pub fn len(&self) -> usize {
        self.by_section.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_section.is_empty()
    }
}

/// Which navigation link is highlighted. Emits a change only on transitions.
#[derive(Debug, Default)]
pub struct NavHighlight {
    current: Option<usize>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavChange {
    pub previous: Option<usize>,
    pub next: Option<usize>,
}

impl NavHighlight {
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn set(&mut self, next: Option<usize>) -> Option<NavChange> {
        if self.current == next {
            return None;
        }
        let change = NavChange {
            previous: self.current,
            next,
        };
        self.current = next;
        Some(change)
    }
}

/// DOM work for one recompute. Fields left `None` need no mutation.
#[derive(Clone, Debug, PartialEq)]
pub struct ScrollUpdate {
    pub progress_pct: f64,
    pub hero: HeroStyle,
    /// One entry per snapshot title.
    pub title_offsets: Vec<Option<f64>>,
    pub active_section: Option<usize>,
    pub nav: Option<NavChange>,
    pub scroll_top_visible: Option<bool>,
}

pub struct ScrollScheduler {
    config: FxConfig,
    coalescer: FrameCoalescer,
    nav_map: NavMap,
    highlight: NavHighlight,
    scroll_top_visible: Option<bool>,
}

impl ScrollScheduler {
    pub fn new(config: &FxConfig, nav_map: NavMap) -> Self {
        Self {
            config: config.clone(),
            coalescer: FrameCoalescer::default(),
            nav_map,
            highlight: NavHighlight::default(),
            scroll_top_visible: None,
        }
    }

    /// A scroll or resize notification arrived. `true` means schedule a frame.
    pub fn notify(&mut self) -> bool {
        self.coalescer.request()
    }

    pub fn is_pending(&self) -> bool {
        self.coalescer.is_pending()
    }

    pub fn highlighted(&self) -> Option<usize> {
        self.highlight.current()
    }

    /// Force a link active (e.g. on anchor click).
    pub fn highlight_link(&mut self, link: Option<usize>) -> Option<NavChange> {
        self.highlight.set(link)
    }

    /// Highlight whichever section contains `offset + probe_offset`.
    pub fn sync_nav(&mut self, snapshot: &ScrollSnapshot, probe_offset: f64) -> Option<NavChange> {
        let link = active_section(&snapshot.sections, snapshot.offset + probe_offset)
            .and_then(|i| self.nav_map.link_for(&snapshot.sections[i].id));
        self.highlight.set(link)
    }

    /// Run the frame's recompute. Clears the pending flag first so a
    /// notification arriving during DOM application schedules a new frame.
    pub fn recompute(&mut self, snapshot: &ScrollSnapshot) -> ScrollUpdate {
        self.coalescer.begin_frame();
        let cfg = &self.config;
        let active = active_section(&snapshot.sections, snapshot.offset + cfg.active_offset);
        let link = active.and_then(|i| self.nav_map.link_for(&snapshot.sections[i].id));
        let nav = self.highlight.set(link);

        let visible = snapshot.offset > cfg.scroll_top_threshold;
        let scroll_top_visible = if self.scroll_top_visible == Some(visible) {
            None
        } else {
            self.scroll_top_visible = Some(visible);
            Some(visible)
        };

        ScrollUpdate {
            progress_pct: progress_percent(snapshot.offset, snapshot.max_extent),
            hero: hero_style(
                snapshot.offset,
                cfg.hero_parallax_factor,
                cfg.hero_fade_distance,
            ),
            title_offsets: snapshot
                .titles
                .iter()
                .map(|r| title_offset(r, snapshot.viewport_height, cfg.title_parallax_factor))
                .collect(),
            active_section: active,
            nav,
            scroll_top_visible,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coalescer_drops_requests_until_the_frame_runs() {
        let mut c = FrameCoalescer::default();
        assert!(c.request());
        assert!(!c.request());
        assert!(!c.request());
        c.begin_frame();
        assert!(c.request());
    }

    #[test]
    fn hero_fades_out_by_the_fade_distance() {
        let h = hero_style(400.0, 0.3, 800.0);
        assert!((h.translate_y - 120.0).abs() < 1e-9);
        assert!((h.opacity - 0.5).abs() < 1e-9);
        assert_eq!(hero_style(2000.0, 0.3, 800.0).opacity, 0.0);
    }

    #[test]
    fn title_offset_only_for_visible_titles() {
        let visible = Rect::new(0.0, 300.0, 100.0, 40.0);
        assert_eq!(title_offset(&visible, 800.0, 0.1), Some(50.0));
        let below = Rect::new(0.0, 900.0, 100.0, 40.0);
        assert_eq!(title_offset(&below, 800.0, 0.1), None);
    }

    #[test]
    fn nav_map_reads_fragment_hrefs() {
        let map = NavMap::from_hrefs([Some("#home"), None, Some("/blog"), Some("#work"), Some("#")]);
        assert_eq!(map.link_for("home"), Some(0));
        assert_eq!(map.link_for("work"), Some(3));
        assert_eq!(map.link_for("blog"), None);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn highlight_reports_transitions_only() {
        let mut h = NavHighlight::default();
        assert_eq!(
            h.set(Some(2)),
            Some(NavChange {
                previous: None,
                next: Some(2)
            })
        );
        assert_eq!(h.set(Some(2)), None);
        assert_eq!(
            h.set(None),
            Some(NavChange {
                previous: Some(2),
                next: None
            })
        );
    }
}

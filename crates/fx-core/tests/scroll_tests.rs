// Host-side tests for the scroll effect scheduler.

use fx_core::geometry::{Rect, VerticalBounds};
use fx_core::scroll::{progress_percent, NavChange};
use fx_core::{FxConfig, NavMap, ScrollScheduler, ScrollSnapshot, Section};

fn sections() -> Vec<Section> {
    [("home", 0.0, 900.0), ("about", 900.0, 700.0), ("work", 1600.0, 1200.0)]
        .into_iter()
        .map(|(id, top, h)| Section {
            id: id.to_string(),
            bounds: VerticalBounds::new(top, h),
        })
        .collect()
}

fn snapshot(offset: f64) -> ScrollSnapshot {
    ScrollSnapshot {
        offset,
        max_extent: 2000.0,
        viewport_height: 800.0,
        sections: sections(),
        titles: vec![Rect::new(0.0, 1000.0 - offset, 600.0, 60.0)],
    }
}

fn scheduler() -> ScrollScheduler {
    let nav = NavMap::from_hrefs([Some("#home"), Some("#about"), Some("#work")]);
    ScrollScheduler::new(&FxConfig::default(), nav)
}

#[test]
fn progress_spans_zero_to_hundred_monotonically() {
    assert_eq!(progress_percent(0.0, 2000.0), 0.0);
    assert_eq!(progress_percent(2000.0, 2000.0), 100.0);
    let mut prev = -1.0;
    for step in 0..=200 {
        let p = progress_percent(step as f64 * 10.0, 2000.0);
        assert!(p >= prev);
        assert!((0.0..=100.0).contains(&p));
        prev = p;
    }
}

#[test]
fn progress_is_clamped_and_safe_on_short_pages() {
    assert_eq!(progress_percent(2500.0, 2000.0), 100.0);
    assert_eq!(progress_percent(-20.0, 2000.0), 0.0);
    assert_eq!(progress_percent(0.0, 0.0), 0.0);
}

#[test]
fn notifications_coalesce_into_one_frame() {
    let mut s = scheduler();
    let scheduled = (0..50).filter(|_| s.notify()).count();
    assert_eq!(scheduled, 1);
    assert!(s.is_pending());
    s.recompute(&snapshot(0.0));
    assert!(!s.is_pending());
    assert!(s.notify(), "a new burst after the frame schedules again");
}

#[test]
fn active_link_tracks_offset_plus_probe() {
    let mut s = scheduler();
    let u = s.recompute(&snapshot(0.0));
    assert_eq!(u.active_section, Some(0));
    assert_eq!(
        u.nav,
        Some(NavChange {
            previous: None,
            next: Some(0)
        })
    );

    // 799 + 100 is still inside "home".
    assert_eq!(s.recompute(&snapshot(799.0)).nav, None);
    // 800 + 100 crosses into "about".
    let u = s.recompute(&snapshot(800.0));
    assert_eq!(u.active_section, Some(1));
    assert_eq!(
        u.nav,
        Some(NavChange {
            previous: Some(0),
            next: Some(1)
        })
    );
    assert_eq!(s.highlighted(), Some(1));
}

#[test]
fn no_section_means_no_active_link() {
    let mut s = scheduler();
    s.recompute(&snapshot(1700.0));
    assert_eq!(s.highlighted(), Some(2));
    let mut past_end = snapshot(2800.0);
    past_end.max_extent = 3000.0;
    let u = s.recompute(&past_end);
    assert_eq!(u.active_section, None);
    assert_eq!(s.highlighted(), None);
}

#[test]
fn scroll_top_visibility_toggles_at_threshold() {
    let mut s = scheduler();
    assert_eq!(s.recompute(&snapshot(0.0)).scroll_top_visible, Some(false));
    assert_eq!(s.recompute(&snapshot(500.0)).scroll_top_visible, None);
    assert_eq!(s.recompute(&snapshot(501.0)).scroll_top_visible, Some(true));
    assert_eq!(s.recompute(&snapshot(900.0)).scroll_top_visible, None);
    assert_eq!(s.recompute(&snapshot(10.0)).scroll_top_visible, Some(false));
}

#[test]
fn hero_and_titles_follow_scroll() {
    let mut s = scheduler();
    let u = s.recompute(&snapshot(400.0));
    assert!((u.hero.translate_y - 120.0).abs() < 1e-9);
    assert!((u.hero.opacity - 0.5).abs() < 1e-9);
    // title top = 600 within an 800px viewport
    assert_eq!(u.title_offsets.len(), 1);
    assert!((u.title_offsets[0].unwrap() - 20.0).abs() < 1e-9);

    let u = s.recompute(&snapshot(0.0));
    assert_eq!(u.title_offsets, vec![None], "title at 1000 is below the fold");
}

#[test]
fn nav_sync_uses_its_own_probe() {
    let mut s = scheduler();
    let snap = snapshot(750.0);
    // 750 + 200 lands in "about"; the scroll-spy probe (850) would still say "home".
    assert_eq!(
        s.sync_nav(&snap, FxConfig::default().nav_sync_offset),
        Some(NavChange {
            previous: None,
            next: Some(1)
        })
    );
}

#[test]
fn forced_highlight_is_reported_once() {
    let mut s = scheduler();
    assert!(s.highlight_link(Some(2)).is_some());
    assert!(s.highlight_link(Some(2)).is_none());
}

#[test]
fn clearing_the_highlight_deactivates_the_current_link() {
    let mut s = scheduler();
    s.highlight_link(Some(1));
    assert_eq!(
        s.highlight_link(None),
        Some(NavChange {
            previous: Some(1),
            next: None
        })
    );
    assert_eq!(s.highlighted(), None);
    assert!(s.highlight_link(None).is_none());
}

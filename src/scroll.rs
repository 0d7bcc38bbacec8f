//! Wires the scroll scheduler to the page: one recompute per frame on
//! scroll/resize, results applied to the progress bar, hero, titles, nav
//! links and the scroll-to-top control.

use crate::constants::*;
use crate::{dom, events, frame, style, Layer};
use fx_core::geometry::{Rect, VerticalBounds};
use fx_core::{FxConfig, NavChange, NavMap, ScrollScheduler, ScrollSnapshot, ScrollUpdate, Section};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Elements the scheduler reads from or writes to. Any may be absent.
pub struct ScrollTargets {
    pub progress: Option<web::HtmlElement>,
    pub hero: Option<web::HtmlElement>,
    pub titles: Vec<web::Element>,
    pub sections: Vec<(String, web::HtmlElement)>,
    pub nav_links: Vec<web::Element>,
    pub scroll_top: Option<web::Element>,
}

impl ScrollTargets {
    fn collect(document: &web::Document) -> Self {
        let sections = dom::query_all(document, SECTIONS)
            .into_iter()
            .filter_map(|el| {
                let id = el.id();
                el.dyn_into::<web::HtmlElement>().ok().map(|h| (id, h))
            })
            .collect();
        Self {
            progress: dom::query_html(document, PROGRESS_BAR),
            hero: dom::query_html(document, HERO),
            titles: dom::query_all(document, SECTION_TITLES),
            sections,
            nav_links: dom::query_all(document, NAV_LINKS),
            scroll_top: document.get_element_by_id(SCROLL_TOP_ID),
        }
    }

    fn snapshot(&self) -> ScrollSnapshot {
        let (max_extent, viewport_height) = web::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
            .map(|root| {
                let client = root.client_height() as f64;
                ((root.scroll_height() as f64 - client).max(0.0), client)
            })
            .unwrap_or((0.0, 0.0));
        let viewport_height = web::window()
            .and_then(|w| w.inner_height().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(viewport_height);
        ScrollSnapshot {
            offset: dom::scroll_offset(),
            max_extent,
            viewport_height,
            sections: self
                .sections
                .iter()
                .map(|(id, el)| Section {
                    id: id.clone(),
                    bounds: VerticalBounds::new(el.offset_top() as f64, el.offset_height() as f64),
                })
                .collect(),
            titles: self
                .titles
                .iter()
                .map(|t| {
                    let r = t.get_bounding_client_rect();
                    Rect::new(r.left(), r.top(), r.width(), r.height())
                })
                .collect(),
        }
    }

    pub fn apply_nav(&self, change: NavChange) {
        if let Some(el) = change.previous.and_then(|i| self.nav_links.get(i)) {
            dom::set_class(el, CLASS_ACTIVE, false);
        }
        if let Some(el) = change.next.and_then(|i| self.nav_links.get(i)) {
            dom::set_class(el, CLASS_ACTIVE, true);
        }
    }

    fn apply(&self, update: &ScrollUpdate) {
        if let Some(bar) = &self.progress {
            _ = bar.style().set_property("width", &style::percent(update.progress_pct));
        }
        if let Some(hero) = &self.hero {
            let s = hero.style();
            _ = s.set_property("transform", &style::translate_y(update.hero.translate_y));
            _ = s.set_property("opacity", &style::number(update.hero.opacity));
        }
        for (title, offset) in self.titles.iter().zip(&update.title_offsets) {
            if let Some(dx) = offset {
                dom::set_style(title, "transform", &style::translate_x(*dx));
            }
        }
        if let Some(change) = update.nav {
            self.apply_nav(change);
        }
        if let (Some(btn), Some(visible)) = (&self.scroll_top, update.scroll_top_visible) {
            dom::set_class(btn, CLASS_VISIBLE, visible);
        }
    }
}

/// Scheduler state shared with the anchor-scroll wiring.
pub struct ScrollWiring {
    pub scheduler: RefCell<ScrollScheduler>,
    pub targets: ScrollTargets,
}

impl ScrollWiring {
    pub fn snapshot(&self) -> ScrollSnapshot {
        self.targets.snapshot()
    }

    fn recompute(&self) {
        let snap = self.targets.snapshot();
        let update = self.scheduler.borrow_mut().recompute(&snap);
        self.targets.apply(&update);
    }
}

pub fn wire(
    document: &web::Document,
    config: &FxConfig,
    layer: &mut Layer,
) -> anyhow::Result<Rc<ScrollWiring>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let targets = ScrollTargets::collect(document);
    let nav_map = NavMap::from_hrefs(targets.nav_links.iter().map(|l| l.get_attribute("href")));
    log::info!(
        "[scroll] {} sections, {} nav links, {} titles",
        targets.sections.len(),
        nav_map.len(),
        targets.titles.len()
    );
    let wiring = Rc::new(ScrollWiring {
        scheduler: RefCell::new(ScrollScheduler::new(config, nav_map)),
        targets,
    });

    for event in ["scroll", "resize"] {
        let w = wiring.clone();
        events::listen_into(&mut layer.subscriptions, &window, event, move |_: web::Event| {
            if w.scheduler.borrow_mut().notify() {
                let w = w.clone();
                frame::request_once(move |_| w.recompute());
            }
        });
    }

    // Initial state without waiting for the first scroll.
    wiring.recompute();
    Ok(wiring)
}

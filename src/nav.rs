//! Smooth in-page anchor scrolling and the scroll-to-top control.

use crate::constants::*;
use crate::scroll::ScrollWiring;
use crate::{dom, events, frame, style, Layer};
use fx_core::tween::anchor_target;
use fx_core::{FxConfig, LoopControl, ScrollTween, StopHandle};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// At most one tween runs; starting another stops the previous one.
#[derive(Default)]
pub struct ActiveTween(RefCell<Option<StopHandle>>);

impl ActiveTween {
    fn replace(&self) -> StopHandle {
        let handle = StopHandle::new();
        if let Some(old) = self.0.borrow_mut().replace(handle.clone()) {
            old.stop();
        }
        handle
    }

    pub fn stop(&self) {
        if let Some(h) = self.0.borrow_mut().take() {
            h.stop();
        }
    }
}

fn scroll_smoothly(
    active: &Rc<ActiveTween>,
    to: f64,
    on_done: impl FnOnce() + 'static,
) {
    let stop = active.replace();
    let mut tween = ScrollTween::anchor(dom::scroll_offset(), to);
    let mut on_done = Some(on_done);
    frame::start_loop(stop, move |ts| {
        let f = tween.sample(ts);
        dom::scroll_to(f.position);
        if f.done {
            if let Some(done) = on_done.take() {
                done();
            }
            return LoopControl::Stop;
        }
        LoopControl::Continue
    });
}

pub fn wire(
    document: &web::Document,
    config: &FxConfig,
    scroll: &Rc<ScrollWiring>,
    layer: &mut Layer,
) {
    let active = Rc::new(ActiveTween::default());
    let nav_sync_offset = config.nav_sync_offset;

    for anchor in dom::query_all(document, ANCHORS) {
        let Some(href) = anchor.get_attribute("href") else {
            continue;
        };
        let link_index = scroll.targets.nav_links.iter().position(|l| *l == anchor);
        let (scroll, active) = (scroll.clone(), active.clone());
        let doc = document.clone();
        events::listen_into(
            &mut layer.subscriptions,
            &anchor,
            "click",
            move |ev: web::MouseEvent| {
                ev.prevent_default();
                let Some(id) = style::fragment_id(&href) else {
                    return;
                };
                let Some(target) = doc
                    .get_element_by_id(id)
                    .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
                else {
                    log::debug!("[nav] no target for #{id}");
                    return;
                };
                // Anchors outside the nav still clear the current highlight.
                let change = scroll.scheduler.borrow_mut().highlight_link(link_index);
                if let Some(change) = change {
                    scroll.targets.apply_nav(change);
                }
                let s = scroll.clone();
                scroll_smoothly(
                    &active,
                    anchor_target(target.offset_top() as f64),
                    move || {
                        let snap = s.snapshot();
                        let change = s.scheduler.borrow_mut().sync_nav(&snap, nav_sync_offset);
                        if let Some(change) = change {
                            s.targets.apply_nav(change);
                        }
                    },
                );
            },
        );
    }

    if let Some(btn) = scroll.targets.scroll_top.clone() {
        let active = active.clone();
        events::listen_into(&mut layer.subscriptions, &btn, "click", move |_: web::Event| {
            scroll_smoothly(&active, 0.0, || {});
        });
    }

    layer.tween = Some(active);
}

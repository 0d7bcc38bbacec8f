//! Testimonial carousel: indicator dots, swipe, and auto-advance.

use crate::constants::*;
use crate::{dom, events, Layer};
use fx_core::{Carousel, FxConfig, SlideChange, TimerHost};
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type CarouselSlot = Rc<RefCell<Option<Carousel<WebInterval>>>>;

/// `setInterval` timer host. The callback lives as long as the host.
pub struct WebInterval {
    callback: Closure<dyn FnMut()>,
}

impl TimerHost for WebInterval {
    type Handle = i32;

    fn start_interval(&mut self, interval_ms: u32) -> Option<i32> {
        let w = web::window()?;
        w.set_interval_with_callback_and_timeout_and_arguments_0(
            self.callback.as_ref().unchecked_ref(),
            interval_ms.min(i32::MAX as u32) as i32,
        )
        .map_err(|e| log::warn!("[carousel] setInterval: {:?}", e))
        .ok()
    }

    fn cancel(&mut self, handle: i32) {
        if let Some(w) = web::window() {
            w.clear_interval_with_handle(handle);
        }
    }
}

struct Slides {
    cards: Vec<web::Element>,
    dots: Vec<web::Element>,
}

impl Slides {
    fn apply(&self, change: SlideChange) {
        for list in [&self.cards, &self.dots] {
            if let Some(el) = list.get(change.from) {
                dom::set_class(el, CLASS_ACTIVE, false);
            }
            if let Some(el) = list.get(change.to) {
                dom::set_class(el, CLASS_ACTIVE, true);
            }
        }
    }
}

fn with_carousel(
    slot: &Weak<RefCell<Option<Carousel<WebInterval>>>>,
    f: impl FnOnce(&mut Carousel<WebInterval>) -> Option<SlideChange>,
) -> Option<SlideChange> {
    let slot = slot.upgrade()?;
    let mut guard = slot.borrow_mut();
    f(guard.as_mut()?)
}

fn first_touch_x(ev: &web::TouchEvent) -> Option<f64> {
    ev.changed_touches().get(0).map(|t| t.screen_x() as f64)
}

pub fn wire(document: &web::Document, config: &FxConfig, layer: &mut Layer) {
    let slides = Rc::new(Slides {
        cards: dom::query_all(document, SLIDES),
        dots: dom::query_all(document, SLIDE_DOTS),
    });
    let slot: CarouselSlot = Rc::new(RefCell::new(None));

    let tick_slot = Rc::downgrade(&slot);
    let tick_slides = slides.clone();
    let callback = Closure::wrap(Box::new(move || {
        if let Some(change) = with_carousel(&tick_slot, |c| Some(c.on_timer())) {
            tick_slides.apply(change);
        }
    }) as Box<dyn FnMut()>);

    let Some(mut carousel) = Carousel::new(slides.cards.len(), config, WebInterval { callback })
    else {
        log::debug!("[carousel] no slides");
        return;
    };
    slides.apply(SlideChange { from: 0, to: 0 });
    carousel.start();
    *slot.borrow_mut() = Some(carousel);

    for (i, dot) in slides.dots.iter().enumerate() {
        let (weak, slides) = (Rc::downgrade(&slot), slides.clone());
        events::listen_into(&mut layer.subscriptions, dot, "click", move |_: web::Event| {
            let change = with_carousel(&weak, |c| (i < c.len()).then(|| c.goto(i)));
            if let Some(change) = change {
                slides.apply(change);
            }
        });
    }

    if let Some(slider) = document.query_selector(SLIDER).ok().flatten() {
        let weak = Rc::downgrade(&slot);
        events::listen_into(
            &mut layer.subscriptions,
            &slider,
            "touchstart",
            move |ev: web::TouchEvent| {
                if let Some(x) = first_touch_x(&ev) {
                    with_carousel(&weak, |c| {
                        c.touch_start(x);
                        None
                    });
                }
            },
        );
        let (weak, slides) = (Rc::downgrade(&slot), slides.clone());
        events::listen_into(
            &mut layer.subscriptions,
            &slider,
            "touchend",
            move |ev: web::TouchEvent| {
                let Some(x) = first_touch_x(&ev) else { return };
                if let Some(change) = with_carousel(&weak, |c| c.touch_end(x)) {
                    slides.apply(change);
                }
            },
        );
    }

    log::info!(
        "[carousel] {} slides, advancing every {}ms",
        slides.cards.len(),
        config.carousel_interval_ms
    );
    layer.carousel = Some(slot);
}

#![cfg(target_arch = "wasm32")]
//! Browser host for the portfolio visual layer.
//!
//! Every component is wired against the live DOM here and driven by the
//! platform-free state machines in `fx_core`.

use fx_core::{GridPulse, StopHandle};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use web_sys as web;

mod background;
mod canvas;
mod carousel;
mod constants;
mod counter;
mod cursor;
mod dom;
mod events;
mod frame;
mod grid;
mod nav;
mod observer;
mod reveal;
mod scroll;
mod style;

/// Everything the running layer owns. Dropping it detaches listeners and
/// disconnects observers; loops are stopped through their handles.
#[derive(Default)]
pub(crate) struct Layer {
    subscriptions: Vec<events::Subscription>,
    loops: Vec<StopHandle>,
    watches: Vec<observer::IntersectionWatch>,
    grids: Vec<Rc<RefCell<GridPulse>>>,
    carousel: Option<carousel::CarouselSlot>,
    tween: Option<Rc<nav::ActiveTween>>,
}

impl Layer {
    fn shut_down(&mut self) {
        for stop in self.loops.drain(..) {
            stop.stop();
        }
        for pulse in self.grids.drain(..) {
            pulse.borrow_mut().on_visibility(false);
        }
        if let Some(tween) = self.tween.take() {
            tween.stop();
        }
        if let Some(slot) = self.carousel.take() {
            // Dropping the carousel cancels its interval.
            drop(slot.borrow_mut().take());
        }
        self.watches.clear();
        self.subscriptions.clear();
    }
}

thread_local! {
    static LAYER: RefCell<Layer> = RefCell::new(Layer::default());
}

static STARTED: AtomicBool = AtomicBool::new(false);

fn skip_on_error(name: &str, result: anyhow::Result<()>) {
    if let Err(e) = result {
        log::error!("[{name}] init failed: {e:?}");
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("fx-web starting");

    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let config = dom::read_config(&document);

    LAYER.with(|layer| {
        let mut layer = layer.borrow_mut();
        carousel::wire(&document, &config, &mut layer);
        if document.ready_state() != "complete" {
            events::listen_into(&mut layer.subscriptions, &window, "load", |_: web::Event| {
                visual_layer_ready();
            });
        }
    });
    if document.ready_state() == "complete" {
        visual_layer_ready();
    }
    Ok(())
}

/// Build the page effects. Only the first call does anything.
#[wasm_bindgen]
pub fn visual_layer_ready() {
    if STARTED.swap(true, Ordering::SeqCst) {
        return;
    }
    let Some(document) = dom::window_document() else {
        log::error!("[ready] no document");
        return;
    };
    let t0 = Instant::now();
    let config = dom::read_config(&document);

    LAYER.with(|layer| {
        let layer = &mut *layer.borrow_mut();
        skip_on_error("particles", background::wire(&document, &config, layer));
        skip_on_error("cursor", cursor::wire(&document, &config, layer));
        match scroll::wire(&document, &config, layer) {
            Ok(wiring) => nav::wire(&document, &config, &wiring, layer),
            Err(e) => log::error!("[scroll] init failed: {e:?}"),
        }
        skip_on_error("reveal", reveal::wire(&document, &config, layer));
        skip_on_error("counter", counter::wire(&document, &config, layer));
        skip_on_error("grid", grid::wire(&document, layer));
        log::info!(
            "[ready] {} listeners, {} loops, {} observers",
            layer.subscriptions.len(),
            layer.loops.len(),
            layer.watches.len()
        );
    });
    log::info!("[ready] visual layer up in {:?}", t0.elapsed());
}

/// Stop every loop and timer and detach every listener.
#[wasm_bindgen]
pub fn teardown_visual_layer() {
    LAYER.with(|layer| layer.borrow_mut().shut_down());
    log::info!("[teardown] visual layer stopped");
}

use fx_core::{LoopControl, StopHandle};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Drive `frame` once per display refresh until it returns
/// [`LoopControl::Stop`] or `stop` is triggered. The stop flag is checked
/// before every re-schedule.
pub fn start_loop(stop: StopHandle, mut frame: impl FnMut(f64) -> LoopControl + 'static) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |ts: f64| {
        if stop.is_stopped() || frame(ts) == LoopControl::Stop || stop.is_stopped() {
            // Drop our own closure to end the loop.
            _ = tick_clone.borrow_mut().take();
            return;
        }
        request(&tick_clone);
    }) as Box<dyn FnMut(f64)>));
    request(&tick);
}

fn request(tick: &Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>) {
    let Some(w) = web::window() else { return };
    if let Some(cb) = tick.borrow().as_ref() {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Run `f` on the next animation frame.
pub fn request_once(f: impl FnOnce(f64) + 'static) {
    if let Some(w) = web::window() {
        let cb = Closure::once_into_js(f);
        _ = w.request_animation_frame(cb.unchecked_ref());
    }
}

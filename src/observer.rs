use anyhow::anyhow;
use fx_core::VisibilitySource;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type Watchers = Rc<RefCell<Vec<(web::Element, Box<dyn FnMut(bool)>)>>>;

/// [`VisibilitySource`] over one `IntersectionObserver`. Disconnects on drop.
pub struct IntersectionWatch {
    observer: web::IntersectionObserver,
    watchers: Watchers,
    _callback: Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>,
}

impl IntersectionWatch {
    pub fn new(threshold: f64, root_margin: &str) -> anyhow::Result<Self> {
        let watchers: Watchers = Rc::new(RefCell::new(Vec::new()));
        let w = watchers.clone();
        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _obs: web::IntersectionObserver| {
                let mut w = w.borrow_mut();
                for entry in entries.iter() {
                    let entry: web::IntersectionObserverEntry = entry.unchecked_into();
                    let target = entry.target();
                    let hit = entry.is_intersecting();
                    for (el, on_change) in w.iter_mut() {
                        if *el == target {
                            on_change(hit);
                        }
                    }
                }
            },
        )
            as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

        let init = web::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        init.set_root_margin(root_margin);
        let observer =
            web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|e| anyhow!("IntersectionObserver: {:?}", e))?;
        Ok(Self {
            observer,
            watchers,
            _callback: callback,
        })
    }
}

impl VisibilitySource for IntersectionWatch {
    type Target = web::Element;

    fn observe(&mut self, target: &web::Element, on_change: Box<dyn FnMut(bool)>) {
        self.watchers
            .borrow_mut()
            .push((target.clone(), on_change));
        self.observer.observe(target);
    }
}

impl Drop for IntersectionWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

use crate::constants::CONFIG_ATTR_PREFIX;
use crate::style;
use fx_core::FxConfig;
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Every element matching `selector`; empty on an invalid selector.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        log::warn!("[dom] bad selector {selector:?}");
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn query_html(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

pub fn children(el: &web::Element) -> Vec<web::HtmlElement> {
    let list = el.children();
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|c| c.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

#[inline]
pub fn set_style(el: &web::Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().set_property(property, value);
    }
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    _ = if on { cl.add_1(class) } else { cl.remove_1(class) };
}

/// Run `f` once after `ms` milliseconds.
pub fn set_timeout(ms: u32, f: impl FnOnce() + 'static) {
    let Some(w) = web::window() else { return };
    let cb = Closure::once_into_js(f);
    if let Err(e) = w.set_timeout_with_callback_and_timeout_and_arguments_0(
        cb.unchecked_ref(),
        ms.min(i32::MAX as u32) as i32,
    ) {
        log::warn!("[dom] setTimeout failed: {:?}", e);
    }
}

pub fn viewport_size() -> Vec2 {
    let Some(w) = web::window() else {
        return Vec2::ZERO;
    };
    let dim = |v: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>| {
        v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0) as f32
    };
    Vec2::new(dim(w.inner_width()), dim(w.inner_height()))
}

#[inline]
pub fn scroll_offset() -> f64 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

pub fn scroll_to(y: f64) {
    if let Some(w) = web::window() {
        w.scroll_to_with_x_and_y(0.0, y);
    }
}

/// Defaults overridden by any `data-fx-*` attributes on `<body>`.
/// Bad overrides are logged and skipped; an override set that fails
/// validation as a whole falls back to the defaults.
pub fn read_config(document: &web::Document) -> FxConfig {
    let mut config = FxConfig::default();
    let Some(body) = document.body() else {
        return config;
    };
    for key in FxConfig::KEYS {
        let attr = style::config_attr(CONFIG_ATTR_PREFIX, key);
        if let Some(value) = body.get_attribute(&attr) {
            if let Err(e) = config.set(key, &value) {
                log::warn!("[config] ignoring {attr}: {e}");
            }
        }
    }
    match config.validate() {
        Ok(()) => config,
        Err(e) => {
            log::warn!("[config] {e}; using defaults");
            FxConfig::default()
        }
    }
}

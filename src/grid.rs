use crate::canvas::{self, CanvasSurface};
use crate::constants::*;
use crate::observer::IntersectionWatch;
use crate::{dom, frame, Layer};
use fx_core::{GridPulse, VisibilitySource};
use glam::Vec2;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Pulsing grid overlays on project images, animated only while visible.
pub fn wire(document: &web::Document, layer: &mut Layer) -> anyhow::Result<()> {
    let images = dom::query_all(document, PROJECT_IMAGES);
    if images.is_empty() {
        return Ok(());
    }
    let mut watch = IntersectionWatch::new(0.0, "0px")?;
    for image in &images {
        let Some(host) = image.dyn_ref::<web::HtmlElement>() else {
            continue;
        };
        let canvas = canvas::create(document, GRID_CANVAS_CSS)?;
        canvas.set_class_name(CLASS_GRID_CANVAS);
        if let Err(e) = image.append_child(&canvas) {
            log::warn!("[grid] appendChild: {:?}", e);
            continue;
        }
        canvas::set_size(
            &canvas,
            Vec2::new(host.offset_width() as f32, host.offset_height() as f32),
        );
        let surface = Rc::new(RefCell::new(CanvasSurface::new(canvas)?));
        let pulse = Rc::new(RefCell::new(GridPulse::default()));
        layer.grids.push(pulse.clone());

        watch.observe(
            image,
            Box::new(move |intersecting| {
                let Some(stop) = pulse.borrow_mut().on_visibility(intersecting) else {
                    return;
                };
                let (pulse, surface) = (pulse.clone(), surface.clone());
                frame::start_loop(stop.clone(), move |ts| {
                    pulse
                        .borrow()
                        .render(&mut *surface.borrow_mut(), (ts / 1000.0) as f32);
                    stop.control()
                });
            }),
        );
    }
    log::info!("[grid] {} project overlays", images.len());
    layer.watches.push(watch);
    Ok(())
}

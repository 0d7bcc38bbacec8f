use crate::canvas::{self, CanvasSurface};
use crate::constants::BACKGROUND_CANVAS_CSS;
use crate::{dom, events, frame, Layer};
use anyhow::anyhow;
use fx_core::{FxConfig, ParticleField};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Fixed full-viewport canvas behind the page running a particle field.
pub fn wire(document: &web::Document, config: &FxConfig, layer: &mut Layer) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow!("no window"))?;
    let body = document.body().ok_or_else(|| anyhow!("no body"))?;
    let canvas = canvas::create(document, BACKGROUND_CANVAS_CSS)?;
    body.prepend_with_node_1(&canvas)
        .map_err(|e| anyhow!("prepend canvas: {:?}", e))?;

    let size = dom::viewport_size();
    canvas::set_size(&canvas, size);
    let mut rng = StdRng::from_entropy();
    let field = Rc::new(RefCell::new(ParticleField::from_config(config, size, &mut rng)));
    log::info!(
        "[particles] {} particles on {}x{}",
        config.particle_count,
        size.x,
        size.y
    );

    let canvas_resize = canvas.clone();
    let field_resize = field.clone();
    events::listen_into(
        &mut layer.subscriptions,
        &window,
        "resize",
        move |_: web::Event| {
            let size = dom::viewport_size();
            canvas::set_size(&canvas_resize, size);
            field_resize.borrow_mut().on_resize(size);
        },
    );

    let mut surface = CanvasSurface::new(canvas)?;
    let stop = field.borrow().stop_handle();
    layer.loops.push(stop.clone());
    frame::start_loop(stop, move |_| field.borrow_mut().tick(&mut surface));
    Ok(())
}

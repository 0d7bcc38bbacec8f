use crate::constants::*;
use crate::observer::IntersectionWatch;
use crate::{dom, frame, Layer};
use fx_core::{observe_once, CounterDescriptor, FxConfig, LoopControl, StopHandle};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// Count each `[data-count]` statistic up the first time it is half visible.
pub fn wire(document: &web::Document, config: &FxConfig, layer: &mut Layer) -> anyhow::Result<()> {
    let stats = dom::query_all(document, COUNTERS);
    if stats.is_empty() {
        log::debug!("[counter] no counters on page");
        return Ok(());
    }
    let mut watch = IntersectionWatch::new(COUNTER_THRESHOLD, "0px")?;
    let mut armed = 0usize;
    for el in stats {
        let raw = el.get_attribute(COUNT_ATTR).unwrap_or_default();
        let descriptor = match CounterDescriptor::parse(&raw) {
            Ok(d) => Rc::new(RefCell::new(d)),
            Err(e) => {
                log::warn!("[counter] skipping element: {e}");
                continue;
            }
        };
        let (duration, frame_ms) = (config.counter_duration_ms, config.counter_frame_ms);
        let stop = StopHandle::new();
        layer.loops.push(stop.clone());
        let target = el.clone();
        observe_once(&mut watch, &el, move || {
            let Some(mut anim) = descriptor.borrow_mut().start(duration, frame_ms) else {
                return;
            };
            dom::set_class(&target, CLASS_COUNTED, true);
            frame::start_loop(stop, move |_| {
                let f = anim.step();
                target.set_text_content(Some(&f.text));
                if f.finished {
                    LoopControl::Stop
                } else {
                    LoopControl::Continue
                }
            });
        });
        armed += 1;
    }
    log::info!("[counter] armed {armed} counters");
    layer.watches.push(watch);
    Ok(())
}

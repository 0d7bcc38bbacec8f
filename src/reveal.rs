use crate::constants::*;
use crate::observer::IntersectionWatch;
use crate::{dom, style, Layer};
use fx_core::constants::STAGGER_START_OFFSET_PX;
use fx_core::reveal::{RevealTracker, Stagger};
use fx_core::{FxConfig, VisibilitySource};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn stagger_children(container: &web::Element, stagger: &Stagger) {
    let children = dom::children(container);
    let transition = Rc::new(stagger.transition_css());
    for step in stagger.plan(children.len()) {
        let child = children[step.index].clone();
        let staged = child.clone();
        let transition = transition.clone();
        dom::set_timeout(step.stage_at_ms, move || {
            let s = staged.style();
            _ = s.set_property("opacity", "0");
            _ = s.set_property("transform", &style::translate_y(STAGGER_START_OFFSET_PX));
            _ = s.set_property("transition", &transition);
        });
        dom::set_timeout(step.release_at_ms, move || {
            let s = child.style();
            _ = s.set_property("opacity", "1");
            _ = s.set_property("transform", &style::translate_y(0.0));
        });
    }
}

/// Mark elements revealed on first entry; stagger the children of known
/// containers.
pub fn wire(document: &web::Document, config: &FxConfig, layer: &mut Layer) -> anyhow::Result<()> {
    let targets = dom::query_all(document, REVEAL_TARGETS);
    if targets.is_empty() {
        log::debug!("[reveal] nothing to observe");
        return Ok(());
    }
    let mut watch = IntersectionWatch::new(REVEAL_THRESHOLD, REVEAL_ROOT_MARGIN)?;
    let tracker = Rc::new(RefCell::new(RevealTracker::<usize>::default()));
    let stagger = Stagger::from_config(config);

    for (key, el) in targets.iter().enumerate() {
        let tracker = tracker.clone();
        let target = el.clone();
        watch.observe(
            el,
            Box::new(move |intersecting| {
                if !tracker.borrow_mut().on_visibility(key, intersecting) {
                    return;
                }
                dom::set_class(&target, CLASS_REVEALED, true);
                if style::has_any_class(&target.class_name(), &STAGGER_CONTAINERS) {
                    stagger_children(&target, &stagger);
                }
            }),
        );
    }
    log::info!("[reveal] observing {} elements", targets.len());
    layer.watches.push(watch);
    Ok(())
}

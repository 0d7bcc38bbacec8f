//! Custom cursor dot plus a damped trailing ring, hover scaling, card
//! spotlight coordinates and marquee pause.

use crate::constants::*;
use crate::{dom, events, frame, style, Layer};
use anyhow::anyhow;
use fx_core::geometry::{pointer_percent, Rect};
use fx_core::{CursorFollower, FxConfig, LoopControl};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

fn append_div(document: &web::Document, parent: &web::HtmlElement, class: &str) -> anyhow::Result<web::Element> {
    let el = document
        .create_element("div")
        .map_err(|e| anyhow!("createElement: {:?}", e))?;
    el.set_class_name(class);
    parent
        .append_child(&el)
        .map_err(|e| anyhow!("appendChild: {:?}", e))?;
    Ok(el)
}

fn inject_styles(document: &web::Document) {
    let Some(head) = document.head() else { return };
    if let Ok(style_el) = document.create_element("style") {
        style_el.set_text_content(Some(CURSOR_CSS));
        _ = head.append_child(&style_el);
    }
}

fn place(el: &web::Element, x: f64, y: f64) {
    dom::set_style(el, "left", &style::px(x));
    dom::set_style(el, "top", &style::px(y));
}

pub fn wire(document: &web::Document, config: &FxConfig, layer: &mut Layer) -> anyhow::Result<()> {
    let body = document.body().ok_or_else(|| anyhow!("no body"))?;
    inject_styles(document);
    let dot = append_div(document, &body, CLASS_CURSOR)?;
    let ring = append_div(document, &body, CLASS_FOLLOWER)?;
    let follower = Rc::new(RefCell::new(CursorFollower::from_config(config)));

    let f = follower.clone();
    let dot_move = dot.clone();
    events::listen_into(
        &mut layer.subscriptions,
        document,
        "mousemove",
        move |ev: web::MouseEvent| {
            let (x, y) = (ev.client_x() as f64, ev.client_y() as f64);
            f.borrow_mut().on_pointer_move(x, y);
            place(&dot_move, x, y);
        },
    );

    for el in dom::query_all(document, HOVER_TARGETS) {
        for (event, hovering) in [("mouseenter", true), ("mouseleave", false)] {
            let f = follower.clone();
            let (dot, ring) = (dot.clone(), ring.clone());
            events::listen_into(&mut layer.subscriptions, &el, event, move |_: web::Event| {
                f.borrow_mut().set_hover(hovering);
                dom::set_class(&dot, CLASS_CURSOR_HOVER, hovering);
                dom::set_class(&ring, CLASS_CURSOR_HOVER, hovering);
            });
        }
    }

    wire_spotlight(document, layer);
    wire_marquee(document, layer);

    let stop = follower.borrow().stop_handle();
    layer.loops.push(stop.clone());
    frame::start_loop(stop, move |_| {
        let mut f = follower.borrow_mut();
        if f.tick() == LoopControl::Stop {
            return LoopControl::Stop;
        }
        let p = f.follower();
        place(&ring, p.x, p.y);
        LoopControl::Continue
    });
    log::info!("[cursor] follower running");
    Ok(())
}

/// `--mouse-x` / `--mouse-y` on project cards, in percent of the card box.
fn wire_spotlight(document: &web::Document, layer: &mut Layer) {
    for card in dom::query_all(document, SPOTLIGHT_CARDS) {
        let target = card.clone();
        events::listen_into(
            &mut layer.subscriptions,
            &card,
            "mousemove",
            move |ev: web::MouseEvent| {
                let r = target.get_bounding_client_rect();
                let rect = Rect::new(r.left(), r.top(), r.width(), r.height());
                if let Some([x, y]) =
                    pointer_percent(&rect, ev.client_x() as f64, ev.client_y() as f64)
                {
                    dom::set_style(&target, "--mouse-x", &style::percent(x));
                    dom::set_style(&target, "--mouse-y", &style::percent(y));
                }
            },
        );
    }
}

fn wire_marquee(document: &web::Document, layer: &mut Layer) {
    let Some(marquee) = dom::query_html(document, MARQUEE) else {
        log::debug!("[cursor] no marquee");
        return;
    };
    let marquee: web::Element = marquee.unchecked_into();
    for (event, state) in [("mouseenter", "paused"), ("mouseleave", "running")] {
        let m = marquee.clone();
        events::listen_into(&mut layer.subscriptions, &marquee, event, move |_: web::Event| {
            dom::set_style(&m, "animation-play-state", state);
        });
    }
}

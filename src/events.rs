//! Event subscriptions that detach themselves when dropped.

use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct Subscription {
    target: web::EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref());
    }
}

/// Subscribe `handler` to `event` on `target`. Events that are not an `E`
/// are ignored.
pub fn listen<E, F>(
    target: &web::EventTarget,
    event: &'static str,
    mut handler: F,
) -> anyhow::Result<Subscription>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(|e| anyhow!("addEventListener({event}): {:?}", e))?;
    Ok(Subscription {
        target: target.clone(),
        event,
        closure,
    })
}

/// Subscribe and push into `subs`, logging instead of failing.
pub fn listen_into<E, F>(
    subs: &mut Vec<Subscription>,
    target: &web::EventTarget,
    event: &'static str,
    handler: F,
) where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    match listen(target, event, handler) {
        Ok(s) => subs.push(s),
        Err(e) => log::warn!("[events] {e}"),
    }
}

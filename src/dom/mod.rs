//! Browser bindings for the widget. Compiled only with the `csr` feature.
//!
//! SYSTEM CONTEXT
//! ==============
//! The host page owns the markup. These modules look elements up by id,
//! attach listeners that live for the page lifetime, and forward events into
//! `ChatWidget` and `LauncherState`.

pub mod launcher;
pub mod widget;

use wasm_bindgen::{JsCast, closure::Closure};
use web_sys::EventTarget;

/// Attach `handler` to `target` for the rest of the page lifetime.
pub(crate) fn listen(target: &EventTarget, event: &str, handler: impl FnMut(web_sys::Event) + 'static) {
    let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
    if let Err(err) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref()) {
        log::error!("failed to attach {event} listener: {err:?}");
    }
    closure.forget();
}

/// Run `boot` once the document has been parsed.
pub fn on_page_ready(boot: impl FnOnce() + 'static) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::error!("no document; chat widget not started");
        return;
    };
    if document.ready_state() != "loading" {
        boot();
        return;
    }

    let mut boot = Some(boot);
    listen(&document, "DOMContentLoaded", move |_event| {
        if let Some(boot) = boot.take() {
            boot();
        }
    });
}

//! Floating launcher: opens and closes the chat popup.
//!
//! The popup is shown by toggling its `open` class. The toggle button's
//! `aria-expanded` mirrors the state, and an embedded chat frame is only
//! pointed at its `data-src` the first time the popup opens.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlIFrameElement};

use super::listen;
use crate::config::LauncherIds;
use crate::state::launcher::LauncherState;

const OPEN_CLASS: &str = "open";

#[derive(Clone)]
struct LauncherElements {
    toggle: Element,
    popup: Element,
}

impl LauncherElements {
    fn apply(&self, state: &LauncherState) {
        if let Err(err) = self.popup.class_list().toggle_with_force(OPEN_CLASS, state.open) {
            log::warn!("could not toggle chat popup: {err:?}");
        }
        if let Err(err) = self.toggle.set_attribute("aria-expanded", state.aria_expanded()) {
            log::warn!("could not set aria-expanded: {err:?}");
        }
    }
}

/// Wire the launcher if the page has one. Returns whether it was bound.
pub fn bind(ids: &LauncherIds) -> bool {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return false;
    };
    let (Some(toggle), Some(popup)) = (document.get_element_by_id(&ids.toggle), document.get_element_by_id(&ids.popup))
    else {
        log::debug!("no chat launcher on this page");
        return false;
    };

    let initial = LauncherState::starting(popup.class_list().contains(OPEN_CLASS));
    let elements = LauncherElements { toggle, popup };
    elements.apply(&initial);
    let state = Rc::new(RefCell::new(initial));

    {
        let toggle = elements.toggle.clone();
        let elements = elements.clone();
        let state = Rc::clone(&state);
        let document = document.clone();
        let frame_id = ids.frame.clone();
        listen(&toggle, "click", move |_event| {
            let outcome = state.borrow_mut().toggle();
            elements.apply(&state.borrow());
            if outcome.load_frame {
                load_frame(&document, &frame_id);
            }
        });
    }

    if let Some(close) = document.get_element_by_id(&ids.close) {
        let elements = elements.clone();
        let state = Rc::clone(&state);
        listen(&close, "click", move |_event| {
            if state.borrow_mut().close() {
                elements.apply(&state.borrow());
            }
        });
    }

    {
        let elements = elements.clone();
        let state = Rc::clone(&state);
        listen(&document, "keydown", move |event| {
            let Some(key) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
                return;
            };
            if state.borrow_mut().on_key(&key.key()) {
                elements.apply(&state.borrow());
            }
        });
    }

    let widget_selector = format!("#{}", ids.widget);
    listen(&document, "click", move |event| {
        let within_widget = event
            .target()
            .and_then(|target| target.dyn_ref::<Element>().cloned())
            .is_some_and(|target| matches!(target.closest(&widget_selector), Ok(Some(_))));
        if state.borrow_mut().on_document_click(within_widget) {
            elements.apply(&state.borrow());
        }
    });

    log::info!("chat launcher bound");
    true
}

/// Point the embedded chat frame at its `data-src` unless it already has a
/// source.
fn load_frame(document: &Document, frame_id: &str) {
    let Some(frame) = document
        .get_element_by_id(frame_id)
        .and_then(|el| el.dyn_ref::<HtmlIFrameElement>().cloned())
    else {
        return;
    };
    if !frame.src().is_empty() {
        return;
    }
    if let Some(src) = frame.get_attribute("data-src") {
        frame.set_src(&src);
    }
}

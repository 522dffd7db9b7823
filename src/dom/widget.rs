//! Binds `ChatWidget` to the page's message list, form, and composer.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, HtmlFormElement, HtmlTextAreaElement};

use super::listen;
use crate::components::message_list::MessageList;
use crate::config::{ComposerSizing, ElementIds};
use crate::net::types::ChatError;
use crate::state::composer::{ComposerState, KeyAction, fit_height_px, max_height_px};
use crate::widget::ChatWidget;

struct ChatElements {
    messages: HtmlElement,
    form: HtmlFormElement,
    input: HtmlTextAreaElement,
}

fn element_by_id<T: JsCast + Clone>(document: &Document, id: &str) -> Option<T> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_ref::<T>().cloned())
}

fn find_elements(document: &Document, ids: &ElementIds) -> Result<ChatElements, ChatError> {
    let messages = element_by_id::<HtmlElement>(document, &ids.messages);
    let form = element_by_id::<HtmlFormElement>(document, &ids.form);
    let input = element_by_id::<HtmlTextAreaElement>(document, &ids.input);

    match (messages, form, input) {
        (Some(messages), Some(form), Some(input)) => Ok(ChatElements { messages, form, input }),
        (messages, form, input) => {
            let missing = [(messages.is_none(), &ids.messages), (form.is_none(), &ids.form), (input.is_none(), &ids.input)]
                .into_iter()
                .filter(|(absent, _)| *absent)
                .map(|(_, id)| format!("#{id}"))
                .collect();
            Err(ChatError::MissingElements(missing))
        }
    }
}

/// Mount the conversation into the page.
///
/// # Errors
///
/// Returns `ChatError::MissingElements` when the page lacks any of the
/// configured elements; nothing is attached in that case.
pub fn mount(widget: &ChatWidget) -> Result<(), ChatError> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ChatError::MissingElements(vec!["document".to_owned()]))?;
    let elements = find_elements(&document, &widget.config().elements)?;

    render_messages(widget, &elements.messages);
    bind_composer(widget, &elements);

    let sizing = widget.config().composer;
    resize_composer(&elements.input, sizing);
    if let Err(err) = elements.input.focus() {
        log::debug!("could not focus composer: {err:?}");
    }

    widget.greet();
    log::info!("chat widget mounted");
    Ok(())
}

fn render_messages(widget: &ChatWidget, messages: &HtmlElement) {
    let chat = widget.chat();
    let scroller = messages.parent_element();

    leptos::mount::mount_to(messages.clone(), move || {
        Effect::new(move || {
            chat.with(|state| (state.messages.len(), state.is_awaiting_response()));
            if let Some(scroller) = &scroller {
                scroller.set_scroll_top(scroller.scroll_height());
            }
        });
        view! { <MessageList chat=chat/> }
    })
    .forget();
}

fn bind_composer(widget: &ChatWidget, elements: &ChatElements) {
    let composer = widget.composer();
    let sizing = widget.config().composer;

    let input = elements.input.clone();
    listen(&elements.input, "input", move |_event| {
        composer.update(|c| c.set_draft(input.value()));
        resize_composer(&input, sizing);
    });

    listen(&elements.input, "compositionstart", move |_event| {
        composer.update(ComposerState::composition_start);
    });
    listen(&elements.input, "compositionend", move |_event| {
        composer.update(ComposerState::composition_end);
    });

    let form = elements.form.clone();
    listen(&elements.input, "keydown", move |event| {
        let Some(key) = event.dyn_ref::<web_sys::KeyboardEvent>() else {
            return;
        };
        let action = composer.with_untracked(|c| c.key_action(&key.key(), key.shift_key(), key.is_composing()));
        if action == KeyAction::Submit {
            event.prevent_default();
            if let Err(err) = form.request_submit() {
                log::warn!("requestSubmit failed: {err:?}");
            }
        }
    });

    let widget = widget.clone();
    let input = elements.input.clone();
    listen(&elements.form, "submit", move |event| {
        event.prevent_default();
        composer.update(|c| c.set_draft(input.value()));
        let Some(pending) = widget.begin_submit() else {
            return;
        };
        input.set_value("");
        set_px(&input, "height", sizing.min_height_px);

        let widget = widget.clone();
        leptos::task::spawn_local(async move {
            widget.exchange(pending).await;
        });
    });
}

fn viewport_height() -> f64 {
    let Some(window) = web_sys::window() else {
        return 0.0;
    };
    match window.inner_height() {
        Ok(height) => height.as_f64().unwrap_or(0.0),
        Err(err) => {
            log::debug!("innerHeight unavailable: {err:?}");
            0.0
        }
    }
}

fn resize_composer(input: &HtmlTextAreaElement, sizing: ComposerSizing) {
    let viewport = viewport_height();
    set_px(input, "max-height", max_height_px(viewport, sizing));
    if let Err(err) = HtmlElement::style(input).set_property("height", "auto") {
        log::debug!("could not reset composer height: {err:?}");
    }
    let fitted = fit_height_px(f64::from(input.scroll_height()), viewport, sizing);
    set_px(input, "height", fitted);
}

fn set_px(el: &HtmlElement, property: &str, px: f64) {
    if let Err(err) = el.style().set_property(property, &format!("{px}px")) {
        log::debug!("could not set {property}: {err:?}");
    }
}

//! The chat widget controller.
//!
//! ARCHITECTURE
//! ============
//! `ChatWidget` is constructed once at page-ready and owns everything the
//! conversation needs: the config and the signals behind the message list
//! and composer. The browser glue in `dom::widget` only forwards events into
//! these methods, so the submit/reply flow can be driven without a DOM.

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

use std::rc::Rc;

use leptos::prelude::*;

use crate::config::WidgetConfig;
use crate::net::api::send_message;
use crate::state::chat::{ChatState, PendingRequest, Role, SubmitRejection};
use crate::state::composer::ComposerState;
use crate::util::clock::now_ms;

#[derive(Clone, Debug)]
pub struct ChatWidget {
    config: Rc<WidgetConfig>,
    chat: RwSignal<ChatState>,
    composer: RwSignal<ComposerState>,
}

impl ChatWidget {
    pub fn new(config: WidgetConfig) -> Self {
        Self {
            config: Rc::new(config),
            chat: RwSignal::new(ChatState::default()),
            composer: RwSignal::new(ComposerState::default()),
        }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn chat(&self) -> RwSignal<ChatState> {
        self.chat
    }

    pub fn composer(&self) -> RwSignal<ComposerState> {
        self.composer
    }

    /// Render the configured greeting, if any, as the first bot message.
    pub fn greet(&self) {
        if let Some(greeting) = self.config.initial_message.as_deref() {
            self.chat.update(|chat| chat.push_message(Role::Bot, greeting, now_ms()));
        }
    }

    /// Move the composer draft into the conversation.
    ///
    /// Returns the request to send, or `None` if the draft was blank or a
    /// reply is still outstanding. The composer is cleared only when a
    /// request starts.
    pub fn begin_submit(&self) -> Option<PendingRequest> {
        let draft = self.composer.with_untracked(|composer| composer.draft.clone());
        match self.chat.try_update(|chat| chat.begin_submit(&draft, now_ms())) {
            Some(Ok(pending)) => {
                self.composer.update(ComposerState::clear);
                Some(pending)
            }
            Some(Err(SubmitRejection::EmptyDraft)) | None => None,
            Some(Err(SubmitRejection::RequestOutstanding)) => {
                log::info!("reply still pending; keeping draft in the composer");
                None
            }
        }
    }

    /// Send `pending` and render whatever comes back.
    pub async fn exchange(&self, pending: PendingRequest) {
        log::debug!("sending chat request {}", pending.id);
        let outcome = send_message(&self.config.endpoint, &pending.text).await;
        self.chat.update(|chat| {
            chat.settle(&pending.id, outcome, now_ms());
        });
    }

    /// Submit the current draft and wait for the reply. Returns whether a
    /// request was sent.
    pub async fn submit(&self) -> bool {
        let Some(pending) = self.begin_submit() else {
            return false;
        };
        self.exchange(pending).await;
        true
    }
}

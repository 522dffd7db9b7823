//! Message rows and the typing indicator.
//!
//! Each row is `<li class="msg {role}">` holding an avatar and a column with
//! the bubble and its time label. Bot rows lead with the avatar, visitor rows
//! trail with it, so the stylesheet can align them to opposite sides.

#[cfg(test)]
#[path = "message_list_test.rs"]
mod message_list_test;

use leptos::prelude::*;

use crate::state::chat::{ChatMessage, ChatState, Role};
use crate::util::clock::time_label;

pub const TYPING_LABEL: &str = "Typing…";

/// Class attribute for a message row.
pub fn row_class(role: Role) -> String {
    format!("msg {}", role.as_str())
}

/// All messages in order, followed by the typing indicator while a reply
/// is outstanding.
#[component]
pub fn MessageList(chat: RwSignal<ChatState>) -> impl IntoView {
    view! {
        <For
            each=move || chat.with(|state| state.messages.clone())
            key=|msg| msg.id.clone()
            children=move |msg| view! { <MessageItem message=msg/> }
        />
        <Show when=move || chat.with(ChatState::is_awaiting_response)>
            <TypingIndicator/>
        </Show>
    }
}

#[component]
pub fn MessageItem(message: ChatMessage) -> impl IntoView {
    let role = message.role;
    let avatar = view! { <div class="avatar">{role.avatar()}</div> };
    let body = view! {
        <div>
            <div class="bubble">{message.text}</div>
            <div class="meta">{time_label(message.sent_at_ms)}</div>
        </div>
    };

    match role {
        Role::Bot => view! { <li class=row_class(role)>{avatar}{body}</li> }.into_any(),
        Role::User => view! { <li class=row_class(role)>{body}{avatar}</li> }.into_any(),
    }
}

/// Placeholder bot row shown while waiting on `/send_message`.
#[component]
pub fn TypingIndicator() -> impl IntoView {
    view! {
        <li class=row_class(Role::Bot) data-typing="1">
            <div class="avatar">{Role::Bot.avatar()}</div>
            <div>
                <div class="bubble">
                    <div class="typing">
                        <span class="dot-typing"></span>
                        <span class="dot-typing"></span>
                        <span class="dot-typing"></span>
                    </div>
                </div>
                <div class="meta">{TYPING_LABEL}</div>
            </div>
        </li>
    }
}

//! Leptos view components for the chat thread.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render message rows from `ChatState`; they are mounted into
//! the page's existing message list by `dom::widget`.

pub mod message_list;

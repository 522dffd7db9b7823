//! Networking modules for the `/send_message` exchange.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP call and `types` defines the wire schema plus the
//! rules that turn a raw response into a reply or a `ChatError`.

pub mod api;
pub mod types;

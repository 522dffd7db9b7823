//! Wire DTOs and error taxonomy for the chat backend.
//!
//! DESIGN
//! ======
//! The backend answers with either `{"response": ...}` or `{"error": ...}`.
//! `interpret_response` is the single place that decides which of those a
//! status/body pair means, so the browser transport and tests share it.
//!
//! ERROR HANDLING
//! ==============
//! Every failure maps to a `ChatError` whose `bot_text` is what the visitor
//! sees in the conversation. Nothing here is fatal.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Serialize;
use serde_json::{Map, Value};

/// Shown when the backend reports failure without a message.
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";
/// Shown when the request never produced a response.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again.";
/// Substituted for a body that is not the expected JSON object.
pub const INVALID_RESPONSE_MESSAGE: &str = "Invalid response";
/// Rendered when a successful reply carries no text.
pub const EMPTY_REPLY_PLACEHOLDER: &str = "...";

/// Request body for `POST /send_message`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SendMessageRequest<'a> {
    pub message: &'a str,
}

/// Errors surfaced by the chat widget.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    /// The backend answered but reported failure (non-2xx or `error` field).
    #[error("chat request failed with status {status}: {}", .message.as_deref().unwrap_or(GENERIC_ERROR_MESSAGE))]
    Application { status: u16, message: Option<String> },

    /// The request could not be completed.
    #[error("chat transport failed: {0}")]
    Transport(String),

    /// Required page elements were not found at mount time.
    #[error("chat UI elements not found: {}", .0.join(", "))]
    MissingElements(Vec<String>),
}

impl ChatError {
    /// Text rendered in the bot bubble for this failure.
    pub fn bot_text(&self) -> String {
        match self {
            Self::Application { message: Some(message), .. } => message.clone(),
            Self::Application { message: None, .. } | Self::MissingElements(_) => GENERIC_ERROR_MESSAGE.to_owned(),
            Self::Transport(_) => NETWORK_ERROR_MESSAGE.to_owned(),
        }
    }
}

/// Whether `status` is a 2xx code.
pub fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status)
}

/// JavaScript truthiness of a JSON value.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Renderable text of a truthy scalar field. Arrays and objects have none.
fn field_text(body: &Map<String, Value>, key: &str) -> Option<String> {
    let value = body.get(key).filter(|value| is_truthy(value))?;
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Decide what a raw `/send_message` response means.
///
/// The body must be a JSON object; anything else (unparseable text, `null`,
/// arrays, bare scalars) is read as `{"error": "Invalid response"}`. Fields
/// are judged by truthiness: a falsy `error` is absent, and a falsy or
/// missing `response` becomes [`EMPTY_REPLY_PLACEHOLDER`]. Numbers and
/// booleans render as their text.
///
/// # Errors
///
/// Returns `ChatError::Application` for a non-2xx status or a truthy
/// `error` field.
pub fn interpret_response(status: u16, body: &str) -> Result<String, ChatError> {
    let invalid = || ChatError::Application { status, message: Some(INVALID_RESPONSE_MESSAGE.to_owned()) };
    let object = match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(object)) => object,
        Ok(other) => {
            log::warn!("chat response was not a JSON object (status {status}): {other}");
            return Err(invalid());
        }
        Err(err) => {
            log::warn!("chat response was not valid JSON (status {status}): {err}");
            return Err(invalid());
        }
    };

    if object.get("error").is_some_and(is_truthy) {
        return Err(ChatError::Application { status, message: field_text(&object, "error") });
    }
    if !is_success_status(status) {
        return Err(ChatError::Application { status, message: None });
    }
    Ok(field_text(&object, "response").unwrap_or_else(|| EMPTY_REPLY_PLACEHOLDER.to_owned()))
}

//! HTTP helper for the chat backend.
//!
//! Client-side (csr): real `POST` via `gloo-net`.
//! Off-browser builds get a stub that reports a transport failure, since the
//! endpoint is only reachable from the page that served the widget.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "csr")]
use super::types::{SendMessageRequest, interpret_response};
use super::types::ChatError;

/// Send one visitor message to `endpoint` and return the bot's reply text.
///
/// # Errors
///
/// `ChatError::Transport` when no response arrived, `ChatError::Application`
/// when the backend answered with a failure status or an `error` field.
pub async fn send_message(endpoint: &str, text: &str) -> Result<String, ChatError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::post(endpoint)
            .json(&SendMessageRequest { message: text })
            .map_err(|e| ChatError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ChatError::Transport(e.to_string()))?;
        let status = resp.status();
        let body = match resp.text().await {
            Ok(body) => body,
            Err(err) => {
                log::warn!("failed to read chat response body: {err}");
                String::new()
            }
        };
        interpret_response(status, &body)
    }
    #[cfg(not(feature = "csr"))]
    {
        log::debug!("dropping {} byte chat message outside the browser", text.len());
        Err(ChatError::Transport(format!("{endpoint} is only reachable from the browser")))
    }
}

//! Widget configuration read from page globals.
//!
//! The host page may define:
//! - `window.INITIAL_MSG`: greeting rendered once as a bot message
//! - `window.CHAT_CONFIG`: object (or JSON string) overriding any field of
//!   [`WidgetConfig`]; missing fields keep their defaults
//!
//! A malformed `CHAT_CONFIG` is logged and ignored so the widget still
//! mounts with defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

pub const DEFAULT_ENDPOINT: &str = "/send_message";
pub const DEFAULT_MAX_VIEWPORT_RATIO: f64 = 0.4;
pub const DEFAULT_MIN_HEIGHT_PX: f64 = 44.0;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid CHAT_CONFIG JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid CHAT_CONFIG: {0}")]
    Invalid(String),
}

/// Composer auto-resize bounds.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ComposerSizing {
    /// Fraction of the viewport height the composer may grow to.
    pub max_viewport_ratio: f64,
    /// Single-line height the composer resets to and never shrinks below.
    pub min_height_px: f64,
}

impl Default for ComposerSizing {
    fn default() -> Self {
        Self { max_viewport_ratio: DEFAULT_MAX_VIEWPORT_RATIO, min_height_px: DEFAULT_MIN_HEIGHT_PX }
    }
}

/// Ids of the page elements the conversation binds to.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ElementIds {
    /// `<ul>` receiving message rows; its parent is the scroll container.
    pub messages: String,
    pub form: String,
    /// `<textarea>` composer.
    pub input: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self { messages: "messages".to_owned(), form: "chat-form".to_owned(), input: "message".to_owned() }
    }
}

/// Ids of the floating launcher elements.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LauncherIds {
    /// Root of the widget; clicks inside it never close the popup.
    pub widget: String,
    pub toggle: String,
    pub popup: String,
    pub close: String,
    /// Optional `<iframe data-src=...>` loaded on first open.
    pub frame: String,
}

impl Default for LauncherIds {
    fn default() -> Self {
        Self {
            widget: "chat-widget".to_owned(),
            toggle: "chat-toggle".to_owned(),
            popup: "chat-popup".to_owned(),
            close: "chat-close".to_owned(),
            frame: "chat-iframe".to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Path the visitor's messages are posted to.
    pub endpoint: String,
    pub initial_message: Option<String>,
    pub elements: ElementIds,
    pub launcher: LauncherIds,
    pub composer: ComposerSizing,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
            initial_message: None,
            elements: ElementIds::default(),
            launcher: LauncherIds::default(),
            composer: ComposerSizing::default(),
        }
    }
}

impl WidgetConfig {
    /// Build config from the raw page globals.
    ///
    /// `initial_message` (from `INITIAL_MSG`) takes precedence over a
    /// greeting inside `overrides`. Blank greetings are dropped.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `overrides` is not valid JSON for this type
    /// or describes an unusable endpoint or composer size.
    pub fn from_globals(initial_message: Option<String>, overrides: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = match overrides {
            Some(raw) if !raw.trim().is_empty() => serde_json::from_str::<Self>(raw)?,
            _ => Self::default(),
        };
        if initial_message.is_some() {
            config.initial_message = initial_message;
        }
        config.initial_message = config.initial_message.filter(|greeting| !greeting.trim().is_empty());
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid("endpoint must not be empty".to_owned()));
        }
        let ratio = self.composer.max_viewport_ratio;
        if !(ratio > 0.0 && ratio <= 1.0) {
            return Err(ConfigError::Invalid(format!("composer.max_viewport_ratio must be in (0, 1], got {ratio}")));
        }
        let min = self.composer.min_height_px;
        if !min.is_finite() || min < 0.0 {
            return Err(ConfigError::Invalid(format!("composer.min_height_px must be a non-negative number, got {min}")));
        }
        Ok(())
    }

    /// Read `INITIAL_MSG` and `CHAT_CONFIG` from `window`.
    ///
    /// Never fails: an invalid `CHAT_CONFIG` is logged and defaults are used.
    pub fn from_page() -> Self {
        #[cfg(feature = "csr")]
        {
            let Some(window) = web_sys::window() else {
                return Self::default();
            };
            let initial = page_global(&window, "INITIAL_MSG").and_then(|value| value.as_string());
            let overrides = page_global(&window, "CHAT_CONFIG").and_then(|value| global_json(&value));

            match Self::from_globals(initial.clone(), overrides.as_deref()) {
                Ok(config) => config,
                Err(err) => {
                    log::error!("{err}; falling back to default chat config");
                    Self {
                        initial_message: initial.filter(|greeting| !greeting.trim().is_empty()),
                        ..Self::default()
                    }
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            Self::default()
        }
    }
}

#[cfg(feature = "csr")]
fn page_global(window: &web_sys::Window, name: &str) -> Option<wasm_bindgen::JsValue> {
    match js_sys::Reflect::get(window, &wasm_bindgen::JsValue::from_str(name)) {
        Ok(value) if !value.is_undefined() && !value.is_null() => Some(value),
        Ok(_) => None,
        Err(err) => {
            log::warn!("could not read window.{name}: {err:?}");
            None
        }
    }
}

/// `CHAT_CONFIG` may be a JSON string or a plain object.
#[cfg(feature = "csr")]
fn global_json(value: &wasm_bindgen::JsValue) -> Option<String> {
    if let Some(raw) = value.as_string() {
        return Some(raw);
    }
    match js_sys::JSON::stringify(value) {
        Ok(json) => Some(String::from(json)),
        Err(err) => {
            log::warn!("could not serialize window.CHAT_CONFIG: {err:?}");
            None
        }
    }
}

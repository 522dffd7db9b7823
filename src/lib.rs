//! # portfolio-chat
//!
//! Leptos + WASM chat widget for the portfolio site. Visitors type into a
//! growable composer, each message is posted to `/send_message`, and the
//! reply (or an error) is rendered as a bot bubble.
//!
//! The conversation, composer, and launcher state are plain Rust and tested
//! natively. Everything that touches the DOM lives in `dom` and is compiled
//! only with the `csr` feature.

pub mod components;
pub mod config;
#[cfg(feature = "csr")]
pub mod dom;
pub mod net;
pub mod state;
pub mod util;
pub mod widget;

/// WASM entry point: set up logging, then mount the widget once the page
/// has been parsed.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(err) = console_log::init_with_level(level) {
        log::warn!("logger already initialized: {err}");
    }

    dom::on_page_ready(boot);
}

#[cfg(feature = "csr")]
fn boot() {
    let config = config::WidgetConfig::from_page();
    dom::launcher::bind(&config.launcher);

    let widget = widget::ChatWidget::new(config);
    match dom::widget::mount(&widget) {
        Ok(()) => {}
        Err(net::types::ChatError::MissingElements(missing)) if missing.len() == 3 => {
            log::info!("no chat thread on this page");
        }
        Err(err) => log::error!("{err}; chat widget left inactive"),
    }
}

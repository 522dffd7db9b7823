//! Utility helpers shared across widget modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns from state and
//! component logic so the pure parts stay testable off-browser.

pub mod clock;
pub mod text;

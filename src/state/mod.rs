//! Widget state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`chat`, `composer`, `launcher`) so the DOM glue
//! can hold each behind its own signal and tests can drive them directly.

pub mod chat;
pub mod composer;
pub mod launcher;

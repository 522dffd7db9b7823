//! Composer (message input) state: draft text, IME composition, Enter
//! handling, and auto-resize geometry.

#[cfg(test)]
#[path = "composer_test.rs"]
mod composer_test;

use crate::config::ComposerSizing;

/// What a keydown in the composer should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Prevent the default and submit the form.
    Submit,
    /// Let the browser insert a line break.
    InsertNewline,
    /// Not ours to handle.
    PassThrough,
}

/// Draft text plus the composition flag toggled by
/// `compositionstart`/`compositionend`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComposerState {
    pub draft: String,
    pub composing: bool,
}

impl ComposerState {
    /// Mirror the textarea value after an `input` event.
    pub fn set_draft(&mut self, value: impl Into<String>) {
        self.draft = value.into();
    }

    pub fn composition_start(&mut self) {
        self.composing = true;
    }

    pub fn composition_end(&mut self) {
        self.composing = false;
    }

    /// Decide how to treat a keydown.
    ///
    /// `event_composing` is the event's own `isComposing`; both it and the
    /// tracked flag must be clear for Enter to submit.
    pub fn key_action(&self, key: &str, shift: bool, event_composing: bool) -> KeyAction {
        if key != "Enter" {
            return KeyAction::PassThrough;
        }
        if shift {
            return KeyAction::InsertNewline;
        }
        if event_composing || self.composing {
            return KeyAction::PassThrough;
        }
        KeyAction::Submit
    }

    /// Drop the draft after it has been handed to the conversation.
    pub fn clear(&mut self) {
        self.draft.clear();
    }
}

/// Height cap for the composer: a fraction of the viewport, floored to
/// whole pixels.
pub fn max_height_px(viewport_height: f64, sizing: ComposerSizing) -> f64 {
    (viewport_height * sizing.max_viewport_ratio).floor()
}

/// Height that fits `scroll_height` of content within the cap. Never
/// smaller than the single-line minimum, which wins over the cap on very
/// short viewports.
pub fn fit_height_px(scroll_height: f64, viewport_height: f64, sizing: ComposerSizing) -> f64 {
    scroll_height
        .min(max_height_px(viewport_height, sizing))
        .max(sizing.min_height_px)
}

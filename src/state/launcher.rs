//! Open/closed state of the floating chat popup.

#[cfg(test)]
#[path = "launcher_test.rs"]
mod launcher_test;

/// Result of clicking the launcher button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleOutcome {
    pub open: bool,
    /// First open: the embedded chat frame should be pointed at its source.
    pub load_frame: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LauncherState {
    pub open: bool,
    pub frame_loaded: bool,
}

impl LauncherState {
    /// State matching the popup as the page rendered it.
    pub fn starting(open: bool) -> Self {
        Self { open, frame_loaded: false }
    }

    pub fn toggle(&mut self) -> ToggleOutcome {
        self.open = !self.open;
        let load_frame = self.open && !self.frame_loaded;
        if load_frame {
            self.frame_loaded = true;
        }
        ToggleOutcome { open: self.open, load_frame }
    }

    /// Close the popup. Returns whether it was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Escape closes an open popup.
    pub fn on_key(&mut self, key: &str) -> bool {
        key == "Escape" && self.close()
    }

    /// A click anywhere outside the widget closes an open popup.
    pub fn on_document_click(&mut self, within_widget: bool) -> bool {
        !within_widget && self.close()
    }

    /// Value for the toggle button's `aria-expanded` attribute.
    pub fn aria_expanded(&self) -> &'static str {
        if self.open { "true" } else { "false" }
    }
}

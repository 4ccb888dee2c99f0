//! UI state - cursor blink for the filter field

use std::time::{Duration, Instant};

/// UI state independent of the picker data
#[derive(Debug, Clone)]
pub struct UiState {
    /// Whether the filter-field cursor is currently visible (for blinking)
    pub cursor_visible: bool,
    /// Timestamp of last cursor blink state change
    pub last_cursor_blink: Instant,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            cursor_visible: true,
            last_cursor_blink: Instant::now(),
        }
    }

    /// Reset cursor blink timer (call after user input)
    pub fn reset_cursor_blink(&mut self) {
        self.cursor_visible = true;
        self.last_cursor_blink = Instant::now();
    }

    /// Update cursor blink state based on elapsed time.
    /// Returns true if the state changed (needs redraw).
    pub fn update_cursor_blink(&mut self, blink_interval: Duration) -> bool {
        if self.last_cursor_blink.elapsed() >= blink_interval {
            self.cursor_visible = !self.cursor_visible;
            self.last_cursor_blink = Instant::now();
            true
        } else {
            false
        }
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

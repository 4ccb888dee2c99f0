//! Application model - the complete state of the picker dialog
//!
//! This module contains all the state types following the Elm
//! Architecture pattern.

pub mod marker;
pub mod picker;
pub mod ui;

pub use marker::{matches, Marker, MarkerList};
pub use picker::{Focus, PickerState};
pub use ui::UiState;

use crate::config::PickerConfig;
use crate::theme::{load_theme, Theme};

/// The complete application model
#[derive(Debug, Clone)]
pub struct AppModel {
    /// Picker dialog state (markers, filter, selection)
    pub picker: PickerState,
    /// UI state (cursor blink)
    pub ui: UiState,
    /// Theme for colors and styling
    pub theme: Theme,
    /// Persisted configuration
    pub config: PickerConfig,
    /// Window dimensions in physical pixels
    pub window_size: (u32, u32),
    /// Display scale factor
    pub scale_factor: f64,
}

impl AppModel {
    /// Create the model for a freshly opened picker.
    ///
    /// `markers` is the host's enumeration for the active document; an
    /// absent or invalid document is represented by an empty vec, which
    /// renders as an empty list rather than an error.
    pub fn new(markers: Vec<Marker>, window_width: u32, window_height: u32) -> Self {
        PickerConfig::ensure_config_dirs();

        let config = PickerConfig::load();
        let theme = load_theme(&config.theme).unwrap_or_else(|e| {
            tracing::warn!(
                "Failed to load theme '{}': {}, using default",
                config.theme,
                e
            );
            Theme::default()
        });

        Self {
            picker: PickerState::open(markers),
            ui: UiState::new(),
            theme,
            config,
            window_size: (window_width, window_height),
            scale_factor: 1.0,
        }
    }

    /// Update window dimensions after a resize
    pub fn resize(&mut self, width: u32, height: u32) {
        self.window_size = (width, height);
    }

    /// Reset cursor blink timer
    pub fn reset_cursor_blink(&mut self) {
        self.ui.reset_cursor_blink();
    }
}

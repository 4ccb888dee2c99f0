//! Debug tracing infrastructure for development diagnostics
//!
//! Provides structured logging with scoped filtering for debugging
//! filter/selection state transitions.
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=picker=trace,message=debug` - scoped filtering
//! - `RUST_LOG=goto_marker::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/goto-marker/logs/goto-marker.log`
//! with daily rotation. File logging uses debug level by default.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::PickerState;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG env var for filtering; file logging
/// writes to `~/.config/goto-marker/logs/goto-marker.log` with daily
/// rotation.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "goto-marker.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of filter/selection state for diffing
#[derive(Debug, Clone)]
pub struct PickerSnapshot {
    pub filter: String,
    pub selected: Option<usize>,
    pub visible: usize,
    pub total: usize,
}

impl PickerSnapshot {
    pub fn from_picker(picker: &PickerState) -> Self {
        let (visible, total) = picker.counts();
        Self {
            filter: picker.filter().to_string(),
            selected: picker.selected,
            visible,
            total,
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &PickerSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.filter != other.filter {
            changes.push(format!("filter: {:?} → {:?}", self.filter, other.filter));
        }
        if self.selected != other.selected {
            changes.push(format!(
                "selection: {:?} → {:?}",
                self.selected, other.selected
            ));
        }
        if (self.visible, self.total) != (other.visible, other.total) {
            changes.push(format!(
                "rows: {}/{} → {}/{}",
                self.visible, self.total, other.visible, other.total
            ));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles
//! separately.

#![allow(dead_code)]

use goto_marker::commands::Cmd;
use goto_marker::config::PickerConfig;
use goto_marker::host::EditorHost;
use goto_marker::model::{AppModel, Marker, PickerState, UiState};
use goto_marker::theme::Theme;

/// Create a test model over the given (line, text) markers
pub fn test_model(markers: &[(usize, &str)]) -> AppModel {
    let markers = markers
        .iter()
        .map(|&(line, text)| Marker::new(line, text))
        .collect();

    AppModel {
        picker: PickerState::open(markers),
        ui: UiState::new(),
        theme: Theme::default(),
        config: PickerConfig::default(),
        window_size: (720, 500),
        scale_factor: 1.0,
    }
}

/// The three-marker list used by most scenarios
pub fn sample_model() -> AppModel {
    test_model(&[(3, "foo"), (12, "bar"), (21, "foobar")])
}

/// Line numbers of the currently visible rows
pub fn visible_lines(model: &AppModel) -> Vec<usize> {
    model.picker.visible().iter().map(|m| m.line).collect()
}

/// Apply a command against a host the way the runtime does
pub fn apply_cmd(host: &mut dyn EditorHost, cmd: &Cmd) {
    let Some(doc) = host.active_document() else {
        return;
    };
    match cmd {
        Cmd::Navigate { line } => host.navigate_to_line(doc, *line),
        Cmd::RemoveMarker { line } => host.remove_marker(doc, *line),
        Cmd::RemoveAllMarkers => host.remove_all_markers(doc),
        Cmd::Redraw | Cmd::Close => {}
    }
}

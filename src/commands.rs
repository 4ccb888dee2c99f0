//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an
//! update. Host-facing commands are executed by the runtime against the
//! [`EditorHost`](crate::host::EditorHost) the picker was opened with;
//! the model itself never holds a host reference.

/// A side effect requested by an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Redraw the window
    Redraw,
    /// Navigate the host to a 1-based line, then close the picker
    Navigate { line: usize },
    /// Remove the host's marker at a 1-based line
    RemoveMarker { line: usize },
    /// Remove every marker from the host document
    RemoveAllMarkers,
    /// Close the picker with no document side effects
    Close,
}

impl Cmd {
    /// Whether executing this command ends the picker session
    pub fn closes_picker(&self) -> bool {
        matches!(self, Cmd::Navigate { .. } | Cmd::Close)
    }
}

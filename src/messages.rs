//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

/// Picker messages (filter editing, selection, actions)
#[derive(Debug, Clone)]
pub enum PickerMsg {
    /// Replace the filter text wholesale
    SetFilter(String),
    /// Append a character to the filter
    InsertChar(char),
    /// Delete the last character of the filter (Backspace)
    DeleteBackward,
    /// Delete the last word of the filter (Option+Backspace)
    DeleteWordBackward,
    /// Append clipboard text to the filter (Cmd+V)
    Paste,
    /// Move selection up in the visible rows
    SelectPrevious,
    /// Move selection down in the visible rows
    SelectNext,
    /// Select a specific visible row (mouse click)
    SelectRow(usize),
    /// Move input focus from the filter field to the list
    /// without changing the selection
    FocusList,
    /// Navigate to the selected marker and close (Enter / Goto button).
    /// No-op when nothing is selected.
    Confirm,
    /// Remove the selected marker from the document and the list
    DeleteSelected,
    /// Remove every marker from the document and clear the list
    DeleteAll,
    /// Close the picker without touching the document (Escape / Cancel)
    Cancel,
}

/// UI messages (cursor blink)
#[derive(Debug, Clone)]
pub enum UiMsg {
    /// Toggle cursor blink state
    BlinkCursor,
}

/// Application-level messages (window events)
#[derive(Debug, Clone)]
pub enum AppMsg {
    /// Window resized
    Resize(u32, u32),
    /// Display scale factor changed (e.g., moving between monitors)
    ScaleFactorChanged(f64),
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    /// Picker messages (filter, selection, actions)
    Picker(PickerMsg),
    /// UI messages (animation)
    Ui(UiMsg),
    /// App messages (window)
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    /// Create a filter-character message
    pub fn insert_char(ch: char) -> Self {
        Msg::Picker(PickerMsg::InsertChar(ch))
    }

    /// Create a resize message
    pub fn resize(width: u32, height: u32) -> Self {
        Msg::App(AppMsg::Resize(width, height))
    }
}

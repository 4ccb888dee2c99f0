//! Keyboard input handling
//!
//! The whole application is one dialog, so keys are routed the way a
//! modal captures focus: named keys drive selection and actions,
//! printable characters always edit the filter field.

use winit::keyboard::{Key, NamedKey};

use goto_marker::commands::Cmd;
use goto_marker::messages::{Msg, PickerMsg};
use goto_marker::model::{AppModel, Focus};
use goto_marker::update::update;

/// Handle a pressed key, returning the command to execute
pub fn handle_key(
    model: &mut AppModel,
    key: Key,
    ctrl: bool,
    alt: bool,
    logo: bool,
) -> Option<Cmd> {
    match key {
        // Escape: close without side effects
        Key::Named(NamedKey::Escape) => update(model, Msg::Picker(PickerMsg::Cancel)),

        // Enter: navigate to the selected marker
        Key::Named(NamedKey::Enter) => update(model, Msg::Picker(PickerMsg::Confirm)),

        // First ArrowDown moves focus from the filter field to the list
        // without changing the selection; after that it moves selection.
        Key::Named(NamedKey::ArrowDown) => {
            if model.picker.focus == Focus::Filter {
                update(model, Msg::Picker(PickerMsg::FocusList))
            } else {
                update(model, Msg::Picker(PickerMsg::SelectNext))
            }
        }
        Key::Named(NamedKey::ArrowUp) => update(model, Msg::Picker(PickerMsg::SelectPrevious)),

        // Word deletion (Option/Alt + Backspace)
        Key::Named(NamedKey::Backspace) if alt => {
            update(model, Msg::Picker(PickerMsg::DeleteWordBackward))
        }

        // Backspace: delete filter character
        Key::Named(NamedKey::Backspace) => update(model, Msg::Picker(PickerMsg::DeleteBackward)),

        // Paste into the filter (Ctrl+V / Cmd+V)
        Key::Character(ref s) if (ctrl || logo) && s.eq_ignore_ascii_case("v") => {
            update(model, Msg::Picker(PickerMsg::Paste))
        }

        // Character input (only when no Ctrl/Cmd modifiers)
        Key::Character(ref s) if !(ctrl || logo) => {
            let mut cmd = None;
            for ch in s.chars() {
                cmd = update(model, Msg::Picker(PickerMsg::InsertChar(ch))).or(cmd);
            }
            cmd
        }

        // Space (without modifiers)
        Key::Named(NamedKey::Space) if !(ctrl || logo) => {
            update(model, Msg::Picker(PickerMsg::InsertChar(' ')))
        }

        _ => None,
    }
}

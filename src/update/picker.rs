//! Picker message handlers (filter edits, selection, actions)

use crate::commands::Cmd;
use crate::messages::PickerMsg;
use crate::model::{AppModel, Focus};

/// Handle picker messages.
///
/// Filter edits and the resulting count/selection refresh happen inside
/// a single call, so no intermediate state is ever observable between a
/// keystroke and the refreshed view.
pub fn update_picker(model: &mut AppModel, msg: PickerMsg) -> Option<Cmd> {
    match msg {
        PickerMsg::SetFilter(text) => {
            model.picker.set_filter(text);
            model.reset_cursor_blink();
            Some(Cmd::Redraw)
        }

        PickerMsg::InsertChar(ch) => {
            model.picker.push_filter_char(ch);
            model.reset_cursor_blink();
            Some(Cmd::Redraw)
        }

        PickerMsg::DeleteBackward => {
            model.picker.pop_filter_char();
            model.reset_cursor_blink();
            Some(Cmd::Redraw)
        }

        PickerMsg::DeleteWordBackward => {
            model.picker.pop_filter_word();
            model.reset_cursor_blink();
            Some(Cmd::Redraw)
        }

        PickerMsg::Paste => {
            let clipboard_text = match arboard::Clipboard::new() {
                Ok(mut clipboard) => clipboard.get_text().ok(),
                Err(e) => {
                    tracing::warn!("Clipboard unavailable: {}", e);
                    None
                }
            };
            if let Some(text) = clipboard_text {
                model.picker.push_filter_text(&text);
                model.reset_cursor_blink();
                Some(Cmd::Redraw)
            } else {
                None
            }
        }

        PickerMsg::SelectPrevious => {
            model.picker.select_previous();
            Some(Cmd::Redraw)
        }

        PickerMsg::SelectNext => {
            model.picker.select_next();
            Some(Cmd::Redraw)
        }

        PickerMsg::SelectRow(idx) => {
            model.picker.select_row(idx);
            Some(Cmd::Redraw)
        }

        PickerMsg::FocusList => {
            model.picker.focus = Focus::List;
            Some(Cmd::Redraw)
        }

        // Only Confirm and Cancel close the picker; the delete actions
        // leave it open so several markers can be cleaned up in one go.
        PickerMsg::Confirm => {
            let line = model.picker.selected_marker()?.line;
            Some(Cmd::Navigate { line })
        }

        PickerMsg::DeleteSelected => {
            let line = model.picker.delete_selected()?;
            Some(Cmd::RemoveMarker { line })
        }

        PickerMsg::DeleteAll => {
            if model.picker.delete_all() {
                Some(Cmd::RemoveAllMarkers)
            } else {
                None
            }
        }

        PickerMsg::Cancel => Some(Cmd::Close),
    }
}

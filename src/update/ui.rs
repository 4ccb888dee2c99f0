//! UI message handlers (cursor blink)

use std::time::Duration;

use crate::commands::Cmd;
use crate::messages::UiMsg;
use crate::model::AppModel;

/// Handle UI messages
pub fn update_ui(model: &mut AppModel, msg: UiMsg) -> Option<Cmd> {
    match msg {
        UiMsg::BlinkCursor => {
            if model.ui.update_cursor_blink(Duration::from_millis(500)) {
                Some(Cmd::Redraw)
            } else {
                None
            }
        }
    }
}

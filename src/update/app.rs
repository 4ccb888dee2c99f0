//! Application message handlers (window events)

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::AppModel;

/// Handle application-level messages
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Resize(width, height) => {
            model.resize(width, height);
            Some(Cmd::Redraw)
        }

        AppMsg::ScaleFactorChanged(factor) => {
            model.scale_factor = factor;
            Some(Cmd::Redraw)
        }
    }
}

//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod picker;
mod ui;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::PickerSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use picker::update_picker;
pub use ui::update_ui;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Picker(m) => picker::update_picker(model, m),
        Msg::Ui(m) => ui::update_ui(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after picker state and logs diffs for debugging.
/// Filters out noisy messages like BlinkCursor from logging.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::UiMsg;

    // Skip logging for noisy periodic messages
    let is_noisy = matches!(&msg, Msg::Ui(UiMsg::BlinkCursor));

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = PickerSnapshot::from_picker(&model.picker);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    let after = PickerSnapshot::from_picker(&model.picker);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "picker", %diff, "state changed");
    }

    result
}

/// Get a display name for a message type
///
/// Uses Debug formatting to include variant names and arguments.
/// Example outputs:
/// - `Picker::InsertChar('x')`
/// - `App::Resize(720, 500)`
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Picker(m) => format!("Picker::{:?}", m),
        Msg::Ui(m) => format!("Ui::{:?}", m),
        Msg::App(m) => format!("App::{:?}", m),
    }
}

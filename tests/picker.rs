//! Picker operation tests
//!
//! Covers opening, selection movement, confirm/cancel, and the two
//! delete actions, including the commands each operation emits.

mod common;

use common::{sample_model, test_model, visible_lines};

use goto_marker::commands::Cmd;
use goto_marker::messages::{Msg, PickerMsg};
use goto_marker::model::Focus;
use goto_marker::update::update;

// ========================================================================
// Opening
// ========================================================================

#[test]
fn test_open_selects_first_row() {
    let model = sample_model();

    assert_eq!(model.picker.selected, Some(0));
    assert_eq!(model.picker.selected_marker().unwrap().line, 3);
    assert_eq!(model.picker.counts(), (3, 3));
}

#[test]
fn test_open_empty_has_no_selection_and_disabled_actions() {
    let model = test_model(&[]);

    assert_eq!(model.picker.selected, None);
    assert!(model.picker.selected_marker().is_none());
    assert!(!model.picker.actions_enabled());
    assert_eq!(model.picker.counts(), (0, 0));
}

#[test]
fn test_open_sorts_markers_ascending() {
    let model = test_model(&[(21, "c"), (3, "a"), (12, "b")]);
    assert_eq!(visible_lines(&model), vec![3, 12, 21]);
}

#[test]
fn test_title_shows_visible_over_total() {
    let mut model = sample_model();
    assert_eq!(model.picker.title(), "Go to Marker 3/3");

    update(
        &mut model,
        Msg::Picker(PickerMsg::SetFilter("foo".to_string())),
    );
    assert_eq!(model.picker.title(), "Go to Marker 2/3");
}

// ========================================================================
// Selection movement
// ========================================================================

#[test]
fn test_select_next_and_previous_are_clamped() {
    let mut model = sample_model();

    update(&mut model, Msg::Picker(PickerMsg::SelectNext));
    update(&mut model, Msg::Picker(PickerMsg::SelectNext));
    assert_eq!(model.picker.selected, Some(2));

    // Already at the bottom
    update(&mut model, Msg::Picker(PickerMsg::SelectNext));
    assert_eq!(model.picker.selected, Some(2));

    update(&mut model, Msg::Picker(PickerMsg::SelectPrevious));
    update(&mut model, Msg::Picker(PickerMsg::SelectPrevious));
    update(&mut model, Msg::Picker(PickerMsg::SelectPrevious));
    assert_eq!(model.picker.selected, Some(0));
}

#[test]
fn test_select_row_clamps_to_visible() {
    let mut model = sample_model();

    update(&mut model, Msg::Picker(PickerMsg::SelectRow(99)));
    assert_eq!(model.picker.selected, Some(2));
    assert_eq!(model.picker.focus, Focus::List);
}

#[test]
fn test_focus_list_keeps_selection() {
    let mut model = sample_model();
    update(&mut model, Msg::Picker(PickerMsg::SelectNext));
    let before = model.picker.selected;

    update(&mut model, Msg::Picker(PickerMsg::FocusList));

    assert_eq!(model.picker.focus, Focus::List);
    assert_eq!(model.picker.selected, before);
}

#[test]
fn test_typing_returns_focus_to_filter() {
    let mut model = sample_model();
    update(&mut model, Msg::Picker(PickerMsg::FocusList));

    update(&mut model, Msg::Picker(PickerMsg::InsertChar('f')));

    assert_eq!(model.picker.focus, Focus::Filter);
}

// ========================================================================
// Confirm / cancel
// ========================================================================

#[test]
fn test_confirm_emits_navigate_for_selected_row() {
    let mut model = sample_model();
    update(&mut model, Msg::Picker(PickerMsg::SelectNext));

    let cmd = update(&mut model, Msg::Picker(PickerMsg::Confirm));

    assert_eq!(cmd, Some(Cmd::Navigate { line: 12 }));
}

#[test]
fn test_confirm_without_selection_is_noop() {
    let mut model = sample_model();
    update(
        &mut model,
        Msg::Picker(PickerMsg::SetFilter("no such marker".to_string())),
    );
    assert_eq!(model.picker.selected, None);

    let cmd = update(&mut model, Msg::Picker(PickerMsg::Confirm));

    // No navigation, and the list is untouched
    assert_eq!(cmd, None);
    assert_eq!(model.picker.counts().1, 3);
}

#[test]
fn test_confirm_respects_filtered_selection() {
    let mut model = sample_model();
    update(
        &mut model,
        Msg::Picker(PickerMsg::SetFilter("foo".to_string())),
    );
    update(&mut model, Msg::Picker(PickerMsg::SelectNext));

    let cmd = update(&mut model, Msg::Picker(PickerMsg::Confirm));

    // Second visible row under "foo" is line 21, not line 12
    assert_eq!(cmd, Some(Cmd::Navigate { line: 21 }));
}

#[test]
fn test_cancel_closes_without_touching_markers() {
    let mut model = sample_model();

    let cmd = update(&mut model, Msg::Picker(PickerMsg::Cancel));

    assert_eq!(cmd, Some(Cmd::Close));
    assert_eq!(model.picker.counts(), (3, 3));
}

// ========================================================================
// Delete selected
// ========================================================================

#[test]
fn test_delete_selected_removes_one_and_keeps_position() {
    let mut model = sample_model();

    let cmd = update(&mut model, Msg::Picker(PickerMsg::DeleteSelected));

    assert_eq!(cmd, Some(Cmd::RemoveMarker { line: 3 }));
    assert_eq!(visible_lines(&model), vec![12, 21]);
    // Same visual position now holds the next row
    assert_eq!(model.picker.selected, Some(0));
    assert_eq!(model.picker.selected_marker().unwrap().line, 12);
}

#[test]
fn test_delete_selected_clamps_at_end() {
    let mut model = sample_model();
    update(&mut model, Msg::Picker(PickerMsg::SelectRow(2)));

    update(&mut model, Msg::Picker(PickerMsg::DeleteSelected));

    // Deleted the last row; selection clamps to the new last row
    assert_eq!(visible_lines(&model), vec![3, 12]);
    assert_eq!(model.picker.selected, Some(1));
}

#[test]
fn test_delete_last_remaining_row_clears_selection() {
    let mut model = test_model(&[(7, "only")]);

    let cmd = update(&mut model, Msg::Picker(PickerMsg::DeleteSelected));

    assert_eq!(cmd, Some(Cmd::RemoveMarker { line: 7 }));
    assert_eq!(model.picker.counts(), (0, 0));
    assert_eq!(model.picker.selected, None);
    assert!(!model.picker.actions_enabled());
}

#[test]
fn test_delete_selected_without_selection_is_noop() {
    let mut model = test_model(&[]);

    let cmd = update(&mut model, Msg::Picker(PickerMsg::DeleteSelected));

    assert_eq!(cmd, None);
}

#[test]
fn test_delete_selected_under_filter_keeps_other_markers() {
    let mut model = sample_model();
    update(
        &mut model,
        Msg::Picker(PickerMsg::SetFilter("foo".to_string())),
    );

    // Visible: [3, 21]; delete the first
    let cmd = update(&mut model, Msg::Picker(PickerMsg::DeleteSelected));

    assert_eq!(cmd, Some(Cmd::RemoveMarker { line: 3 }));
    assert_eq!(visible_lines(&model), vec![21]);
    // Hidden marker 12 survives
    assert_eq!(model.picker.counts(), (1, 2));
}

// ========================================================================
// Delete all
// ========================================================================

#[test]
fn test_delete_all_empties_regardless_of_filter() {
    let mut model = sample_model();
    update(
        &mut model,
        Msg::Picker(PickerMsg::SetFilter("foo".to_string())),
    );

    let cmd = update(&mut model, Msg::Picker(PickerMsg::DeleteAll));

    assert_eq!(cmd, Some(Cmd::RemoveAllMarkers));
    assert_eq!(model.picker.counts(), (0, 0));
    assert_eq!(model.picker.selected, None);

    // Filtering an empty list keeps everything disabled
    update(
        &mut model,
        Msg::Picker(PickerMsg::SetFilter(String::new())),
    );
    assert_eq!(model.picker.counts(), (0, 0));
    assert!(!model.picker.actions_enabled());
}

#[test]
fn test_delete_all_does_not_close() {
    let mut model = sample_model();

    let cmd = update(&mut model, Msg::Picker(PickerMsg::DeleteAll));

    // Only Confirm and Cancel produce closing commands
    assert!(!cmd.unwrap().closes_picker());
}

#[test]
fn test_delete_all_on_empty_list_is_noop() {
    let mut model = test_model(&[]);

    let cmd = update(&mut model, Msg::Picker(PickerMsg::DeleteAll));

    assert_eq!(cmd, None);
}

// ========================================================================
// Window messages
// ========================================================================

#[test]
fn test_resize_updates_window_size() {
    let mut model = sample_model();

    let cmd = update(&mut model, Msg::resize(1024, 768));

    assert_eq!(cmd, Some(Cmd::Redraw));
    assert_eq!(model.window_size, (1024, 768));
}

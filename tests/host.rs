//! MemoryHost tests
//!
//! The in-memory host doubles as the demo document and as the fake the
//! picker is tested against, so its contract has to hold exactly:
//! ascending enumeration, trimmed line text, no-op deletes, and the
//! reported-empty path for an invalid document.

mod common;

use std::io::Write;

use common::{apply_cmd, test_model};

use goto_marker::host::{enumerate_markers, EditorHost, MemoryHost};
use goto_marker::messages::{Msg, PickerMsg};
use goto_marker::model::AppModel;
use goto_marker::update::update;

fn sample_host() -> MemoryHost {
    let mut host = MemoryHost::from_text("  fn main() {\nlet x = 1;\n\n    return x;\n}\n");
    host.add_marker(4);
    host.add_marker(1);
    host
}

#[test]
fn test_markers_are_ascending_with_trimmed_text() {
    let host = sample_host();
    let doc = host.active_document().unwrap();

    let markers = host.markers(doc);

    let lines: Vec<usize> = markers.iter().map(|m| m.line).collect();
    assert_eq!(lines, vec![1, 4]);
    assert_eq!(markers[0].text, "fn main() {");
    assert_eq!(markers[1].text, "return x;");
}

#[test]
fn test_marker_on_blank_line_has_empty_text() {
    let mut host = MemoryHost::from_text("a\n\nc\n");
    host.add_marker(2);
    let doc = host.active_document().unwrap();

    let markers = host.markers(doc);

    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].text, "");
}

#[test]
fn test_out_of_range_markers_are_skipped() {
    let mut host = MemoryHost::from_text("one\ntwo\n");
    host.add_marker(0);
    host.add_marker(999);

    assert!(host.marked_lines().is_empty());
}

#[test]
fn test_invalid_document_reports_empty() {
    let host = MemoryHost::without_document();

    assert!(host.active_document().is_none());
    assert!(enumerate_markers(&host).is_empty());

    // The picker opens over it as an empty list, not an error
    let model = AppModel {
        picker: goto_marker::model::PickerState::open(enumerate_markers(&host)),
        ..test_model(&[])
    };
    assert_eq!(model.picker.counts(), (0, 0));
}

#[test]
fn test_remove_marker_is_noop_when_absent() {
    let mut host = sample_host();
    let doc = host.active_document().unwrap();

    host.remove_marker(doc, 2);
    assert_eq!(host.marked_lines(), vec![1, 4]);

    host.remove_marker(doc, 4);
    host.remove_marker(doc, 4);
    assert_eq!(host.marked_lines(), vec![1]);
}

#[test]
fn test_remove_all_markers() {
    let mut host = sample_host();
    let doc = host.active_document().unwrap();

    host.remove_all_markers(doc);

    assert!(host.marked_lines().is_empty());
}

#[test]
fn test_navigation_is_recorded() {
    let mut host = sample_host();
    let doc = host.active_document().unwrap();

    assert_eq!(host.navigated(), None);
    host.navigate_to_line(doc, 4);
    assert_eq!(host.navigated(), Some(4));
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "alpha").unwrap();
    writeln!(file, "  beta  ").unwrap();

    let mut host = MemoryHost::from_file(file.path()).unwrap();
    host.add_marker(2);
    let doc = host.active_document().unwrap();

    let markers = host.markers(doc);
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].text, "beta");
}

#[test]
fn test_from_file_missing_is_error() {
    assert!(MemoryHost::from_file(std::path::Path::new("/no/such/file.txt")).is_err());
}

// ========================================================================
// Update → command → host round trips
// ========================================================================

#[test]
fn test_delete_round_trip_shrinks_host() {
    let mut host = sample_host();
    let mut model = AppModel {
        picker: goto_marker::model::PickerState::open(enumerate_markers(&host)),
        ..test_model(&[])
    };

    let cmd = update(&mut model, Msg::Picker(PickerMsg::DeleteSelected)).unwrap();
    apply_cmd(&mut host, &cmd);

    assert_eq!(host.marked_lines(), vec![4]);
    assert_eq!(model.picker.counts(), (1, 1));
}

#[test]
fn test_confirm_round_trip_navigates_host() {
    let mut host = sample_host();
    let mut model = AppModel {
        picker: goto_marker::model::PickerState::open(enumerate_markers(&host)),
        ..test_model(&[])
    };

    update(&mut model, Msg::Picker(PickerMsg::SelectNext));
    let cmd = update(&mut model, Msg::Picker(PickerMsg::Confirm)).unwrap();
    apply_cmd(&mut host, &cmd);

    assert_eq!(host.navigated(), Some(4));
    // Markers untouched by navigation
    assert_eq!(host.marked_lines(), vec![1, 4]);
}

#[test]
fn test_delete_all_round_trip_clears_host() {
    let mut host = sample_host();
    let mut model = AppModel {
        picker: goto_marker::model::PickerState::open(enumerate_markers(&host)),
        ..test_model(&[])
    };

    let cmd = update(&mut model, Msg::Picker(PickerMsg::DeleteAll)).unwrap();
    apply_cmd(&mut host, &cmd);

    assert!(host.marked_lines().is_empty());
    assert_eq!(host.navigated(), None);
}

//! Host editor interface
//!
//! The picker never touches a document directly; everything goes
//! through this narrow trait so the dialog can be embedded in a real
//! editor or driven by the in-memory host below. The host handle is
//! passed into the runtime at construction - there is no process-wide
//! editor state.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use ropey::Rope;

use crate::model::Marker;

/// Opaque handle to a host document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentHandle(pub u64);

/// What the picker needs from the surrounding editor.
///
/// `markers` must return rows ascending by line number and reflect only
/// the bookmark category this dialog manages. `remove_marker` is a
/// no-op when no marker exists at the line.
pub trait EditorHost {
    /// The active document, or None when nothing valid is open.
    /// The picker treats None as "zero markers", not as an error.
    fn active_document(&self) -> Option<DocumentHandle>;

    /// Enumerate the document's markers, ascending by line number
    fn markers(&self, doc: DocumentHandle) -> Vec<Marker>;

    /// Move the host's viewport/cursor to a 1-based line
    fn navigate_to_line(&mut self, doc: DocumentHandle, line: usize);

    /// Remove the marker at a 1-based line, if present
    fn remove_marker(&mut self, doc: DocumentHandle, line: usize);

    /// Remove every marker from the document
    fn remove_all_markers(&mut self, doc: DocumentHandle);
}

/// In-memory host: one rope-backed document plus a set of marked lines.
///
/// Serves as the demo host for the binary and as the fake document for
/// tests. Navigation is recorded rather than performed, so callers can
/// observe where the picker sent them.
#[derive(Debug, Clone)]
pub struct MemoryHost {
    buffer: Rope,
    markers: BTreeSet<usize>,
    valid: bool,
    navigated: Option<usize>,
}

const DOC: DocumentHandle = DocumentHandle(0);

impl MemoryHost {
    /// Host over a document loaded from text
    pub fn from_text(text: &str) -> Self {
        Self {
            buffer: Rope::from_str(text),
            markers: BTreeSet::new(),
            valid: true,
            navigated: None,
        }
    }

    /// Host over a document loaded from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let reader = BufReader::new(
            File::open(path).with_context(|| format!("Failed to open {}", path.display()))?,
        );
        let buffer = Rope::from_reader(reader)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Ok(Self {
            buffer,
            markers: BTreeSet::new(),
            valid: true,
            navigated: None,
        })
    }

    /// Host with no valid document (exercises the reported-empty path)
    pub fn without_document() -> Self {
        Self {
            buffer: Rope::new(),
            markers: BTreeSet::new(),
            valid: false,
            navigated: None,
        }
    }

    /// Number of lines in the document
    pub fn line_count(&self) -> usize {
        self.buffer.len_lines()
    }

    /// Toggle a marker on. Lines outside the document are skipped.
    pub fn add_marker(&mut self, line: usize) {
        if line == 0 || line > self.line_count() {
            tracing::warn!(
                "Ignoring marker on line {} (document has {} lines)",
                line,
                self.line_count()
            );
            return;
        }
        self.markers.insert(line);
    }

    /// Where the picker last navigated to, if anywhere
    pub fn navigated(&self) -> Option<usize> {
        self.navigated
    }

    /// Lines currently marked, ascending
    pub fn marked_lines(&self) -> Vec<usize> {
        self.markers.iter().copied().collect()
    }

    fn line_text(&self, line: usize) -> String {
        // 1-based line, guaranteed in range by add_marker
        self.buffer.line(line - 1).to_string().trim().to_string()
    }
}

impl EditorHost for MemoryHost {
    fn active_document(&self) -> Option<DocumentHandle> {
        self.valid.then_some(DOC)
    }

    fn markers(&self, _doc: DocumentHandle) -> Vec<Marker> {
        // BTreeSet iteration is already ascending
        self.markers
            .iter()
            .map(|&line| Marker::new(line, self.line_text(line)))
            .collect()
    }

    fn navigate_to_line(&mut self, _doc: DocumentHandle, line: usize) {
        tracing::debug!("navigate to line {}", line);
        self.navigated = Some(line);
    }

    fn remove_marker(&mut self, _doc: DocumentHandle, line: usize) {
        self.markers.remove(&line);
    }

    fn remove_all_markers(&mut self, _doc: DocumentHandle) {
        self.markers.clear();
    }
}

/// Enumerate the markers of the host's active document.
///
/// An absent or invalid document yields an empty list - the dialog
/// opens showing "0/0", it does not error.
pub fn enumerate_markers(host: &dyn EditorHost) -> Vec<Marker> {
    match host.active_document() {
        Some(doc) => host.markers(doc),
        None => Vec::new(),
    }
}

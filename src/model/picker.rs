//! Picker state - filter text, focus, and selection over the visible rows

use super::marker::{matches, Marker, MarkerList};

/// Which widget receives list-navigation keys.
///
/// ArrowDown moves focus from the filter field to the list without
/// changing the selection; typing always returns focus to the filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Filter,
    List,
}

/// The picker dialog state.
///
/// The visible rows are a derived value recomputed from
/// `(markers, filter)` on demand; there is no cached filtered list that
/// could go stale. `selected` indexes into the visible rows (the sorted
/// presentation), not into the underlying marker list.
#[derive(Debug, Clone, Default)]
pub struct PickerState {
    markers: MarkerList,
    filter: String,
    pub focus: Focus,
    pub selected: Option<usize>,
}

impl PickerState {
    /// Open the picker over a freshly enumerated marker list.
    ///
    /// The first row is selected when any exist (matching the dialog
    /// opening with an empty filter).
    pub fn open(markers: Vec<Marker>) -> Self {
        let markers = MarkerList::new(markers);
        let selected = if markers.is_empty() { None } else { Some(0) };
        Self {
            markers,
            filter: String::new(),
            focus: Focus::Filter,
            selected,
        }
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// The visible rows: markers matching the current filter, ascending
    /// by line number (list order is already ascending).
    pub fn visible(&self) -> Vec<&Marker> {
        self.markers
            .iter()
            .filter(|m| matches(&self.filter, m))
            .collect()
    }

    /// (visible, total) row counts
    pub fn counts(&self) -> (usize, usize) {
        (self.visible().len(), self.markers.len())
    }

    /// Window title with the original dialog's row counter
    pub fn title(&self) -> String {
        let (visible, total) = self.counts();
        format!("Go to Marker {}/{}", visible, total)
    }

    /// Whether Goto / Remove Marker / Remove All Markers are usable.
    /// Cancel is always available.
    pub fn actions_enabled(&self) -> bool {
        !self.visible().is_empty()
    }

    /// The marker under the selection, if any
    pub fn selected_marker(&self) -> Option<&Marker> {
        let visible = self.visible();
        self.selected.and_then(|idx| visible.get(idx).copied())
    }

    /// Replace the filter text and re-derive selection and focus.
    ///
    /// Every filter change re-selects the first visible row (or none),
    /// so the view is never left pointing at a row the filter hid.
    pub fn set_filter(&mut self, text: String) {
        self.filter = text;
        self.after_filter_change();
    }

    pub fn push_filter_char(&mut self, ch: char) {
        self.filter.push(ch);
        self.after_filter_change();
    }

    pub fn pop_filter_char(&mut self) {
        self.filter.pop();
        self.after_filter_change();
    }

    /// Delete the trailing word of the filter (like Option+Backspace)
    pub fn pop_filter_word(&mut self) {
        while self.filter.ends_with(char::is_whitespace) {
            self.filter.pop();
        }
        while !self.filter.is_empty() && !self.filter.ends_with(char::is_whitespace) {
            self.filter.pop();
        }
        self.after_filter_change();
    }

    /// Append pasted text, stripping newlines (single-line field)
    pub fn push_filter_text(&mut self, text: &str) {
        self.filter
            .extend(text.chars().filter(|ch| !ch.is_control()));
        self.after_filter_change();
    }

    fn after_filter_change(&mut self) {
        self.selected = if self.visible().is_empty() {
            None
        } else {
            Some(0)
        };
        self.focus = Focus::Filter;
    }

    /// Move selection down, clamped to the last visible row
    pub fn select_next(&mut self) {
        let count = self.visible().len();
        if count == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(match self.selected {
            Some(idx) => idx.saturating_add(1).min(count - 1),
            None => 0,
        });
    }

    /// Move selection up, clamped to the first visible row
    pub fn select_previous(&mut self) {
        let count = self.visible().len();
        if count == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(self.selected.map_or(0, |idx| idx.saturating_sub(1)));
    }

    /// Select a specific visible row (mouse click), clamped
    pub fn select_row(&mut self, idx: usize) {
        let count = self.visible().len();
        if count == 0 {
            self.selected = None;
            return;
        }
        self.selected = Some(idx.min(count - 1));
        self.focus = Focus::List;
    }

    /// Remove the selected marker from the list.
    ///
    /// Returns the removed line number so the caller can instruct the
    /// host. The selection stays at the same visual position, clamped
    /// to the new last row, or clears when the list empties under the
    /// current filter.
    pub fn delete_selected(&mut self) -> Option<usize> {
        let line = self.selected_marker()?.line;
        self.markers.remove(line);

        let count = self.visible().len();
        self.selected = match self.selected {
            Some(_) if count == 0 => None,
            Some(idx) => Some(idx.min(count - 1)),
            None => None,
        };
        Some(line)
    }

    /// Clear the whole marker list, regardless of the current filter.
    ///
    /// Returns whether there was anything to clear.
    pub fn delete_all(&mut self) -> bool {
        if self.markers.is_empty() {
            return false;
        }
        self.markers.clear();
        self.selected = None;
        true
    }
}

//! Dialog layout and hit testing
//!
//! Single source of truth for where the filter input, the marker list
//! and the button row sit inside the window. Both rendering and mouse
//! hit-testing go through the same computed layout, so a click can
//! never land on a widget the renderer placed elsewhere.

/// A positioned widget in window pixel coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WidgetRect {
    pub x: usize,
    pub y: usize,
    pub w: usize,
    pub h: usize,
}

impl WidgetRect {
    pub fn new(x: usize, y: usize, w: usize, h: usize) -> Self {
        Self { x, y, w, h }
    }

    /// Check if a point is inside this rect
    pub fn contains(&self, px: usize, py: usize) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
    }
}

/// Spacing constants for the dialog
pub struct DialogSpacing;

impl DialogSpacing {
    /// Outer padding inside the window edge
    pub const PAD: usize = 12;
    /// Medium gap between sections
    pub const GAP_MD: usize = 8;
    /// Input field internal vertical padding (total top+bottom)
    pub const INPUT_PAD_Y: usize = 8;
    /// Input field internal horizontal padding (each side)
    pub const INPUT_PAD_X: usize = 8;
    /// Button internal horizontal padding (each side)
    pub const BUTTON_PAD_X: usize = 14;
    /// Button internal vertical padding (each side)
    pub const BUTTON_PAD_Y: usize = 5;
    /// Gap between buttons
    pub const BUTTON_GAP: usize = 8;
    /// Left inset of list row content
    pub const ROW_INSET: usize = 8;
}

/// The four dialog actions, in their visual order
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ButtonKind {
    RemoveAll,
    RemoveSelected,
    Cancel,
    Goto,
}

impl ButtonKind {
    pub fn label(&self) -> &'static str {
        match self {
            ButtonKind::RemoveAll => "Remove All Markers",
            ButtonKind::RemoveSelected => "Remove Marker",
            ButtonKind::Cancel => "Cancel",
            ButtonKind::Goto => "Goto",
        }
    }

    /// Whether this action is gated on a visible row existing.
    /// Cancel always stays enabled.
    pub fn needs_rows(&self) -> bool {
        !matches!(self, ButtonKind::Cancel)
    }
}

/// A positioned dialog button
#[derive(Clone, Copy, Debug)]
pub struct DialogButton {
    pub kind: ButtonKind,
    pub rect: WidgetRect,
}

/// Computed layout for the whole dialog
#[derive(Clone, Debug)]
pub struct DialogLayout {
    /// Filter input field
    pub input: WidgetRect,
    /// Marker list area
    pub list: WidgetRect,
    /// End-packed button row: Remove All, Remove Marker, Cancel, Goto
    pub buttons: [DialogButton; 4],
}

/// Height of the filter input field
pub fn input_height(line_height: usize) -> usize {
    line_height + DialogSpacing::INPUT_PAD_Y
}

/// Height of a dialog button
pub fn button_height(line_height: usize) -> usize {
    line_height + DialogSpacing::BUTTON_PAD_Y * 2
}

/// Compute the dialog layout for the current window size.
///
/// Filter input on top, button row pinned to the bottom, the list
/// filling whatever is left between them.
pub fn dialog_layout(
    window_width: usize,
    window_height: usize,
    line_height: usize,
    char_width: f32,
) -> DialogLayout {
    let pad = DialogSpacing::PAD;
    let content_w = window_width.saturating_sub(pad * 2);

    let input = WidgetRect::new(pad, pad, content_w, input_height(line_height));

    let btn_h = button_height(line_height);
    let row_y = window_height.saturating_sub(pad + btn_h);

    // End-packed like the original dialog's button box: lay the buttons
    // out right-to-left from the window edge, in reverse visual order.
    let mut right_edge = window_width.saturating_sub(pad);
    let mut place = |kind: ButtonKind| {
        let text_w = (kind.label().len() as f32 * char_width).round() as usize;
        let w = text_w + DialogSpacing::BUTTON_PAD_X * 2;
        let x = right_edge.saturating_sub(w);
        right_edge = x.saturating_sub(DialogSpacing::BUTTON_GAP);
        DialogButton {
            kind,
            rect: WidgetRect::new(x, row_y, w, btn_h),
        }
    };
    let goto = place(ButtonKind::Goto);
    let cancel = place(ButtonKind::Cancel);
    let remove = place(ButtonKind::RemoveSelected);
    let remove_all = place(ButtonKind::RemoveAll);
    let placed = [remove_all, remove, cancel, goto];

    let list_y = input.y + input.h + DialogSpacing::GAP_MD;
    let list_h = row_y
        .saturating_sub(DialogSpacing::GAP_MD)
        .saturating_sub(list_y);
    let list = WidgetRect::new(pad, list_y, content_w, list_h);

    DialogLayout {
        input,
        list,
        buttons: placed,
    }
}

impl DialogLayout {
    /// How many full rows fit in the list area
    pub fn rows_per_page(&self, line_height: usize) -> usize {
        if line_height == 0 {
            return 0;
        }
        self.list.h / line_height
    }

    /// The visible-row index under a point, accounting for scroll.
    ///
    /// Returns None for points outside the list or below the last row.
    pub fn row_at_point(
        &self,
        line_height: usize,
        scroll_offset: usize,
        visible_len: usize,
        px: usize,
        py: usize,
    ) -> Option<usize> {
        if !self.list.contains(px, py) || line_height == 0 {
            return None;
        }
        let row = (py - self.list.y) / line_height;
        if row >= self.rows_per_page(line_height) {
            return None;
        }
        let idx = scroll_offset + row;
        (idx < visible_len).then_some(idx)
    }

    /// The button under a point, if any
    pub fn button_at_point(&self, px: usize, py: usize) -> Option<ButtonKind> {
        self.buttons
            .iter()
            .find(|b| b.rect.contains(px, py))
            .map(|b| b.kind)
    }
}

/// First row to draw so the selection stays on screen.
///
/// Matches the list scrolling of a palette-style picker: the view
/// follows the selection once it walks past the last visible row.
pub fn list_scroll_offset(selected: Option<usize>, rows_per_page: usize) -> usize {
    match selected {
        Some(idx) if rows_per_page > 0 && idx >= rows_per_page => idx + 1 - rows_per_page,
        _ => 0,
    }
}

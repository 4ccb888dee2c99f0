//! Button rendering primitives
//!
//! Provides a simple, pure-function API for rendering themed buttons.
//! No widget tree or stored state - callers determine visual state
//! from model and pointer position and pass it to the render function.

use goto_marker::theme::Theme;

use super::frame::{Frame, TextPainter};
use super::geometry::WidgetRect;

/// Visual state of a button, determined by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonState {
    /// Default idle state
    #[default]
    Normal,
    /// Mouse is hovering over the button
    Hovered,
    /// Mouse button is pressed on the button
    Pressed,
    /// Action unavailable (no visible rows)
    Disabled,
}

/// Render a button with centered text label
///
/// The button rect defines the full clickable/visual area.
/// Visual state (hover, press, disabled) is determined by the caller.
pub fn render_button(
    frame: &mut Frame,
    painter: &mut TextPainter,
    theme: &Theme,
    rect: WidgetRect,
    label: &str,
    state: ButtonState,
    focused: bool,
) {
    let btn = &theme.button;

    let bg = match state {
        ButtonState::Normal => btn.background.to_argb_u32(),
        ButtonState::Hovered => btn.background_hover.to_argb_u32(),
        ButtonState::Pressed => btn.background_pressed.to_argb_u32(),
        ButtonState::Disabled => btn.background_disabled.to_argb_u32(),
    };
    let fg = match state {
        ButtonState::Disabled => btn.foreground_disabled.to_argb_u32(),
        _ => btn.foreground.to_argb_u32(),
    };
    let border = btn.border.to_argb_u32();

    let WidgetRect { x, y, w, h } = rect;

    frame.draw_bordered_rect(x, y, w, h, bg, border);

    // Focus ring: a second border 1px inside in the focus color
    if focused && state != ButtonState::Disabled && w > 2 && h > 2 {
        let focus_color = btn.focus_ring.to_argb_u32();
        frame.fill_rect_px(x + 1, y + 1, w - 2, 1, focus_color);
        frame.fill_rect_px(x + 1, y + h - 2, w - 2, 1, focus_color);
        frame.fill_rect_px(x + 1, y + 1, 1, h - 2, focus_color);
        frame.fill_rect_px(x + w - 2, y + 1, 1, h - 2, focus_color);
    }

    // Center the label text
    let char_width = painter.char_width();
    let line_height = painter.line_height();
    let text_w = (label.len() as f32 * char_width).round() as usize;
    let text_x = x + w.saturating_sub(text_w) / 2;
    let text_y = y + h.saturating_sub(line_height) / 2;
    painter.draw(frame, text_x, text_y, label, fg);
}

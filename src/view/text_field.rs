//! Filter field rendering
//!
//! Renders the single-line filter input with an end-anchored cursor and
//! horizontal scroll that keeps the tail of long filters in view. The
//! picker's filter edits always happen at the end of the string, so no
//! cursor position needs tracking.

use super::frame::{Frame, TextPainter};

/// Options for rendering the filter field text area
#[derive(Debug, Clone)]
pub struct TextFieldOptions {
    /// X position of text area in pixels
    pub x: usize,
    /// Y position of text area in pixels
    pub y: usize,
    /// Width of text area in pixels
    pub width: usize,
    /// Height of text area in pixels (typically line_height)
    pub height: usize,
    /// Character width (monospace font)
    pub char_width: f32,
    /// Text foreground color
    pub text_color: u32,
    /// Cursor color
    pub cursor_color: u32,
    /// Whether cursor should be visible (for blinking)
    pub cursor_visible: bool,
}

/// How many whole characters fit in `width` pixels, keeping one slot
/// free for the cursor bar.
pub fn visible_chars(width: usize, char_width: f32) -> usize {
    if char_width <= 0.0 {
        return 0;
    }
    ((width as f32 / char_width).floor() as usize).saturating_sub(1)
}

/// Characters to skip from the front so the end of the text stays
/// visible.
pub fn scroll_chars(text_len: usize, width: usize, char_width: f32) -> usize {
    text_len.saturating_sub(visible_chars(width, char_width))
}

/// Render the filter text with a trailing cursor bar
pub fn render(frame: &mut Frame, painter: &mut TextPainter, text: &str, opts: &TextFieldOptions) {
    let text_len = text.chars().count();
    let skip = scroll_chars(text_len, opts.width, opts.char_width);
    let shown: String = text.chars().skip(skip).collect();

    painter.draw(frame, opts.x, opts.y, &shown, opts.text_color);

    if opts.cursor_visible {
        let col = text_len - skip;
        let cursor_x = opts.x + (col as f32 * opts.char_width).round() as usize;
        if cursor_x < opts.x + opts.width {
            // 2px wide cursor bar
            frame.fill_rect_px(
                cursor_x,
                opts.y + 1,
                2,
                opts.height.saturating_sub(2),
                opts.cursor_color,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_does_not_scroll() {
        assert_eq!(scroll_chars(5, 200, 8.0), 0);
    }

    #[test]
    fn test_long_text_scrolls_to_keep_tail() {
        // 200px / 8px = 25 chars, minus cursor slot = 24 visible
        let skip = scroll_chars(40, 200, 8.0);
        assert_eq!(skip, 40 - 24);
    }

    #[test]
    fn test_zero_width_field() {
        assert_eq!(visible_chars(0, 8.0), 0);
        assert_eq!(scroll_chars(10, 0, 8.0), 10);
    }
}

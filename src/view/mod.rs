//! Rendering - draws the picker dialog into a softbuffer surface
//!
//! The `Renderer` owns the window surface, the font and the glyph
//! cache. Everything it draws is derived from the model plus the
//! current pointer state; no view-side state can go stale.

pub mod button;
pub mod frame;
pub mod geometry;
pub mod text_field;

use std::num::NonZeroU32;
use std::rc::Rc;

use anyhow::{anyhow, Context as AnyhowContext, Result};
use fontdue::{Font, FontSettings};
use winit::window::Window;

use goto_marker::model::{AppModel, Focus};

use button::{render_button, ButtonState};
use frame::{Frame, GlyphCache, TextPainter};
use geometry::{dialog_layout, list_scroll_offset, ButtonKind, DialogSpacing};
use text_field::TextFieldOptions;

/// Font size in logical pixels, scaled by the display factor
const BASE_FONT_SIZE: f32 = 14.0;

/// Pointer state owned by the runtime and passed in for hover/press
/// visuals. The model never stores pixel positions.
#[derive(Debug, Clone, Default)]
pub struct PointerState {
    /// Current cursor position in physical pixels
    pub position: Option<(f64, f64)>,
    /// Button the left mouse button went down on, if any
    pub pressed_button: Option<ButtonKind>,
}

impl PointerState {
    fn over(&self, rect: geometry::WidgetRect) -> bool {
        self.position
            .is_some_and(|(x, y)| x >= 0.0 && y >= 0.0 && rect.contains(x as usize, y as usize))
    }
}

/// Renders the dialog into the window's pixel buffer
pub struct Renderer {
    surface: softbuffer::Surface<Rc<Window>, Rc<Window>>,
    font: Font,
    glyph_cache: GlyphCache,
    font_size: f32,
    ascent: f32,
    char_width: f32,
    line_height: usize,
}

impl Renderer {
    pub fn new(window: Rc<Window>, context: &softbuffer::Context<Rc<Window>>) -> Result<Self> {
        let surface = softbuffer::Surface::new(context, window.clone())
            .map_err(|e| anyhow!("Failed to create render surface: {}", e))?;

        let font = discover_font()?;

        let mut renderer = Self {
            surface,
            font,
            glyph_cache: GlyphCache::new(),
            font_size: BASE_FONT_SIZE,
            ascent: 0.0,
            char_width: 0.0,
            line_height: 0,
        };
        renderer.set_scale_factor(window.scale_factor());
        Ok(renderer)
    }

    /// Recompute font metrics for a new display scale factor
    pub fn set_scale_factor(&mut self, scale_factor: f64) {
        self.font_size = BASE_FONT_SIZE * scale_factor as f32;
        self.glyph_cache.clear();

        let (ascent, new_line_size) = self
            .font
            .horizontal_line_metrics(self.font_size)
            .map(|m| (m.ascent, m.new_line_size))
            .unwrap_or((self.font_size * 0.8, self.font_size * 1.2));
        self.ascent = ascent;
        self.line_height = (new_line_size * 1.2).ceil() as usize;

        let (m_metrics, _) = self.font.rasterize('m', self.font_size);
        self.char_width = m_metrics.advance_width;
    }

    pub fn char_width(&self) -> f32 {
        self.char_width
    }

    pub fn line_height(&self) -> usize {
        self.line_height
    }

    /// Draw the whole dialog
    pub fn render(&mut self, model: &AppModel, pointer: &PointerState) -> Result<()> {
        let (width, height) = model.window_size;
        let (Some(nz_width), Some(nz_height)) = (NonZeroU32::new(width), NonZeroU32::new(height))
        else {
            return Ok(()); // window minimized, nothing to draw
        };

        self.surface
            .resize(nz_width, nz_height)
            .map_err(|e| anyhow!("Failed to resize surface: {}", e))?;

        let mut buffer = self
            .surface
            .buffer_mut()
            .map_err(|e| anyhow!("Failed to acquire frame buffer: {}", e))?;

        {
            let mut frame = Frame::new(&mut buffer, width as usize, height as usize);
            let mut painter = TextPainter::new(
                &self.font,
                &mut self.glyph_cache,
                self.font_size,
                self.ascent,
                self.char_width,
                self.line_height,
            );

            Self::draw_dialog(&mut frame, &mut painter, model, pointer);
        }

        buffer
            .present()
            .map_err(|e| anyhow!("Failed to present frame: {}", e))?;
        Ok(())
    }

    fn draw_dialog(
        frame: &mut Frame,
        painter: &mut TextPainter,
        model: &AppModel,
        pointer: &PointerState,
    ) {
        let theme = &model.theme;
        let char_width = painter.char_width();
        let line_height = painter.line_height();

        frame.clear(theme.window.background.to_argb_u32());

        let layout = dialog_layout(frame.width(), frame.height(), line_height, char_width);

        // Filter input field
        let input = layout.input;
        frame.draw_bordered_rect(
            input.x,
            input.y,
            input.w,
            input.h,
            theme.input.background.to_argb_u32(),
            theme.input.border.to_argb_u32(),
        );
        let padx = DialogSpacing::INPUT_PAD_X;
        text_field::render(
            frame,
            painter,
            model.picker.filter(),
            &TextFieldOptions {
                x: input.x + padx,
                y: input.y + input.h.saturating_sub(line_height) / 2,
                width: input.w.saturating_sub(padx * 2),
                height: line_height,
                char_width,
                text_color: theme.input.foreground.to_argb_u32(),
                cursor_color: theme.input.cursor.to_argb_u32(),
                cursor_visible: model.ui.cursor_visible && model.picker.focus == Focus::Filter,
            },
        );

        // Marker list
        let visible = model.picker.visible();
        let rows_per_page = layout.rows_per_page(line_height);
        let scroll = list_scroll_offset(model.picker.selected, rows_per_page);
        let shown = visible.len().saturating_sub(scroll).min(rows_per_page);
        let items_after = visible.len().saturating_sub(scroll + shown);

        // Right-align line numbers to the widest one on display
        let gutter_chars = visible
            .iter()
            .map(|m| m.line.to_string().len())
            .max()
            .unwrap_or(1);

        let list = layout.list;
        frame.set_clip(list);
        for (i, marker) in visible.iter().skip(scroll).take(rows_per_page).enumerate() {
            let idx = scroll + i;
            let row_y = list.y + i * line_height;
            let is_selected = model.picker.selected == Some(idx);

            if is_selected {
                frame.fill_rect_px(
                    list.x,
                    row_y,
                    list.w,
                    line_height,
                    theme.list.selection_background.to_argb_u32(),
                );
            }

            let text_color = if is_selected {
                theme.list.selection_foreground.to_argb_u32()
            } else {
                theme.list.foreground.to_argb_u32()
            };

            let number = format!("{:>width$}", marker.line, width = gutter_chars);
            painter.draw(
                frame,
                list.x + DialogSpacing::ROW_INSET,
                row_y,
                &number,
                theme.list.line_number.to_argb_u32(),
            );

            let text_x = list.x
                + DialogSpacing::ROW_INSET
                + ((gutter_chars + 2) as f32 * char_width).round() as usize;
            painter.draw(frame, text_x, row_y, &marker.text, text_color);
        }

        // Overflow indicator on the last shown row
        if items_after > 0 && shown > 0 {
            let more = format!("+ {} more", items_after);
            let more_w = (more.len() as f32 * char_width).round() as usize;
            let more_x = (list.x + list.w).saturating_sub(more_w + DialogSpacing::ROW_INSET);
            let more_y = list.y + (shown - 1) * line_height;
            painter.draw(
                frame,
                more_x,
                more_y,
                &more,
                theme.list.line_number.to_argb_u32(),
            );
        }
        frame.clear_clip();

        // Button row
        let enabled = model.picker.actions_enabled();
        for dialog_button in &layout.buttons {
            let rect = dialog_button.rect;
            let kind = dialog_button.kind;

            let state = if kind.needs_rows() && !enabled {
                ButtonState::Disabled
            } else if pointer.pressed_button == Some(kind) && pointer.over(rect) {
                ButtonState::Pressed
            } else if pointer.over(rect) && pointer.pressed_button.is_none() {
                ButtonState::Hovered
            } else {
                ButtonState::Normal
            };

            // Goto is the dialog's default action
            let focused = kind == ButtonKind::Goto && enabled;

            render_button(frame, painter, theme, rect, kind.label(), state, focused);
        }
    }
}

/// Find a monospace face in the system font database.
///
/// Prefers a few well-known programming fonts, falling back to whatever
/// generic monospace face fontdb resolves.
fn discover_font() -> Result<Font> {
    let mut db = fontdb::Database::new();
    db.load_system_fonts();

    let query = fontdb::Query {
        families: &[
            fontdb::Family::Name("JetBrains Mono"),
            fontdb::Family::Name("Fira Code"),
            fontdb::Family::Name("DejaVu Sans Mono"),
            fontdb::Family::Name("Menlo"),
            fontdb::Family::Name("Consolas"),
            fontdb::Family::Monospace,
        ],
        ..fontdb::Query::default()
    };

    let id = db
        .query(&query)
        .context("No monospace font found on this system")?;

    let face = db
        .face(id)
        .map(|info| info.post_script_name.clone())
        .unwrap_or_default();
    tracing::info!("Using font: {}", face);

    db.with_face_data(id, |data, face_index| {
        Font::from_bytes(
            data,
            FontSettings {
                collection_index: face_index,
                ..FontSettings::default()
            },
        )
        .map_err(|e| anyhow!("Failed to parse font {}: {}", face, e))
    })
    .context("Failed to load font data")?
}

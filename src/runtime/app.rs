//! winit application driver
//!
//! Owns the model, the renderer and the host handle. Messages produced
//! by input events flow through `update`; the returned commands are the
//! only place host methods get called.

use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::{ElementState, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::ModifiersState;
use winit::window::{Window, WindowId};

use goto_marker::commands::Cmd;
use goto_marker::host::{enumerate_markers, EditorHost};
use goto_marker::messages::{AppMsg, Msg, PickerMsg, UiMsg};
use goto_marker::model::AppModel;
use goto_marker::theme::load_theme;
use goto_marker::update::update;

use crate::view::geometry::{dialog_layout, list_scroll_offset, ButtonKind, DialogLayout};
use crate::view::{PointerState, Renderer};

use super::input::handle_key;

/// Two clicks on the same row within this window confirm it
const DOUBLE_CLICK_MS: u64 = 400;

/// Cursor blink half-period
const BLINK_INTERVAL: Duration = Duration::from_millis(500);

/// Options carried from the CLI into the window runtime
#[derive(Debug, Clone)]
pub struct StartupOptions {
    pub width: u32,
    pub height: u32,
    pub filter: Option<String>,
    pub theme: Option<String>,
}

/// Run the picker dialog over the given host.
///
/// Blocks until the dialog closes; returns the line number the user
/// navigated to, or None when the dialog was cancelled.
pub fn run(host: Box<dyn EditorHost>, options: StartupOptions) -> Result<Option<usize>> {
    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    let mut app = App::new(host, options);
    event_loop
        .run_app(&mut app)
        .context("Event loop terminated abnormally")?;
    Ok(app.navigated)
}

struct App {
    model: AppModel,
    host: Box<dyn EditorHost>,
    window: Option<Rc<Window>>,
    context: Option<softbuffer::Context<Rc<Window>>>,
    renderer: Option<Renderer>,
    modifiers: ModifiersState,
    pointer: PointerState,
    last_row_click: Option<(Instant, usize)>,
    navigated: Option<usize>,
    options: StartupOptions,
}

impl App {
    fn new(host: Box<dyn EditorHost>, options: StartupOptions) -> Self {
        let markers = enumerate_markers(host.as_ref());
        let mut model = AppModel::new(markers, options.width, options.height);

        // --theme overrides the persisted choice for this session only
        if let Some(ref theme_id) = options.theme {
            match load_theme(theme_id) {
                Ok(theme) => model.theme = theme,
                Err(e) => tracing::warn!("Ignoring --theme {}: {}", theme_id, e),
            }
        }

        if let Some(ref filter) = options.filter {
            update(&mut model, Msg::Picker(PickerMsg::SetFilter(filter.clone())));
        }

        Self {
            model,
            host,
            window: None,
            context: None,
            renderer: None,
            modifiers: ModifiersState::empty(),
            pointer: PointerState::default(),
            last_row_click: None,
            navigated: None,
            options,
        }
    }

    /// Run a message through update and execute the resulting command
    fn dispatch(&mut self, event_loop: &ActiveEventLoop, msg: Msg) {
        if let Some(cmd) = update(&mut self.model, msg) {
            self.execute(event_loop, cmd);
        }
        self.sync_title();
    }

    /// Execute a side effect against the host/window
    fn execute(&mut self, event_loop: &ActiveEventLoop, cmd: Cmd) {
        match cmd {
            Cmd::Redraw => self.request_redraw(),

            Cmd::Navigate { line } => {
                if let Some(doc) = self.host.active_document() {
                    self.host.navigate_to_line(doc, line);
                }
                self.navigated = Some(line);
                event_loop.exit();
            }

            Cmd::RemoveMarker { line } => {
                if let Some(doc) = self.host.active_document() {
                    self.host.remove_marker(doc, line);
                }
                self.request_redraw();
            }

            Cmd::RemoveAllMarkers => {
                if let Some(doc) = self.host.active_document() {
                    self.host.remove_all_markers(doc);
                }
                self.request_redraw();
            }

            Cmd::Close => event_loop.exit(),
        }
    }

    fn request_redraw(&self) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }

    /// Keep the window title showing "Go to Marker visible/total"
    fn sync_title(&self) {
        if let Some(window) = &self.window {
            window.set_title(&self.model.picker.title());
        }
    }

    /// The dialog layout for the current window and font metrics
    fn layout(&self) -> Option<DialogLayout> {
        let renderer = self.renderer.as_ref()?;
        let (width, height) = self.model.window_size;
        Some(dialog_layout(
            width as usize,
            height as usize,
            renderer.line_height(),
            renderer.char_width(),
        ))
    }

    fn on_mouse_down(&mut self, event_loop: &ActiveEventLoop) {
        let Some((x, y)) = self.pointer.position else {
            return;
        };
        let Some(layout) = self.layout() else { return };
        let (px, py) = (x as usize, y as usize);

        if let Some(kind) = layout.button_at_point(px, py) {
            // Disabled buttons swallow the click
            if kind.needs_rows() && !self.model.picker.actions_enabled() {
                return;
            }
            self.pointer.pressed_button = Some(kind);
            self.request_redraw();
            return;
        }

        let Some(renderer) = self.renderer.as_ref() else {
            return;
        };
        let line_height = renderer.line_height();
        let rows_per_page = layout.rows_per_page(line_height);
        let visible_len = self.model.picker.visible().len();
        let scroll = list_scroll_offset(self.model.picker.selected, rows_per_page);

        if let Some(idx) = layout.row_at_point(line_height, scroll, visible_len, px, py) {
            let now = Instant::now();
            let is_double = self
                .last_row_click
                .is_some_and(|(at, row)| row == idx && now.duration_since(at).as_millis() < DOUBLE_CLICK_MS.into());
            self.last_row_click = Some((now, idx));

            self.dispatch(event_loop, Msg::Picker(PickerMsg::SelectRow(idx)));
            if is_double {
                self.dispatch(event_loop, Msg::Picker(PickerMsg::Confirm));
            }
        }
    }

    fn on_mouse_up(&mut self, event_loop: &ActiveEventLoop) {
        let Some(kind) = self.pointer.pressed_button.take() else {
            return;
        };
        self.request_redraw();

        // The action fires only when the release lands on the same button
        let released_over = self
            .pointer
            .position
            .zip(self.layout())
            .is_some_and(|((x, y), layout)| {
                layout.button_at_point(x as usize, y as usize) == Some(kind)
            });
        if !released_over {
            return;
        }

        let msg = match kind {
            ButtonKind::RemoveAll => PickerMsg::DeleteAll,
            ButtonKind::RemoveSelected => PickerMsg::DeleteSelected,
            ButtonKind::Cancel => PickerMsg::Cancel,
            ButtonKind::Goto => PickerMsg::Confirm,
        };
        self.dispatch(event_loop, Msg::Picker(msg));
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title(self.model.picker.title())
            .with_inner_size(LogicalSize::new(self.options.width, self.options.height));

        let window = match event_loop.create_window(attributes) {
            Ok(window) => Rc::new(window),
            Err(e) => {
                tracing::error!("Failed to create window: {}", e);
                event_loop.exit();
                return;
            }
        };

        let context = match softbuffer::Context::new(window.clone()) {
            Ok(context) => context,
            Err(e) => {
                tracing::error!("Failed to create graphics context: {}", e);
                event_loop.exit();
                return;
            }
        };

        match Renderer::new(window.clone(), &context) {
            Ok(renderer) => self.renderer = Some(renderer),
            Err(e) => {
                tracing::error!("Failed to create renderer: {:#}", e);
                event_loop.exit();
                return;
            }
        }

        let size = window.inner_size();
        self.model.resize(size.width, size.height);
        self.model.scale_factor = window.scale_factor();

        window.request_redraw();
        self.window = Some(window);
        self.context = Some(context);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            // Closing the window is a cancel, never a navigation
            WindowEvent::CloseRequested => {
                self.dispatch(event_loop, Msg::Picker(PickerMsg::Cancel));
            }

            WindowEvent::Resized(size) => {
                self.dispatch(event_loop, Msg::resize(size.width, size.height));
            }

            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.set_scale_factor(scale_factor);
                }
                self.dispatch(event_loop, Msg::App(AppMsg::ScaleFactorChanged(scale_factor)));
            }

            WindowEvent::ModifiersChanged(mods) => {
                self.modifiers = mods.state();
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state == ElementState::Pressed {
                    let ctrl = self.modifiers.control_key();
                    let alt = self.modifiers.alt_key();
                    let logo = self.modifiers.super_key();

                    if let Some(cmd) =
                        handle_key(&mut self.model, event.logical_key, ctrl, alt, logo)
                    {
                        self.execute(event_loop, cmd);
                    }
                    self.sync_title();
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                self.pointer.position = Some((position.x, position.y));
                self.request_redraw();
            }

            WindowEvent::CursorLeft { .. } => {
                self.pointer.position = None;
                self.request_redraw();
            }

            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => match state {
                ElementState::Pressed => self.on_mouse_down(event_loop),
                ElementState::Released => self.on_mouse_up(event_loop),
            },

            WindowEvent::RedrawRequested => {
                if let Some(renderer) = self.renderer.as_mut() {
                    if let Err(e) = renderer.render(&self.model, &self.pointer) {
                        tracing::error!("Render error: {:#}", e);
                    }
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        self.dispatch(event_loop, Msg::Ui(UiMsg::BlinkCursor));
        event_loop.set_control_flow(ControlFlow::WaitUntil(
            self.model.ui.last_cursor_blink + BLINK_INTERVAL,
        ));
    }
}

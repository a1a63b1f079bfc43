use std::time::{Duration, Instant};

use egui::Context;
use egui_winit::State as EguiWinitState;
use log::{error, info};
use winit::{
    event::{ElementState, MouseButton, MouseScrollDelta, WindowEvent},
    event_loop::EventLoop,
    window::Window,
};

use crate::controllers::interactive::{ViewCommand, ViewController, ZoomDirection};
use crate::core::engine::engine_config::EngineConfig;
use crate::input::gui::drag::DragTracker;
use crate::input::gui::panel::{PanelSnapshot, show_panel};
use crate::input::gui::ports::presenter::GuiPresenterPort;

/// Pace of held-button zoom steps.
pub const CONTINUOUS_ZOOM_INTERVAL: Duration = Duration::from_millis(16);

pub struct GuiApp<P: GuiPresenterPort> {
    view: ViewController,
    presenter: P,
    pub egui_ctx: Context,
    egui_state: EguiWinitState,
    drag: DragTracker,
    cursor: (f64, f64),
    continuous_zoom: bool,
    last_zoom_step: Instant,
    frame_dirty: bool,
    last_render: Option<Duration>,
    last_error: Option<String>,
}

impl<P: GuiPresenterPort> GuiApp<P> {
    pub fn new(
        window: &'static Window,
        event_loop: &EventLoop<()>,
        presenter: P,
        view: ViewController,
    ) -> Self {
        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );

        Self {
            view,
            presenter,
            egui_ctx,
            egui_state,
            drag: DragTracker::default(),
            cursor: (0.0, 0.0),
            continuous_zoom: false,
            last_zoom_step: Instant::now(),
            frame_dirty: true,
            last_render: None,
            last_error: None,
        }
    }

    /// Routes a window event through egui, then to the view. Returns whether a redraw is needed.
    pub fn handle_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        let response = self.egui_state.on_window_event(window, event);

        if !response.consumed {
            match event {
                WindowEvent::MouseWheel { delta, .. } => {
                    let scroll = match delta {
                        MouseScrollDelta::LineDelta(_, y) => f64::from(*y),
                        MouseScrollDelta::PixelDelta(position) => position.y,
                    };

                    if scroll > 0.0 {
                        self.apply(ViewCommand::WheelZoom(ZoomDirection::In));
                    } else if scroll < 0.0 {
                        self.apply(ViewCommand::WheelZoom(ZoomDirection::Out));
                    }
                }
                WindowEvent::MouseInput {
                    state: ElementState::Pressed,
                    button,
                    ..
                } => match button {
                    MouseButton::Left => self.drag.begin(self.cursor),
                    MouseButton::Right => {
                        self.continuous_zoom = true;
                        self.last_zoom_step = Instant::now();
                        self.apply(ViewCommand::ContinuousZoom);
                    }
                    _ => {}
                },
                _ => {}
            }
        }

        // releases and motion are tracked even over the panel
        match event {
            WindowEvent::MouseInput {
                state: ElementState::Released,
                button,
                ..
            } => match button {
                MouseButton::Left => self.drag.end(),
                MouseButton::Right => self.continuous_zoom = false,
                _ => {}
            },
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = (position.x, position.y);

                if let Some((dx, dy)) = self.drag.moved_to(self.cursor) {
                    self.apply(ViewCommand::Pan { dx, dy });
                }
            }
            _ => {}
        }

        response.repaint || self.frame_dirty
    }

    /// Advances held-button zoom when a step is due. Returns whether it is active.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.continuous_zoom {
            return false;
        }

        if now.duration_since(self.last_zoom_step) >= CONTINUOUS_ZOOM_INTERVAL {
            self.last_zoom_step = now;
            self.apply(ViewCommand::ContinuousZoom);
        }

        true
    }

    #[must_use]
    pub fn next_zoom_step(&self) -> Instant {
        self.last_zoom_step + CONTINUOUS_ZOOM_INTERVAL
    }

    /// Uploads a new frame if the view changed, draws the panel and presents.
    /// Returns whether another redraw is already wanted.
    pub fn redraw(&mut self, window: &Window) -> Result<bool, pixels::Error> {
        if self.frame_dirty {
            self.frame_dirty = false;
            self.upload_frame();
        }

        let snapshot = PanelSnapshot {
            options: *self.view.options(),
            max_iter: self.view.engine().max_iter(),
            bounds: self.view.engine().bounds(),
            active_pixels: self.view.engine().active_count(),
            last_render: self.last_render,
            last_error: self.last_error.clone(),
        };

        let raw_input = self.egui_state.take_egui_input(window);
        let mut commands = Vec::new();
        let egui_output = self.egui_ctx.run(raw_input, |ctx| {
            commands.extend(show_panel(ctx, &snapshot));
        });

        self.egui_state
            .handle_platform_output(window, egui_output.platform_output.clone());

        let egui_wants_repaint = egui_output
            .viewport_output
            .values()
            .any(|v| v.repaint_delay.is_zero());

        self.presenter.render(egui_output, &self.egui_ctx)?;

        for command in commands {
            self.apply(command);
        }

        Ok(egui_wants_repaint || self.frame_dirty)
    }

    /// Rebuilds the engine at the new size, keeping the current view and UI options.
    pub fn resize(&mut self, width: u32, height: u32) {
        let resolution = self.view.engine().resolution();

        if width == 0 || height == 0 || (width == resolution.width() && height == resolution.height()) {
            return;
        }

        if let Err(err) = self.presenter.resize(width, height) {
            self.report(&err);
            return;
        }

        let config = EngineConfig {
            width,
            height,
            ..self.view.engine().current_config()
        };

        match ViewController::new(config, *self.view.options()) {
            Ok(view) => {
                info!("resized to {}x{}", width, height);
                self.view = view;
                self.frame_dirty = true;
            }
            Err(err) => self.report(&err),
        }
    }

    fn apply(&mut self, command: ViewCommand) {
        match self.view.apply(command) {
            Ok(changed) => self.frame_dirty |= changed,
            Err(err) => self.report(&err),
        }
    }

    fn upload_frame(&mut self) {
        match self.view.render_frame() {
            Ok(frame) => {
                if let Err(err) = self.presenter.show_frame(&frame) {
                    self.report(&err);
                    return;
                }

                self.last_render = Some(frame.render_duration);
                self.last_error = None;
            }
            Err(err) => self.report(&err),
        }
    }

    fn report(&mut self, err: &dyn std::error::Error) {
        error!("{}", err);
        self.last_error = Some(err.to_string());
    }
}

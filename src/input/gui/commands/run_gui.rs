use std::marker::PhantomData;
use std::time::Instant;

use log::{error, info};
use winit::{
    dpi::LogicalSize,
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::{Window, WindowBuilder},
};

use crate::controllers::interactive::ViewController;
use crate::controllers::interactive::data::ui_options::UiOptions;
use crate::core::engine::engine_config::EngineConfig;
use crate::input::gui::app::GuiApp;
use crate::input::gui::commands::ports::presenter_factory::GuiPresenterFactoryPort;
use crate::input::gui::ports::presenter::GuiPresenterPort;

pub const WINDOW_TITLE: &str = "Escape-time Fractal Explorer";

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    config: EngineConfig,
    options: UiOptions,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F, config: EngineConfig, options: UiOptions) -> Self {
        Self {
            presenter_factory,
            config,
            options,
            _phantom: PhantomData,
        }
    }

    /// Opens the window and blocks until it is closed.
    pub fn execute(&self) -> Result<(), Box<dyn std::error::Error>> {
        let event_loop = EventLoop::new()?;

        // pixels needs a 'static window
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(WINDOW_TITLE)
                .with_inner_size(LogicalSize::new(
                    f64::from(self.config.width),
                    f64::from(self.config.height),
                ))
                .with_resizable(false)
                .build(&event_loop)?,
        ));

        let size = window.inner_size();
        let config = EngineConfig {
            width: size.width,
            height: size.height,
            ..self.config
        };

        info!(
            "opening {}x{} window, {} backend",
            size.width, size.height, config.backend
        );

        let view = ViewController::new(config, self.options)?;
        let presenter = self.presenter_factory.build(window)?;
        let mut app = GuiApp::new(window, &event_loop, presenter, view);
        let mut redraw_pending = true;

        event_loop.run(move |event, elwt| match event {
            Event::WindowEvent {
                ref event,
                window_id,
            } if window_id == window.id() => {
                if app.handle_window_event(window, event) {
                    redraw_pending = true;
                }

                match event {
                    WindowEvent::CloseRequested => elwt.exit(),
                    WindowEvent::RedrawRequested => {
                        redraw_pending = false;

                        match app.redraw(window) {
                            Ok(again) => redraw_pending |= again,
                            Err(err) => {
                                error!("render error: {}", err);
                                elwt.exit();
                            }
                        }
                    }
                    WindowEvent::Resized(size) => {
                        app.resize(size.width, size.height);
                        redraw_pending = true;
                    }
                    WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                        app.egui_ctx.set_pixels_per_point(*scale_factor as f32);
                        redraw_pending = true;
                    }
                    _ => {}
                }
            }
            Event::AboutToWait => {
                if app.tick(Instant::now()) {
                    redraw_pending = true;
                    elwt.set_control_flow(ControlFlow::WaitUntil(app.next_zoom_step()));
                } else {
                    elwt.set_control_flow(ControlFlow::Wait);
                }

                if redraw_pending {
                    window.request_redraw();
                }
            }
            _ => {}
        })?;

        Ok(())
    }
}
